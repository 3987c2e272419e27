/// LED span a strip window covers inside the shared buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub start: usize,
    pub length: usize,
}

impl WindowBounds {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// First LED after the window
    pub const fn end(self) -> usize {
        self.start + self.length
    }

    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Absolute LED index of `offset`, if it lies inside the window
    #[allow(clippy::cast_sign_loss)]
    pub const fn absolute(self, offset: i32) -> Option<usize> {
        if offset < 0 || offset as usize >= self.length {
            return None;
        }
        Some(self.start + offset as usize)
    }

    /// Clamp a requested `(start, length)` relative to this window
    ///
    /// The start is clamped to `[0, length - 1]` and the length to whatever
    /// remains after it, so the result never leaves this window.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    pub fn sub_range(self, start: i32, length: i32) -> Self {
        let last = (self.length as i64 - 1).max(0);
        let offset = i64::from(start).clamp(0, last);
        let remaining = self.length as i64 - offset;
        let length = i64::from(length).clamp(0, remaining.max(0));

        Self {
            start: self.start + offset as usize,
            length: length as usize,
        }
    }
}
