//! Wire-layout pixel buffer
//!
//! Bytes are stored exactly as they go out on the data line, so the buffer
//! can be handed to the output driver without any conversion.

use heapless::Vec;

use crate::color::Color;
use crate::error::StripError;
use crate::mode::ColorMode;

/// Write red, green and blue at `offset` using the channel order of `mode`
///
/// The trailing white byte of [`ColorMode::Rgbw`] is left untouched.
/// Offsets that do not leave room for a full slot are ignored.
pub fn set_channels_at(bytes: &mut [u8], offset: usize, mode: ColorMode, r: u8, g: u8, b: u8) {
    let Some(slot) = offset
        .checked_add(3)
        .and_then(|end| bytes.get_mut(offset..end))
    else {
        return;
    };
    let (r_pos, g_pos, b_pos) = mode.rgb_positions();
    slot[r_pos] = r;
    slot[g_pos] = g;
    slot[b_pos] = b;
}

/// Byte storage for one physical strip
///
/// N is the capacity in bytes
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    bytes: Vec<u8, N>,
    mode: ColorMode,
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelBuffer<N> {
    /// Create an empty buffer, see [`PixelBuffer::allocate`]
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            mode: ColorMode::Rgb,
        }
    }

    /// Size the buffer for `led_count` LEDs and zero it
    pub fn allocate(&mut self, led_count: usize, mode: ColorMode) -> Result<(), StripError> {
        let requested = led_count.saturating_mul(mode.stride());
        if requested > N {
            return Err(StripError::Capacity {
                requested,
                capacity: N,
            });
        }

        self.bytes.clear();
        self.bytes
            .resize(requested, 0)
            .map_err(|()| StripError::Capacity {
                requested,
                capacity: N,
            })?;
        self.mode = mode;
        Ok(())
    }

    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn led_count(&self) -> usize {
        self.bytes.len() / self.mode.stride()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte offset of LED `led`, `None` when it cannot be addressed
    fn slot_offset(&self, led: usize) -> Option<usize> {
        led.checked_mul(self.mode.stride())
    }

    /// Byte offset of the white channel of LED `led`
    fn white_offset(&self, led: usize) -> Option<usize> {
        if !self.mode.has_white() {
            return None;
        }
        self.slot_offset(led)?.checked_add(3)
    }

    /// Write a color into the slot of LED `led`
    pub fn set_rgb(&mut self, led: usize, r: u8, g: u8, b: u8) {
        let Some(offset) = self.slot_offset(led) else {
            return;
        };
        set_channels_at(&mut self.bytes, offset, self.mode, r, g, b);
    }

    /// Write the white byte of LED `led`, ignored unless the mode has one
    pub fn set_white(&mut self, led: usize, white: u8) {
        let Some(offset) = self.white_offset(led) else {
            return;
        };
        if let Some(byte) = self.bytes.get_mut(offset) {
            *byte = white;
        }
    }

    /// Read back the stored color of LED `led`
    pub fn rgb_at(&self, led: usize) -> Option<Color> {
        let offset = self.slot_offset(led)?;
        let slot = self.bytes.get(offset..offset.checked_add(3)?)?;
        let (r_pos, g_pos, b_pos) = self.mode.rgb_positions();
        Some(Color::from_channels(slot[r_pos], slot[g_pos], slot[b_pos]))
    }

    pub fn white_at(&self, led: usize) -> Option<u8> {
        self.bytes.get(self.white_offset(led)?).copied()
    }

    /// Zero `count` LEDs starting at `start`, clipped to the buffer
    pub fn fill_zero(&mut self, start: usize, count: usize) {
        let stride = self.mode.stride();
        let len = self.bytes.len();
        let from = start.saturating_mul(stride).min(len);
        let to = from.saturating_add(count.saturating_mul(stride)).min(len);
        self.bytes[from..to].fill(0);
    }
}
