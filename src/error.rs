use core::fmt;

/// Error returned when a strip buffer cannot be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// `led_count * stride` bytes do not fit into the storage
    Capacity { requested: usize, capacity: usize },
    /// The storage already holds the buffer of another strip
    AlreadyCreated,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity {
                requested,
                capacity,
            } => write!(
                f,
                "strip needs {} bytes but storage holds {}",
                requested, capacity
            ),
            Self::AlreadyCreated => f.write_str("strip storage is already in use"),
        }
    }
}

impl core::error::Error for StripError {}
