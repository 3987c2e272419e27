#![no_std]

pub mod bounds;
pub mod buffer;
pub mod color;
pub mod config;
pub mod effect;
pub mod error;
pub mod mode;
pub mod storage;
pub mod strip;

pub use bounds::WindowBounds;
pub use buffer::{PixelBuffer, set_channels_at};
pub use color::{Color, HueDirection, NamedColor, Rgb, hsl, hsl_f32};
pub use config::{DEFAULT_BRIGHTNESS, StripConfig};
pub use error::StripError;
pub use mode::ColorMode;
pub use storage::StripStorage;
pub use strip::Strip;

/// Identifier of the data pin a strip is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(pub u8);

/// Logic level of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Strips are generic over this trait and never talk to pins directly.
pub trait OutputDriver {
    /// Send a finished wire-layout buffer out on `pin`
    fn send(&mut self, buffer: &[u8], pin: PinId);

    /// Drive `pin` to a fixed level
    fn set_level(&mut self, pin: PinId, level: PinLevel);
}
