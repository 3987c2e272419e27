mod gradient;
mod hsl;
mod named;

use smart_leds::RGB8;

pub use gradient::{HueDirection, hue_step};
pub use hsl::{hsl, hsl_f32};
pub use named::NamedColor;

pub type Rgb = RGB8;

const CHANNEL_MASK: i32 = 0xFF;
const COLOR_MASK: u32 = 0x00FF_FFFF;

/// 24-bit packed color in `0xRRGGBB` layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0);

    /// Packs three channels, keeping only the low 8 bits of each
    #[allow(clippy::cast_sign_loss)]
    pub const fn pack(r: i32, g: i32, b: i32) -> Self {
        let r = (r & CHANNEL_MASK) as u32;
        let g = (g & CHANNEL_MASK) as u32;
        let b = (b & CHANNEL_MASK) as u32;
        Self((r << 16) | (g << 8) | b)
    }

    /// Create a color from a raw value, dropping anything above 24 bits
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw & COLOR_MASK)
    }

    #[allow(clippy::cast_lossless)]
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl From<u32> for Color {
    fn from(raw: u32) -> Self {
        Self::from_u32(raw)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_channels(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        Rgb {
            r: color.r(),
            g: color.g(),
            b: color.b(),
        }
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}
