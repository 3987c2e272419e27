const MODE_ID_UNSPECIFIED: u8 = 0;
const MODE_ID_RGB: u8 = 1;
const MODE_ID_RGBW: u8 = 2;
const MODE_ID_RGB_RGB: u8 = 3;

/// Channel layout of a strip on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ColorMode {
    /// Three bytes per LED in `G, R, B` order
    #[default]
    Rgb = MODE_ID_RGB,
    /// Four bytes per LED in `G, R, B, W` order
    Rgbw = MODE_ID_RGBW,
    /// Three bytes per LED in `R, G, B` order
    RgbRgb = MODE_ID_RGB_RGB,
}

impl ColorMode {
    /// Unspecified (`0`) resolves to [`ColorMode::Rgb`]
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_UNSPECIFIED | MODE_ID_RGB => Self::Rgb,
            MODE_ID_RGBW => Self::Rgbw,
            MODE_ID_RGB_RGB => Self::RgbRgb,
            _ => return None,
        })
    }

    /// Bytes per LED
    pub const fn stride(self) -> usize {
        match self {
            Self::Rgbw => 4,
            Self::Rgb | Self::RgbRgb => 3,
        }
    }

    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw)
    }

    /// Byte positions of red, green and blue inside one LED slot
    pub(crate) const fn rgb_positions(self) -> (usize, usize, usize) {
        match self {
            Self::RgbRgb => (0, 1, 2),
            Self::Rgb | Self::Rgbw => (1, 0, 2),
        }
    }
}
