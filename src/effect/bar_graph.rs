use super::Effect;
use crate::color::Color;

/// Pixel 0 when the graph has no usable scale
pub const BAR_GRAPH_WARNING: Color = Color::from_u32(0x00FF_FF00);
/// Pixel 0 when the value rounds down to an empty bar
pub const BAR_GRAPH_EMPTY: Color = Color::from_u32(0x0066_6600);

/// Bar graph of `value` against `high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarGraph {
    /// `high` was zero or negative
    NoScale,
    /// `lit` is the highest pixel index that is lit
    Level { lit: i64, len: usize },
}

impl BarGraph {
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(value: i32, high: i32, len: usize) -> Self {
        if high <= 0 {
            return Self::NoScale;
        }
        let value = i64::from(value).abs();
        let lit = (value * len as i64) / i64::from(high);
        Self::Level { lit, len }
    }

    /// Red to blue gradient color of a lit pixel
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn lit_color(index: usize, len: usize) -> Color {
        let blue_shift = if len > 1 {
            (index as i64 * 255) / (len as i64 - 1)
        } else {
            0
        };
        let b = blue_shift as i32;
        Color::pack(b, 0, 255 - b)
    }
}

impl Effect for BarGraph {
    #[allow(clippy::cast_possible_wrap)]
    fn color_at(&self, index: usize) -> Color {
        match *self {
            Self::NoScale if index == 0 => BAR_GRAPH_WARNING,
            Self::Level { lit: 0, .. } if index == 0 => BAR_GRAPH_EMPTY,
            Self::Level { lit, len } if lit > 0 && index as i64 <= lit => {
                Self::lit_color(index, len)
            }
            _ => Color::BLACK,
        }
    }
}
