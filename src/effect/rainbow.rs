//! Rainbow hue gradient
//!
//! Hue is interpolated in hundredths of a degree between the two end hues.
//! Both endpoints are rendered from their exact hue, interior pixels from
//! the truncated interpolation.

use super::Effect;
use crate::color::{Color, HueDirection, hsl, hue_step};

pub const RAINBOW_SATURATION: i32 = 100;
pub const RAINBOW_LUMINANCE: i32 = 50;

/// Rainbow gradient spread over `steps` pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowGradient {
    start_hue: i32,
    end_hue: i32,
    steps: usize,
    hue_step: i32,
}

impl RainbowGradient {
    /// Returns `None` for an empty strip
    pub fn new(start_hue: i32, end_hue: i32, steps: usize, direction: HueDirection) -> Option<Self> {
        if steps == 0 {
            return None;
        }
        Some(Self {
            start_hue,
            end_hue,
            steps,
            hue_step: hue_step(start_hue, end_hue, steps, direction),
        })
    }

    /// Hue step between neighbours, in hundredths of a degree
    pub const fn hue_step(&self) -> i32 {
        self.hue_step
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn interpolated_hue(&self, index: usize) -> i32 {
        let start = i64::from(self.start_hue) * 100;
        let offset = index as i64 * i64::from(self.hue_step);
        // the extra turn keeps the value positive before wrapping
        let hue = (start + offset) / 100 + 360;
        hue.rem_euclid(360) as i32
    }
}

impl Effect for RainbowGradient {
    #[allow(clippy::cast_possible_truncation)]
    fn color_at(&self, index: usize) -> Color {
        if self.steps == 1 {
            let hue = (i64::from(self.start_hue) + i64::from(self.hue_step)).rem_euclid(360);
            return hsl(hue as i32, RAINBOW_SATURATION, RAINBOW_LUMINANCE);
        }

        let hue = if index == 0 {
            self.start_hue
        } else if index >= self.steps - 1 {
            self.end_hue
        } else {
            self.interpolated_hue(index)
        };
        hsl(hue, RAINBOW_SATURATION, RAINBOW_LUMINANCE)
    }
}
