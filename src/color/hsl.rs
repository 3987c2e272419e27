//! Integer HSL to RGB conversion
//!
//! All intermediate math uses truncating integer division on `i32`. Output
//! must stay bit-exact, so do not replace it with a floating-point model.

use super::Color;

const HUE_CIRCLE: i32 = 360;
const HUE_SEXTANT: i32 = 60;
const MAX_PERCENT: i32 = 99;

/// Convert hue (degrees), saturation and luminance (percent) to a color
///
/// Hue wraps into `[0, 360)`. Saturation and luminance are clamped to
/// `[0, 99]`.
pub fn hsl(h: i32, s: i32, l: i32) -> Color {
    let h = h.rem_euclid(HUE_CIRCLE);
    let s = s.clamp(0, MAX_PERCENT);
    let l = l.clamp(0, MAX_PERCENT);

    // chroma, [0, 255]
    let c = (((100 - (2 * l - 100).abs()) * s) << 8) / 10_000;
    let h1 = h / HUE_SEXTANT;
    let h2 = (h - h1 * HUE_SEXTANT) * 256 / HUE_SEXTANT;
    let temp = (((h1 % 2) << 8) + h2 - 256).abs();
    // second largest component
    let x = (c * (256 - temp)) >> 8;

    let (r, g, b) = match h1 {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        _ => (c, 0, x),
    };

    let m = ((((l * 2) << 8) / 100) - c) / 2;
    Color::pack(r + m, g + m, b + m)
}

/// Same as [`hsl`], rounding each component half-up first
pub fn hsl_f32(h: f32, s: f32, l: f32) -> Color {
    hsl(round_half_up(h), round_half_up(s), round_half_up(l))
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f32) -> i32 {
    libm::floorf(value + 0.5) as i32
}
