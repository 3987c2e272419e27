//! Gradient effects rendered onto a strip
//!
//! Effects only compute colors per pixel index. Writing and brightness
//! scaling are left to [`Strip`](crate::Strip), which renders them with
//! `show_rainbow` and `show_bar_graph`.

mod bar_graph;
mod rainbow;

pub use bar_graph::{BAR_GRAPH_EMPTY, BAR_GRAPH_WARNING, BarGraph};
pub use rainbow::{RAINBOW_LUMINANCE, RAINBOW_SATURATION, RainbowGradient};

use crate::color::Color;

pub trait Effect {
    /// Color of the pixel at `index`
    fn color_at(&self, index: usize) -> Color;
}
