//! Strip windows over a shared pixel buffer
//!
//! A [`Strip`] is a view of `length` LEDs starting at `start` inside the
//! buffer held by a [`StripStorage`]. The root strip covers the whole
//! buffer, and [`Strip::range`] derives narrower windows that write into
//! the same bytes. Brightness, pin and mode belong to each window and are
//! copied, not shared.
//!
//! Pixel writes are buffered. Nothing reaches the LEDs until `show` (or one
//! of the bulk operations that end with it) runs, and it always sends the
//! whole buffer.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::WindowBounds;
use crate::buffer::PixelBuffer;
use crate::color::{Color, HueDirection};
use crate::config::StripConfig;
use crate::effect::{BAR_GRAPH_WARNING, BarGraph, Effect, RainbowGradient};
use crate::error::StripError;
use crate::mode::ColorMode;
use crate::storage::StripStorage;
use crate::{OutputDriver, PinId, PinLevel};

/// Scale a channel by brightness, full brightness leaves it untouched
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn scale_channel(value: u8, brightness: u8) -> u8 {
    if brightness == u8::MAX {
        return value;
    }
    ((value as u16 * brightness as u16) >> 8) as u8
}

/// A window of LEDs on one physical strip
pub struct Strip<'a, D: OutputDriver, const N: usize> {
    storage: &'a StripStorage<D, N>,
    pin: PinId,
    brightness: u8,
    bounds: WindowBounds,
    mode: ColorMode,
}

impl<'a, D: OutputDriver, const N: usize> Strip<'a, D, N> {
    /// Create the root strip of `led_count` LEDs on `pin`
    ///
    /// Claims `storage`, zero-fills `led_count * stride` bytes, sets the
    /// default brightness and drives the pin low.
    pub fn create(
        storage: &'a StripStorage<D, N>,
        pin: PinId,
        led_count: usize,
        mode: ColorMode,
    ) -> Result<Self, StripError> {
        Self::from_config(storage, &StripConfig::new(pin, led_count).with_mode(mode))
    }

    /// Create the root strip from a [`StripConfig`]
    pub fn from_config(
        storage: &'a StripStorage<D, N>,
        config: &StripConfig,
    ) -> Result<Self, StripError> {
        if let Err(err) = storage.allocate(config.led_count, config.mode) {
            #[cfg(feature = "esp32-log")]
            println!("[Strip.create] unable to allocate buffer: {}", err);
            return Err(err);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.create] {} LEDs, mode {:?}, pin {:?}",
            config.led_count, config.mode, config.pin
        );

        let mut strip = Self {
            storage,
            pin: config.pin,
            brightness: config.brightness,
            bounds: WindowBounds::new(0, storage.with_buffer(PixelBuffer::led_count)),
            mode: config.mode,
        };
        strip.set_pin(config.pin);
        Ok(strip)
    }

    /// Number of LEDs visible through this window
    pub const fn length(&self) -> usize {
        self.bounds.length
    }

    /// Offset of this window inside the buffer
    pub const fn start(&self) -> usize {
        self.bounds.start
    }

    pub const fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    pub const fn pin(&self) -> PinId {
        self.pin
    }

    /// Set the brightness used by future writes
    ///
    /// Only the low 8 bits are kept, so `300` becomes `44`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_brightness(&mut self, brightness: i32) {
        self.brightness = (brightness & 0xFF) as u8;
    }

    /// Bind the data pin and drive it low
    pub fn set_pin(&mut self, pin: PinId) {
        self.pin = pin;
        self.storage.set_level(pin, PinLevel::Low);
    }

    /// Set one LED, offsets outside the window are ignored
    ///
    /// Call [`Strip::show`] to make the change visible.
    pub fn set_pixel_color(&mut self, offset: i32, color: impl Into<Color>) {
        let Some(led) = self.bounds.absolute(offset) else {
            return;
        };
        let (r, g, b) = self.scaled(color.into());
        self.storage.update(|buffer| buffer.set_rgb(led, r, g, b));
    }

    /// Set the white channel of one LED on RGBW strips
    pub fn set_pixel_white(&mut self, offset: i32, white: u8) {
        if !self.mode.has_white() {
            return;
        }
        let Some(led) = self.bounds.absolute(offset) else {
            return;
        };
        let white = scale_channel(white, self.brightness);
        self.storage.update(|buffer| buffer.set_white(led, white));
    }

    /// Set the white channel of every LED in the window on RGBW strips
    pub fn set_all_white(&mut self, white: u8) {
        if !self.mode.has_white() {
            return;
        }
        let white = scale_channel(white, self.brightness);
        let bounds = self.bounds;
        self.storage.update(|buffer| {
            for led in bounds.start..bounds.end() {
                buffer.set_white(led, white);
            }
        });
    }

    /// Stored (already scaled) color of one LED
    pub fn pixel_color(&self, offset: i32) -> Option<Color> {
        let led = self.bounds.absolute(offset)?;
        self.storage.with_buffer(|buffer| buffer.rgb_at(led))
    }

    /// Send the whole underlying buffer to the pin of this window
    pub fn show(&self) {
        self.storage.transmit(self.pin);
    }

    /// Fill the window with one color and show it
    pub fn show_color(&mut self, color: impl Into<Color>) {
        let (r, g, b) = self.scaled(color.into());
        let bounds = self.bounds;
        self.storage.update(|buffer| {
            for led in bounds.start..bounds.end() {
                buffer.set_rgb(led, r, g, b);
            }
        });
        self.show();
    }

    /// Turn off every LED in the window and show it
    pub fn clear(&mut self) {
        self.zero_window();
        self.show();
    }

    /// Render a clockwise rainbow from `start_hue` to `end_hue` and show it
    pub fn show_rainbow(&mut self, start_hue: i32, end_hue: i32) {
        self.show_rainbow_in(start_hue, end_hue, HueDirection::Clockwise);
    }

    /// Render a rainbow walking the hue circle in `direction` and show it
    pub fn show_rainbow_in(&mut self, start_hue: i32, end_hue: i32, direction: HueDirection) {
        let Some(gradient) = RainbowGradient::new(start_hue, end_hue, self.length(), direction)
        else {
            return;
        };
        self.render(&gradient);
        self.show();
    }

    /// Render `value` as a bar against `high` and show it
    ///
    /// A non-positive `high` lights only pixel 0 in yellow as a warning.
    pub fn show_bar_graph(&mut self, value: i32, high: i32) {
        let graph = BarGraph::new(value, high, self.length());
        if graph == BarGraph::NoScale {
            #[cfg(feature = "esp32-log")]
            println!("[Strip.show_bar_graph] no scale (high = {})", high);
            self.zero_window();
            self.set_pixel_color(0, BAR_GRAPH_WARNING);
        } else {
            self.render(&graph);
        }
        self.show();
    }

    /// Create a window over part of this strip
    ///
    /// `start` and `length` are clamped into this window. The new window
    /// shares the buffer and starts with a copy of brightness, pin and mode.
    #[must_use]
    pub fn range(&self, start: i32, length: i32) -> Self {
        let bounds = self.bounds.sub_range(start, length);
        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.range] requested ({}, {}) resolved to {:?}",
            start, length, bounds
        );
        Self {
            storage: self.storage,
            pin: self.pin,
            brightness: self.brightness,
            bounds,
            mode: self.mode,
        }
    }

    fn render(&mut self, effect: &impl Effect) {
        for index in 0..self.length() {
            let Ok(offset) = i32::try_from(index) else {
                break;
            };
            self.set_pixel_color(offset, effect.color_at(index));
        }
    }

    fn zero_window(&mut self) {
        let bounds = self.bounds;
        self.storage
            .update(|buffer| buffer.fill_zero(bounds.start, bounds.length));
    }

    const fn scaled(&self, color: Color) -> (u8, u8, u8) {
        (
            scale_channel(color.r(), self.brightness),
            scale_channel(color.g(), self.brightness),
            scale_channel(color.b(), self.brightness),
        )
    }
}
