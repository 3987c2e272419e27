use crate::PinId;
use crate::mode::ColorMode;

/// Brightness a freshly created strip starts with
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// Configuration for a root strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Data pin the strip is connected to
    pub pin: PinId,
    /// Number of LEDs on the physical strip
    pub led_count: usize,
    /// Channel layout
    pub mode: ColorMode,
    /// Initial brightness (0-255)
    pub brightness: u8,
}

impl StripConfig {
    pub const fn new(pin: PinId, led_count: usize) -> Self {
        Self {
            pin,
            led_count,
            mode: ColorMode::Rgb,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Set the channel layout
    #[must_use]
    pub const fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the initial brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }
}
