//! Shared storage behind every window of one physical strip.
//!
//! Holds the single [`PixelBuffer`] together with the output driver behind a
//! `critical-section` mutex, so the storage can live in a `static`. Windows
//! borrow the storage, and pixel writes through any of them land in the same
//! bytes.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::buffer::PixelBuffer;
use crate::error::StripError;
use crate::mode::ColorMode;
use crate::{OutputDriver, PinId, PinLevel};

struct StorageState<D, const N: usize> {
    buffer: PixelBuffer<N>,
    driver: D,
    allocated: bool,
}

/// Pixel bytes and output driver of one physical strip
///
/// N is the buffer capacity in bytes
pub struct StripStorage<D, const N: usize> {
    inner: Mutex<RefCell<StorageState<D, N>>>,
}

impl<D: OutputDriver, const N: usize> StripStorage<D, N> {
    /// Create empty storage owning `driver`
    pub const fn new(driver: D) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(StorageState {
                buffer: PixelBuffer::new(),
                driver,
                allocated: false,
            })),
        }
    }

    /// Check whether a strip has already claimed this storage
    pub fn is_allocated(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().allocated)
    }

    /// Run `f` with read access to the buffer
    pub fn with_buffer<R>(&self, f: impl FnOnce(&PixelBuffer<N>) -> R) -> R {
        critical_section::with(|cs| f(&self.inner.borrow(cs).borrow().buffer))
    }

    /// Run `f` with mutable access to the driver
    pub fn with_driver<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut().driver))
    }

    /// Claim the storage for `led_count` LEDs, zero-filled
    pub(crate) fn allocate(&self, led_count: usize, mode: ColorMode) -> Result<(), StripError> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if state.allocated {
                return Err(StripError::AlreadyCreated);
            }
            state.buffer.allocate(led_count, mode)?;
            state.allocated = true;
            Ok(())
        })
    }

    /// Run `f` with mutable access to the buffer
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut PixelBuffer<N>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut().buffer))
    }

    /// Hand the whole buffer to the driver
    pub(crate) fn transmit(&self, pin: PinId) {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            let StorageState { buffer, driver, .. } = &mut *state;
            driver.send(buffer.as_bytes(), pin);
        });
    }

    pub(crate) fn set_level(&self, pin: PinId, level: PinLevel) {
        self.with_driver(|driver| driver.set_level(pin, level));
    }
}
