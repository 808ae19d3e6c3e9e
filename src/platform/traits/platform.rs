//! Root platform trait
//!
//! This module defines the root Platform trait that hands out the peripherals
//! the blink loop needs.

use super::{DelayInterface, GpioInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide concrete types for each peripheral
/// interface via associated types, so callers dispatch at compile time.
///
/// # Example
///
/// ```ignore
/// let mut platform = Rpi3Platform::take(6)?;
/// let led = platform.create_gpio(16)?;
/// let delay = platform.create_delay();
/// ```
pub trait Platform: Sized {
    /// GPIO peripheral type
    type Gpio: GpioInterface;

    /// Delay provider type
    type Delay: DelayInterface;

    /// Create a GPIO peripheral instance
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidPin)` if the pin number
    /// is invalid and `PlatformError::Gpio(GpioError::PinInUse)` if the pin
    /// was already handed out by this platform.
    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio>;

    /// Create a delay provider
    fn create_delay(&mut self) -> Self::Delay;
}
