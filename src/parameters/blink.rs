//! Blink parameters
//!
//! Pin, interval and spin rate for the blink loop. Defaults are the Pi 3
//! reference values; `build.rs` forwards `BLINK_INTERVAL_MS` and
//! `BLINK_SPINS_PER_US` from the build environment and they are parsed here
//! at compile time. The pin is fixed at GPIO16 in firmware builds.

use crate::platform::{
    bcm2837::{DEFAULT_SPINS_PER_US, GPIO_PIN_COUNT},
    error::{GpioError, PlatformError, TimerError},
    Result,
};

/// Reference blink pin
pub const DEFAULT_PIN: u8 = 16;

/// Reference half-period in milliseconds
pub const DEFAULT_INTERVAL_MS: u32 = 1000;

/// Blink loop parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkParams {
    /// GPIO pin to toggle
    pub pin: u8,
    /// Busy-wait between consecutive set/clear writes, in milliseconds
    pub interval_ms: u32,
    /// Spin steps per microsecond of delay
    pub spins_per_us: u32,
}

impl BlinkParams {
    /// Reference parameters: pin 16, 1000 ms, 6 spins per microsecond
    pub const DEFAULT: Self = Self {
        pin: DEFAULT_PIN,
        interval_ms: DEFAULT_INTERVAL_MS,
        spins_per_us: DEFAULT_SPINS_PER_US,
    };

    /// Parameters from the build environment
    ///
    /// Only the timing comes from the environment; malformed values fall back
    /// to the defaults.
    pub const BUILD: Self = Self {
        pin: DEFAULT_PIN,
        interval_ms: {
            const S: &str = env!("BLINK_INTERVAL_MS");
            match const_parse_u32(S) {
                Some(v) => v,
                None => DEFAULT_INTERVAL_MS,
            }
        },
        spins_per_us: {
            const S: &str = env!("BLINK_SPINS_PER_US");
            match const_parse_u32(S) {
                Some(v) => v,
                None => DEFAULT_SPINS_PER_US,
            }
        },
    };

    /// Check the parameters against the platform limits
    ///
    /// # Errors
    ///
    /// - `PlatformError::Gpio(GpioError::InvalidPin)` for a pin above 53
    /// - `PlatformError::Timer(TimerError::InvalidDuration)` for a zero
    ///   interval or spin rate
    pub fn validate(&self) -> Result<()> {
        if self.pin >= GPIO_PIN_COUNT {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        if self.interval_ms == 0 || self.spins_per_us == 0 {
            return Err(PlatformError::Timer(TimerError::InvalidDuration));
        }
        Ok(())
    }
}

impl Default for BlinkParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parse a decimal u32 at compile time
///
/// Accepts ASCII digits only; returns `None` when empty, on any other
/// character, or on overflow.
pub const fn const_parse_u32(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as u32) {
                Some(v) => v,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }
    Some(value)
}
