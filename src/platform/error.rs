//! Platform error types
//!
//! This module defines error types for platform operations.
//!
//! Register writes on the BCM2837 cannot fail; these errors cover driver
//! misuse (wrong pin, wrong mode, double ownership) and invalid parameters.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
    /// Delay/timer operation failed
    Timer(TimerError),
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available (already taken)
    ResourceUnavailable,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin number outside the SoC's GPIO range
    InvalidPin,
    /// Pin function does not allow the operation (e.g. set on an input)
    InvalidMode,
    /// Pin already claimed
    PinInUse,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Zero-length interval or zero spin rate
    InvalidDuration,
}

impl From<GpioError> for PlatformError {
    fn from(e: GpioError) -> Self {
        PlatformError::Gpio(e)
    }
}

impl From<TimerError> for PlatformError {
    fn from(e: TimerError) -> Self {
        PlatformError::Timer(e)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Timer(e) => write!(f, "Timer error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}

impl embedded_hal::digital::Error for PlatformError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = PlatformError::Gpio(GpioError::InvalidPin);
        assert_eq!(format!("{}", e), "GPIO error: InvalidPin");
        assert_eq!(
            format!("{}", PlatformError::ResourceUnavailable),
            "Resource not available"
        );
    }

    #[test]
    fn test_from_conversions() {
        let e: PlatformError = GpioError::PinInUse.into();
        assert_eq!(e, PlatformError::Gpio(GpioError::PinInUse));

        let e: PlatformError = TimerError::InvalidDuration.into();
        assert_eq!(e, PlatformError::Timer(TimerError::InvalidDuration));
    }
}
