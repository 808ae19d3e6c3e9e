//! GPIO interface trait
//!
//! This module defines the GPIO (General Purpose Input/Output) interface that platform implementations must provide.

use crate::platform::Result;

/// GPIO pin function
///
/// Discriminants are the BCM2837 function-select codes (3-bit field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GpioFunction {
    /// Input
    Input = 0b000,
    /// Push-pull output
    Output = 0b001,
    /// Alternate function 0
    Alt0 = 0b100,
    /// Alternate function 1
    Alt1 = 0b101,
    /// Alternate function 2
    Alt2 = 0b110,
    /// Alternate function 3
    Alt3 = 0b111,
    /// Alternate function 4
    Alt4 = 0b011,
    /// Alternate function 5
    Alt5 = 0b010,
}

impl GpioFunction {
    /// Width of one function-select field in bits
    pub const FIELD_BITS: u32 = 3;

    /// Mask for one function-select field
    pub const FIELD_MASK: u32 = 0b111;

    /// Function-select code
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decode a function-select field; only the low three bits are used
    pub const fn from_bits(bits: u32) -> Self {
        match bits & Self::FIELD_MASK {
            0b000 => GpioFunction::Input,
            0b001 => GpioFunction::Output,
            0b100 => GpioFunction::Alt0,
            0b101 => GpioFunction::Alt1,
            0b110 => GpioFunction::Alt2,
            0b111 => GpioFunction::Alt3,
            0b011 => GpioFunction::Alt4,
            _ => GpioFunction::Alt5,
        }
    }
}

/// GPIO interface trait
///
/// Platform implementations must provide this interface for GPIO control.
///
/// # Safety Invariants
///
/// - Only one owner per GPIO pin instance
/// - No concurrent access to the same GPIO pin from multiple contexts
/// - Pin number must be valid for the platform
pub trait GpioInterface {
    /// GPIO pin number
    fn pin(&self) -> u8;

    /// Set GPIO pin high (logic level 1)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_high(&mut self) -> Result<()>;

    /// Set GPIO pin low (logic level 0)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_low(&mut self) -> Result<()>;

    /// Toggle GPIO pin state
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn toggle(&mut self) -> Result<()>;

    /// Read GPIO pin level
    ///
    /// Returns `true` if the pin is high, `false` if low.
    fn read(&self) -> bool;

    /// Select the pin function
    fn set_function(&mut self, function: GpioFunction) -> Result<()>;

    /// Current pin function
    fn function(&self) -> GpioFunction;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_codes_round_trip_all_fields() {
        for bits in 0..8u32 {
            assert_eq!(GpioFunction::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn test_from_bits_ignores_high_bits() {
        assert_eq!(GpioFunction::from_bits(0b1000_0001), GpioFunction::Output);
    }
}
