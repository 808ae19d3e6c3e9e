//! BCM2837 GPIO implementation
//!
//! This module drives one GPIO pin through the function-select, set, clear
//! and level registers of the BCM2837 GPIO block.

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioFunction, GpioInterface, RegisterInterface},
    Result,
};

use super::{
    bank_mask, bank_offset, fsel_offset, fsel_shift, GPCLR0, GPIO_PIN_COUNT, GPLEV0, GPSET0,
};

/// BCM2837 GPIO pin
///
/// Owns a register handle `R` for the GPIO block. The pin function is read
/// back from hardware at construction; the output level is tracked locally
/// because the set/clear registers are write-only.
#[derive(Debug)]
pub struct Bcm2837Gpio<R: RegisterInterface> {
    regs: R,
    pin: u8,
    function: GpioFunction,
    high: bool,
}

impl<R: RegisterInterface> Bcm2837Gpio<R> {
    /// Create a driver for `pin` on the register block `regs`
    ///
    /// No register is written.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidPin)` if `pin` is not
    /// below [`GPIO_PIN_COUNT`].
    pub fn new(regs: R, pin: u8) -> Result<Self> {
        if pin >= GPIO_PIN_COUNT {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }

        let field = regs.read(fsel_offset(pin)) >> fsel_shift(pin);
        Ok(Self {
            regs,
            pin,
            function: GpioFunction::from_bits(field),
            high: false,
        })
    }

    /// Configure the pin as an output
    pub fn into_output(mut self) -> Self {
        self.write_function(GpioFunction::Output);
        self
    }

    /// Output level last driven by this driver
    pub fn is_set_high(&self) -> bool {
        self.high
    }

    /// Release the register handle
    pub fn free(self) -> R {
        self.regs
    }

    fn write_function(&mut self, function: GpioFunction) {
        let shift = fsel_shift(self.pin);
        self.regs.modify(fsel_offset(self.pin), |v| {
            (v & !(GpioFunction::FIELD_MASK << shift)) | (function.bits() << shift)
        });
        self.function = function;
    }

    fn ensure_output(&self) -> Result<()> {
        match self.function {
            GpioFunction::Output => Ok(()),
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }
}

impl<R: RegisterInterface> GpioInterface for Bcm2837Gpio<R> {
    fn pin(&self) -> u8 {
        self.pin
    }

    fn set_high(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.regs.write(GPSET0 + bank_offset(self.pin), bank_mask(self.pin));
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.regs.write(GPCLR0 + bank_offset(self.pin), bank_mask(self.pin));
        self.high = false;
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        if self.high {
            self.set_low()
        } else {
            self.set_high()
        }
    }

    fn read(&self) -> bool {
        self.regs.read(GPLEV0 + bank_offset(self.pin)) & bank_mask(self.pin) != 0
    }

    fn set_function(&mut self, function: GpioFunction) -> Result<()> {
        self.write_function(function);
        Ok(())
    }

    fn function(&self) -> GpioFunction {
        self.function
    }
}

impl<R: RegisterInterface> embedded_hal::digital::ErrorType for Bcm2837Gpio<R> {
    type Error = PlatformError;
}

impl<R: RegisterInterface> embedded_hal::digital::OutputPin for Bcm2837Gpio<R> {
    fn set_low(&mut self) -> Result<()> {
        GpioInterface::set_low(self)
    }

    fn set_high(&mut self) -> Result<()> {
        GpioInterface::set_high(self)
    }
}

impl<R: RegisterInterface> embedded_hal::digital::StatefulOutputPin for Bcm2837Gpio<R> {
    fn is_set_high(&mut self) -> Result<bool> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool> {
        Ok(!self.high)
    }
}
