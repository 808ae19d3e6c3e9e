//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioFunction, GpioInterface},
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin level and function without any register model, and counts
/// set/clear operations for test verification.
#[derive(Debug)]
pub struct MockGpio {
    pin: u8,
    state: bool,
    function: GpioFunction,
    sets: u64,
    clears: u64,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output(pin: u8) -> Self {
        Self {
            pin,
            state: false,
            function: GpioFunction::Output,
            sets: 0,
            clears: 0,
        }
    }

    /// Create a new mock GPIO in input mode (the reset function)
    pub fn new_input(pin: u8) -> Self {
        Self {
            function: GpioFunction::Input,
            ..Self::new_output(pin)
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }

    /// Number of successful `set_high` operations
    pub fn sets(&self) -> u64 {
        self.sets
    }

    /// Number of successful `set_low` operations
    pub fn clears(&self) -> u64 {
        self.clears
    }

    fn ensure_output(&self) -> Result<()> {
        match self.function {
            GpioFunction::Output => Ok(()),
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }
}

impl GpioInterface for MockGpio {
    fn pin(&self) -> u8 {
        self.pin
    }

    fn set_high(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.state = true;
        self.sets += 1;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.state = false;
        self.clears += 1;
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        if self.state {
            self.set_low()
        } else {
            self.set_high()
        }
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_function(&mut self, function: GpioFunction) -> Result<()> {
        self.function = function;
        Ok(())
    }

    fn function(&self) -> GpioFunction {
        self.function
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output(16);
        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());

        gpio.set_low().unwrap();
        assert!(!gpio.read());
        assert_eq!((gpio.sets(), gpio.clears()), (1, 1));
    }

    #[test]
    fn test_mock_gpio_toggle() {
        let mut gpio = MockGpio::new_output(16);
        assert!(!gpio.read());

        gpio.toggle().unwrap();
        assert!(gpio.read());

        gpio.toggle().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_input() {
        let mut gpio = MockGpio::new_input(16);
        assert!(!gpio.read());

        // Simulate external signal
        gpio.set_input_state(true);
        assert!(gpio.read());

        // Input mode should not allow set_high/set_low
        assert!(gpio.set_high().is_err());
        assert!(gpio.set_low().is_err());
        assert!(gpio.toggle().is_err());
    }

    #[test]
    fn test_mock_gpio_function() {
        let mut gpio = MockGpio::new_output(16);
        assert_eq!(gpio.function(), GpioFunction::Output);

        gpio.set_function(GpioFunction::Input).unwrap();
        assert_eq!(gpio.function(), GpioFunction::Input);
    }
}
