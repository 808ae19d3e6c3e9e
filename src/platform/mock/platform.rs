//! Mock Platform implementation for testing

use crate::platform::{
    bcm2837::{Bcm2837Gpio, SpinDelay, DEFAULT_SPINS_PER_US, GPIO_PIN_COUNT},
    error::{GpioError, PlatformError},
    traits::Platform,
    Result,
};

use super::{MockRegisters, MockSpin};

/// Mock Platform implementation
///
/// Runs the real BCM2837 drivers against a [`MockRegisters`] block and a
/// counting spin step, so register-level behaviour can be checked on the
/// host.
#[derive(Debug)]
pub struct MockPlatform<'a> {
    regs: &'a MockRegisters,
    delay: SpinDelay<MockSpin>,
    claimed: u64,
}

impl<'a> MockPlatform<'a> {
    /// Create a mock platform over `regs` with the reference spin rate
    pub fn new(regs: &'a MockRegisters) -> Self {
        Self {
            regs,
            delay: SpinDelay::new(MockSpin::new(), DEFAULT_SPINS_PER_US)
                .unwrap_or_else(|_| unreachable!()),
            claimed: 0,
        }
    }

    /// Create a mock platform with a custom spin rate
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if `spins_per_us` is zero.
    pub fn with_spin_rate(regs: &'a MockRegisters, spins_per_us: u32) -> Result<Self> {
        let delay =
            SpinDelay::new(MockSpin::new(), spins_per_us).map_err(|_| PlatformError::InvalidConfig)?;
        Ok(Self {
            regs,
            delay,
            claimed: 0,
        })
    }

    /// Register block backing this platform
    pub fn registers(&self) -> &'a MockRegisters {
        self.regs
    }
}

impl<'a> Platform for MockPlatform<'a> {
    type Gpio = Bcm2837Gpio<&'a MockRegisters>;
    type Delay = SpinDelay<MockSpin>;

    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
        if pin >= GPIO_PIN_COUNT {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }

        let bit = 1u64 << pin;
        if self.claimed & bit != 0 {
            return Err(PlatformError::Gpio(GpioError::PinInUse));
        }

        let gpio = Bcm2837Gpio::new(self.regs, pin)?;
        self.claimed |= bit;
        Ok(gpio)
    }

    fn create_delay(&mut self) -> Self::Delay {
        self.delay.clone()
    }
}
