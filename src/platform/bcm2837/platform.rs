//! Raspberry Pi 3 platform
//!
//! Owns the BCM2837 GPIO block and hands out pin drivers and spin delays.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::Platform,
    Result,
};

use super::{AsmNop, Bcm2837Gpio, MmioRegisters, SpinDelay, GPIO_BASE, GPIO_PIN_COUNT};

/// Set once the GPIO block has been handed out
static TAKEN: AtomicBool = AtomicBool::new(false);

/// Raspberry Pi 3 platform
///
/// A singleton: the first [`Rpi3Platform::take`] succeeds, later calls fail
/// with `PlatformError::ResourceUnavailable`.
#[derive(Debug)]
pub struct Rpi3Platform {
    claimed: u64,
    delay: SpinDelay<AsmNop>,
}

impl Rpi3Platform {
    /// Take ownership of the GPIO block
    ///
    /// `spins_per_us` is the spin rate of every delay created by this
    /// platform.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the platform was
    /// already taken and `PlatformError::InvalidConfig` if `spins_per_us` is
    /// zero.
    pub fn take(spins_per_us: u32) -> Result<Self> {
        let delay =
            SpinDelay::new(AsmNop, spins_per_us).map_err(|_| PlatformError::InvalidConfig)?;

        // Plain load/store instead of swap: exclusive loads are unreliable
        // with the MMU off, and secondary cores are parked by the boot stub.
        if TAKEN.load(Ordering::Acquire) {
            crate::log_warn!("GPIO block already taken");
            return Err(PlatformError::ResourceUnavailable);
        }
        TAKEN.store(true, Ordering::Release);

        crate::log_info!("GPIO block at {:#x}", GPIO_BASE);
        Ok(Self { claimed: 0, delay })
    }
}

impl Platform for Rpi3Platform {
    type Gpio = Bcm2837Gpio<MmioRegisters>;
    type Delay = SpinDelay<AsmNop>;

    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
        if pin >= GPIO_PIN_COUNT {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }

        let bit = 1u64 << pin;
        if self.claimed & bit != 0 {
            crate::log_warn!("GPIO {} already in use", pin);
            return Err(PlatformError::Gpio(GpioError::PinInUse));
        }

        // SAFETY: GPIO_BASE is the BCM2837 GPIO block, accessed physically
        // with the MMU off. `take` makes this platform its only owner and the
        // claim mask gives each pin a single driver.
        let regs = unsafe { MmioRegisters::new(GPIO_BASE) };
        let gpio = Bcm2837Gpio::new(regs, pin)?;
        self.claimed |= bit;
        Ok(gpio)
    }

    fn create_delay(&mut self) -> Self::Delay {
        self.delay.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only `take` is exercised on the host: `create_gpio` touches MMIO.
    #[test]
    fn test_take_is_singleton() {
        assert_eq!(
            Rpi3Platform::take(0).err(),
            Some(PlatformError::InvalidConfig)
        );

        let mut platform = Rpi3Platform::take(6).unwrap();
        assert_eq!(platform.create_delay().spins_per_us(), 6);
        assert_eq!(
            Rpi3Platform::take(6).err(),
            Some(PlatformError::ResourceUnavailable)
        );

        assert_eq!(
            platform.create_gpio(GPIO_PIN_COUNT).err(),
            Some(PlatformError::Gpio(GpioError::InvalidPin))
        );
    }
}
