//! Busy-wait delay
//!
//! Delays by executing a fixed number of spin steps per requested
//! microsecond. The rate is uncalibrated: 6 steps per microsecond matched the
//! Pi 3 at its boot clock with an optimized build, nothing more.

use crate::platform::{
    error::{PlatformError, TimerError},
    traits::{DelayInterface, SpinInterface},
    Result,
};

/// Reference spin rate (steps per microsecond)
pub const DEFAULT_SPINS_PER_US: u32 = 6;

/// Spin step that executes one `nop` instruction
///
/// On targets other than AArch64 this falls back to a spin-loop hint so the
/// driver code still builds on the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsmNop;

impl SpinInterface for AsmNop {
    #[inline(always)]
    fn spin(&mut self) {
        #[cfg(target_arch = "aarch64")]
        // SAFETY: `nop` has no effects; the asm block is not `pure`, so it is
        // never elided or merged.
        unsafe {
            core::arch::asm!("nop", options(nomem, nostack, preserves_flags));
        }

        #[cfg(not(target_arch = "aarch64"))]
        core::hint::spin_loop();
    }
}

/// Busy-wait delay provider
#[derive(Debug, Clone)]
pub struct SpinDelay<S: SpinInterface> {
    spin: S,
    spins_per_us: u32,
}

impl<S: SpinInterface> SpinDelay<S> {
    /// Create a delay that runs `spins_per_us` steps of `spin` per microsecond
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer(TimerError::InvalidDuration)` if
    /// `spins_per_us` is zero, since such a delay would not wait at all.
    pub fn new(spin: S, spins_per_us: u32) -> Result<Self> {
        if spins_per_us == 0 {
            return Err(PlatformError::Timer(TimerError::InvalidDuration));
        }
        Ok(Self { spin, spins_per_us })
    }

    /// Configured spin rate
    pub fn spins_per_us(&self) -> u32 {
        self.spins_per_us
    }

    /// Borrow the spin step (for inspection in tests)
    pub fn spinner(&self) -> &S {
        &self.spin
    }

    /// Number of spin steps a delay of `us` microseconds performs
    ///
    /// Computed in `u64`, so no `u32` request can wrap.
    pub fn spins_for_us(&self, us: u64) -> u64 {
        us * self.spins_per_us as u64
    }

    fn spin_for(&mut self, count: u64) {
        for _ in 0..count {
            self.spin.spin();
        }
    }
}

impl<S: SpinInterface> DelayInterface for SpinDelay<S> {
    fn delay_us(&mut self, us: u32) {
        let count = self.spins_for_us(us as u64);
        self.spin_for(count);
    }

    fn delay_ms(&mut self, ms: u32) {
        let count = self.spins_for_us(ms as u64 * 1000);
        self.spin_for(count);
    }
}

impl<S: SpinInterface> embedded_hal::delay::DelayNs for SpinDelay<S> {
    fn delay_ns(&mut self, ns: u32) {
        let count = (ns as u64 * self.spins_per_us as u64).div_ceil(1000);
        self.spin_for(count);
    }

    fn delay_us(&mut self, us: u32) {
        DelayInterface::delay_us(self, us);
    }

    fn delay_ms(&mut self, ms: u32) {
        DelayInterface::delay_ms(self, ms);
    }
}
