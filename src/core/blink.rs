//! Blink loop
//!
//! Configures one GPIO pin as an output, then alternates clear and set
//! writes forever with a busy-wait between them.
//!
//! The toggle flag starts false, so iteration 0 drives the pin low, iteration
//! 1 drives it high, and so on. After `k` iterations the flag equals
//! `k % 2 == 1`.

use core::convert::Infallible;

use crate::parameters::BlinkParams;
use crate::platform::{
    traits::{DelayInterface, GpioFunction, GpioInterface, Platform},
    Result,
};

/// Pin blinker
///
/// Generic over the pin driver and the delay provider so either can be
/// replaced (mock pin, calibrated timer) without touching the loop.
#[derive(Debug)]
pub struct Blinker<G: GpioInterface, D: DelayInterface> {
    gpio: G,
    delay: D,
    interval_ms: u32,
    toggle: bool,
    configured: bool,
    iterations: u64,
}

impl<G: GpioInterface, D: DelayInterface> Blinker<G, D> {
    /// Create a blinker over an unconfigured pin
    ///
    /// Nothing is written until [`configure`](Self::configure) or
    /// [`run`](Self::run).
    pub fn new(gpio: G, delay: D, interval_ms: u32) -> Self {
        Self {
            gpio,
            delay,
            interval_ms,
            toggle: false,
            configured: false,
            iterations: 0,
        }
    }

    /// Build a blinker from platform peripherals
    ///
    /// # Errors
    ///
    /// Returns the validation error of `params`, or the platform error if
    /// the pin cannot be claimed.
    pub fn from_platform<P>(platform: &mut P, params: &BlinkParams) -> Result<Self>
    where
        P: Platform<Gpio = G, Delay = D>,
    {
        params.validate()?;
        let gpio = platform.create_gpio(params.pin)?;
        let delay = platform.create_delay();
        Ok(Self::new(gpio, delay, params.interval_ms))
    }

    /// Select the output function for the pin
    ///
    /// Writes the function-select register once; later calls are no-ops.
    pub fn configure(&mut self) -> Result<()> {
        if self.configured {
            return Ok(());
        }

        self.gpio.set_function(GpioFunction::Output)?;
        self.configured = true;
        crate::log_info!(
            "GPIO {} configured as output, interval {} ms",
            self.gpio.pin(),
            self.interval_ms
        );
        Ok(())
    }

    /// Run one iteration: set or clear the pin, flip the flag, wait
    ///
    /// Returns the level the pin was driven to.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin has
    /// not been configured as an output.
    pub fn step(&mut self) -> Result<bool> {
        let high = self.toggle;
        if high {
            self.gpio.set_high()?;
        } else {
            self.gpio.set_low()?;
        }
        self.toggle = !self.toggle;
        self.iterations += 1;

        self.delay.delay_ms(self.interval_ms);
        Ok(high)
    }

    /// Configure the pin, then toggle it forever
    ///
    /// Returns only if the pin driver reports an error.
    pub fn run(&mut self) -> Result<Infallible> {
        self.configure()?;
        crate::log_debug!("entering blink loop");
        loop {
            self.step()?;
        }
    }

    /// Current toggle flag: `true` means the next step drives the pin high
    pub fn toggle(&self) -> bool {
        self.toggle
    }

    /// Number of completed iterations
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Busy-wait between writes in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Borrow the pin driver
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Borrow the delay provider
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Release the pin driver and delay provider
    pub fn into_parts(self) -> (G, D) {
        (self.gpio, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::{GpioError, PlatformError};
    use crate::platform::mock::{MockDelay, MockGpio};

    fn blinker() -> Blinker<MockGpio, MockDelay> {
        Blinker::new(MockGpio::new_input(16), MockDelay::new(), 1000)
    }

    #[test]
    fn test_step_before_configure_fails() {
        let mut blinker = blinker();
        assert_eq!(
            blinker.step(),
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        );
        assert_eq!(blinker.iterations(), 0);
        assert!(!blinker.toggle());
        assert_eq!(blinker.delay().calls(), 0);
    }

    #[test]
    fn test_configure_selects_output_once() {
        let mut blinker = blinker();
        blinker.configure().unwrap();
        assert_eq!(blinker.gpio().function(), GpioFunction::Output);

        blinker.configure().unwrap();
        assert_eq!(blinker.gpio().function(), GpioFunction::Output);
    }

    #[test]
    fn test_first_step_clears() {
        let mut blinker = blinker();
        blinker.configure().unwrap();

        assert_eq!(blinker.step(), Ok(false));
        assert_eq!(blinker.gpio().clears(), 1);
        assert_eq!(blinker.gpio().sets(), 0);
        assert!(blinker.toggle());
    }

    #[test]
    fn test_steps_alternate() {
        let mut blinker = blinker();
        blinker.configure().unwrap();

        for k in 0..10u64 {
            assert_eq!(blinker.step().unwrap(), k % 2 == 1);
            assert_eq!(blinker.toggle(), (k + 1) % 2 == 1);
        }
        assert_eq!(blinker.gpio().sets(), 5);
        assert_eq!(blinker.gpio().clears(), 5);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PinEvent {
        Function(GpioFunction),
        High,
        Low,
    }

    /// MockGpio that logs every call and fails once `limit` writes are done
    struct LimitedGpio {
        inner: MockGpio,
        events: Vec<PinEvent>,
        limit: usize,
    }

    impl LimitedGpio {
        fn new(limit: usize) -> Self {
            Self {
                inner: MockGpio::new_input(16),
                events: Vec::new(),
                limit,
            }
        }

        fn writes(&self) -> usize {
            self.events
                .iter()
                .filter(|e| !matches!(e, PinEvent::Function(_)))
                .count()
        }

        fn record_write(&mut self, event: PinEvent) -> Result<()> {
            if self.writes() == self.limit {
                return Err(PlatformError::ResourceUnavailable);
            }
            self.events.push(event);
            Ok(())
        }
    }

    impl GpioInterface for LimitedGpio {
        fn pin(&self) -> u8 {
            self.inner.pin()
        }

        fn set_high(&mut self) -> Result<()> {
            self.inner.set_high()?;
            self.record_write(PinEvent::High)
        }

        fn set_low(&mut self) -> Result<()> {
            self.inner.set_low()?;
            self.record_write(PinEvent::Low)
        }

        fn toggle(&mut self) -> Result<()> {
            if self.inner.read() {
                self.set_low()
            } else {
                self.set_high()
            }
        }

        fn read(&self) -> bool {
            self.inner.read()
        }

        fn set_function(&mut self, function: GpioFunction) -> Result<()> {
            self.inner.set_function(function)?;
            self.events.push(PinEvent::Function(function));
            Ok(())
        }

        fn function(&self) -> GpioFunction {
            self.inner.function()
        }
    }

    #[test]
    fn test_run_configures_then_alternates_until_error() {
        const WRITES: usize = 10_001;
        let mut blinker = Blinker::new(LimitedGpio::new(WRITES), MockDelay::new(), 1);

        let result = blinker.run();
        assert_eq!(result.err(), Some(PlatformError::ResourceUnavailable));

        // The rejected write is not counted
        assert_eq!(blinker.iterations(), WRITES as u64);

        let (gpio, delay) = blinker.into_parts();
        assert_eq!(gpio.events[0], PinEvent::Function(GpioFunction::Output));
        assert_eq!(gpio.events.len(), WRITES + 1);
        for (k, event) in gpio.events[1..].iter().enumerate() {
            let expected = if k % 2 == 1 { PinEvent::High } else { PinEvent::Low };
            assert_eq!(*event, expected, "write {}", k);
        }
        assert_eq!(delay.calls(), WRITES as u64);
    }

    #[test]
    fn test_run_reports_configure_failure() {
        struct NoOutput(MockGpio);

        impl GpioInterface for NoOutput {
            fn pin(&self) -> u8 {
                self.0.pin()
            }
            fn set_high(&mut self) -> Result<()> {
                self.0.set_high()
            }
            fn set_low(&mut self) -> Result<()> {
                self.0.set_low()
            }
            fn toggle(&mut self) -> Result<()> {
                self.0.toggle()
            }
            fn read(&self) -> bool {
                self.0.read()
            }
            fn set_function(&mut self, _function: GpioFunction) -> Result<()> {
                Err(PlatformError::Gpio(GpioError::InvalidMode))
            }
            fn function(&self) -> GpioFunction {
                self.0.function()
            }
        }

        let mut blinker = Blinker::new(NoOutput(MockGpio::new_input(16)), MockDelay::new(), 1);
        assert_eq!(
            blinker.run().err(),
            Some(PlatformError::Gpio(GpioError::InvalidMode))
        );
        assert_eq!(blinker.iterations(), 0);
        assert_eq!(blinker.delay().calls(), 0);
    }

    #[test]
    fn test_each_step_waits_interval() {
        let mut blinker = blinker();
        blinker.configure().unwrap();

        blinker.step().unwrap();
        blinker.step().unwrap();
        let (_, delay) = blinker.into_parts();
        assert_eq!(delay.calls(), 2);
        assert_eq!(delay.last_ms(), Some(1000));
        assert_eq!(delay.elapsed_us(), 2_000_000);
    }
}
