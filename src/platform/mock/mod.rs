//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! Gated in `platform/mod.rs`; available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use pi_blink::platform::mock::{MockPlatform, MockRegisters};
//! use pi_blink::platform::traits::{GpioInterface, Platform};
//!
//! let regs = MockRegisters::new();
//! let mut platform = MockPlatform::new(&regs);
//! let mut led = platform.create_gpio(16).unwrap().into_output();
//! led.set_high().unwrap();
//! assert_eq!(regs.last_write(), Some((0x1C, 1 << 16)));
//! ```

mod delay;
mod gpio;
mod platform;
mod registers;
mod spin;

pub use delay::MockDelay;
pub use gpio::MockGpio;
pub use platform::MockPlatform;
pub use registers::{MockRegisters, RegisterWrite, WRITE_HISTORY_SIZE};
pub use spin::MockSpin;
