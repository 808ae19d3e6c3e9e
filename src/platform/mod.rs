//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the SoC the blinker runs on.
//! All register addresses and volatile accesses are isolated to this module.

pub mod bcm2837;
pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, PlatformError, Result, TimerError};
pub use traits::{
    DelayInterface, GpioFunction, GpioInterface, Platform, RegisterInterface, SpinInterface,
};
