//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod delay;
pub mod gpio;
pub mod platform;
pub mod registers;
pub mod spin;

// Re-export trait interfaces
pub use delay::DelayInterface;
pub use gpio::{GpioFunction, GpioInterface};
pub use platform::Platform;
pub use registers::RegisterInterface;
pub use spin::SpinInterface;
