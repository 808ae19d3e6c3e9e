//! Core blinker functionality
//!
//! Platform-independent logic: the blink loop and the logging macros.

pub mod blink;
pub mod logging;

pub use blink::Blinker;
