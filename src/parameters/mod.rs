//! Build-time parameters
//!
//! The blinker has no runtime configuration surface; parameters are fixed
//! when the firmware image is built.

pub mod blink;

pub use blink::BlinkParams;
