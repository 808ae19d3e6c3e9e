#![cfg_attr(not(test), no_std)]

//! pi_blink - Bare-metal GPIO blinker for the Raspberry Pi 3
//!
//! Toggles one GPIO pin of the BCM2837 at a fixed interval using direct
//! register writes and a busy-wait delay. Register access and timing sit
//! behind traits so the loop runs unchanged against in-memory mocks on the
//! host.

// Platform abstraction layer: register access, GPIO, delays
pub mod platform;

// Blink loop and logging
pub mod core;

// Build-time parameters
pub mod parameters;
