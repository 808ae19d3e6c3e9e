//! Delay interface trait
//!
//! Blocking delays used between GPIO writes. The BCM2837 implementation is an
//! uncalibrated spin loop; a hardware timer can implement the same trait
//! without touching callers.

/// Delay interface trait
///
/// Delays are approximate. The only contract is that a non-zero request
/// consumes a duration proportional to it.
pub trait DelayInterface {
    /// Busy-wait for roughly `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for roughly `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
