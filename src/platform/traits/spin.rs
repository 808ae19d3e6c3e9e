//! Spin instruction interface
//!
//! The unit of work of a busy-wait: one instruction the optimizer may not
//! remove. Host tests substitute a counting implementation.

/// Single spin step
pub trait SpinInterface {
    /// Execute one no-op step
    fn spin(&mut self);
}
