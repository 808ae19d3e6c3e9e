//! Mock spin step for testing

use crate::platform::traits::SpinInterface;

/// Counting spin step
///
/// Replaces the `nop` instruction so tests can check how many steps a delay
/// performed.
#[derive(Debug, Default, Clone)]
pub struct MockSpin {
    count: u64,
}

impl MockSpin {
    /// Create a new counter at zero
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Number of spin steps executed
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl SpinInterface for MockSpin {
    fn spin(&mut self) {
        self.count += 1;
    }
}
