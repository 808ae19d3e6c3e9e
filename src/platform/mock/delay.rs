//! Mock delay implementation for testing

use crate::platform::traits::DelayInterface;

/// Mock delay
///
/// Uses simulated time: requests are accumulated instead of waited out.
#[derive(Debug, Default, Clone)]
pub struct MockDelay {
    elapsed_us: u64,
    calls: u64,
    last_ms: Option<u32>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time in microseconds
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }

    /// Number of delay requests
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Duration of the last `delay_ms` request
    pub fn last_ms(&self) -> Option<u32> {
        self.last_ms
    }
}

impl DelayInterface for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.elapsed_us += us as u64;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_us += ms as u64 * 1000;
        self.calls += 1;
        self.last_ms = Some(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_delay_accumulates() {
        let mut delay = MockDelay::new();
        assert_eq!(delay.elapsed_us(), 0);

        delay.delay_us(500);
        delay.delay_ms(2);
        assert_eq!(delay.elapsed_us(), 2_500);
        assert_eq!(delay.calls(), 2);
        assert_eq!(delay.last_ms(), Some(2));
    }
}
