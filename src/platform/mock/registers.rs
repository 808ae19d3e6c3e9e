//! Mock register block for testing
//!
//! In-memory stand-in for a memory-mapped register block. Words are plain
//! memory: a write is stored as-is and read back unchanged, so set/clear
//! semantics are checked through the write history rather than pin levels.

use core::cell::{Cell, RefCell};

use heapless::HistoryBuf;

use crate::platform::traits::RegisterInterface;

/// Number of 32-bit words backed by the mock (covers the GPIO block)
pub const MOCK_WORDS: usize = 64;

/// Number of writes kept in the history
pub const WRITE_HISTORY_SIZE: usize = 64;

/// One recorded register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWrite {
    /// Byte offset from the block base
    pub offset: usize,
    /// Value written
    pub value: u32,
}

/// Mock register block
///
/// Shared by reference: `&MockRegisters` implements [`RegisterInterface`],
/// so drivers take `&regs` while the test keeps inspecting `regs`.
pub struct MockRegisters {
    words: [Cell<u32>; MOCK_WORDS],
    write_counts: [Cell<u64>; MOCK_WORDS],
    history: RefCell<HistoryBuf<RegisterWrite, WRITE_HISTORY_SIZE>>,
    total_writes: Cell<u64>,
}

impl MockRegisters {
    /// Create a register block with every word zero
    pub fn new() -> Self {
        Self {
            words: [const { Cell::new(0) }; MOCK_WORDS],
            write_counts: [const { Cell::new(0) }; MOCK_WORDS],
            history: RefCell::new(HistoryBuf::new()),
            total_writes: Cell::new(0),
        }
    }

    fn index(offset: usize) -> usize {
        assert!(offset % 4 == 0, "unaligned register offset {:#x}", offset);
        let index = offset / 4;
        assert!(index < MOCK_WORDS, "register offset {:#x} out of range", offset);
        index
    }

    /// Set a word without recording a write (simulates hardware state)
    pub fn preset(&self, offset: usize, value: u32) {
        self.words[Self::index(offset)].set(value);
    }

    /// Current value of a word without going through the driver
    pub fn peek(&self, offset: usize) -> u32 {
        self.words[Self::index(offset)].get()
    }

    /// Number of writes to `offset`
    pub fn writes_to(&self, offset: usize) -> u64 {
        self.write_counts[Self::index(offset)].get()
    }

    /// Number of writes to any offset
    pub fn total_writes(&self) -> u64 {
        self.total_writes.get()
    }

    /// Most recent write as `(offset, value)`
    pub fn last_write(&self) -> Option<(usize, u32)> {
        self.history
            .borrow()
            .recent()
            .map(|w| (w.offset, w.value))
    }

    /// Copy of the last [`WRITE_HISTORY_SIZE`] writes, oldest first
    pub fn history(&self) -> heapless::Vec<RegisterWrite, WRITE_HISTORY_SIZE> {
        self.history.borrow().oldest_ordered().copied().collect()
    }

    /// Forget recorded writes; word values are kept
    pub fn clear_history(&self) {
        self.history.borrow_mut().clear();
        self.total_writes.set(0);
        for count in &self.write_counts {
            count.set(0);
        }
    }
}

impl Default for MockRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for MockRegisters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MockRegisters")
            .field("total_writes", &self.total_writes.get())
            .field("last_write", &self.last_write())
            .finish()
    }
}

impl RegisterInterface for &MockRegisters {
    fn read(&self, offset: usize) -> u32 {
        self.peek(offset)
    }

    fn write(&mut self, offset: usize, value: u32) {
        let index = MockRegisters::index(offset);
        self.words[index].set(value);
        self.write_counts[index].set(self.write_counts[index].get() + 1);
        self.total_writes.set(self.total_writes.get() + 1);
        self.history
            .borrow_mut()
            .write(RegisterWrite { offset, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let regs = MockRegisters::new();
        let mut handle = &regs;

        handle.write(0x1C, 1 << 16);
        assert_eq!(handle.read(0x1C), 1 << 16);
        assert_eq!(regs.writes_to(0x1C), 1);
        assert_eq!(regs.total_writes(), 1);
        assert_eq!(regs.last_write(), Some((0x1C, 1 << 16)));
    }

    #[test]
    fn test_preset_is_not_a_write() {
        let regs = MockRegisters::new();
        regs.preset(0x04, 0xAAAA_AAAA);
        assert_eq!(regs.peek(0x04), 0xAAAA_AAAA);
        assert_eq!(regs.total_writes(), 0);
        assert_eq!(regs.last_write(), None);
    }

    #[test]
    fn test_modify_reads_then_writes() {
        let regs = MockRegisters::new();
        regs.preset(0x04, 0b1);
        let mut handle = &regs;

        handle.modify(0x04, |v| v | 0b100);
        assert_eq!(regs.peek(0x04), 0b101);
        assert_eq!(regs.writes_to(0x04), 1);
    }

    #[test]
    fn test_history_keeps_most_recent() {
        let regs = MockRegisters::new();
        let mut handle = &regs;

        for i in 0..(WRITE_HISTORY_SIZE as u32 + 3) {
            handle.write(0x28, i);
        }

        let history = regs.history();
        assert_eq!(history.len(), WRITE_HISTORY_SIZE);
        assert_eq!(history[0].value, 3);
        assert_eq!(regs.writes_to(0x28), WRITE_HISTORY_SIZE as u64 + 3);

        regs.clear_history();
        assert_eq!(regs.total_writes(), 0);
        assert!(regs.history().is_empty());
        assert_eq!(regs.peek(0x28), WRITE_HISTORY_SIZE as u32 + 2);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_offset_panics() {
        MockRegisters::new().peek(MOCK_WORDS * 4);
    }
}
