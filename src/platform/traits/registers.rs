//! Register access interface
//!
//! A peripheral register block seen as 32-bit words at byte offsets from the
//! block base. Hardware implementations must use volatile accesses; mocks
//! back the words with plain memory.

/// Register block interface
///
/// # Safety Invariants
///
/// - Offsets are byte offsets and must be 4-byte aligned
/// - Implementations must not cache or elide accesses: every `read` observes
///   the device and every `write` reaches it, in program order
pub trait RegisterInterface {
    /// Read the 32-bit word at `offset`
    fn read(&self, offset: usize) -> u32;

    /// Write `value` to the 32-bit word at `offset`
    fn write(&mut self, offset: usize, value: u32);

    /// Read-modify-write the word at `offset`
    fn modify<F>(&mut self, offset: usize, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(offset);
        self.write(offset, f(value));
    }
}
