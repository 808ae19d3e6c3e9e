//! defmt global logger backed by RAM
//!
//! The Pi 3 has no RTT probe transport, so encoded defmt frames are kept in a
//! fixed ring in RAM. Attach a debugger, dump [`LOG_RING`] oldest-first and
//! feed the bytes to `defmt-print`.
//!
//! Single core, no interrupts: the lock only guards against re-entrant
//! logging from inside a log statement.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, Ordering};

use heapless::HistoryBuf;

/// Ring capacity in bytes
pub const LOG_RING_SIZE: usize = 4096;

/// Encoded defmt frames, newest bytes overwrite the oldest
pub struct LogRing {
    bytes: UnsafeCell<HistoryBuf<u8, LOG_RING_SIZE>>,
    encoder: UnsafeCell<defmt::Encoder>,
}

// SAFETY: access is serialized by `LOCKED` and the platform is single-core.
unsafe impl Sync for LogRing {}

#[no_mangle]
pub static LOG_RING: LogRing = LogRing {
    bytes: UnsafeCell::new(HistoryBuf::new()),
    encoder: UnsafeCell::new(defmt::Encoder::new()),
};

static LOCKED: AtomicBool = AtomicBool::new(false);

fn push_bytes(bytes: &[u8]) {
    // SAFETY: only called while `LOCKED` is held.
    let ring = unsafe { &mut *LOG_RING.bytes.get() };
    ring.extend_from_slice(bytes);
}

#[defmt::global_logger]
struct RamLogger;

// SAFETY: acquire/release bracket every frame and `LOCKED` prevents nesting.
unsafe impl defmt::Logger for RamLogger {
    fn acquire() {
        if LOCKED.load(Ordering::Acquire) {
            panic!("defmt logger taken reentrantly");
        }
        LOCKED.store(true, Ordering::Release);

        // SAFETY: lock held.
        unsafe { (*LOG_RING.encoder.get()).start_frame(push_bytes) }
    }

    unsafe fn flush() {}

    unsafe fn release() {
        (*LOG_RING.encoder.get()).end_frame(push_bytes);
        LOCKED.store(false, Ordering::Release);
    }

    unsafe fn write(bytes: &[u8]) {
        (*LOG_RING.encoder.get()).write(bytes, push_bytes);
    }
}
