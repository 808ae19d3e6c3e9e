//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Raspberry Pi 3 (`rpi3` feature): Uses defmt, frames kept in a RAM ring
//!   (see `platform::bcm2837::logger`)
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! Format strings must stay valid for both defmt and `core::fmt`: use `{}`
//! and display hints such as `{:#x}`, never defmt type annotations.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rpi3")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "rpi3"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rpi3")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "rpi3"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rpi3")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "rpi3"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rpi3")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "rpi3"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rpi3")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "rpi3"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}
