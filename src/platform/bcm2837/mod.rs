//! BCM2837 platform implementation for the Raspberry Pi 3
//!
//! Register layout and drivers for the GPIO block of the BCM2837 SoC. The
//! drivers are generic over [`RegisterInterface`](crate::platform::traits::RegisterInterface)
//! and [`SpinInterface`](crate::platform::traits::SpinInterface), so the same
//! code runs against volatile MMIO on the board and against mocks on the host.
//!
//! # Feature Gate
//!
//! Only the on-target logger requires the `rpi3` feature:
//!
//! ```toml
//! [dependencies]
//! pi_blink = { version = "0.1", features = ["rpi3"] }
//! ```

mod delay;
mod gpio;
mod mmio;
mod platform;

#[cfg(feature = "rpi3")]
pub mod logger;

pub use delay::{AsmNop, SpinDelay, DEFAULT_SPINS_PER_US};
pub use gpio::Bcm2837Gpio;
pub use mmio::MmioRegisters;
pub use platform::Rpi3Platform;

/// Physical base of the BCM2837 peripheral window
pub const PERIPHERAL_BASE: usize = 0x3F00_0000;

/// GPIO block offset inside the peripheral window
pub const GPIO_OFFSET: usize = 0x20_0000;

/// Physical base of the GPIO register block
pub const GPIO_BASE: usize = PERIPHERAL_BASE + GPIO_OFFSET;

/// Number of GPIO pins on the SoC
pub const GPIO_PIN_COUNT: u8 = 54;

/// Function-select register 0 (pins 0-9); GPFSELn follows at +4*n
pub const GPFSEL0: usize = 0x00;

/// Output-set register 0 (pins 0-31); GPSET1 at +0x20
pub const GPSET0: usize = 0x1C;

/// Output-clear register 0 (pins 0-31); GPCLR1 at +0x2C
pub const GPCLR0: usize = 0x28;

/// Pin level register 0 (pins 0-31); GPLEV1 at +0x38
pub const GPLEV0: usize = 0x34;

/// Size of the GPIO register block in bytes
pub const GPIO_BLOCK_SIZE: usize = 0xB4;

/// Pins per function-select register
const PINS_PER_FSEL: u8 = 10;

/// Pins per set/clear/level bank
const PINS_PER_BANK: u8 = 32;

/// Offset of the function-select register holding `pin`
pub const fn fsel_offset(pin: u8) -> usize {
    GPFSEL0 + (pin / PINS_PER_FSEL) as usize * 4
}

/// Bit position of `pin`'s field inside its function-select register
pub const fn fsel_shift(pin: u8) -> u32 {
    (pin % PINS_PER_FSEL) as u32 * 3
}

/// Byte offset from a bank-0 register to the bank holding `pin`
pub const fn bank_offset(pin: u8) -> usize {
    (pin / PINS_PER_BANK) as usize * 4
}

/// Bit mask of `pin` inside its set/clear/level bank
pub const fn bank_mask(pin: u8) -> u32 {
    1 << (pin % PINS_PER_BANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_base_address() {
        assert_eq!(GPIO_BASE, 0x3F20_0000);
    }

    #[test]
    fn test_pin16_layout() {
        assert_eq!(fsel_offset(16), 0x04);
        assert_eq!(fsel_shift(16), 18);
        assert_eq!(GPSET0 + bank_offset(16), 0x1C);
        assert_eq!(GPCLR0 + bank_offset(16), 0x28);
        assert_eq!(bank_mask(16), 1 << 16);
    }

    #[test]
    fn test_high_bank_layout() {
        // GPIO 47 lives in GPFSEL4, bank 1
        assert_eq!(fsel_offset(47), 0x10);
        assert_eq!(fsel_shift(47), 21);
        assert_eq!(GPSET0 + bank_offset(47), 0x20);
        assert_eq!(GPCLR0 + bank_offset(47), 0x2C);
        assert_eq!(bank_mask(47), 1 << 15);
    }

    #[test]
    fn test_last_pin_fits_block() {
        let last = GPIO_PIN_COUNT - 1;
        assert!(fsel_offset(last) < GPSET0);
        assert!(GPLEV0 + bank_offset(last) < GPIO_BLOCK_SIZE);
    }
}
