//! Raspberry Pi 3 blinker firmware
//!
//! Blinks GPIO16 (an LED on header pin 36) at 1 s per level using the
//! build-time parameters from `parameters::blink`.
//!
//! # Usage
//!
//! ```bash
//! cargo build --release --target aarch64-unknown-none --features rpi3 --bin pi_blink
//! rust-objcopy -O binary target/aarch64-unknown-none/release/pi_blink kernel8.img
//! # Copy kernel8.img to the boot partition of the SD card
//! ```

#![no_std]
#![no_main]

use panic_halt as _;

use pi_blink::core::Blinker;
use pi_blink::parameters::BlinkParams;
use pi_blink::platform::bcm2837::Rpi3Platform;
use pi_blink::{log_error, log_info};

// Firmware enters at EL2 on all four cores. Core 0 sets its stack below the
// image, zeroes .bss and calls kernel_main; the others park in wfe.
core::arch::global_asm!(
    r#"
.section ".text.boot", "ax"
.global _start
_start:
    mrs     x1, mpidr_el1
    and     x1, x1, #3
    cbz     x1, 2f
1:  wfe
    b       1b
2:  ldr     x1, =__stack_top
    mov     sp, x1
    ldr     x1, =__bss_start
    ldr     x2, =__bss_size
3:  cbz     x2, 4f
    str     xzr, [x1], #8
    sub     x2, x2, #1
    b       3b
4:  bl      kernel_main
    b       1b
"#
);

#[no_mangle]
pub extern "C" fn kernel_main() -> ! {
    let params = BlinkParams::BUILD;
    log_info!(
        "pi_blink: GPIO {}, {} ms, {} spins/us",
        params.pin,
        params.interval_ms,
        params.spins_per_us
    );

    let result = Rpi3Platform::take(params.spins_per_us)
        .and_then(|mut platform| Blinker::from_platform(&mut platform, &params))
        .and_then(|mut blinker| blinker.run());

    match result {
        Ok(never) => match never {},
        Err(e) => log_error!("blinker stopped: {}", e),
    }

    loop {
        aarch64_wfe();
    }
}

#[inline(always)]
fn aarch64_wfe() {
    // SAFETY: wfe only waits for an event.
    unsafe { core::arch::asm!("wfe", options(nomem, nostack, preserves_flags)) }
}
