//! BCM283x GPIO register map
//!
//! Byte offsets of the GPIO control registers inside the mapped peripheral
//! page. These values and the 3-bit/2-bit field encodings are a fixed binary
//! contract with the BCM283x datasheet; a wrong offset silently corrupts
//! unrelated pins or peripherals.
//!
//! | Register    | Offset      | Width per pin | Pins per word |
//! |-------------|-------------|---------------|---------------|
//! | GPFSEL0..5  | 0x00..0x14  | 3 bits        | 10            |
//! | GPSET0..1   | 0x1C, 0x20  | 1 bit         | 32            |
//! | GPCLR0..1   | 0x28, 0x2C  | 1 bit         | 32            |
//! | GPLEV0..1   | 0x34, 0x38  | 1 bit         | 32            |
//! | GPPUD       | 0x94        | 2-bit code, all pins | —      |
//! | GPPUDCLK0..1| 0x98, 0x9C  | 1 bit         | 32            |

use once_cell::sync::Lazy;

// ============================================================================
// DEVICE CONSTANTS
// ============================================================================

/// Kernel device exposing just the GPIO register page, mappable without root.
pub(crate) const GPIOMEM_PATH: &str = "/dev/gpiomem";

/// Raw physical memory device; mapping it requires root.
pub(crate) const MEM_PATH: &str = "/dev/mem";

/// Physical address of the GPIO register block (BCM2835 peripheral window).
///
/// Only used on the `/dev/mem` path; `/dev/gpiomem` exposes the block at
/// mapping offset 0 regardless of where the SoC places it.
pub(crate) const GPIO_BASE: usize = 0x2020_0000;

/// Size of the mapped block: one hardware page covers every GPIO register.
pub(crate) const GPIO_BLOCK_LEN: usize = 4096;

// ============================================================================
// REGISTER OFFSETS
// ============================================================================

/// Byte offsets of the GPIO registers inside the mapped block.
#[derive(Debug)]
pub(crate) struct RegisterMap {
    /// Function-select words GPFSEL0..5, 10 pins per word.
    pub fsel: [usize; 6],
    /// Output-set words GPSET0..1, write-only, 1 bit per pin.
    pub set: [usize; 2],
    /// Output-clear words GPCLR0..1, write-only, 1 bit per pin.
    pub clear: [usize; 2],
    /// Level words GPLEV0..1, read-only, 1 bit per pin.
    pub level: [usize; 2],
    /// Pull-control register GPPUD, 2-bit code applied to all pins.
    pub pud: usize,
    /// Pull-clock words GPPUDCLK0..1, 1 bit per pin.
    pub pud_clk: [usize; 2],
}

/// The frozen register map, constructed once and read-only thereafter.
pub(crate) static REGISTERS: Lazy<RegisterMap> = Lazy::new(|| RegisterMap {
    fsel: [0x00, 0x04, 0x08, 0x0C, 0x10, 0x14],
    set: [0x1C, 0x20],
    clear: [0x28, 0x2C],
    level: [0x34, 0x38],
    pud: 0x94,
    pud_clk: [0x98, 0x9C],
});
