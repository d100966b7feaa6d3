//! Connection driver facade
//!
//! [`GpioDriver`] owns the mapped register page and the sysfs exporter and
//! composes them into the operations a connection layer needs: allocate and
//! release pins, write and read single levels, read a bitmask of levels.
//! Reads and writes go straight to the registers; sysfs is only involved in
//! allocation bookkeeping, never on the hot path.

use log::debug;

use crate::error::Result;
use crate::mmio::{DevMem, Registers};
use crate::pin::{Mode, Pin, PinSet, Resistor};
use crate::regs::REGISTERS;
use crate::sysfs::SysfsExporter;
use crate::{mode, pull};

/// Register-level GPIO driver for one BCM283x GPIO block.
///
/// Holds the single live mapping of the register page; create exactly one
/// instance per process. The mapping is unmapped when the driver drops.
///
/// No internal locking is performed. Level writes and reads hit per-bit
/// Set/Clear/Level registers and are safe to issue concurrently for
/// different pins; mode changes are read-modify-write on shared
/// function-select words and must be externally serialized when concurrent
/// callers touch pins in the same 10-pin word.
#[derive(Debug)]
pub struct GpioDriver {
    regs: Registers,
    sysfs: SysfsExporter,
}

impl GpioDriver {
    /// Map the GPIO register block and set up sysfs bookkeeping.
    ///
    /// Fails with [`crate::Error::MappingFailure`] or
    /// [`crate::Error::PermissionDenied`] when the block cannot be mapped;
    /// there is no retry, the caller must fix privileges or the environment.
    pub fn new() -> Result<Self> {
        let block = DevMem::map_gpio()?;
        Ok(Self {
            regs: Registers::new(Box::new(block)),
            sysfs: SysfsExporter::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_parts(block: Box<dyn crate::mmio::MmioBlock>, sysfs: SysfsExporter) -> Self {
        Self {
            regs: Registers::new(block),
            sysfs,
        }
    }

    /// Allocate `pin` for use with the given direction.
    ///
    /// Exports the pin through sysfs (resetting a stale export first),
    /// writes its direction attribute, programs the function-select code,
    /// and for inputs disables the pull resistor so the line starts
    /// unbiased until configured otherwise.
    pub fn allocate(&self, pin: Pin, direction: Mode) -> Result<()> {
        debug!("{pin}: allocate as {direction}");
        self.sysfs.allocate(pin, direction)?;
        mode::set_mode(&self.regs, pin, direction);
        if direction == Mode::Input {
            pull::set_resistor(&self.regs, pin, Resistor::Off);
        }
        Ok(())
    }

    /// Release `pin`, returning it to a safe input state and unexporting it.
    pub fn release(&self, pin: Pin) -> Result<()> {
        debug!("{pin}: release");
        mode::set_mode(&self.regs, pin, Mode::Input);
        self.sysfs.release(pin)
    }

    /// Drive `pin` high (`true`) or low (`false`).
    ///
    /// Writes the pin's bit to the Set or Clear register. Those registers
    /// are write-only and per-bit: zero bits are ignored by the hardware,
    /// so no other pin is ever affected and no read-modify-write happens.
    pub fn write(&self, pin: Pin, level: bool) {
        let offset = if level {
            REGISTERS.set[pin.bank()]
        } else {
            REGISTERS.clear[pin.bank()]
        };
        self.regs.write_word(offset, 1 << pin.bank_bit());
    }

    /// Sample `pin`'s current level.
    pub fn read(&self, pin: Pin) -> bool {
        let word = self.regs.read_word(REGISTERS.level[pin.bank()]);
        word & (1 << pin.bank_bit()) != 0
    }

    /// Sample every pin in `pins` in one pass over the level registers.
    pub fn read_set(&self, pins: PinSet) -> PinSet {
        let low = self.regs.read_word(REGISTERS.level[0]) as u64;
        let high = self.regs.read_word(REGISTERS.level[1]) as u64;
        PinSet::from_bits_truncate((high << 32) | low) & pins
    }

    /// Invert `pin`'s current level.
    pub fn toggle(&self, pin: Pin) {
        let level = self.read(pin);
        self.write(pin, !level);
    }

    /// Program `pin`'s function-select code directly.
    pub fn set_mode(&self, pin: Pin, direction: Mode) {
        mode::set_mode(&self.regs, pin, direction);
    }

    /// Read back `pin`'s current mode from the hardware.
    pub fn mode(&self, pin: Pin) -> Mode {
        mode::mode(&self.regs, pin)
    }

    /// Change `pin`'s internal pull resistor.
    ///
    /// Runs the timed control/clock sequence; blocks the calling thread
    /// until the sequence completes.
    pub fn set_resistor(&self, pin: Pin, resistor: Resistor) {
        pull::set_resistor(&self.regs, pin, resistor);
    }
}
