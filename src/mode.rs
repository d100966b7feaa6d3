//! Function-select configuration
//!
//! Each GPFSEL word packs ten pins at 3 bits per pin. Changing one pin's
//! mode must leave the other nine codes in the word bit-for-bit unchanged,
//! so the write goes through the accessor's masked read-modify-write.

use crate::mmio::Registers;
use crate::pin::{Mode, Pin};
use crate::regs::REGISTERS;

/// Set `pin`'s function-select code to `mode`.
pub(crate) fn set_mode(regs: &Registers, pin: Pin, mode: Mode) {
    let offset = REGISTERS.fsel[pin.fsel_word()];
    let shift = pin.fsel_shift();
    regs.write_masked(offset, mode.fsel_code() << shift, 0b111 << shift);
}

/// Read back `pin`'s current mode from its function-select word.
pub(crate) fn mode(regs: &Registers, pin: Pin) -> Mode {
    let word = regs.read_word(REGISTERS.fsel[pin.fsel_word()]);
    Mode::from_fsel_code(word >> pin.fsel_shift())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeGpio;

    #[test]
    fn test_set_mode_round_trip() {
        let regs = Registers::new(Box::new(FakeGpio::new()));
        let pin = Pin::new(17).unwrap();

        set_mode(&regs, pin, Mode::Output);
        assert_eq!(mode(&regs, pin), Mode::Output);

        set_mode(&regs, pin, Mode::Input);
        assert_eq!(mode(&regs, pin), Mode::Input);
    }

    #[test]
    fn test_set_mode_preserves_neighbors() {
        let regs = Registers::new(Box::new(FakeGpio::new()));

        // Pins 10..=19 share GPFSEL1; give the neighbors distinct codes.
        for id in [10u8, 11, 13, 19] {
            set_mode(&regs, Pin::new(id).unwrap(), Mode::Output);
        }
        let offset = REGISTERS.fsel[1];
        let before = regs.read_word(offset);

        let pin = Pin::new(17).unwrap();
        set_mode(&regs, pin, Mode::Output);

        let after = regs.read_word(offset);
        let pin_mask = 0b111 << pin.fsel_shift();
        assert_eq!(before & !pin_mask, after & !pin_mask);
        assert_eq!((after >> pin.fsel_shift()) & 0b111, 0b001);
    }

    #[test]
    fn test_every_pin_addresses_its_own_field() {
        let regs = Registers::new(Box::new(FakeGpio::new()));
        for id in 0..=Pin::MAX {
            let pin = Pin::new(id).unwrap();
            set_mode(&regs, pin, Mode::Output);
            assert_eq!(mode(&regs, pin), Mode::Output, "pin {id}");
        }
        // All six words now carry output codes; flipping one back must not
        // disturb the rest.
        let pin = Pin::new(30).unwrap();
        set_mode(&regs, pin, Mode::Input);
        for id in 0..=Pin::MAX {
            let expected = if id == 30 { Mode::Input } else { Mode::Output };
            assert_eq!(mode(&regs, Pin::new(id).unwrap()), expected, "pin {id}");
        }
    }
}
