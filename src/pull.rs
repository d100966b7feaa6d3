//! Pull resistor sequencing
//!
//! The pull-control register (GPPUD) is shared by all 54 pins: whatever code
//! it holds is applied to every pin whose bit is strobed in a pull-clock
//! word. Selectivity comes entirely from the clock pulse, which is why the
//! sequence below must run in exactly this order:
//!
//! 1. write the 2-bit code to GPPUD
//! 2. wait for the control value to settle
//! 3. raise the target pin's bit in its GPPUDCLK word
//! 4. wait for the hold time
//! 5. clear GPPUD
//! 6. clear the clock word
//!
//! Pins that never saw a clock edge keep their previous pull state.

use std::thread;
use std::time::Duration;

use log::debug;

use crate::mmio::Registers;
use crate::pin::{Pin, Resistor};
use crate::regs::REGISTERS;

/// Settle/hold time between sequence steps.
///
/// The hardware requires at least 150 core clock cycles, which is under a
/// microsecond at any BCM283x core frequency. This sleep is a coarse lower
/// bound, not a cycle-accurate wait.
const SETTLE_DELAY: Duration = Duration::from_micros(10);

/// Change `pin`'s internal pull resistor to `resistor`.
///
/// Blocks the calling thread for two settle delays; runs to completion once
/// started.
pub(crate) fn set_resistor(regs: &Registers, pin: Pin, resistor: Resistor) {
    debug!("{pin}: pull resistor -> {resistor:?}");

    regs.write_word(REGISTERS.pud, resistor.control_code());
    thread::sleep(SETTLE_DELAY);

    let clk = REGISTERS.pud_clk[pin.bank()];
    regs.write_word(clk, 1 << pin.bank_bit());
    thread::sleep(SETTLE_DELAY);

    regs.write_word(REGISTERS.pud, Resistor::Off.control_code());
    regs.write_word(clk, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeGpio;

    #[test]
    fn test_sequence_ends_cleared() {
        let regs = Registers::new(Box::new(FakeGpio::new()));
        let pin = Pin::new(17).unwrap();

        set_resistor(&regs, pin, Resistor::PullUp);
        set_resistor(&regs, pin, Resistor::Off);

        assert_eq!(regs.read_word(REGISTERS.pud), Resistor::Off.control_code());
        assert_eq!(regs.read_word(REGISTERS.pud_clk[pin.bank()]) & (1 << pin.bank_bit()), 0);
    }

    #[test]
    fn test_clock_targets_only_the_requested_pin() {
        let fake = FakeGpio::new();
        let counters = fake.counters();
        let regs = Registers::new(Box::new(fake));
        let pin = Pin::new(40).unwrap();

        set_resistor(&regs, pin, Resistor::PullDown);

        // Bank 0 clock word was never touched; bank 1 ended cleared.
        assert_eq!(regs.read_word(REGISTERS.pud_clk[0]), 0);
        assert_eq!(regs.read_word(REGISTERS.pud_clk[1]), 0);
        // Four logical writes, each doubled.
        let (_, writes) = counters.snapshot();
        assert_eq!(writes, 8);
    }
}
