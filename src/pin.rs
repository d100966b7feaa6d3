//! Pin identifiers and hardware encodings
//!
//! Pins are named by their BCM line number (0..=53), independent of any
//! board-header numbering; translating header pins to SoC lines is the job
//! of a layer above this crate.

use std::fmt;

use bitflags::bitflags;

use crate::error::{Error, Result};

/// Number of GPIO lines on the BCM283x family.
pub const PIN_COUNT: u8 = 54;

/// A validated SoC GPIO line number (0..=53).
///
/// Constructing a `Pin` performs the only range check in the crate; every
/// register computation downstream can rely on the identifier being valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pin(u8);

impl Pin {
    /// Highest valid line number.
    pub const MAX: u8 = PIN_COUNT - 1;

    /// Create a pin from a BCM line number.
    ///
    /// Returns [`Error::InvalidPin`] for identifiers outside `0..=53`.
    pub fn new(id: u8) -> Result<Self> {
        if id < PIN_COUNT {
            Ok(Self(id))
        } else {
            Err(Error::InvalidPin(id))
        }
    }

    /// The BCM line number.
    pub fn id(self) -> u8 {
        self.0
    }

    /// Index of the 32-pin register word this pin lives in (0 or 1).
    pub(crate) fn bank(self) -> usize {
        (self.0 / 32) as usize
    }

    /// Bit position of this pin inside its 32-pin register word.
    pub(crate) fn bank_bit(self) -> u32 {
        (self.0 % 32) as u32
    }

    /// Index of the function-select word holding this pin (10 pins per word).
    pub(crate) fn fsel_word(self) -> usize {
        (self.0 / 10) as usize
    }

    /// Bit position of this pin's 3-bit code inside its function-select word.
    pub(crate) fn fsel_shift(self) -> u32 {
        3 * (self.0 % 10) as u32
    }
}

impl TryFrom<u8> for Pin {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Self::new(id)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

bitflags! {
    /// A bitmask over GPIO lines, bit N = pin N.
    ///
    /// Used for batched level reads; bits 54..=63 are never set by this
    /// crate.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PinSet: u64 {
        /// Every controllable line on the SoC.
        const ALL = (1 << PIN_COUNT) - 1;
    }
}

impl PinSet {
    /// The set containing exactly `pin`.
    pub fn single(pin: Pin) -> Self {
        Self::from_bits_retain(1 << pin.id())
    }

    /// Whether `pin`'s bit is set.
    pub fn contains_pin(self, pin: Pin) -> bool {
        self.bits() & (1 << pin.id()) != 0
    }
}

impl From<Pin> for PinSet {
    fn from(pin: Pin) -> Self {
        Self::single(pin)
    }
}

/// Pin direction, encoded as a 3-bit function-select code.
///
/// The hardware also defines six alternate-function codes per pin; this
/// driver never writes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// High-impedance input (function-select code 0b000).
    Input,
    /// Driven output (function-select code 0b001).
    Output,
}

impl Mode {
    /// 3-bit function-select code for this mode.
    pub(crate) fn fsel_code(self) -> u32 {
        match self {
            Mode::Input => 0b000,
            Mode::Output => 0b001,
        }
    }

    /// Decode a 3-bit function-select code read back from hardware.
    ///
    /// Alternate-function codes report as `Input`: the line is not driven
    /// by this driver in that state.
    pub(crate) fn from_fsel_code(code: u32) -> Self {
        match code & 0b111 {
            0b001 => Mode::Output,
            _ => Mode::Input,
        }
    }

    /// Token written to a sysfs `direction` attribute.
    pub(crate) fn sysfs_token(self) -> &'static str {
        match self {
            Mode::Input => "in",
            Mode::Output => "out",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sysfs_token())
    }
}

/// Internal pull resistor state, encoded as a 2-bit pull-control code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resistor {
    /// No internal bias (control code 0b00).
    Off,
    /// Weak pull to ground (control code 0b01).
    PullDown,
    /// Weak pull to the supply rail (control code 0b10).
    PullUp,
}

impl Resistor {
    /// 2-bit pull-control code for this state.
    pub(crate) fn control_code(self) -> u32 {
        match self {
            Resistor::Off => 0b00,
            Resistor::PullDown => 0b01,
            Resistor::PullUp => 0b10,
        }
    }
}
