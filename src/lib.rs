//! # BCM283x GPIO register driver
//!
//! Direct, register-level control of the GPIO lines on Broadcom BCM283x
//! SoCs (Raspberry Pi class hardware), bypassing the kernel GPIO stack for
//! latency and precision.
//!
//! # Features
//!
//! - **Memory-mapped registers**: maps the GPIO peripheral page from
//!   `/dev/gpiomem` (no root required) or `/dev/mem`, and drives pins
//!   through volatile word access with the SoC's documented double-access
//!   mitigation
//! - **Pin modes**: input/output via the packed function-select registers
//! - **Pull resistors**: the timed GPPUD/GPPUDCLK sequence for internal
//!   pull-up/pull-down configuration
//! - **Sysfs bookkeeping**: minimal export/unexport/direction handling so
//!   allocations are visible to the rest of the system
//! - **Batched reads**: sample any subset of the 54 lines in one pass
//!
//! # Usage
//!
//! ```no_run
//! use bcm283x_gpio::{GpioDriver, Mode, Pin, Resistor};
//!
//! # fn main() -> bcm283x_gpio::Result<()> {
//! let gpio = GpioDriver::new()?;
//!
//! let led = Pin::new(17)?;
//! gpio.allocate(led, Mode::Output)?;
//! gpio.write(led, true);
//!
//! let button = Pin::new(23)?;
//! gpio.allocate(button, Mode::Input)?;
//! gpio.set_resistor(button, Resistor::PullUp);
//! if gpio.read(button) {
//!     gpio.write(led, false);
//! }
//!
//! gpio.release(led)?;
//! gpio.release(button)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Scope
//!
//! Synchronous polling reads and writes only; no interrupt or edge
//! notification, and no support for non-BCM283x chip families. Pin
//! identifiers are SoC line numbers, not board-header positions.

mod driver;
mod error;
mod mmio;
mod mode;
mod pin;
mod pull;
mod regs;
mod sysfs;

#[cfg(test)]
pub(crate) mod testutil;

pub use driver::GpioDriver;
pub use error::{Error, Result};
pub use pin::{Mode, Pin, PinSet, Resistor, PIN_COUNT};
