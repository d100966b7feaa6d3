//! Sysfs export/unexport bookkeeping
//!
//! Register access alone does not tell the kernel a pin is in use; the sysfs
//! GPIO interface is the minimal fallback for that bookkeeping and for
//! directional setup visible to other processes. Only three attributes are
//! touched: the class-level `export`/`unexport` files and the per-pin
//! `direction` file. Everything else (edge, value) stays register-driven.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};
use crate::pin::{Mode, Pin};

/// Default kernel GPIO class directory.
const SYSFS_GPIO_BASE: &str = "/sys/class/gpio";

/// Writes pin export state and direction through the sysfs tree.
///
/// The base directory is injectable so tests can point the exporter at a
/// scratch tree.
#[derive(Debug)]
pub(crate) struct SysfsExporter {
    base: PathBuf,
}

impl SysfsExporter {
    pub fn new() -> Self {
        Self::with_base(SYSFS_GPIO_BASE)
    }

    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Export `pin` and write its direction attribute.
    ///
    /// A pin left exported by another process or a prior crash carries stale
    /// direction/edge settings; unexporting first guarantees the fresh
    /// export starts from kernel defaults.
    pub fn allocate(&self, pin: Pin, mode: Mode) -> Result<()> {
        if self.direction_path(pin).exists() {
            debug!("{pin}: already exported, resetting");
            self.write_control("unexport", pin)?;
        }
        self.write_control("export", pin)?;
        self.write_direction(pin, mode)
    }

    /// Return `pin` to the kernel.
    pub fn release(&self, pin: Pin) -> Result<()> {
        self.write_control("unexport", pin)
    }

    fn pin_dir(&self, pin: Pin) -> PathBuf {
        self.base.join(format!("gpio{}", pin.id()))
    }

    fn direction_path(&self, pin: Pin) -> PathBuf {
        self.pin_dir(pin).join("direction")
    }

    /// Write a decimal pin number to `export` or `unexport`.
    fn write_control(&self, control: &str, pin: Pin) -> Result<()> {
        let path = self.base.join(control);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|source| Error::Sysfs { path: path.clone(), source })?;
        write!(file, "{}", pin.id()).map_err(|source| Error::Sysfs { path, source })
    }

    fn write_direction(&self, pin: Pin, mode: Mode) -> Result<()> {
        let path = self.direction_path(pin);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| Error::Sysfs { path: path.clone(), source })?;
        file.write_all(mode.sysfs_token().as_bytes())
            .map_err(|source| Error::Sysfs { path, source })
    }
}

impl Default for SysfsExporter {
    fn default() -> Self {
        Self::new()
    }
}
