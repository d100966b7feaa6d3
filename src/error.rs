//! Error types for GPIO register and sysfs access
//!
//! All fallible operations in this crate return [`Result`]. Mapping errors
//! are fatal: without the register block mapped there is nothing the driver
//! can do, and the caller has to fix privileges or the environment before
//! retrying.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the GPIO driver.
#[derive(Debug, Error)]
pub enum Error {
    /// The GPIO register block could not be mapped into process memory.
    ///
    /// Raised at construction when `mmap` on the memory device fails. Not
    /// retried; the driver cannot operate without the mapping.
    #[error("failed to map the GPIO register block from {}", path.display())]
    MappingFailure {
        /// Memory device that was being mapped.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The memory device could not be opened for lack of privileges.
    ///
    /// `/dev/gpiomem` requires membership in the `gpio` group; `/dev/mem`
    /// requires root.
    #[error("permission denied opening {} (requires root or gpio group membership)", path.display())]
    PermissionDenied {
        /// Memory device that was being opened.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A pin identifier outside the controllable range was supplied.
    ///
    /// Raised before any hardware state is touched.
    #[error("pin {0} is outside the valid range 0..=53")]
    InvalidPin(u8),

    /// A sysfs export/unexport/direction operation failed.
    ///
    /// Typically the pin is held by an incompatible owner or the sysfs GPIO
    /// interface is unavailable. Not retried automatically.
    #[error("sysfs GPIO operation failed on {}", path.display())]
    Sysfs {
        /// Virtual file the operation targeted.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
