//! Physical memory mapping of the GPIO register page
//!
//! Maps the GPIO peripheral block into process memory, preferring
//! `/dev/gpiomem` (which exposes exactly this page and needs no root) and
//! falling back to `/dev/mem` at the fixed physical base. The file handle is
//! released as soon as the mapping exists; the mapping itself lives until
//! [`DevMem`] is dropped, where it is unmapped exactly once.

use std::fs::OpenOptions;
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;
use std::ptr;

use log::debug;

use super::MmioBlock;
use crate::error::{Error, Result};
use crate::regs::{GPIOMEM_PATH, GPIO_BASE, GPIO_BLOCK_LEN, MEM_PATH};

/// Exclusive owner of the mapped GPIO register page.
pub(crate) struct DevMem {
    ptr: *mut u32,
    len: usize,
}

// The mapping points at hardware registers, not process memory shared with
// other threads; all accesses go through &self volatile reads/writes.
unsafe impl Send for DevMem {}
unsafe impl Sync for DevMem {}

impl DevMem {
    /// Map the GPIO register block.
    ///
    /// Tries `/dev/gpiomem` first, then `/dev/mem` at the fixed physical
    /// base. Exactly one instance should be live per process.
    pub fn map_gpio() -> Result<Self> {
        match Self::map(GPIOMEM_PATH, 0) {
            Ok(mem) => {
                debug!("mapped GPIO register block from {}", GPIOMEM_PATH);
                Ok(mem)
            }
            Err(err) => {
                debug!("{} unavailable ({}), falling back to {}", GPIOMEM_PATH, err, MEM_PATH);
                let mem = Self::map(MEM_PATH, GPIO_BASE)?;
                debug!("mapped GPIO register block from {} at {:#x}", MEM_PATH, GPIO_BASE);
                Ok(mem)
            }
        }
    }

    /// Map one page of `path` at physical offset `base`.
    fn map(path: &str, base: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| {
                if source.kind() == io::ErrorKind::PermissionDenied {
                    Error::PermissionDenied {
                        path: PathBuf::from(path),
                        source,
                    }
                } else {
                    Error::MappingFailure {
                        path: PathBuf::from(path),
                        source,
                    }
                }
            })?;

        // MAP_SHARED: writes must reach the hardware, not a private copy.
        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                GPIO_BLOCK_LEN,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                file.as_raw_fd(),
                base as libc::off_t,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(Error::MappingFailure {
                path: PathBuf::from(path),
                source: io::Error::last_os_error(),
            });
        }

        // `file` drops here; the mapping is valid independent of the handle.
        Ok(Self {
            ptr: ptr as *mut u32,
            len: GPIO_BLOCK_LEN,
        })
    }
}

impl MmioBlock for DevMem {
    fn read_u32(&self, offset: usize) -> u32 {
        debug_assert!(offset % 4 == 0 && offset + 4 <= self.len);
        unsafe { ptr::read_volatile(self.ptr.add(offset / 4)) }
    }

    fn write_u32(&self, offset: usize, value: u32) {
        debug_assert!(offset % 4 == 0 && offset + 4 <= self.len);
        unsafe { ptr::write_volatile(self.ptr.add(offset / 4), value) }
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl std::fmt::Debug for DevMem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevMem")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

impl Drop for DevMem {
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.ptr as *mut libc::c_void, self.len);
        }
    }
}
