//! Memory-mapped register access
//!
//! Splits register I/O into two layers: a [`MmioBlock`] backend owning a
//! mapped region of device memory, and the [`Registers`] accessor that
//! performs hardware-correct word operations against it. Tests substitute
//! the backend with an addressable fake; production code maps the real
//! peripheral page via [`DevMem`].

pub(crate) mod access;
pub(crate) mod devmem;

pub(crate) use access::Registers;
pub(crate) use devmem::DevMem;

use std::fmt;

/// A contiguous block of 32-bit device registers.
///
/// Implementations must perform volatile accesses: register state is
/// externally observable and side-effecting, so reads and writes may not be
/// elided or reordered against each other.
pub(crate) trait MmioBlock: fmt::Debug + Send + Sync {
    /// Read the 32-bit word at `offset` bytes into the block.
    fn read_u32(&self, offset: usize) -> u32;

    /// Write the 32-bit word at `offset` bytes into the block.
    fn write_u32(&self, offset: usize, value: u32);

    /// Length of the block in bytes.
    fn len(&self) -> usize;
}
