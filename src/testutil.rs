//! Test support: an addressable fake standing in for the mapped page
//!
//! The fake stores the register file as plain words but models the one piece
//! of hardware behavior the tests depend on: writes to the Set/Clear words
//! update the corresponding Level word, so level reads observe prior writes
//! the way they do on silicon. Physical accesses are counted so the
//! double-access mitigation is itself testable.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::mmio::MmioBlock;
use crate::regs::{GPIO_BLOCK_LEN, REGISTERS};

/// Counts of physical (not logical) register accesses.
#[derive(Debug, Default)]
pub(crate) struct AccessCounters {
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl AccessCounters {
    /// (reads, writes) seen so far.
    pub fn snapshot(&self) -> (usize, usize) {
        (self.reads.load(Ordering::SeqCst), self.writes.load(Ordering::SeqCst))
    }
}

/// In-memory register block with GPIO Set/Clear/Level semantics.
#[derive(Debug)]
pub(crate) struct FakeGpio {
    words: Mutex<Vec<u32>>,
    counters: Arc<AccessCounters>,
}

impl FakeGpio {
    pub fn new() -> Self {
        Self {
            words: Mutex::new(vec![0; GPIO_BLOCK_LEN / 4]),
            counters: Arc::new(AccessCounters::default()),
        }
    }

    /// Handle to the access counters, usable after the fake is boxed away.
    pub fn counters(&self) -> Arc<AccessCounters> {
        Arc::clone(&self.counters)
    }
}

impl MmioBlock for FakeGpio {
    fn read_u32(&self, offset: usize) -> u32 {
        self.counters.reads.fetch_add(1, Ordering::SeqCst);
        self.words.lock().unwrap()[offset / 4]
    }

    fn write_u32(&self, offset: usize, value: u32) {
        self.counters.writes.fetch_add(1, Ordering::SeqCst);
        let mut words = self.words.lock().unwrap();
        let regs = &*REGISTERS;
        for bank in 0..2 {
            if offset == regs.set[bank] {
                words[regs.level[bank] / 4] |= value;
            } else if offset == regs.clear[bank] {
                words[regs.level[bank] / 4] &= !value;
            }
        }
        words[offset / 4] = value;
    }

    fn len(&self) -> usize {
        GPIO_BLOCK_LEN
    }
}
