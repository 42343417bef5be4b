// Tue Aug 25 2026 - Alex

use crate::memory::{Address, MemoryError, RegionDescriptor};

/// Read-only view of one target process: a complete region map plus the
/// ability to copy bytes out of its address space. `ProcessHandle` is the
/// live implementation; tests substitute an in-memory fake.
pub trait ProcessSource {
    fn regions(&self) -> Result<Vec<RegionDescriptor>, MemoryError>;

    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError>;
}
