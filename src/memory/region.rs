// Tue Aug 25 2026 - Alex

use crate::memory::{Address, Protection};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegionState {
    Committed,
    Reserved,
    Free,
}

impl fmt::Display for RegionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Committed => write!(f, "committed"),
            Self::Reserved => write!(f, "reserved"),
            Self::Free => write!(f, "free"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegionKind {
    Private,
    Image,
    Mapped,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => write!(f, "private"),
            Self::Image => write!(f, "image"),
            Self::Mapped => write!(f, "mapped"),
        }
    }
}

/// One contiguous region of the target's virtual address space, as seen
/// at enumeration time. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct RegionDescriptor {
    base: Address,
    allocation_base: Address,
    size: u64,
    protection: Protection,
    state: RegionState,
    kind: RegionKind,
}

impl RegionDescriptor {
    pub fn new(base: Address, size: u64, protection: Protection) -> Self {
        Self {
            base,
            allocation_base: base,
            size,
            protection,
            state: RegionState::Committed,
            kind: RegionKind::Private,
        }
    }

    pub fn with_allocation_base(mut self, allocation_base: Address) -> Self {
        self.allocation_base = allocation_base;
        self
    }

    pub fn with_state(mut self, state: RegionState) -> Self {
        self.state = state;
        self
    }

    pub fn with_kind(mut self, kind: RegionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn allocation_base(&self) -> Address {
        self.allocation_base
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn protection(&self) -> Protection {
        self.protection
    }

    pub fn state(&self) -> RegionState {
        self.state
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn end(&self) -> Address {
        self.base + self.size
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr >= self.base && addr < self.end()
    }

    pub fn is_readable(&self) -> bool {
        self.protection.can_read()
    }
}

impl fmt::Display for RegionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {} {} {}",
            self.base,
            self.end(),
            self.protection,
            self.state,
            self.kind
        )
    }
}
