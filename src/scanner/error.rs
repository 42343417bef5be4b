// Tue Aug 25 2026 - Alex

use crate::memory::MemoryError;
use thiserror::Error;

/// Fatal scan outcomes. Anything per-region (unreadable pages, matcher
/// timeouts) is absorbed inside the pass and never surfaces here.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot access process {pid}: {source}")]
    ProcessAccess {
        pid: i32,
        #[source]
        source: MemoryError,
    },
    #[error("no memory regions enumerated for process {pid}")]
    NoRegions { pid: i32 },
}

/// Failure reported by the matcher for one buffer.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("scan timed out")]
    Timeout,
    #[error("matcher engine error: {0}")]
    Engine(String),
}
