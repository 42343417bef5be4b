// Tue Aug 25 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("process {0} not found")]
    ProcessNotFound(i32),
    #[error("permission denied for process {0}")]
    PermissionDenied(i32),
    #[error("read failed at address 0x{0:x} (errno {1})")]
    ReadFailed(u64, i32),
    #[error("malformed maps entry: {0}")]
    MapsParse(String),
}
