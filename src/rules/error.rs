// Wed Aug 26 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("matcher engine setup failed: {0}")]
    Setup(String),
    #[error("failed to compile rules from {path}: {reason}")]
    Compile { path: PathBuf, reason: String },
    #[error("no usable rules under {0}")]
    NoRules(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
