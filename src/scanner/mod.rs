// Tue Aug 25 2026 - Alex

pub mod accumulator;
pub mod error;
pub mod matcher;
pub mod orchestrator;
pub mod result;

pub use accumulator::MatchAccumulator;
pub use error::{MatchError, ScanError};
pub use matcher::SignatureMatcher;
pub use orchestrator::ScanOrchestrator;
pub use result::{MatchRecord, ScanResult, ScanStats};
