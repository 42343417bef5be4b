// Tue Aug 25 2026 - Alex

#![allow(dead_code)]
#![allow(unused_variables)]

pub mod config;
pub mod memory;
pub mod output;
pub mod rules;
pub mod scanner;

pub use config::ScanConfig;
pub use memory::{
    Address, MemoryError, ProcessHandle, ProcessSource, Protection, RegionDescriptor, RegionKind,
    RegionReader, RegionState,
};
pub use rules::{RuleError, RuleLoadSummary, YaraRuleSet};
pub use scanner::{
    MatchError, MatchRecord, ScanError, ScanOrchestrator, ScanResult, ScanStats, SignatureMatcher,
};
