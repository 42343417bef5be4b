// Wed Aug 26 2026 - Alex

pub mod engine;
pub mod error;
pub mod loader;

pub use engine::{RuleLoadSummary, YaraRuleSet};
pub use error::RuleError;
pub use loader::{collect_rule_files, RULE_EXTENSION};
