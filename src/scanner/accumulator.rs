// Tue Aug 25 2026 - Alex

use crate::memory::RegionDescriptor;
use crate::scanner::MatchRecord;

/// Collects rule identifiers reported for one region. Identity is the
/// exact identifier string; insertion order is first-notification order.
/// Created fresh per region, consumed when the region's scan completes.
pub struct MatchAccumulator {
    rules: Vec<String>,
}

impl MatchAccumulator {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn record(&mut self, identifier: &str) {
        if !self.rules.iter().any(|r| r == identifier) {
            self.rules.push(identifier.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// A region with zero notifications produces no record at all.
    pub fn finalize(self, region: RegionDescriptor) -> Option<MatchRecord> {
        if self.rules.is_empty() {
            None
        } else {
            Some(MatchRecord::new(region, self.rules))
        }
    }
}

impl Default for MatchAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
