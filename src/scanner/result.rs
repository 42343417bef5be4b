// Tue Aug 25 2026 - Alex

use crate::memory::RegionDescriptor;
use serde::Serialize;

/// One matched region: the descriptor plus the unique rule identifiers
/// that fired in it, in first-notification order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    region: RegionDescriptor,
    rules: Vec<String>,
}

impl MatchRecord {
    pub fn new(region: RegionDescriptor, rules: Vec<String>) -> Self {
        Self { region, rules }
    }

    pub fn region(&self) -> &RegionDescriptor {
        &self.region
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    pub regions_enumerated: usize,
    pub regions_scanned: usize,
    pub regions_skipped: usize,
    pub bytes_scanned: u64,
    pub duration_ms: u64,
}

/// Output of one completed pass: every region with at least one match, in
/// enumeration order. Empty after a full pass is a valid outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    records: Vec<MatchRecord>,
    stats: ScanStats,
}

impl ScanResult {
    pub fn new(records: Vec<MatchRecord>, stats: ScanStats) -> Self {
        Self { records, stats }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    pub fn has_matches(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
