// Wed Aug 26 2026 - Alex

use crate::memory::{ProcessHandle, ProcessSource, RegionReader, RegionState};
use crate::scanner::{MatchAccumulator, ScanError, ScanResult, ScanStats, SignatureMatcher};
use libc::pid_t;
use log::{debug, info};
use std::time::Instant;

/// Drives one scan pass: acquire the process, enumerate its regions, then
/// read and match each region sequentially. A region that cannot be read
/// or matched is dropped from the pass, never retried, and never aborts
/// the remaining regions.
pub struct ScanOrchestrator<M> {
    matcher: M,
    reader: RegionReader,
    committed_only: bool,
}

impl<M: SignatureMatcher> ScanOrchestrator<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            reader: RegionReader::new(),
            committed_only: false,
        }
    }

    /// Restrict the pass to committed regions. The default pass is
    /// unfiltered and attempts every region the enumeration yields.
    pub fn with_committed_only(mut self, committed_only: bool) -> Self {
        self.committed_only = committed_only;
        self
    }

    pub fn scan_process(&self, pid: pid_t) -> Result<ScanResult, ScanError> {
        let handle = ProcessHandle::open(pid)
            .map_err(|source| ScanError::ProcessAccess { pid, source })?;
        info!("opened process {} ({})", pid, handle.exe().unwrap_or("?"));
        self.scan_source(pid, &handle)
    }

    /// The pass itself, against any region source. The handle acquired in
    /// `scan_process` lives exactly as long as this call.
    pub fn scan_source(
        &self,
        pid: pid_t,
        source: &dyn ProcessSource,
    ) -> Result<ScanResult, ScanError> {
        let started = Instant::now();

        let regions = source
            .regions()
            .map_err(|source| ScanError::ProcessAccess { pid, source })?;
        if regions.is_empty() {
            return Err(ScanError::NoRegions { pid });
        }

        info!("enumerated {} regions for process {}", regions.len(), pid);

        let mut stats = ScanStats {
            regions_enumerated: regions.len(),
            ..Default::default()
        };
        let mut records = Vec::new();

        for region in regions {
            if self.committed_only && region.state() != RegionState::Committed {
                stats.regions_skipped += 1;
                continue;
            }

            let Some(buffer) = self.reader.read(source, &region) else {
                stats.regions_skipped += 1;
                continue;
            };

            let mut accumulator = MatchAccumulator::new();
            if let Err(e) = self
                .matcher
                .scan(&buffer, &mut |identifier| accumulator.record(identifier))
            {
                debug!("matcher failed in region {}: {}", region.base(), e);
                stats.regions_skipped += 1;
                continue;
            }

            stats.regions_scanned += 1;
            stats.bytes_scanned += buffer.len() as u64;

            if let Some(record) = accumulator.finalize(region) {
                records.push(record);
            }
        }

        stats.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            "scanned {}/{} regions, {} matched",
            stats.regions_scanned,
            stats.regions_enumerated,
            records.len()
        );

        Ok(ScanResult::new(records, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Address, MemoryError, Protection, RegionDescriptor};
    use crate::scanner::MatchError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeProcess {
        regions: Vec<RegionDescriptor>,
        contents: HashMap<u64, Vec<u8>>,
    }

    impl FakeProcess {
        fn new() -> Self {
            Self { regions: Vec::new(), contents: HashMap::new() }
        }

        fn region(mut self, base: u64, protection: Protection, data: &[u8]) -> Self {
            self.regions.push(RegionDescriptor::new(
                Address::new(base),
                data.len() as u64,
                protection,
            ));
            self.contents.insert(base, data.to_vec());
            self
        }

        fn free_region(mut self, base: u64, size: u64) -> Self {
            self.regions.push(
                RegionDescriptor::new(Address::new(base), size, Protection::None)
                    .with_state(RegionState::Free),
            );
            self
        }

        // enumerated readable, gone by the time the read happens
        fn vanished_region(mut self, base: u64, size: u64) -> Self {
            self.regions.push(RegionDescriptor::new(
                Address::new(base),
                size,
                Protection::Read,
            ));
            self
        }
    }

    impl ProcessSource for FakeProcess {
        fn regions(&self) -> Result<Vec<RegionDescriptor>, MemoryError> {
            Ok(self.regions.clone())
        }

        fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
            match self.contents.get(&addr.as_u64()) {
                Some(data) => Ok(data[..len.min(data.len())].to_vec()),
                None => Err(MemoryError::ReadFailed(addr.as_u64(), libc::EFAULT)),
            }
        }
    }

    /// Reports every configured identifier whose needle occurs in the
    /// buffer, repeating each notification to exercise deduplication.
    struct SubstringMatcher {
        needles: Vec<(&'static str, &'static str)>,
        scanned: RefCell<Vec<Vec<u8>>>,
    }

    impl SubstringMatcher {
        fn new(needles: Vec<(&'static str, &'static str)>) -> Self {
            Self { needles, scanned: RefCell::new(Vec::new()) }
        }
    }

    impl SignatureMatcher for SubstringMatcher {
        fn scan(&self, buffer: &[u8], on_match: &mut dyn FnMut(&str)) -> Result<(), MatchError> {
            self.scanned.borrow_mut().push(buffer.to_vec());
            for (identifier, needle) in &self.needles {
                if buffer
                    .windows(needle.len())
                    .any(|w| w == needle.as_bytes())
                {
                    on_match(identifier);
                    on_match(identifier);
                }
            }
            Ok(())
        }
    }

    struct FailingMatcher;

    impl SignatureMatcher for FailingMatcher {
        fn scan(&self, _: &[u8], _: &mut dyn FnMut(&str)) -> Result<(), MatchError> {
            Err(MatchError::Timeout)
        }
    }

    #[test]
    fn test_completeness_and_enumeration_order() {
        let process = FakeProcess::new()
            .region(0x1000, Protection::Read, b"xx EVIL xx")
            .region(0x3000, Protection::Read, b"nothing here")
            .region(0x5000, Protection::Read, b"more EVIL and BAD")
            .region(0x7000, Protection::Read, b"BAD only");
        let matcher = SubstringMatcher::new(vec![("evil_marker", "EVIL"), ("bad_marker", "BAD")]);
        let result = ScanOrchestrator::new(matcher).scan_source(42, &process).unwrap();

        let bases: Vec<u64> = result
            .records()
            .iter()
            .map(|r| r.region().base().as_u64())
            .collect();
        assert_eq!(bases, vec![0x1000, 0x5000, 0x7000]);
        assert_eq!(result.records()[1].rules(), &["evil_marker", "bad_marker"]);
        assert_eq!(result.records()[2].rules(), &["bad_marker"]);
    }

    #[test]
    fn test_duplicate_notifications_deduplicated() {
        let process = FakeProcess::new().region(0x1000, Protection::Read, b"EVIL EVIL EVIL");
        let matcher = SubstringMatcher::new(vec![("evil_marker", "EVIL")]);
        let result = ScanOrchestrator::new(matcher).scan_source(42, &process).unwrap();
        assert_eq!(result.records()[0].rules(), &["evil_marker"]);
    }

    #[test]
    fn test_no_access_region_never_reaches_matcher() {
        let process = FakeProcess::new()
            .free_region(0x0, 0x1000)
            .region(0x1000, Protection::Read, b"EVIL");
        let matcher = SubstringMatcher::new(vec![("evil_marker", "EVIL")]);
        let orchestrator = ScanOrchestrator::new(matcher);
        let result = orchestrator.scan_source(42, &process).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(orchestrator.matcher.scanned.borrow().len(), 1);
        assert_eq!(result.stats().regions_skipped, 1);
    }

    #[test]
    fn test_scanned_buffers_have_exact_region_size() {
        let process = FakeProcess::new().region(0x1000, Protection::Read, b"EVIL data here");
        let matcher = SubstringMatcher::new(vec![("evil_marker", "EVIL")]);
        let orchestrator = ScanOrchestrator::new(matcher);
        orchestrator.scan_source(42, &process).unwrap();
        let scanned = orchestrator.matcher.scanned.borrow();
        assert_eq!(scanned[0].len(), b"EVIL data here".len());
    }

    #[test]
    fn test_vanished_region_silently_excluded() {
        let process = FakeProcess::new()
            .region(0x1000, Protection::Read, b"EVIL")
            .vanished_region(0x3000, 0x1000)
            .region(0x5000, Protection::Read, b"EVIL again");
        let matcher = SubstringMatcher::new(vec![("evil_marker", "EVIL")]);
        let result = ScanOrchestrator::new(matcher).scan_source(42, &process).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.stats().regions_skipped, 1);
    }

    #[test]
    fn test_matcher_failure_is_per_region() {
        let process = FakeProcess::new()
            .region(0x1000, Protection::Read, b"EVIL")
            .region(0x3000, Protection::Read, b"EVIL");
        let result = ScanOrchestrator::new(FailingMatcher).scan_source(42, &process).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.stats().regions_skipped, 2);
    }

    #[test]
    fn test_empty_enumeration_is_an_error() {
        let process = FakeProcess::new();
        let matcher = SubstringMatcher::new(vec![]);
        let err = ScanOrchestrator::new(matcher).scan_source(42, &process).unwrap_err();
        assert!(matches!(err, ScanError::NoRegions { pid: 42 }));
    }

    #[test]
    fn test_completed_pass_with_no_matches_is_success() {
        let process = FakeProcess::new().region(0x1000, Protection::Read, b"benign");
        let matcher = SubstringMatcher::new(vec![("evil_marker", "EVIL")]);
        let result = ScanOrchestrator::new(matcher).scan_source(42, &process).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.stats().regions_scanned, 1);
    }

    #[test]
    fn test_committed_only_filter() {
        let process = FakeProcess::new()
            .region(0x1000, Protection::Read, b"EVIL")
            .free_region(0x2000, 0x1000);
        let matcher = SubstringMatcher::new(vec![("evil_marker", "EVIL")]);
        let orchestrator = ScanOrchestrator::new(matcher).with_committed_only(true);
        let result = orchestrator.scan_source(42, &process).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(orchestrator.matcher.scanned.borrow().len(), 1);
    }

    #[test]
    fn test_idempotent_across_passes() {
        let process = FakeProcess::new().region(0x1000, Protection::Read, b"EVIL and BAD");
        let matcher = SubstringMatcher::new(vec![("evil_marker", "EVIL"), ("bad_marker", "BAD")]);
        let orchestrator = ScanOrchestrator::new(matcher);
        let first = orchestrator.scan_source(42, &process).unwrap();
        let second = orchestrator.scan_source(42, &process).unwrap();
        assert_eq!(first.records()[0].rules(), second.records()[0].rules());
    }

    #[test]
    fn test_invalid_pid_fails_before_region_work() {
        let matcher = SubstringMatcher::new(vec![]);
        let err = ScanOrchestrator::new(matcher)
            .scan_process(0x3ffffff)
            .unwrap_err();
        assert!(matches!(err, ScanError::ProcessAccess { .. }));
    }
}
