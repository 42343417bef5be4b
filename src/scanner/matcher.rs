// Tue Aug 25 2026 - Alex

use crate::scanner::MatchError;

/// Boundary to the signature engine. One call scans exactly the buffer it
/// is given; `on_match` fires once per rule-match event, on the calling
/// thread, and may repeat an identifier when a rule has several matching
/// sub-patterns. Deduplication is the caller's job, not the engine's.
pub trait SignatureMatcher {
    fn scan(&self, buffer: &[u8], on_match: &mut dyn FnMut(&str)) -> Result<(), MatchError>;
}
