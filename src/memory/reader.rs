// Tue Aug 25 2026 - Alex

use crate::memory::{ProcessSource, RegionDescriptor};
use log::debug;

/// Copy-out policy for a single region. A buffer is forwarded to the
/// matcher only when the full declared size was read; anything less is
/// treated as an unreadable region, never a partial scan.
pub struct RegionReader;

impl RegionReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, source: &dyn ProcessSource, region: &RegionDescriptor) -> Option<Vec<u8>> {
        if region.protection().is_no_access() {
            return None;
        }

        let size = region.size() as usize;
        let buffer = match source.read_bytes(region.base(), size) {
            Ok(buffer) => buffer,
            Err(e) => {
                debug!("region {} unreadable: {}", region.base(), e);
                return None;
            }
        };

        if buffer.len() != size {
            debug!(
                "short read at {}: {}/{} bytes",
                region.base(),
                buffer.len(),
                size
            );
            return None;
        }

        // Pages that report readable but hold no live content start at a
        // terminator; scanning them is wasted matcher work.
        if buffer.first() == Some(&0) {
            debug!("region {} is effectively empty", region.base());
            return None;
        }

        Some(buffer)
    }
}

impl Default for RegionReader {
    fn default() -> Self {
        Self::new()
    }
}
