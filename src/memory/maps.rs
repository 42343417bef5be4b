// Tue Aug 25 2026 - Alex

use crate::memory::{Address, MemoryError, Protection, RegionDescriptor, RegionKind, RegionState};

struct MapsLine {
    start: u64,
    end: u64,
    protection: Protection,
    path: Option<String>,
}

fn parse_line(line: &str) -> Result<MapsLine, MemoryError> {
    let mut fields = line.split_whitespace();

    let range = fields
        .next()
        .ok_or_else(|| MemoryError::MapsParse(line.to_string()))?;
    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| MemoryError::MapsParse(line.to_string()))?;
    let start = u64::from_str_radix(start, 16)
        .map_err(|_| MemoryError::MapsParse(line.to_string()))?;
    let end = u64::from_str_radix(end, 16)
        .map_err(|_| MemoryError::MapsParse(line.to_string()))?;

    let perms = fields
        .next()
        .ok_or_else(|| MemoryError::MapsParse(line.to_string()))?;
    let protection = Protection::from_perms(perms);

    // offset, dev, inode
    let _ = fields.next();
    let _ = fields.next();
    let _ = fields.next();

    let path = fields.next().map(|p| p.to_string());

    Ok(MapsLine { start, end, protection, path })
}

fn kind_for(path: Option<&str>, exe: Option<&str>) -> RegionKind {
    match path {
        Some(p) if Some(p) == exe => RegionKind::Image,
        Some(p) if !p.starts_with('[') => RegionKind::Mapped,
        _ => RegionKind::Private,
    }
}

/// Parse the full text of a `/proc/<pid>/maps` file into an ordered,
/// non-overlapping region list covering the address space from zero up to
/// the last mapping. Gaps between mappings come back as no-access `Free`
/// regions so the result is a complete linear map, equivalent to walking
/// the space one query at a time. `exe` is the resolved path of the
/// target's main executable, used to classify image regions.
pub fn parse_maps(contents: &str, exe: Option<&str>) -> Result<Vec<RegionDescriptor>, MemoryError> {
    let mut lines = Vec::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_line(line)?;
        if parsed.end <= parsed.start {
            continue;
        }
        lines.push(parsed);
    }

    let mut regions = Vec::with_capacity(lines.len() * 2);
    let mut cursor: u64 = 0;
    let mut run_start: u64 = 0;
    let mut run_path: Option<String> = None;

    for line in lines {
        if line.start > cursor {
            let gap = RegionDescriptor::new(
                Address::new(cursor),
                line.start - cursor,
                Protection::None,
            )
            .with_state(RegionState::Free);
            regions.push(gap);
            run_path = None;
        }

        // Consecutive file-backed entries with the same path are one
        // allocation split by protection changes.
        let allocation_base = match (&line.path, &run_path) {
            (Some(p), Some(rp)) if p == rp && line.start == cursor => run_start,
            _ => {
                run_start = line.start;
                line.start
            }
        };
        run_path = line.path.clone();

        let kind = kind_for(line.path.as_deref(), exe);
        regions.push(
            RegionDescriptor::new(Address::new(line.start), line.end - line.start, line.protection)
                .with_allocation_base(Address::new(allocation_base))
                .with_kind(kind),
        );

        cursor = line.end;
    }

    Ok(regions)
}
