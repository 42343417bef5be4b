// Tue Aug 25 2026 - Alex

use crate::scanner::ScanResult;
use colored::Colorize;

/// Console renderer: one block per matched region, in enumeration order,
/// followed by a pass summary.
pub struct ReportRenderer {
    show_stats: bool,
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self { show_stats: true }
    }

    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    pub fn print(&self, result: &ScanResult) {
        let total = result.len();

        for (idx, record) in result.records().iter().enumerate() {
            let region = record.region();
            println!("{} Match: {}/{}", "\\_".cyan(), idx + 1, total);
            println!("  | Base Address:    {}", region.base());
            println!("  | Allocation Base: {}", region.allocation_base());
            println!("  | Size:            0x{:x}", region.size());
            println!("  | Protection:      {}", region.protection());
            println!("  | State:           {}", region.state());
            println!("  | Type:            {}", region.kind());
            println!("  | Rules:");
            for rule in record.rules() {
                println!("   - {}", rule.green());
            }
            println!();
        }

        if self.show_stats {
            let stats = result.stats();
            println!(
                "{} Scanned {}/{} regions ({} bytes) in {} ms, {} matched",
                "\\_".cyan(),
                stats.regions_scanned,
                stats.regions_enumerated,
                stats.bytes_scanned,
                stats.duration_ms,
                total
            );
        }
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}
