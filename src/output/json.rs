// Tue Aug 25 2026 - Alex

use crate::scanner::ScanResult;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_json<P: AsRef<Path>>(result: &ScanResult, path: P) -> std::io::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Address, Protection, RegionDescriptor};
    use crate::scanner::{MatchRecord, ScanStats};

    #[test]
    fn test_written_json_round_trips_identifiers() {
        let region = RegionDescriptor::new(Address::new(0x1000), 0x100, Protection::ReadExecute);
        let record = MatchRecord::new(region, vec!["malware_sig".to_string()]);
        let result = ScanResult::new(vec![record], ScanStats::default());

        let path = std::env::temp_dir().join(format!("memhunter-json-{}.json", std::process::id()));
        write_json(&result, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["records"][0]["rules"][0], "malware_sig");
        assert_eq!(value["records"][0]["region"]["base"], 0x1000);
        let _ = std::fs::remove_file(&path);
    }
}
