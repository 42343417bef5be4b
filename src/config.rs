// Tue Aug 25 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub rules_path: PathBuf,
    pub pid: i32,
    pub committed_only: bool,
    pub scan_timeout_secs: i32,
    pub verbose: bool,
    pub json_output: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::new(),
            pid: 0,
            committed_only: false,
            scan_timeout_secs: 30,
            verbose: false,
            json_output: None,
        }
    }
}

impl ScanConfig {
    pub fn new(rules_path: PathBuf, pid: i32) -> Self {
        Self {
            rules_path,
            pid,
            ..Default::default()
        }
    }

    pub fn with_committed_only(mut self, committed_only: bool) -> Self {
        self.committed_only = committed_only;
        self
    }

    pub fn with_timeout(mut self, scan_timeout_secs: i32) -> Self {
        self.scan_timeout_secs = scan_timeout_secs;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_json_output(mut self, path: PathBuf) -> Self {
        self.json_output = Some(path);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.rules_path.as_os_str().is_empty() {
            return Err("rules_path must be set".to_string());
        }
        if self.pid <= 0 {
            return Err("pid must be a positive process id".to_string());
        }
        if self.scan_timeout_secs <= 0 {
            return Err("scan_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_pid() {
        let config = ScanConfig::new(PathBuf::from("rules.yar"), 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults_with_target() {
        let config = ScanConfig::new(PathBuf::from("rules.yar"), 1234);
        assert!(config.validate().is_ok());
    }
}
