// Wed Aug 26 2026 - Alex

use crate::rules::{collect_rule_files, RuleError};
use crate::scanner::{MatchError, SignatureMatcher};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use yara::Compiler;

const DEFAULT_SCAN_TIMEOUT_SECS: i32 = 30;

#[derive(Debug, Clone, Copy)]
pub struct RuleLoadSummary {
    pub loaded: usize,
    pub total: usize,
}

/// Compiled rule set plus the per-buffer scan entry point. Owns the
/// engine-side compiler output; libyara state is torn down when this is
/// dropped, on every exit path.
pub struct YaraRuleSet {
    rules: yara::Rules,
    timeout_secs: i32,
}

impl YaraRuleSet {
    /// Load from a rule file or a directory of rule files. In directory
    /// mode a file that fails to compile is logged and skipped; the load
    /// fails only when nothing usable remains or the combined compile
    /// fails.
    pub fn from_path(path: &Path) -> Result<(Self, RuleLoadSummary), RuleError> {
        if path.is_file() {
            let text = read_rule_file(path)?;
            let rules = compile_sources(&[(path.to_path_buf(), text)])?;
            let summary = RuleLoadSummary { loaded: 1, total: 1 };
            return Ok((Self::wrap(rules), summary));
        }

        let files = collect_rule_files(path)?;
        let total = files.len();
        let mut sources = Vec::new();
        let mut loaded = 0;

        for file in files {
            let text = match read_rule_file(&file) {
                Ok(text) => text,
                Err(e) => {
                    warn!("skipping {}: {}", file.display(), e);
                    continue;
                }
            };
            if text.trim().is_empty() {
                loaded += 1;
                continue;
            }
            if !compiles_alone(&text) {
                warn!("skipping {}: does not compile", file.display());
                continue;
            }
            loaded += 1;
            sources.push((file, text));
        }

        info!("loaded {}/{} rule files from {}", loaded, total, path.display());

        if sources.is_empty() {
            return Err(RuleError::NoRules(path.to_path_buf()));
        }

        let rules = compile_sources(&sources)?;
        Ok((Self::wrap(rules), RuleLoadSummary { loaded, total }))
    }

    /// Compile a single rule source string; the scan tests and embedded
    /// callers use this directly.
    pub fn from_source(source: &str) -> Result<Self, RuleError> {
        let rules = compile_sources(&[(PathBuf::from("<source>"), source.to_string())])?;
        Ok(Self::wrap(rules))
    }

    pub fn with_timeout(mut self, timeout_secs: i32) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn wrap(rules: yara::Rules) -> Self {
        Self {
            rules,
            timeout_secs: DEFAULT_SCAN_TIMEOUT_SECS,
        }
    }
}

impl SignatureMatcher for YaraRuleSet {
    fn scan(&self, buffer: &[u8], on_match: &mut dyn FnMut(&str)) -> Result<(), MatchError> {
        let matches = self
            .rules
            .scan_mem(buffer, self.timeout_secs as _)
            .map_err(|e| MatchError::Engine(e.to_string()))?;
        for rule in matches {
            on_match(rule.identifier);
        }
        Ok(())
    }
}

fn read_rule_file(path: &Path) -> Result<String, RuleError> {
    fs::read_to_string(path).map_err(|source| RuleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn compiles_alone(text: &str) -> bool {
    match Compiler::new() {
        Ok(compiler) => compiler.add_rules_str(text).is_ok(),
        Err(_) => false,
    }
}

fn compile_sources(sources: &[(PathBuf, String)]) -> Result<yara::Rules, RuleError> {
    let mut compiler = Compiler::new().map_err(|e| RuleError::Setup(e.to_string()))?;
    for (path, text) in sources {
        compiler = compiler.add_rules_str(text).map_err(|e| RuleError::Compile {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    }
    compiler
        .compile_rules()
        .map_err(|e| RuleError::Setup(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALWARE_RULE: &str = r#"
rule malware_sig {
    strings:
        $a = "MALWARE_SIG"
    condition:
        $a
}
"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("memhunter-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_scan_reports_matching_rule() {
        let rules = YaraRuleSet::from_source(MALWARE_RULE).unwrap();
        let mut seen = Vec::new();
        rules
            .scan(b"prefix MALWARE_SIG suffix", &mut |id| seen.push(id.to_string()))
            .unwrap();
        assert_eq!(seen, vec!["malware_sig"]);
    }

    #[test]
    fn test_scan_clean_buffer_reports_nothing() {
        let rules = YaraRuleSet::from_source(MALWARE_RULE).unwrap();
        let mut seen = Vec::new();
        rules
            .scan(b"nothing interesting", &mut |id| seen.push(id.to_string()))
            .unwrap();
        assert!(seen.is_empty());
    }

    #[test]
    fn test_bad_source_fails_to_compile() {
        assert!(YaraRuleSet::from_source("rule broken {").is_err());
    }

    #[test]
    fn test_directory_load_skips_broken_file() {
        let dir = scratch_dir("rules");
        fs::write(dir.join("good.yar"), MALWARE_RULE).unwrap();
        fs::write(
            dir.join("other.yar"),
            "rule other_sig { strings: $s = \"OTHER\" condition: $s }",
        )
        .unwrap();
        fs::write(dir.join("broken.yar"), "rule nope {").unwrap();

        let (rules, summary) = YaraRuleSet::from_path(&dir).unwrap();
        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.total, 3);

        let mut seen = Vec::new();
        rules
            .scan(b"MALWARE_SIG and OTHER", &mut |id| seen.push(id.to_string()))
            .unwrap();
        seen.sort();
        assert_eq!(seen, vec!["malware_sig", "other_sig"]);
    }

    #[test]
    fn test_single_broken_file_is_fatal() {
        let dir = scratch_dir("broken-single");
        let file = dir.join("broken.yar");
        fs::write(&file, "rule nope {").unwrap();
        assert!(matches!(
            YaraRuleSet::from_path(&file),
            Err(RuleError::Compile { .. })
        ));
    }
}
