// Wed Aug 26 2026 - Alex

use crate::rules::RuleError;
use std::fs;
use std::path::{Path, PathBuf};

pub const RULE_EXTENSION: &str = "yar";

/// Resolve a rule source path into the list of rule files it names: the
/// path itself when it is a regular file, otherwise every `.yar` file
/// found under it recursively, in sorted order.
pub fn collect_rule_files(path: &Path) -> Result<Vec<PathBuf>, RuleError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(RuleError::NoRules(path.to_path_buf()));
    }

    let mut files = Vec::new();
    walk(path, &mut files)?;
    files.sort();

    if files.is_empty() {
        return Err(RuleError::NoRules(path.to_path_buf()));
    }
    Ok(files)
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RuleError> {
    let entries = fs::read_dir(dir).map_err(|source| RuleError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| RuleError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(RULE_EXTENSION) {
            out.push(path);
        }
    }
    Ok(())
}
