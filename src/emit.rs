//! Rule list emitter.
//!
//! Writes one `.list` file per catalog group, one directive line per rule.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::catalog::{Catalog, Group};
use crate::{Result, RuleKind};

/// Per-run emit outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    /// Groups whose files were fully written
    pub written: usize,
    /// Groups skipped because their file could not be created or written
    pub failed: usize,
}

/// Remove the output directory if present and recreate it empty.
///
/// After this the directory reflects exactly the current run; stale files
/// from a previous run never survive. Failure here is fatal and happens
/// before any group file is written.
pub fn prepare_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write one `.list` file per group into `dir`, in catalog order.
///
/// A group whose file cannot be created or written is logged and skipped;
/// the remaining groups are still emitted. Each file is closed before the
/// next group begins.
pub fn emit_catalog(catalog: &Catalog, dir: &Path) -> EmitSummary {
    let mut summary = EmitSummary::default();

    for group in &catalog.groups {
        let path = dir.join(file_name(&group.code));
        match write_group(group, &path) {
            Ok(()) => summary.written += 1,
            Err(e) => {
                log::warn!("skipping group {}: {}", group.code, e);
                summary.failed += 1;
            }
        }
    }

    summary
}

/// Output file name for a group code: ASCII-lowercased code + `.list`.
pub fn file_name(code: &str) -> String {
    format!("{}.list", code.to_ascii_lowercase())
}

fn write_group(group: &Group, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for rule in &group.rules {
        if let RuleKind::Unrecognized(tag) = rule.kind {
            log::debug!(
                "group {}: unrecognized rule kind {}, emitting empty directive",
                group.code,
                tag
            );
        }
        writeln!(writer, "{}:{}", rule.kind.directive(), rule.value)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rule;

    fn group(code: &str, rules: Vec<(RuleKind, &str)>) -> Group {
        Group {
            code: code.to_string(),
            rules: rules
                .into_iter()
                .map(|(kind, value)| Rule {
                    kind,
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_file_name_lowercases_code() {
        assert_eq!(file_name("US"), "us.list");
        assert_eq!(file_name("geolocation-CN"), "geolocation-cn.list");
        assert_eq!(file_name("private"), "private.list");
    }

    #[test]
    fn test_emit_line_format() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog {
            groups: vec![group(
                "XX",
                vec![
                    (RuleKind::Plain, "cdn"),
                    (RuleKind::RootDomain, "example.com"),
                    (RuleKind::Regex, r"^ads\."),
                    (RuleKind::Full, "a.test"),
                    (RuleKind::Unrecognized(9), "weird.example"),
                ],
            )],
        };

        let summary = emit_catalog(&catalog, dir.path());
        assert_eq!(summary, EmitSummary { written: 1, failed: 0 });

        let content = fs::read_to_string(dir.path().join("xx.list")).unwrap();
        assert_eq!(
            content,
            "DOMAIN-KEYWORD:cdn\n\
             DOMAIN-SUFFIX:example.com\n\
             DOMAIN-REGEX:^ads\\.\n\
             DOMAIN:a.test\n\
             :weird.example\n"
        );
    }

    #[test]
    fn test_emit_empty_group_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog {
            groups: vec![group("empty", vec![])],
        };

        emit_catalog(&catalog, dir.path());

        let content = fs::read_to_string(dir.path().join("empty.list")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_prepare_dir_removes_stale_files() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("out");

        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.list"), "DOMAIN:old.test\n").unwrap();

        prepare_dir(&out).unwrap();

        assert!(out.exists());
        assert!(!out.join("stale.list").exists());
    }

    #[test]
    fn test_prepare_dir_creates_missing_dir() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("nested").join("out");

        prepare_dir(&out).unwrap();
        assert!(out.is_dir());
    }
}
