//! Sync run report: missing-path counts with bounded samples.

use std::fmt;

use serde::Serialize;

use crate::classify::ContentAudit;
use crate::path::KeyPath;

/// Outcome of diffing (and optionally auditing) a pair of locale trees.
#[derive(Debug)]
pub struct SyncReport {
    pub left_label: String,
    pub right_label: String,
    /// Paths present in the right tree but missing from the left.
    pub missing_in_left: Vec<KeyPath>,
    /// Paths present in the left tree but missing from the right.
    pub missing_in_right: Vec<KeyPath>,
    pub sample_limit: usize,
    pub audit: Option<ContentAudit>,
    /// Whether the run rewrote the files.
    pub applied: bool,
}

/// Flat, serializable view of a report for machine consumption.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub left: String,
    pub right: String,
    pub missing_in_left: usize,
    pub missing_in_right: usize,
    pub sample_missing_in_left: Vec<String>,
    pub sample_missing_in_right: Vec<String>,
    pub applied: bool,
}

impl SyncReport {
    pub fn in_sync(&self) -> bool {
        self.missing_in_left.is_empty() && self.missing_in_right.is_empty()
    }

    fn sample(&self, paths: &[KeyPath]) -> Vec<String> {
        paths
            .iter()
            .take(self.sample_limit)
            .map(KeyPath::dotted)
            .collect()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            left: self.left_label.clone(),
            right: self.right_label.clone(),
            missing_in_left: self.missing_in_left.len(),
            missing_in_right: self.missing_in_right.len(),
            sample_missing_in_left: self.sample(&self.missing_in_left),
            sample_missing_in_right: self.sample(&self.missing_in_right),
            applied: self.applied,
        }
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sync report: {} <-> {}", self.left_label, self.right_label)?;
        write_direction(f, &self.left_label, &self.missing_in_left, self.sample_limit)?;
        write_direction(f, &self.right_label, &self.missing_in_right, self.sample_limit)?;
        if let Some(audit) = &self.audit {
            writeln!(f, "  blank values in {}: {}", self.left_label, audit.blank_in_left.len())?;
            writeln!(f, "  blank values in {}: {}", self.right_label, audit.blank_in_right.len())?;
            writeln!(f, "  identical values: {}", audit.identical.len())?;
            for path in audit.identical.iter().take(self.sample_limit) {
                writeln!(f, "    {path}")?;
            }
        }
        if self.applied {
            writeln!(f, "  missing keys merged and files rewritten")?;
        }
        Ok(())
    }
}

fn write_direction(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    missing: &[KeyPath],
    limit: usize,
) -> fmt::Result {
    writeln!(f, "  missing in {}: {}", label, missing.len())?;
    for path in missing.iter().take(limit) {
        writeln!(f, "    {path}")?;
    }
    if missing.len() > limit {
        writeln!(f, "    ... and {} more", missing.len() - limit)?;
    }
    Ok(())
}
