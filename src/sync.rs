//! Driver: the full load → diff → merge → write pipeline for a locale pair.

use std::path::Path;

use tracing::info;

use crate::classify::audit_content;
use crate::diff::collect_missing;
use crate::error::SyncError;
use crate::merge::apply_missing;
use crate::path::SENTINEL;
use crate::persist::{load_tree, save_pair};
use crate::report::SyncReport;

/// Options for a synchronization run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Merge missing keys into both files and rewrite them. Off by default:
    /// a dry run reports and never writes.
    pub apply: bool,
    /// Rewrite with every branch's keys sorted alphabetically instead of in
    /// merged insertion order.
    pub sort_keys: bool,
    /// Separator used for internal path joining; must not occur inside any
    /// key of either file.
    pub separator: String,
    /// Maximum sampled paths per report section.
    pub sample_limit: usize,
    /// Include the blank/identical content audit in the report.
    pub audit: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            apply: false,
            sort_keys: false,
            separator: SENTINEL.to_string(),
            sample_limit: 10,
            audit: false,
        }
    }
}

/// Diff a pair of locale files and, in apply mode, reconcile and rewrite them.
///
/// Both trees are loaded and diffed in both directions first. In apply mode
/// the two-way merge runs in memory and the write phase is the final step,
/// after all computation has succeeded; in dry-run mode nothing is ever
/// written.
pub fn run_sync(left: &Path, right: &Path, options: &SyncOptions) -> Result<SyncReport, SyncError> {
    let mut left_tree = load_tree(left, &options.separator)?;
    let mut right_tree = load_tree(right, &options.separator)?;

    let missing_in_left = collect_missing(&left_tree, &right_tree);
    let missing_in_right = collect_missing(&right_tree, &left_tree);
    info!(
        left = %left.display(),
        right = %right.display(),
        missing_in_left = missing_in_left.len(),
        missing_in_right = missing_in_right.len(),
        "computed structural diff"
    );

    let audit = options
        .audit
        .then(|| audit_content(&left_tree, &right_tree));

    let mut applied = false;
    if options.apply {
        apply_missing(&mut left_tree, &right_tree);
        apply_missing(&mut right_tree, &left_tree);
        if options.sort_keys {
            left_tree.sort_keys();
            right_tree.sort_keys();
        }
        save_pair(&[(left, &left_tree), (right, &right_tree)])?;
        applied = true;
        info!("merged missing keys and rewrote both files");
    }

    Ok(SyncReport {
        left_label: label(left),
        right_label: label(right),
        missing_in_left,
        missing_in_right,
        sample_limit: options.sample_limit,
        audit,
        applied,
    })
}

fn label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_uses_file_stem() {
        assert_eq!(label(Path::new("locales/en.json")), "en");
        assert_eq!(label(Path::new("ar.json")), "ar");
    }

    #[test]
    fn test_default_options() {
        let options = SyncOptions::default();
        assert!(!options.apply);
        assert_eq!(options.separator, SENTINEL);
        assert_eq!(options.sample_limit, 10);
    }
}
