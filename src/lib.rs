//! Structural synchronization for nested locale message trees.
//!
//! Treats two locale files as nested key/value trees, computes the paths
//! each is missing relative to the other, and applies an add-only two-way
//! merge so both become structural supersets of each other — without ever
//! overwriting an existing translation.

pub mod classify;
pub mod diff;
pub mod enumerate;
pub mod error;
pub mod merge;
pub mod path;
pub mod persist;
pub mod report;
pub mod sync;
pub mod tree;

pub use classify::{audit_content, find_blank_leaves, find_identical_leaves, ContentAudit};
pub use diff::collect_missing;
pub use enumerate::{flatten_tree, leaf_paths};
pub use error::SyncError;
pub use merge::apply_missing;
pub use path::{KeyPath, SENTINEL};
pub use persist::{load_tree, save_pair, save_tree};
pub use report::{ReportSummary, SyncReport};
pub use sync::{run_sync, SyncOptions};
pub use tree::TreeNode;
