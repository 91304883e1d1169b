//! Persistence adapter: loading, validating, and writing locale files.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::SyncError;
use crate::tree::TreeNode;

/// Read and parse a locale file into a tree.
///
/// Rejects documents whose root is not an object, and documents containing
/// any key with `separator` as a substring — such keys would make joined
/// paths ambiguous.
pub fn load_tree(path: &Path, separator: &str) -> Result<TreeNode, SyncError> {
    let text = fs::read_to_string(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| SyncError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if !value.is_object() {
        return Err(SyncError::RootNotObject {
            path: path.to_path_buf(),
        });
    }

    let tree = TreeNode::from_value(&value);
    if let Some(key) = tree.find_unsafe_key(separator) {
        return Err(SyncError::SeparatorInKey {
            path: path.to_path_buf(),
            key: key.to_string(),
            separator: separator.to_string(),
        });
    }

    debug!(path = %path.display(), "loaded locale tree");
    Ok(tree)
}

/// Pretty-print a tree: 2-space indentation, trailing newline, keys in the
/// tree's stored order.
pub fn render_tree(path: &Path, tree: &TreeNode) -> Result<String, SyncError> {
    let mut text = serde_json::to_string_pretty(tree).map_err(|source| SyncError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    Ok(text)
}

/// Write a set of trees back to disk.
///
/// Every tree is rendered before the first write, so a serialization failure
/// can never leave one file of a pair updated and the other stale.
pub fn save_pair(files: &[(&Path, &TreeNode)]) -> Result<(), SyncError> {
    let mut rendered = Vec::with_capacity(files.len());
    for (path, tree) in files {
        rendered.push((*path, render_tree(path, tree)?));
    }
    for (path, text) in rendered {
        fs::write(path, text).map_err(|source| SyncError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "wrote locale tree");
    }
    Ok(())
}

/// Write a single tree back to disk.
pub fn save_tree(path: &Path, tree: &TreeNode) -> Result<(), SyncError> {
    save_pair(&[(path, tree)])
}
