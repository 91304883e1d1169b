//! Content audit: non-structural checks on leaf values.
//!
//! Purely equality-based; no script detection or other linguistic
//! heuristics. Flags values that are blank or copied verbatim between the
//! two locales, both common symptoms of a placeholder entry.

use crate::path::KeyPath;
use crate::tree::TreeNode;

/// Result of auditing a pair of locale trees.
#[derive(Debug, Default, PartialEq)]
pub struct ContentAudit {
    /// Blank string leaves in the left tree.
    pub blank_in_left: Vec<KeyPath>,
    /// Blank string leaves in the right tree.
    pub blank_in_right: Vec<KeyPath>,
    /// Shared paths where both trees hold the same non-blank string.
    pub identical: Vec<KeyPath>,
}

impl ContentAudit {
    pub fn is_clean(&self) -> bool {
        self.blank_in_left.is_empty() && self.blank_in_right.is_empty() && self.identical.is_empty()
    }
}

/// Audit a pair of trees for blank and copied leaf values.
pub fn audit_content(left: &TreeNode, right: &TreeNode) -> ContentAudit {
    ContentAudit {
        blank_in_left: find_blank_leaves(left),
        blank_in_right: find_blank_leaves(right),
        identical: find_identical_leaves(left, right),
    }
}

/// String leaves that are empty or whitespace-only.
pub fn find_blank_leaves(tree: &TreeNode) -> Vec<KeyPath> {
    let mut blank = Vec::new();
    walk_blank(tree, &KeyPath::root(), &mut blank);
    blank
}

fn walk_blank(node: &TreeNode, prefix: &KeyPath, blank: &mut Vec<KeyPath>) {
    match node {
        TreeNode::Leaf(value) => {
            if value.as_str().is_some_and(|s| s.trim().is_empty()) {
                blank.push(prefix.clone());
            }
        }
        TreeNode::Branch(children) => {
            for (key, child) in children {
                walk_blank(child, &prefix.child(key), blank);
            }
        }
    }
}

/// Shared paths where both trees hold the same non-blank string leaf —
/// likely an untranslated copy.
pub fn find_identical_leaves(left: &TreeNode, right: &TreeNode) -> Vec<KeyPath> {
    let mut identical = Vec::new();
    walk_identical(left, right, &KeyPath::root(), &mut identical);
    identical
}

fn walk_identical(left: &TreeNode, right: &TreeNode, prefix: &KeyPath, identical: &mut Vec<KeyPath>) {
    match (left, right) {
        (TreeNode::Leaf(a), TreeNode::Leaf(b)) => {
            let copied = matches!((a.as_str(), b.as_str()), (Some(x), Some(y)) if x == y && !x.trim().is_empty());
            if copied {
                identical.push(prefix.clone());
            }
        }
        (TreeNode::Branch(left_children), TreeNode::Branch(right_children)) => {
            for (key, left_child) in left_children {
                if let Some(right_child) = right_children.get(key) {
                    walk_identical(left_child, right_child, &prefix.child(key), identical);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> TreeNode {
        TreeNode::from_value(&value)
    }

    fn dotted(paths: &[KeyPath]) -> Vec<String> {
        paths.iter().map(KeyPath::dotted).collect()
    }

    #[test]
    fn test_blank_detects_empty_and_whitespace() {
        let t = tree(json!({"a": "", "b": "  ", "c": "ok", "nested": {"d": "\t"}}));
        assert_eq!(dotted(&find_blank_leaves(&t)), ["a", "b", "nested.d"]);
    }

    #[test]
    fn test_blank_ignores_non_strings() {
        let t = tree(json!({"n": 0, "b": false, "z": null, "arr": []}));
        assert!(find_blank_leaves(&t).is_empty());
    }

    #[test]
    fn test_identical_flags_copied_strings() {
        let left = tree(json!({"save": "Save", "cancel": "Cancel", "nested": {"ok": "OK"}}));
        let right = tree(json!({"save": "حفظ", "cancel": "Cancel", "nested": {"ok": "OK"}}));
        assert_eq!(
            dotted(&find_identical_leaves(&left, &right)),
            ["cancel", "nested.ok"]
        );
    }

    #[test]
    fn test_identical_ignores_blank_and_non_string() {
        let left = tree(json!({"a": "", "n": 5}));
        let right = tree(json!({"a": "", "n": 5}));
        assert!(find_identical_leaves(&left, &right).is_empty());
    }

    #[test]
    fn test_identical_skips_mismatched_shapes() {
        let left = tree(json!({"a": {"b": "X"}}));
        let right = tree(json!({"a": "X"}));
        assert!(find_identical_leaves(&left, &right).is_empty());
    }

    #[test]
    fn test_audit_clean_pair() {
        let left = tree(json!({"save": "Save"}));
        let right = tree(json!({"save": "حفظ"}));
        assert!(audit_content(&left, &right).is_clean());
    }
}
