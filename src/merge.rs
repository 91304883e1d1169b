//! Structural merge: add everything the source has that the target lacks,
//! without touching anything the target already holds.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::tree::TreeNode;

/// Merge `source`'s structure into `target` in place.
///
/// Rules, per key of `source`:
/// - absent in target: insert a deep clone of the source subtree;
/// - both branches: recurse;
/// - target leaf vs source branch: replace the leaf with a clone of the
///   branch — structure wins over a bare scalar;
/// - target branch vs source leaf: no-op — a scalar never collapses an
///   existing structure;
/// - both leaves: no-op — existing values are never overwritten.
///
/// `source` is never mutated, and inserted subtrees share no storage with
/// it. Running the merge a second time with the same inputs changes nothing.
pub fn apply_missing(target: &mut TreeNode, source: &TreeNode) {
    if let (TreeNode::Branch(target_children), TreeNode::Branch(source_children)) =
        (target, source)
    {
        merge_children(target_children, source_children);
    }
}

fn merge_children(target: &mut IndexMap<String, TreeNode>, source: &IndexMap<String, TreeNode>) {
    for (key, source_child) in source {
        match target.entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(source_child.clone());
            }
            Entry::Occupied(mut slot) => match (slot.get_mut(), source_child) {
                (TreeNode::Branch(target_grandchildren), TreeNode::Branch(source_grandchildren)) => {
                    merge_children(target_grandchildren, source_grandchildren);
                }
                (existing @ TreeNode::Leaf(_), TreeNode::Branch(_)) => {
                    *existing = source_child.clone();
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::collect_missing;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> TreeNode {
        TreeNode::from_value(&value)
    }

    #[test]
    fn test_adds_missing_leaf() {
        let mut target = tree(json!({"a": {"x": 1}}));
        let source = tree(json!({"a": {"x": 1, "y": 2}}));
        apply_missing(&mut target, &source);
        assert_eq!(target, tree(json!({"a": {"x": 1, "y": 2}})));
    }

    #[test]
    fn test_adds_missing_subtree() {
        let mut target = tree(json!({}));
        let source = tree(json!({"menu": {"file": "f"}, "empty": {}}));
        apply_missing(&mut target, &source);
        assert_eq!(target, tree(json!({"menu": {"file": "f"}, "empty": {}})));
    }

    #[test]
    fn test_structure_replaces_leaf() {
        let mut target = tree(json!({"a": "leaf"}));
        let source = tree(json!({"a": {"b": 1}}));
        apply_missing(&mut target, &source);
        assert_eq!(target, tree(json!({"a": {"b": 1}})));
    }

    #[test]
    fn test_leaf_never_collapses_structure() {
        let mut target = tree(json!({"a": {"b": 1}}));
        let source = tree(json!({"a": "leaf"}));
        apply_missing(&mut target, &source);
        assert_eq!(target, tree(json!({"a": {"b": 1}})));
    }

    #[test]
    fn test_existing_leaves_keep_their_values() {
        let mut target = tree(json!({"greeting": "hello", "deep": {"kept": "old"}}));
        let source = tree(json!({"greeting": "bonjour", "deep": {"kept": "new", "added": "x"}}));
        apply_missing(&mut target, &source);
        assert_eq!(
            target,
            tree(json!({"greeting": "hello", "deep": {"kept": "old", "added": "x"}}))
        );
    }

    #[test]
    fn test_source_is_untouched() {
        let mut target = tree(json!({}));
        let source = tree(json!({"a": {"b": [1, 2]}}));
        let snapshot = source.clone();
        apply_missing(&mut target, &source);
        assert_eq!(source, snapshot);
    }

    #[test]
    fn test_merge_satisfies_diff() {
        let mut target = tree(json!({"a": "leaf", "own": 1}));
        let source = tree(json!({"a": {"b": 1}, "c": {"d": {}, "e": [1]}}));
        apply_missing(&mut target, &source);
        assert!(collect_missing(&target, &source).is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let source = tree(json!({"a": {"b": 1}, "c": "x"}));
        let mut once = tree(json!({"a": "leaf", "mine": true}));
        apply_missing(&mut once, &source);
        let mut twice = once.clone();
        apply_missing(&mut twice, &source);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_inserted_subtree_is_independent() {
        let mut target = tree(json!({}));
        let source = tree(json!({"a": {"b": "original"}}));
        apply_missing(&mut target, &source);
        if let TreeNode::Branch(children) = &mut target {
            children.insert("a".to_string(), tree(json!({"b": "mutated"})));
        }
        assert_eq!(source, tree(json!({"a": {"b": "original"}})));
    }

    #[test]
    fn test_two_way_merge_unions_both_trees() {
        let mut a = tree(json!({"shared": "value_a", "only_a": {"x": 1}}));
        let mut b = tree(json!({"shared": "value_b", "only_b": "y"}));
        apply_missing(&mut a, &b);
        apply_missing(&mut b, &a);
        assert!(collect_missing(&a, &b).is_empty());
        assert!(collect_missing(&b, &a).is_empty());
        // Conflicting scalars keep each side's own value.
        assert_eq!(a.as_branch().unwrap()["shared"], TreeNode::Leaf(json!("value_a")));
        assert_eq!(b.as_branch().unwrap()["shared"], TreeNode::Leaf(json!("value_b")));
    }
}
