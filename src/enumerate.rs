//! Leaf enumeration and whole-tree flattening.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::path::KeyPath;
use crate::tree::TreeNode;

/// All leaf paths under `node`, each prefixed with `prefix`.
///
/// A leaf yields the prefix itself. An empty branch also yields the prefix
/// itself — empty subtrees are addressed rather than expanded, so they are
/// not silently dropped when a missing subtree is turned into missing leaves.
/// A non-empty branch recurses into every child in key order.
pub fn leaf_paths(node: &TreeNode, prefix: &KeyPath) -> Vec<KeyPath> {
    match node {
        TreeNode::Leaf(_) => vec![prefix.clone()],
        TreeNode::Branch(children) if children.is_empty() => vec![prefix.clone()],
        TreeNode::Branch(children) => {
            let mut paths = Vec::new();
            for (key, child) in children {
                paths.extend(leaf_paths(child, &prefix.child(key)));
            }
            paths
        }
    }
}

/// Reduce a tree to a single-level dotted-path → value map.
///
/// Keys come out alphabetically sorted, giving stable output for successive
/// writes. Empty branches map to an empty object value. The dotted form is
/// for display and storage; it is not round-trip safe when keys contain dots.
pub fn flatten_tree(root: &TreeNode) -> BTreeMap<String, Value> {
    let mut flat = BTreeMap::new();
    walk_flat(root, &KeyPath::root(), &mut flat);
    flat
}

fn walk_flat(node: &TreeNode, prefix: &KeyPath, flat: &mut BTreeMap<String, Value>) {
    match node {
        TreeNode::Leaf(value) => {
            flat.insert(prefix.dotted(), value.clone());
        }
        TreeNode::Branch(children) if children.is_empty() => {
            if !prefix.is_root() {
                flat.insert(prefix.dotted(), Value::Object(serde_json::Map::new()));
            }
        }
        TreeNode::Branch(children) => {
            for (key, child) in children {
                walk_flat(child, &prefix.child(key), flat);
            }
        }
    }
}
