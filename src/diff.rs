//! Structural diff: paths present in a source tree but not satisfiable in a
//! target tree.

use crate::enumerate::leaf_paths;
use crate::path::KeyPath;
use crate::tree::TreeNode;

/// All paths present in `source` but absent, or structurally incompatible,
/// in `target`.
///
/// The walk is directional: only `source`'s keys are visited, so keys that
/// exist only in `target` never appear in the result. Call again with the
/// arguments swapped for the reverse direction. Two leaves at the same path
/// are never missing, whatever their values — the diff tracks structural
/// presence, not content equality.
pub fn collect_missing(target: &TreeNode, source: &TreeNode) -> Vec<KeyPath> {
    let mut missing = Vec::new();
    diff_level(target, source, &KeyPath::root(), &mut missing);
    missing
}

fn diff_level(target: &TreeNode, source: &TreeNode, prefix: &KeyPath, missing: &mut Vec<KeyPath>) {
    let TreeNode::Branch(source_children) = source else {
        return;
    };
    let target_children = target.as_branch();

    for (key, source_child) in source_children {
        let path = prefix.child(key);
        match target_children.and_then(|children| children.get(key)) {
            // Whole subtree absent: every leaf under it is missing, and an
            // empty branch counts as one addressable path.
            None => missing.extend(leaf_paths(source_child, &path)),
            Some(target_child) => match (target_child, source_child) {
                (TreeNode::Branch(_), TreeNode::Branch(_)) => {
                    diff_level(target_child, source_child, &path, missing);
                }
                // A scalar cannot satisfy the shape of a subtree, so the
                // whole source subtree is missing.
                (TreeNode::Leaf(_), TreeNode::Branch(_)) => {
                    missing.extend(leaf_paths(source_child, &path));
                }
                // Target holds a structure where source has a bare leaf;
                // record the single path, unexpanded.
                (TreeNode::Branch(_), TreeNode::Leaf(_)) => missing.push(path),
                (TreeNode::Leaf(_), TreeNode::Leaf(_)) => {}
            },
        }
    }
}
