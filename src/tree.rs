//! Tree model: a parsed locale document as an explicit leaf/branch union.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A node in a locale message tree.
///
/// Every plain JSON object becomes a `Branch`; everything else — strings,
/// numbers, booleans, null, and arrays — is an opaque `Leaf`. Arrays are
/// never descended into. Branch children keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf(Value),
    Branch(IndexMap<String, TreeNode>),
}

impl TreeNode {
    /// Build a tree from a parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => TreeNode::Branch(
                map.iter()
                    .map(|(key, child)| (key.clone(), TreeNode::from_value(child)))
                    .collect(),
            ),
            other => TreeNode::Leaf(other.clone()),
        }
    }

    /// Convert back into a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            TreeNode::Leaf(value) => value.clone(),
            TreeNode::Branch(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_value()))
                    .collect(),
            ),
        }
    }

    /// An object node with no children.
    pub fn empty_branch() -> Self {
        TreeNode::Branch(IndexMap::new())
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, TreeNode::Branch(_))
    }

    pub fn as_branch(&self) -> Option<&IndexMap<String, TreeNode>> {
        match self {
            TreeNode::Branch(children) => Some(children),
            TreeNode::Leaf(_) => None,
        }
    }

    /// Sort every branch's keys alphabetically, recursively.
    pub fn sort_keys(&mut self) {
        if let TreeNode::Branch(children) = self {
            children.sort_keys();
            for child in children.values_mut() {
                child.sort_keys();
            }
        }
    }

    /// First key anywhere in the tree that contains `separator`, if any.
    ///
    /// Path joining is only invertible when no key contains the separator;
    /// the persistence layer rejects trees where this scan finds a hit.
    pub fn find_unsafe_key(&self, separator: &str) -> Option<&str> {
        if let TreeNode::Branch(children) = self {
            for (key, child) in children {
                if key.contains(separator) {
                    return Some(key);
                }
                if let Some(found) = child.find_unsafe_key(separator) {
                    return Some(found);
                }
            }
        }
        None
    }
}

// Serialized in stored key order, so a merged tree writes back in its
// merged insertion order rather than serde_json's default sorted order.
impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeNode::Leaf(value) => value.serialize(serializer),
            TreeNode::Branch(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, child) in children {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}
