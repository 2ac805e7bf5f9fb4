//! Tree node representation with change tracking.
//!
//! This module provides the core data structures for representing loosely-typed
//! documents in pathquill. Every value is wrapped in a `Node` that remembers
//! whether it has been modified since it was loaded, so callers can tell whether
//! a `set` actually touched the tree before writing it back to disk.
//!
//! # Example
//!
//! ```
//! use pathquill::document::node::{Node, Value, Scalar};
//! use indexmap::IndexMap;
//!
//! // Create a simple string node
//! let node = Node::new(Value::Scalar(Scalar::String("hello".to_string())));
//! assert!(node.is_modified()); // New nodes are marked as modified
//!
//! // Create a nested structure
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), Node::from("pathquill"));
//! map.insert("version".to_string(), Node::from(1));
//! let object = Node::new(Value::Mapping(map));
//! assert!(object.is_mapping());
//! ```

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// The three shapes a node can take during navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Mapping,
    Sequence,
    Scalar,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Mapping => write!(f, "mapping"),
            NodeKind::Sequence => write!(f, "sequence"),
            NodeKind::Scalar => write!(f, "scalar"),
        }
    }
}

/// Represents numbers (integer or float)
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// A leaf value. Scalars are never descended into.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "{}", s),
        }
    }
}

/// A value without metadata.
///
/// Mappings and sequences contain `Node` instances so that change tracking is
/// preserved throughout the tree structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String keys to child nodes, in document order
    Mapping(IndexMap<String, Node>),
    /// Ordered, 0-indexed child nodes
    Sequence(Vec<Node>),
    /// A terminal value
    Scalar(Scalar),
}

/// A value wrapped with a modification flag.
///
/// Equality compares values only; two nodes holding the same data are equal
/// regardless of whether either has been modified.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) value: Value,
    pub(crate) modified: bool,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Node {
    /// Creates a new node marked as modified.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::document::node::{Node, Value, Scalar};
    ///
    /// let node = Node::new(Value::Scalar(Scalar::Null));
    /// assert!(node.is_modified());
    /// ```
    pub fn new(value: Value) -> Self {
        Self {
            value,
            modified: true,
        }
    }

    /// Creates a node that has not been modified, as produced by the loaders.
    pub fn unmodified(value: Value) -> Self {
        Self {
            value,
            modified: false,
        }
    }

    /// Creates an empty mapping node.
    pub fn mapping() -> Self {
        Self::new(Value::Mapping(IndexMap::new()))
    }

    /// Creates a sequence node from the given elements.
    pub fn sequence(items: Vec<Node>) -> Self {
        Self::new(Value::Sequence(items))
    }

    /// Creates a null scalar node.
    pub fn null() -> Self {
        Self::new(Value::Scalar(Scalar::Null))
    }

    /// Returns an immutable reference to the node's value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns a mutable reference to the node's value.
    ///
    /// Calling this method automatically marks the node as modified,
    /// even if the value is not actually changed.
    pub fn value_mut(&mut self) -> &mut Value {
        self.modified = true;
        &mut self.value
    }

    pub fn kind(&self) -> NodeKind {
        match self.value {
            Value::Mapping(_) => NodeKind::Mapping,
            Value::Sequence(_) => NodeKind::Sequence,
            Value::Scalar(_) => NodeKind::Scalar,
        }
    }

    pub fn is_mapping(&self) -> bool {
        self.kind() == NodeKind::Mapping
    }

    pub fn is_sequence(&self) -> bool {
        self.kind() == NodeKind::Sequence
    }

    /// Returns the scalar held by this node, if it is a leaf.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match &self.value {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns whether this node itself has been modified.
    ///
    /// A node is considered modified if it was newly created or if
    /// `value_mut()` has been called on it.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns whether this node or any node below it has been modified.
    pub fn has_changes(&self) -> bool {
        if self.modified {
            return true;
        }
        match &self.value {
            Value::Mapping(entries) => entries.values().any(Node::has_changes),
            Value::Sequence(items) => items.iter().any(Node::has_changes),
            Value::Scalar(_) => false,
        }
    }

    /// Clears the modification flag on this node and all of its descendants.
    pub fn mark_clean(&mut self) {
        self.modified = false;
        match &mut self.value {
            Value::Mapping(entries) => entries.values_mut().for_each(Node::mark_clean),
            Value::Sequence(items) => items.iter_mut().for_each(Node::mark_clean),
            Value::Scalar(_) => {}
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::new(Value::Scalar(scalar))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string()).into()
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Scalar::String(s).into()
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Scalar::Number(Number::Integer(i)).into()
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::from(i as i64)
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Scalar::Number(Number::Float(f)).into()
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b).into()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.value {
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, child) in entries {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Boolean(b) => serializer.serialize_bool(*b),
            Scalar::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Scalar::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}
