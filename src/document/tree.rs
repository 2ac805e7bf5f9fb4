//! Owned document trees.
//!
//! `Document` owns the root node of a loaded tree and forwards path access to
//! the navigator, so callers holding a document don't have to juggle the root
//! themselves.
//!
//! # Example
//!
//! ```
//! use pathquill::document::tree::Document;
//! use pathquill::document::node::Node;
//!
//! let mut doc = Document::new(Node::mapping());
//! doc.set("name", Node::from("Alice")).unwrap();
//! assert_eq!(doc.get("name").unwrap(), &Node::from("Alice"));
//! ```

use std::path::{Path as FsPath, PathBuf};

use super::node::Node;
use crate::path::{self, AccessError, ToPath};

/// A document tree with an optional source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
    /// Where the document was loaded from, if it came from a file
    source_path: Option<PathBuf>,
}

impl Document {
    /// Creates a new document with the given root node.
    pub fn new(root: Node) -> Self {
        Self {
            root,
            source_path: None,
        }
    }

    /// Creates a document remembering the file it was read from.
    pub fn with_source(root: Node, source_path: impl Into<PathBuf>) -> Self {
        Self {
            root,
            source_path: Some(source_path.into()),
        }
    }

    pub fn source_path(&self) -> Option<&FsPath> {
        self.source_path.as_deref()
    }

    /// Returns a reference to the root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns a mutable reference to the root node of the tree.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Returns the node at `path`. See [`path::get`].
    pub fn get<P: ToPath + ?Sized>(&self, path: &P) -> Result<&Node, AccessError> {
        path::get(&self.root, path)
    }

    /// Writes `value` at `path`. See [`path::set`].
    pub fn set<P: ToPath + ?Sized>(&mut self, path: &P, value: Node) -> Result<(), AccessError> {
        path::set(&mut self.root, path, value)
    }

    /// Returns whether any node has been modified since loading.
    pub fn has_changes(&self) -> bool {
        self.root.has_changes()
    }
}
