//! Reading and writing tree nodes by path.
//!
//! `get` walks the tree one segment at a time. `set` walks every segment but
//! the last the same way, then applies a write step for the final segment.
//! A final key written against a sequence is broadcast to each element.

use std::borrow::Cow;

use super::ast::{Path, Segment};
use super::error::{AccessError, PathError};
use super::parser::parse;
use crate::document::node::{Node, NodeKind, Value};

/// Anything that can be turned into a parsed [`Path`].
pub trait ToPath {
    fn to_path(&self) -> Result<Cow<'_, Path>, PathError>;
}

impl ToPath for str {
    fn to_path(&self) -> Result<Cow<'_, Path>, PathError> {
        parse(self).map(Cow::Owned)
    }
}

impl ToPath for String {
    fn to_path(&self) -> Result<Cow<'_, Path>, PathError> {
        self.as_str().to_path()
    }
}

impl ToPath for Path {
    fn to_path(&self) -> Result<Cow<'_, Path>, PathError> {
        Ok(Cow::Borrowed(self))
    }
}

/// A single failed step, before the path prefix is attached.
#[derive(Debug)]
enum StepFault {
    NotFound,
    NotAMapping(NodeKind),
    NotASequence(NodeKind),
    IndexOutOfRange { index: usize, len: usize },
    UnsupportedKeyType,
}

impl StepFault {
    /// Attaches the canonical text of `path` through segment `i`.
    fn at(self, path: &Path, i: usize) -> AccessError {
        let path = path.prefix(i + 1);
        match self {
            StepFault::NotFound => AccessError::NotFound { path },
            StepFault::NotAMapping(found) => AccessError::NotAMapping { path, found },
            StepFault::NotASequence(found) => AccessError::NotASequence { path, found },
            StepFault::IndexOutOfRange { index, len } => {
                AccessError::IndexOutOfRange { path, index, len }
            }
            StepFault::UnsupportedKeyType => AccessError::UnsupportedKeyType { path },
        }
    }
}

/// Returns the node at `path`.
///
/// A wildcard segment passes the sequence it is applied to through unchanged.
/// An empty [`Path`] resolves to `root`.
///
/// # Example
///
/// ```
/// use pathquill::document::parser::parse_yaml;
/// use pathquill::path::get;
///
/// let doc = parse_yaml("a: {b: [1, 2]}").unwrap();
/// let node = get(doc.root(), "a.b[1]").unwrap();
/// assert_eq!(node.as_scalar().unwrap().to_string(), "2");
///
/// let err = get(doc.root(), "a.b[5]").unwrap_err();
/// assert_eq!(err.path(), Some("a.b[5]"));
/// ```
pub fn get<'a, P: ToPath + ?Sized>(root: &'a Node, path: &P) -> Result<&'a Node, AccessError> {
    let path = path.to_path()?;
    descend(root, &path, path.len())
}

/// Returns a mutable reference to the node at `path`, using the same rules as [`get`].
pub fn get_mut<'a, P: ToPath + ?Sized>(
    root: &'a mut Node,
    path: &P,
) -> Result<&'a mut Node, AccessError> {
    let path = path.to_path()?;
    descend_mut(root, &path, path.len())
}

/// Writes `value` at `path`, mutating the tree in place.
///
/// The final segment decides the write:
/// - a key upserts into a mapping, or is applied to every element when the
///   target is a sequence (recursively, for nested sequences);
/// - an index replaces an existing sequence element;
/// - a wildcard is not a valid target.
///
/// A broadcast that fails part way leaves the elements before the failing
/// one already written.
pub fn set<P: ToPath + ?Sized>(root: &mut Node, path: &P, value: Node) -> Result<(), AccessError> {
    let path = path.to_path()?;
    let (last, init) = path.split_last().ok_or(AccessError::EmptyPath)?;
    let container = descend_mut(root, &path, init.len())?;
    write(container, last, value).map_err(|fault| fault.at(&path, init.len()))
}

fn descend<'a>(root: &'a Node, path: &Path, depth: usize) -> Result<&'a Node, AccessError> {
    let mut current = root;
    for (i, segment) in path.segments()[..depth].iter().enumerate() {
        log::trace!("step {} of {}: {}", i + 1, path, segment);
        current = step(current, segment).map_err(|fault| fault.at(path, i))?;
    }
    Ok(current)
}

fn descend_mut<'a>(
    root: &'a mut Node,
    path: &Path,
    depth: usize,
) -> Result<&'a mut Node, AccessError> {
    let mut current = root;
    for (i, segment) in path.segments()[..depth].iter().enumerate() {
        log::trace!("step {} of {}: {}", i + 1, path, segment);
        current = step_mut(current, segment).map_err(|fault| fault.at(path, i))?;
    }
    Ok(current)
}

fn step<'a>(node: &'a Node, segment: &Segment) -> Result<&'a Node, StepFault> {
    match (segment, node.value()) {
        (Segment::Key(key), Value::Mapping(entries)) => entries.get(key).ok_or(StepFault::NotFound),
        (Segment::Key(_), _) => Err(StepFault::NotAMapping(node.kind())),
        (Segment::Index(index), Value::Sequence(items)) => {
            items.get(*index).ok_or(StepFault::IndexOutOfRange {
                index: *index,
                len: items.len(),
            })
        }
        (Segment::Wildcard, Value::Sequence(_)) => Ok(node),
        (Segment::Index(_) | Segment::Wildcard, _) => Err(StepFault::NotASequence(node.kind())),
    }
}

fn step_mut<'a>(node: &'a mut Node, segment: &Segment) -> Result<&'a mut Node, StepFault> {
    let kind = node.kind();
    match segment {
        Segment::Key(key) => match &mut node.value {
            Value::Mapping(entries) => entries.get_mut(key).ok_or(StepFault::NotFound),
            _ => Err(StepFault::NotAMapping(kind)),
        },
        Segment::Index(index) => match &mut node.value {
            Value::Sequence(items) => {
                let len = items.len();
                items.get_mut(*index).ok_or(StepFault::IndexOutOfRange {
                    index: *index,
                    len,
                })
            }
            _ => Err(StepFault::NotASequence(kind)),
        },
        Segment::Wildcard if kind == NodeKind::Sequence => Ok(node),
        Segment::Wildcard => Err(StepFault::NotASequence(kind)),
    }
}

fn write(node: &mut Node, segment: &Segment, value: Node) -> Result<(), StepFault> {
    match segment {
        Segment::Key(key) => write_key(node, key, value),
        Segment::Index(index) => {
            let kind = node.kind();
            let Value::Sequence(items) = &mut node.value else {
                return Err(StepFault::NotASequence(kind));
            };
            let len = items.len();
            let slot = items.get_mut(*index).ok_or(StepFault::IndexOutOfRange {
                index: *index,
                len,
            })?;
            *slot = value;
            node.modified = true;
            Ok(())
        }
        Segment::Wildcard => Err(StepFault::UnsupportedKeyType),
    }
}

fn write_key(node: &mut Node, key: &str, value: Node) -> Result<(), StepFault> {
    match &mut node.value {
        Value::Mapping(entries) => {
            entries.insert(key.to_string(), value);
            node.modified = true;
            Ok(())
        }
        Value::Sequence(items) => {
            log::debug!("broadcasting key {:?} to {} elements", key, items.len());
            for item in items.iter_mut() {
                write_key(item, key, value.clone())?;
            }
            Ok(())
        }
        Value::Scalar(_) => Err(StepFault::UnsupportedKeyType),
    }
}
