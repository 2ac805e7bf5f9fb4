//! PathQuill - read and patch YAML/JSON trees with dotted/bracketed paths.
//!
//! ```
//! use pathquill::document::parser::parse_yaml;
//! use pathquill::document::node::Node;
//!
//! let mut doc = parse_yaml("items: [{x: 1}, {x: 2}]").unwrap();
//! doc.set("items.x", Node::from(9)).unwrap();
//! assert_eq!(doc.get("items[1].x").unwrap(), &Node::from(9));
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod path;

pub use document::node::{Node, NodeKind, Scalar, Value};
pub use path::{get, parse, set, AccessError, Path, PathError, Segment};
