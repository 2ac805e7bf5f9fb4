//! Dotted/bracketed path access for document trees.
//!
//! This module parses path strings and uses them to read or patch nodes of a
//! [`Node`](crate::document::node::Node) tree without a schema.
//!
//! # Supported Syntax
//!
//! - `name` - Mapping entry
//! - `a.b.c` - Nested mapping entries
//! - `name[n]` or `[n]` - Sequence element (canonical non-negative integer)
//! - `name[]` or `[]` - Every element of a sequence (broadcast target for `set`)
//!
//! Keys containing `.`, `[` or `]` cannot be addressed; there is no escaping.
//!
//! # Examples
//!
//! ```
//! // name.hobbies[1]    - second hobby
//! // name.meta.baz      - set `baz` on every element of `meta` (when it is a sequence)
//! // name.meta[].baz    - same, with the broadcast made explicit
//! ```

pub mod ast;
pub mod error;
pub mod navigator;
pub mod parser;

pub use ast::{Path, Segment};
pub use error::{AccessError, PathError, SegmentFault};
pub use navigator::{get, get_mut, set, ToPath};
pub use parser::parse;
