//! Document model: nodes, owned trees, and conversion from decoded input.

pub mod node;
pub mod parser;
pub mod tree;
