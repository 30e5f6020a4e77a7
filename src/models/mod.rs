// src/models/mod.rs

pub mod node;
pub mod rotate_line;

pub use node::{Neighbor, Node, Traversal};
pub use rotate_line::RotateLine;

/// Number of segments in the line.
pub const NODE_COUNT: usize = 5;
