// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Node type for quiver vertices.
//!
//! A node is an index in `0..N` where N is the size of the quiver it belongs
//! to. Unlike a plain `usize` it has been checked against that size once, so
//! matrix access through it needs no further validation.

use std::fmt;

use super::errors::{QuiverError, Result};

/// A vertex of a quiver, in the range `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node(usize);

impl Node {
    /// Create a node, failing if `index >= len`.
    pub fn new(index: usize, len: usize) -> Result<Self> {
        if index < len {
            Ok(Self(index))
        } else {
            Err(QuiverError::NodeOutOfRange { node: index, len })
        }
    }

    /// Try to create a node, returning None if out of range.
    pub fn try_new(index: usize, len: usize) -> Option<Self> {
        Self::new(index, len).ok()
    }

    /// Get the node as a usize (for matrix indexing).
    pub fn index(self) -> usize {
        self.0
    }

    /// All nodes of a quiver with `len` nodes, in ascending order.
    pub fn all(len: usize) -> impl Iterator<Item = Node> {
        (0..len).map(Node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
