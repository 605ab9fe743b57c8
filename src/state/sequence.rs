// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutation sequences.

use std::fmt;

use crate::mutation::mutate;
use crate::quiver::{Node, Quiver, Result};

/// The nodes mutated, in order, on the way from the root quiver.
///
/// The search pushes a node when it descends and pops it when it backtracks,
/// so the length always equals the depth of the current frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MutationSequence(Vec<Node>);

impl MutationSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    pub fn pop(&mut self) -> Option<Node> {
        self.0.pop()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    /// Node indices, in mutation order.
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|node| node.index()).collect()
    }

    /// Mutate `root` at each node in turn.
    pub fn apply(&self, root: &Quiver) -> Result<Quiver> {
        self.0
            .iter()
            .try_fold(root.clone(), |quiver, &node| mutate(&quiver, node))
    }
}

impl From<Vec<Node>> for MutationSequence {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

/// Space-separated node indices.
impl fmt::Display for MutationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", node)?;
            first = false;
        }
        Ok(())
    }
}
