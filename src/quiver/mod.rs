// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quiver data model.
//!
//! A quiver with N nodes is stored as an N×N matrix of signed multiplicities:
//! cell `(i, j)` holds the number of arrows from node i to node j, and the
//! reverse cell `(j, i)` holds its negation. Zero means no arrow.
//!
//! # Invariants
//!
//! - Skew-symmetry: `arrow(i, j) == -arrow(j, i)`
//! - No self-loops: `arrow(i, i) == 0`
//!
//! Every public constructor and mutator either preserves these invariants or
//! returns a [`QuiverError`].
//!
//! # Memory Model
//!
//! A quiver owns a single `Vec` of N×N cells allocated at construction and
//! never resized. Quivers are values: the search branches by cloning and
//! backtracks by dropping the clone.

pub mod catalog;
pub mod errors;
pub mod node;

pub use catalog::KnownQuiver;
pub use errors::{QuiverError, Result};
pub use node::Node;

use std::fmt;

/// Signed arrow multiplicity stored in each cell.
///
/// Mutation multiplies weights along two-step paths, so cells grow quickly
/// along some branches; all arithmetic on them is checked.
pub type Weight = i32;

/// Absolute value of a weight.
pub type Multiplicity = u32;

/// A skew-symmetric square matrix of arrow multiplicities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quiver {
    len: usize,
    cells: Vec<Weight>,
}

impl Quiver {
    /// Create a quiver with `len` nodes and no arrows.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            cells: vec![0; len * len],
        }
    }

    /// Build a quiver from a list of `(source, sink)` unit arrows.
    ///
    /// Only forward arrows are given; backward arrows are derived. Listing the
    /// same arrow twice is harmless, but listing both `(i, j)` and `(j, i)` is
    /// rejected rather than resolved in favour of either.
    pub fn from_arrows<I>(len: usize, arrows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut quiver = Self::new(len);
        for (source, sink) in arrows {
            let from = Node::new(source, len)?;
            let to = Node::new(sink, len)?;
            if from == to {
                return Err(QuiverError::SelfLoop { node: source });
            }
            let backward = quiver.arrow(sink, source);
            if backward > 0 {
                return Err(QuiverError::NotSkewSymmetric {
                    from: source,
                    to: sink,
                    forward: 1,
                    backward,
                });
            }
            quiver.put(source, sink, 1);
        }
        quiver.derive_backward_arrows();
        Ok(quiver)
    }

    /// Build a quiver from a full matrix, validating every invariant.
    pub fn from_matrix<R: AsRef<[Weight]>>(rows: &[R]) -> Result<Self> {
        let len = rows.len();
        let mut cells = Vec::with_capacity(len * len);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != len {
                return Err(QuiverError::NotSquare {
                    row,
                    len: values.len(),
                    expected: len,
                });
            }
            cells.extend_from_slice(values);
        }
        let quiver = Self { len, cells };
        quiver.validate()?;
        Ok(quiver)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for the quiver with no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Signed multiplicity of the arrow `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below [`len`](Self::len).
    pub fn arrow(&self, from: usize, to: usize) -> Weight {
        assert!(
            from < self.len && to < self.len,
            "Arrow {} -> {} out of range for {} nodes",
            from,
            to,
            self.len
        );
        self.cells[from * self.len + to]
    }

    /// The row of outgoing (positive) and incoming (negative) weights of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` was validated against a larger quiver.
    pub fn row(&self, node: Node) -> &[Weight] {
        assert!(
            node.index() < self.len,
            "Node {} out of range for {} nodes",
            node,
            self.len
        );
        let start = node.index() * self.len;
        &self.cells[start..start + self.len]
    }

    /// Set `from -> to` to `weight` and `to -> from` to `-weight`.
    ///
    /// A negative weight sets the arrow in the opposite direction.
    pub fn set_arrow(&mut self, from: usize, to: usize, weight: Weight) -> Result<()> {
        Node::new(from, self.len)?;
        Node::new(to, self.len)?;
        if from == to {
            return Err(QuiverError::SelfLoop { node: from });
        }
        if weight == 0 {
            return Err(QuiverError::ZeroWeight { from, to });
        }
        let backward = weight
            .checked_neg()
            .ok_or(QuiverError::WeightOutOfRange { from, to, weight })?;
        self.put(from, to, weight);
        self.put(to, from, backward);
        Ok(())
    }

    /// Overwrite every backward cell from its positive forward cell.
    ///
    /// Used after filling in forward arrows only.
    pub fn derive_backward_arrows(&mut self) {
        for i in 0..self.len {
            for j in 0..self.len {
                let weight = self.arrow(i, j);
                if weight > 0 {
                    self.put(j, i, -weight);
                }
            }
        }
    }

    /// Largest absolute multiplicity over all cells (0 for an arrowless quiver).
    pub fn max_abs_weight(&self) -> Multiplicity {
        self.cells
            .iter()
            .map(|w| w.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Iterate over positive arrows as `(source, sink, multiplicity)`.
    pub fn arrows(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        let len = self.len;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(move |(cell, &w)| (cell / len, cell % len, w))
    }

    /// Check the skew-symmetry and no-self-loop invariants.
    pub fn validate(&self) -> Result<()> {
        for i in 0..self.len {
            let diagonal = self.arrow(i, i);
            if diagonal != 0 {
                return Err(QuiverError::NonZeroDiagonal {
                    node: i,
                    weight: diagonal,
                });
            }
            for j in (i + 1)..self.len {
                let forward = self.arrow(i, j);
                let backward = self.arrow(j, i);
                if forward.checked_neg() != Some(backward) {
                    return Err(QuiverError::NotSkewSymmetric {
                        from: i,
                        to: j,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }

    /// Raw cell write; callers keep the invariants.
    pub(crate) fn put(&mut self, from: usize, to: usize, weight: Weight) {
        self.cells[from * self.len + to] = weight;
    }
}

impl fmt::Display for Quiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in Node::all(self.len) {
            let row = self
                .row(node)
                .iter()
                .map(|w| format!("{:>3}", w))
                .collect::<Vec<_>>()
                .join("");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
