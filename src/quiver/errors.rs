// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for quiver construction and mutation.

use thiserror::Error;

/// Errors raised while building, validating or mutating a quiver.
///
/// Every variant is fatal to the run. An exhausted search is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuiverError {
    /// An arrow from a node to itself was requested.
    #[error("Node {node} cannot have an arrow to itself")]
    SelfLoop { node: usize },

    /// Zero is the absence of an arrow, not an arrow weight.
    #[error("Arrow {from} -> {to} cannot have weight zero")]
    ZeroWeight { from: usize, to: usize },

    /// A node index is not below the quiver size.
    #[error("Node {node} is out of range for a quiver with {len} nodes")]
    NodeOutOfRange { node: usize, len: usize },

    /// A matrix row has the wrong length.
    #[error("Row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A weight whose negation is not representable.
    #[error("Arrow {from} -> {to} weight {weight} is out of range")]
    WeightOutOfRange { from: usize, to: usize, weight: i32 },

    /// A diagonal cell is non-zero.
    #[error("Node {node} has a self-loop of weight {weight}")]
    NonZeroDiagonal { node: usize, weight: i32 },

    /// `q[i][j] != -q[j][i]`.
    #[error(
        "Arrows {from} -> {to} ({forward}) and {to} -> {from} ({backward}) are not skew-symmetric"
    )]
    NotSkewSymmetric {
        from: usize,
        to: usize,
        forward: i32,
        backward: i32,
    },

    /// A mutation would push a multiplicity outside the cell range.
    #[error("Mutation at node {mutated} overflows the multiplicity of arrow {from} -> {to}")]
    Overflow {
        mutated: usize,
        from: usize,
        to: usize,
    },
}

/// Result type for quiver operations.
pub type Result<T> = std::result::Result<T, QuiverError>;
