// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Built-in example quivers.
//!
//! Each entry is a node count and a list of unit forward arrows; backward
//! arrows are derived by [`Quiver::from_arrows`].

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use super::{Quiver, Result};

/// Nine nodes, sixteen arrows, with cycles. The default search input.
const REFERENCE_ARROWS: &[(usize, usize)] = &[
    (0, 3),
    (1, 0),
    (1, 4),
    (2, 0),
    (2, 6),
    (3, 1),
    (3, 2),
    (3, 7),
    (4, 3),
    (4, 8),
    (5, 2),
    (6, 3),
    (6, 5),
    (7, 4),
    (7, 6),
    (8, 7),
];

const TINY_ARROWS: &[(usize, usize)] = &[
    (0, 2),
    (1, 0),
    (1, 4),
    (2, 1),
    (2, 5),
    (3, 1),
    (4, 2),
    (4, 3),
    (5, 4),
];

const UNORIENTED_CYCLE_ARROWS: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 2)];

const TREE_ARROWS: &[(usize, usize)] = &[(0, 4), (3, 2), (4, 1), (4, 3), (5, 2)];

/// A named quiver from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum KnownQuiver {
    /// Nine nodes; needs eight mutations to become acyclic.
    Reference,
    /// Six nodes with cycles; small enough for exhaustive tests.
    Tiny,
    /// Triangle 0→1, 0→2, 1→2 whose underlying graph is a cycle.
    UnorientedCycle,
    /// Six nodes with no cycle at all.
    Tree,
}

impl KnownQuiver {
    /// Number of nodes.
    pub fn node_count(self) -> usize {
        match self {
            KnownQuiver::Reference => 9,
            KnownQuiver::Tiny => 6,
            KnownQuiver::UnorientedCycle => 3,
            KnownQuiver::Tree => 6,
        }
    }

    /// The forward arrows, as `(source, sink)` pairs.
    pub fn arrows(self) -> &'static [(usize, usize)] {
        match self {
            KnownQuiver::Reference => REFERENCE_ARROWS,
            KnownQuiver::Tiny => TINY_ARROWS,
            KnownQuiver::UnorientedCycle => UNORIENTED_CYCLE_ARROWS,
            KnownQuiver::Tree => TREE_ARROWS,
        }
    }

    /// Construct the quiver.
    pub fn build(self) -> Result<Quiver> {
        Quiver::from_arrows(self.node_count(), self.arrows().iter().copied())
    }
}
