// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Results of expanding a frame and of a whole search.

use crate::quiver::{Multiplicity, Node, Quiver};
use crate::state::{MutationSequence, Statistics};

/// Result of expanding one frame of the search stack.
///
/// - `Found`: mutating at this node gave an acyclic quiver; the search stops
/// - `Descend`: this mutant has a cycle and is below the depth bound; push it
/// - `Backtrack`: every node of this frame has been tried; pop it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    Found(Node),
    Descend(Node, Quiver),
    Backtrack,
}

/// Terminal state of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The first acyclic quiver found, reached by mutating along this sequence.
    Found(MutationSequence),
    /// No acyclic quiver within the depth bound.
    Exhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn sequence(&self) -> Option<&MutationSequence> {
        match self {
            SearchOutcome::Found(sequence) => Some(sequence),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Outcome of a search together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub statistics: Statistics,
}

impl SearchReport {
    /// Peak multiplicity over every quiver the search produced.
    pub fn peak_multiplicity(&self) -> Multiplicity {
        self.statistics.peak_multiplicity()
    }
}
