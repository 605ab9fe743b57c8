// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::oracle::EliminationOrder;

/// Depth bound used when none is given.
pub const DEFAULT_MAX_DEPTH: usize = 7;

/// Parameters of a search run.
///
/// `max_depth` bounds recursion, not sequence length: a search with
/// `max_depth = d` tests sequences of up to `d + 1` mutations, so the tree
/// has at most `N^(d+1)` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: usize,
    pub elimination_order: EliminationOrder,
}

impl SearchConfig {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_elimination_order(mut self, order: EliminationOrder) -> Self {
        self.elimination_order = order;
        self
    }

    /// Longest mutation sequence the search can report.
    pub fn max_sequence_len(&self) -> usize {
        self.max_depth.saturating_add(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            elimination_order: EliminationOrder::default(),
        }
    }
}
