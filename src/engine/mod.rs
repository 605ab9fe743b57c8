// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded depth-first search for an acyclic mutant.
//!
//! The engine walks the tree of mutation sequences starting at a root quiver.
//! The children of a quiver are its N mutants, tried in ascending node order.
//! Each mutant is checked with the [`CycleOracle`]; the first acyclic one ends
//! the whole search. A mutant with a cycle is expanded in turn, unless its
//! frame is already at `max_depth`.
//!
//! # Architecture
//!
//! Recursion is replaced by an explicit stack. Each stack entry owns the
//! quiver of its frame and the index of the next node to mutate:
//!
//! 1. Expand the top frame: mutate at its next node
//! 2. If the mutant is acyclic: `Found`, stop
//! 3. If below the depth bound: `Descend`, push the mutant as a new frame
//! 4. At the depth bound: try the next node of the same frame
//! 5. If no nodes remain: `Backtrack`, pop the frame
//!
//! The stack and the [`MutationSequence`] grow and shrink together. Dropping
//! a frame drops its quiver, so backtracking needs no undo log.
//!
//! The root quiver is never tested itself; callers that care whether it is
//! already acyclic ask the oracle directly.
//!
//! # Example
//!
//! ```
//! use quiver_search::engine::{SearchConfig, SearchEngine};
//! use quiver_search::quiver::KnownQuiver;
//!
//! let root = KnownQuiver::Tiny.build().unwrap();
//! let engine = SearchEngine::new(SearchConfig::new(3));
//! let report = engine.search(&root).unwrap();
//!
//! let sequence = report.outcome.sequence().unwrap();
//! assert_eq!(sequence.to_string(), "0 1 4 5");
//! assert_eq!(report.peak_multiplicity(), 1);
//! ```

pub mod config;
pub mod outcome;

pub use config::{SearchConfig, DEFAULT_MAX_DEPTH};
pub use outcome::{Expansion, SearchOutcome, SearchReport};

use tracing::{debug, info, trace};

use crate::mutation::mutate;
use crate::oracle::CycleOracle;
use crate::quiver::{Node, Quiver, Result};
use crate::state::{Counters, MutationSequence, Statistics};

/// Frames reserved up front; deeper searches grow the stack as they go.
const MAX_PREALLOCATED_FRAMES: usize = 64;

/// Stack entry tracking the state of one frame.
#[derive(Debug)]
struct StackEntry {
    /// Quiver reached by the mutations leading to this frame.
    quiver: Quiver,

    /// Next node to mutate.
    next_choice: usize,
}

impl StackEntry {
    fn new(quiver: Quiver) -> Self {
        Self {
            quiver,
            next_choice: 0,
        }
    }
}

/// Depth-first search over mutation sequences.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    oracle: CycleOracle,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            oracle: CycleOracle::new(config.elimination_order),
        }
    }

    pub fn oracle(&self) -> &CycleOracle {
        &self.oracle
    }

    /// Search from `root` with fresh statistics.
    pub fn search(&self, root: &Quiver) -> Result<SearchReport> {
        let mut statistics = Statistics::new();
        let outcome = self.search_with(root, &mut statistics)?;
        Ok(SearchReport {
            outcome,
            statistics,
        })
    }

    /// Search from `root`, accumulating into `statistics`.
    ///
    /// The statistics are updated even when an error aborts the search.
    pub fn search_with(&self, root: &Quiver, statistics: &mut Statistics) -> Result<SearchOutcome> {
        info!(
            nodes = root.len(),
            max_depth = self.config.max_depth,
            "starting search"
        );

        let capacity = self.config.max_sequence_len().min(MAX_PREALLOCATED_FRAMES);
        let mut stack = Vec::with_capacity(capacity);
        let mut sequence = MutationSequence::with_capacity(capacity);
        stack.push(StackEntry::new(root.clone()));

        loop {
            let depth = sequence.len();
            let Some(entry) = stack.last_mut() else {
                info!(%statistics, "search exhausted");
                return Ok(SearchOutcome::Exhausted);
            };

            match self.expand(entry, depth, statistics)? {
                Expansion::Found(node) => {
                    sequence.push(node);
                    info!(%sequence, %statistics, "found acyclic quiver");
                    return Ok(SearchOutcome::Found(sequence));
                }
                Expansion::Descend(node, mutant) => {
                    sequence.push(node);
                    stack.push(StackEntry::new(mutant));
                }
                Expansion::Backtrack => {
                    statistics.increment_counter(Counters::Backtracks);
                    stack.pop();
                    sequence.pop();
                }
            }
        }
    }

    /// Try the remaining nodes of one frame until one is worth acting on.
    fn expand(
        &self,
        entry: &mut StackEntry,
        depth: usize,
        statistics: &mut Statistics,
    ) -> Result<Expansion> {
        let len = entry.quiver.len();
        while let Some(node) = Node::try_new(entry.next_choice, len) {
            entry.next_choice += 1;

            let mutant = mutate(&entry.quiver, node)?;
            statistics.increment_counter(Counters::Mutations);
            statistics.record_multiplicity(mutant.max_abs_weight());

            statistics.increment_counter(Counters::CycleChecks);
            if self.oracle.is_acyclic(&mutant) {
                debug!(depth, %node, "mutant is acyclic");
                return Ok(Expansion::Found(node));
            }
            if depth < self.config.max_depth {
                return Ok(Expansion::Descend(node, mutant));
            }
            trace!(depth, %node, "depth bound reached");
            statistics.increment_counter(Counters::DepthCutoffs);
        }
        Ok(Expansion::Backtrack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiver::KnownQuiver;

    fn run(known: KnownQuiver, max_depth: usize) -> SearchReport {
        let root = known.build().unwrap();
        SearchEngine::new(SearchConfig::new(max_depth))
            .search(&root)
            .unwrap()
    }

    #[test]
    fn test_acyclic_root_still_mutates_once() {
        let report = run(KnownQuiver::Tree, 0);
        assert_eq!(report.outcome.sequence().unwrap().indices(), vec![0]);
        assert_eq!(report.statistics.get(Counters::Mutations), 1);
        assert_eq!(report.peak_multiplicity(), 1);
    }

    #[test]
    fn test_depth_zero_only_tries_single_mutations() {
        let report = run(KnownQuiver::Tiny, 0);
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.statistics.get(Counters::Mutations), 6);
        assert_eq!(report.statistics.get(Counters::DepthCutoffs), 6);
        assert_eq!(report.statistics.get(Counters::Backtracks), 1);
    }

    #[test]
    fn test_depth_one_exhausts_two_step_tree() {
        let report = run(KnownQuiver::Tiny, 1);
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.statistics.get(Counters::Mutations), 6 + 36);
        assert_eq!(report.statistics.get(Counters::CycleChecks), 42);
        assert_eq!(report.statistics.get(Counters::DepthCutoffs), 36);
        assert_eq!(report.statistics.get(Counters::Backtracks), 7);
        assert_eq!(report.peak_multiplicity(), 1);
    }

    #[test]
    fn test_first_solution_in_depth_first_order() {
        let report = run(KnownQuiver::Tiny, 3);
        let sequence = report.outcome.sequence().unwrap();
        assert_eq!(sequence.indices(), vec![0, 1, 4, 5]);
        assert_eq!(report.statistics.get(Counters::Mutations), 80);
    }

    #[test]
    fn test_deeper_bound_can_find_a_longer_sequence_first() {
        // Depth-first: the branch 0 1 0 ... is explored before 0 1 4 is reached.
        let report = run(KnownQuiver::Tiny, 4);
        let sequence = report.outcome.sequence().unwrap();
        assert_eq!(sequence.indices(), vec![0, 1, 0, 2, 5]);
    }

    #[test]
    fn test_huge_depth_bound_does_not_preallocate() {
        let report = run(KnownQuiver::Tree, usize::MAX);
        assert_eq!(report.outcome.sequence().unwrap().indices(), vec![0]);
    }

    #[test]
    fn test_empty_quiver_exhausts_immediately() {
        let report = SearchEngine::default().search(&Quiver::new(0)).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.statistics.get(Counters::Mutations), 0);
        assert_eq!(report.peak_multiplicity(), 0);
    }

    #[test]
    fn test_overflow_aborts_the_search() {
        let mut root = Quiver::new(3);
        root.set_arrow(1, 0, 70_000).unwrap();
        root.set_arrow(0, 2, 70_000).unwrap();
        root.set_arrow(2, 1, 1).unwrap();
        let err = SearchEngine::default().search(&root).unwrap_err();
        assert_eq!(
            err,
            crate::quiver::QuiverError::Overflow {
                mutated: 0,
                from: 1,
                to: 2
            }
        );
    }
}
