// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search the mutation graph of a quiver for an acyclic quiver.
//!
//! A quiver is a directed multigraph with signed, skew-symmetric arrow
//! multiplicities, as used for cluster-algebra seeds. Mutating at a node
//! reroutes the paths through it and reverses its arrows. Starting from a
//! root quiver, this crate looks for a sequence of mutations after which the
//! quiver has no directed cycle.
//!
//! # Architecture
//!
//! Four components, leaves first:
//!
//! - [`quiver`]: the N×N matrix, its invariants and a catalog of examples
//! - [`oracle`]: acyclicity by topological elimination of in-degrees
//! - [`mutation`]: Fomin–Zelevinsky mutation producing a new quiver
//! - [`engine`]: bounded depth-first search composing the two, with
//!   [`state`] holding the sequence and statistics of a run
//!
//! # Search Algorithm
//!
//! At each frame the engine mutates the current quiver at every node in
//! ascending order. The first acyclic mutant ends the whole search. Mutants
//! with cycles are expanded depth-first until `max_depth`, so with N nodes
//! the tree has at most `N^(max_depth+1)` quivers.
//!
//! # Example
//!
//! ```
//! use quiver_search::{CycleOracle, KnownQuiver, SearchConfig, SearchEngine};
//!
//! let root = KnownQuiver::Tree.build().unwrap();
//! assert!(CycleOracle::default().is_acyclic(&root));
//!
//! let report = SearchEngine::new(SearchConfig::new(0)).search(&root).unwrap();
//! assert_eq!(report.outcome.sequence().unwrap().indices(), vec![0]);
//! ```

pub mod engine;
pub mod mutation;
pub mod oracle;
pub mod quiver;
pub mod report;
pub mod state;

// Re-export commonly used types
pub use engine::{SearchConfig, SearchEngine, SearchOutcome, SearchReport};
pub use mutation::mutate;
pub use oracle::{CycleOracle, EliminationOrder};
pub use quiver::{KnownQuiver, Node, Quiver, QuiverError};
pub use state::{Counters, MutationSequence, Statistics};
