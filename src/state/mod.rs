// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! State owned by a search run.
//!
//! - [`MutationSequence`]: the path from the root quiver to the current frame
//! - [`Statistics`]: counters and the peak multiplicity, threaded through
//!   the search by mutable reference

pub mod sequence;
pub mod statistics;

pub use sequence::MutationSequence;
pub use statistics::{Counters, Statistics};
