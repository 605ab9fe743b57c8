// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are accumulated by the search engine as it runs. The peak
//! multiplicity only ever grows and never influences the search itself.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::quiver::Multiplicity;

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Quivers produced by mutation.
    Mutations,
    /// Calls to the cycle oracle.
    CycleChecks,
    /// Mutants with a cycle at the depth bound, not expanded further.
    DepthCutoffs,
    /// Frames abandoned after all their children failed.
    Backtracks,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
    peak_multiplicity: Multiplicity,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Raise the peak multiplicity to `multiplicity` if it is larger.
    pub fn record_multiplicity(&mut self, multiplicity: Multiplicity) {
        self.peak_multiplicity = self.peak_multiplicity.max(multiplicity);
    }

    /// Largest multiplicity recorded so far.
    pub fn peak_multiplicity(&self) -> Multiplicity {
        self.peak_multiplicity
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            write!(f, "{}={} ", counter, self.get(counter))?;
        }
        write!(f, "peak_multiplicity={}", self.peak_multiplicity)
    }
}
