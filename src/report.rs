// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Program output.
//!
//! ```text
//! N: 9
//! initial quiver has cycle: 1
//! 3 6 5 2 4 8 7 0
//! max multiplicity: 2
//! ```
//!
//! The sequence line is only written when the search found one.

use std::io::{self, Write};

use crate::engine::SearchReport;

/// Header written before the search starts.
pub fn write_header<W: Write>(out: &mut W, nodes: usize, has_cycle: bool) -> io::Result<()> {
    writeln!(out, "N: {}", nodes)?;
    writeln!(out, "initial quiver has cycle: {}", u8::from(has_cycle))
}

/// Sequence (if any) and peak multiplicity of a finished search.
pub fn write_result<W: Write>(out: &mut W, report: &SearchReport) -> io::Result<()> {
    if let Some(sequence) = report.outcome.sequence() {
        writeln!(out, "{}", sequence)?;
    }
    writeln!(out, "max multiplicity: {}", report.peak_multiplicity())
}
