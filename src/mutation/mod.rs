// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quiver mutation.
//!
//! Mutation at node k (Fomin–Zelevinsky) works in two passes over a fresh
//! copy of the quiver:
//!
//! 1. For every path `i -> k -> j` of positive arrows, add the product of the
//!    two multiplicities to `i -> j` (and subtract it from `j -> i`).
//! 2. Reverse every arrow incident to k.
//!
//! Pass 1 reads only the input quiver, so the reversals of pass 2 can never
//! feed back into the compositions.
//!
//! Mutating twice at the same node gives back the original quiver.

use tracing::trace;

use crate::quiver::{Node, Quiver, QuiverError, Result, Weight};

/// Mutate `quiver` at `k`, returning the new quiver.
///
/// The input is left untouched. Fails with [`QuiverError::Overflow`] if a
/// multiplicity leaves the [`Weight`] range, and with
/// [`QuiverError::NodeOutOfRange`] if `k` belongs to a larger quiver.
pub fn mutate(quiver: &Quiver, k: Node) -> Result<Quiver> {
    let len = quiver.len();
    let k = k.index();
    if k >= len {
        return Err(QuiverError::NodeOutOfRange { node: k, len });
    }

    let mut mutant = quiver.clone();
    let overflow = |i: usize, j: usize| QuiverError::Overflow {
        mutated: k,
        from: i,
        to: j,
    };

    for i in 0..len {
        let into_k = quiver.arrow(i, k);
        if into_k <= 0 {
            continue;
        }
        for j in 0..len {
            let out_of_k = quiver.arrow(k, j);
            if out_of_k <= 0 {
                continue;
            }
            let path: Weight = into_k.checked_mul(out_of_k).ok_or_else(|| overflow(i, j))?;
            let forward = mutant
                .arrow(i, j)
                .checked_add(path)
                .ok_or_else(|| overflow(i, j))?;
            let backward = mutant
                .arrow(j, i)
                .checked_sub(path)
                .ok_or_else(|| overflow(j, i))?;
            mutant.put(i, j, forward);
            mutant.put(j, i, backward);
        }
    }

    for i in 0..len {
        let weight = quiver.arrow(k, i);
        if weight != 0 {
            let reversed = weight.checked_neg().ok_or_else(|| overflow(k, i))?;
            mutant.put(k, i, reversed);
            mutant.put(i, k, weight);
        }
    }

    trace!(node = k, peak = mutant.max_abs_weight(), "mutated");
    Ok(mutant)
}
