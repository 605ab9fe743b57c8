// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use quiver_search::{Node, Quiver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A reproducible stream of random quivers.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random skew-symmetric quiver with `len` nodes.
///
/// Each unordered pair gets an arrow with probability `density`, with a
/// random direction and a multiplicity in `1..=max_weight`.
pub fn random_quiver(rng: &mut StdRng, len: usize, density: f64, max_weight: i32) -> Quiver {
    let mut quiver = Quiver::new(len);
    for i in 0..len {
        for j in (i + 1)..len {
            if rng.gen_bool(density) {
                let weight = rng.gen_range(1..=max_weight);
                let (from, to) = if rng.gen_bool(0.5) { (i, j) } else { (j, i) };
                quiver.set_arrow(from, to, weight).unwrap();
            }
        }
    }
    quiver
}

/// Node `index` of `quiver`.
pub fn node(quiver: &Quiver, index: usize) -> Node {
    Node::new(index, quiver.len()).unwrap()
}

/// Assert `arrow(i, j) == -arrow(j, i)` and a zero diagonal.
pub fn assert_skew_symmetric(quiver: &Quiver) {
    for i in 0..quiver.len() {
        assert_eq!(quiver.arrow(i, i), 0, "self-loop at {}", i);
        for j in 0..quiver.len() {
            assert_eq!(
                quiver.arrow(i, j),
                -quiver.arrow(j, i),
                "cells ({}, {}) and ({}, {})",
                i,
                j,
                j,
                i
            );
        }
    }
}
