// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cycle detection by topological elimination.
//!
//! The oracle decides whether the positive arrows of a quiver form an acyclic
//! directed graph. It follows Kahn's algorithm, but only asks whether a full
//! topological order exists rather than building one:
//!
//! 1. The in-degree of each node is the sum of its positive incoming weights,
//!    so an arrow of multiplicity 2 counts twice.
//! 2. N times over, pick an unvisited node with in-degree zero. If there is
//!    none, the quiver has a cycle. If it is the last node, it has none.
//! 3. Otherwise mark it visited and subtract its outgoing weights from the
//!    in-degrees of its successors.
//!
//! The node picked in step 2 depends on the [`EliminationOrder`]; the
//! has-cycle answer does not.

use crate::quiver::{Node, Quiver};

/// In-degree of every node, indexed by node.
///
/// Wider than a cell so that summing a column cannot overflow.
pub type InDegrees = Vec<i64>;

/// Tie-break among several unvisited nodes of in-degree zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EliminationOrder {
    /// Smallest index first.
    #[default]
    LowestIndex,
    /// Largest index first.
    HighestIndex,
}

/// Sum of positive incoming arrow weights for each node.
pub fn in_degrees(quiver: &Quiver) -> InDegrees {
    let mut degrees = vec![0i64; quiver.len()];
    for (_, sink, weight) in quiver.arrows() {
        degrees[sink] += i64::from(weight);
    }
    degrees
}

/// Acyclicity test over the positive arrows of a quiver.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleOracle {
    order: EliminationOrder,
}

impl CycleOracle {
    /// An oracle using the given tie-break rule.
    pub fn new(order: EliminationOrder) -> Self {
        Self { order }
    }

    /// True if the positive arrows of `quiver` contain a directed cycle.
    pub fn has_cycle(&self, quiver: &Quiver) -> bool {
        self.eliminate(quiver, |_| ())
    }

    /// True if the positive arrows of `quiver` admit a topological order.
    pub fn is_acyclic(&self, quiver: &Quiver) -> bool {
        !self.has_cycle(quiver)
    }

    /// The elimination order of an acyclic quiver, or None if it has a cycle.
    pub fn topological_order(&self, quiver: &Quiver) -> Option<Vec<Node>> {
        let mut visited = Vec::with_capacity(quiver.len());
        if self.eliminate(quiver, |node| visited.push(node)) {
            None
        } else {
            Some(visited)
        }
    }

    /// Run the elimination, reporting each node as it is chosen.
    ///
    /// Returns true if a cycle blocks the elimination.
    fn eliminate(&self, quiver: &Quiver, mut on_visit: impl FnMut(Node)) -> bool {
        let len = quiver.len();
        let mut degrees = in_degrees(quiver);
        let mut visited = vec![false; len];

        for nvisited in 0..len {
            let Some(node) = self.next_source(&degrees, &visited) else {
                return true;
            };
            on_visit(node);
            if nvisited == len - 1 {
                // Every other node was already eliminated.
                return false;
            }
            visited[node.index()] = true;
            for (sink, &weight) in quiver.row(node).iter().enumerate() {
                if weight > 0 {
                    degrees[sink] -= i64::from(weight);
                }
            }
        }
        false
    }

    /// The unvisited node of in-degree zero preferred by the tie-break rule.
    fn next_source(&self, degrees: &[i64], visited: &[bool]) -> Option<Node> {
        let len = degrees.len();
        let is_source = |&i: &usize| !visited[i] && degrees[i] == 0;
        let index = match self.order {
            EliminationOrder::LowestIndex => (0..len).find(is_source),
            EliminationOrder::HighestIndex => (0..len).rev().find(is_source),
        }?;
        Node::try_new(index, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiver::KnownQuiver;

    fn both_orders() -> [CycleOracle; 2] {
        [
            CycleOracle::new(EliminationOrder::LowestIndex),
            CycleOracle::new(EliminationOrder::HighestIndex),
        ]
    }

    #[test]
    fn test_in_degrees_count_multiplicity() {
        let mut q = Quiver::new(3);
        q.set_arrow(0, 2, 2).unwrap();
        q.set_arrow(1, 2, 1).unwrap();
        q.set_arrow(1, 0, 3).unwrap();
        assert_eq!(in_degrees(&q), vec![3, 0, 3]);
    }

    #[test]
    fn test_directed_triangle_has_cycle() {
        let q = Quiver::from_arrows(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        for oracle in both_orders() {
            assert!(oracle.has_cycle(&q));
            assert_eq!(oracle.topological_order(&q), None);
        }
    }

    #[test]
    fn test_tree_is_acyclic() {
        let q = KnownQuiver::Tree.build().unwrap();
        for oracle in both_orders() {
            assert!(!oracle.has_cycle(&q));
            assert!(oracle.is_acyclic(&q));
        }
    }

    #[test]
    fn test_unoriented_cycle_is_acyclic_as_a_directed_graph() {
        // 0→1→2 with the shortcut 0→2 is a triangle only when orientation is ignored.
        let q = KnownQuiver::UnorientedCycle.build().unwrap();
        let oracle = CycleOracle::default();
        assert!(!oracle.has_cycle(&q));
        let order: Vec<usize> = oracle
            .topological_order(&q)
            .unwrap()
            .into_iter()
            .map(Node::index)
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_known_quivers_with_cycles() {
        for known in [KnownQuiver::Reference, KnownQuiver::Tiny] {
            let q = known.build().unwrap();
            for oracle in both_orders() {
                assert!(oracle.has_cycle(&q), "{} should have a cycle", known);
            }
        }
    }

    #[test]
    fn test_tie_break_changes_order_not_answer() {
        let q = Quiver::from_arrows(4, [(0, 1), (2, 3)]).unwrap();
        let low = CycleOracle::new(EliminationOrder::LowestIndex)
            .topological_order(&q)
            .unwrap();
        let high = CycleOracle::new(EliminationOrder::HighestIndex)
            .topological_order(&q)
            .unwrap();
        let low: Vec<usize> = low.into_iter().map(Node::index).collect();
        let high: Vec<usize> = high.into_iter().map(Node::index).collect();
        assert_eq!(low, vec![0, 1, 2, 3]);
        assert_eq!(high, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_multi_edge_needs_all_units_removed() {
        // 0 =2=> 1 -> 2: node 1 only becomes a source once both units are gone.
        let mut q = Quiver::new(3);
        q.set_arrow(0, 1, 2).unwrap();
        q.set_arrow(1, 2, 1).unwrap();
        assert!(CycleOracle::default().is_acyclic(&q));

        q.set_arrow(2, 0, 1).unwrap();
        assert!(CycleOracle::default().has_cycle(&q));
    }

    #[test]
    fn test_degenerate_sizes() {
        let oracle = CycleOracle::default();
        assert!(!oracle.has_cycle(&Quiver::new(0)));
        assert_eq!(oracle.topological_order(&Quiver::new(0)), Some(vec![]));
        assert!(!oracle.has_cycle(&Quiver::new(1)));
    }

    #[test]
    fn test_oracle_does_not_modify_input() {
        let q = KnownQuiver::Reference.build().unwrap();
        let before = q.clone();
        CycleOracle::default().has_cycle(&q);
        assert_eq!(q, before);
    }
}
