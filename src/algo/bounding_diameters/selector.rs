/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{LowerBound, UpperBound};
use std::fmt;
use webgraph::traits::RandomAccessGraph;

/// The policy used to choose the next node to probe.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Choose the active node with the largest upper bound.
    LargestUpperBound,
    /// Choose the active node with the smallest lower bound.
    SmallestLowerBound,
}

impl SelectionPolicy {
    /// Returns the policy used at the given iteration: policies alternate,
    /// starting with [`LargestUpperBound`](Self::LargestUpperBound).
    pub fn for_iteration(iteration: usize) -> Self {
        if iteration % 2 == 0 {
            SelectionPolicy::LargestUpperBound
        } else {
            SelectionPolicy::SmallestLowerBound
        }
    }

    /// Returns a human-readable description of the policy.
    pub fn label(&self) -> &'static str {
        match self {
            SelectionPolicy::LargestUpperBound => "largest upper bound",
            SelectionPolicy::SmallestLowerBound => "smallest lower bound",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selects the next node to probe among the active nodes, or returns [`None`]
/// if there are no active nodes.
///
/// Ties on the bound are broken in favor of the node with the largest degree;
/// if there are still ties, the first node in the order of `active` is
/// returned.
///
/// # Arguments
/// * `graph`: the graph, used to compute degrees.
/// * `active`: the active nodes.
/// * `lower`: the lower bounds on the eccentricities.
/// * `upper`: the upper bounds on the eccentricities.
/// * `policy`: the selection policy.
pub fn select(
    graph: &impl RandomAccessGraph,
    active: &[usize],
    lower: &[LowerBound],
    upper: &[UpperBound],
    policy: SelectionPolicy,
) -> Option<usize> {
    let (&first, rest) = active.split_first()?;

    let better = |node: usize, best: usize| match policy {
        SelectionPolicy::LargestUpperBound => {
            (upper[node], graph.outdegree(node)) > (upper[best], graph.outdegree(best))
        }
        SelectionPolicy::SmallestLowerBound => {
            lower[node] < lower[best]
                || (lower[node] == lower[best] && graph.outdegree(node) > graph.outdegree(best))
        }
    };

    Some(
        rest.iter()
            .fold(first, |best, &node| if better(node, best) { node } else { best }),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use webgraph::graphs::vec_graph::VecGraph;

    /// A star with center 3 and leaves 0, 1, 2, plus the arc 0 – 1.
    fn graph() -> VecGraph {
        VecGraph::from_arcs([
            (0, 1),
            (0, 3),
            (1, 0),
            (1, 3),
            (2, 3),
            (3, 0),
            (3, 1),
            (3, 2),
        ])
    }

    #[test]
    fn test_policy_alternates() {
        assert_eq!(
            SelectionPolicy::for_iteration(0),
            SelectionPolicy::LargestUpperBound
        );
        assert_eq!(
            SelectionPolicy::for_iteration(1),
            SelectionPolicy::SmallestLowerBound
        );
        assert_eq!(
            SelectionPolicy::for_iteration(10),
            SelectionPolicy::LargestUpperBound
        );
        assert_eq!(
            SelectionPolicy::SmallestLowerBound.to_string(),
            "smallest lower bound"
        );
    }

    #[test]
    fn test_empty() {
        let g = graph();
        let lower = [LowerBound::Unbounded; 4];
        let upper = [UpperBound::Unbounded; 4];
        for policy in [
            SelectionPolicy::LargestUpperBound,
            SelectionPolicy::SmallestLowerBound,
        ] {
            assert_eq!(select(&g, &[], &lower, &upper, policy), None);
        }
    }

    #[test]
    fn test_single_candidate() {
        let g = graph();
        let lower = [0, 9, 0, 0].map(LowerBound::Finite);
        let upper = [9, 0, 9, 9].map(UpperBound::Finite);
        assert_eq!(
            select(&g, &[1], &lower, &upper, SelectionPolicy::LargestUpperBound),
            Some(1)
        );
        assert_eq!(
            select(&g, &[1], &lower, &upper, SelectionPolicy::SmallestLowerBound),
            Some(1)
        );
    }

    #[test]
    fn test_unbounded_ties_go_to_degree() {
        let g = graph();
        let lower = [LowerBound::Unbounded; 4];
        let upper = [UpperBound::Unbounded; 4];
        let active = [0, 1, 2, 3];
        assert_eq!(
            select(&g, &active, &lower, &upper, SelectionPolicy::LargestUpperBound),
            Some(3)
        );
        assert_eq!(
            select(&g, &active, &lower, &upper, SelectionPolicy::SmallestLowerBound),
            Some(3)
        );
    }

    #[test]
    fn test_bound_wins_over_degree() {
        let g = graph();
        let lower = [1, 2, 1, 1].map(LowerBound::Finite);
        let upper = [3, 3, 4, 2].map(UpperBound::Finite);
        let active = [0, 1, 2, 3];
        assert_eq!(
            select(&g, &active, &lower, &upper, SelectionPolicy::LargestUpperBound),
            Some(2)
        );
        // 0, 2 and 3 have lower bound 1; 3 has the largest degree
        assert_eq!(
            select(&g, &active, &lower, &upper, SelectionPolicy::SmallestLowerBound),
            Some(3)
        );
        // Without 3, 0 has degree 2 and 2 has degree 1
        assert_eq!(
            select(&g, &[0, 1, 2], &lower, &upper, SelectionPolicy::SmallestLowerBound),
            Some(0)
        );
    }

    #[test]
    fn test_full_ties_pick_first() {
        let g = graph();
        let lower = [LowerBound::Finite(2); 4];
        let upper = [UpperBound::Finite(4); 4];
        // 0 and 1 have the same bounds and degree
        assert_eq!(
            select(&g, &[0, 1], &lower, &upper, SelectionPolicy::LargestUpperBound),
            Some(0)
        );
        assert_eq!(
            select(&g, &[1, 0], &lower, &upper, SelectionPolicy::SmallestLowerBound),
            Some(1)
        );
    }
}
