/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Utilities.

use webgraph::traits::RandomAccessGraph;

/// Returns true if for every arc of `graph` the reverse arc is present, that
/// is, if `graph` represents an undirected graph.
///
/// # Examples
/// ```
/// # use bounding_diameters::utils::check_symmetric;
/// # use webgraph::graphs::vec_graph::VecGraph;
/// assert!(check_symmetric(&VecGraph::from_arcs([(0, 1), (1, 0)])));
/// assert!(!check_symmetric(&VecGraph::from_arcs([(0, 1), (1, 2), (2, 1)])));
/// ```
pub fn check_symmetric(graph: &impl RandomAccessGraph) -> bool {
    (0..graph.num_nodes()).all(|node| {
        graph
            .successors(node)
            .into_iter()
            .all(|succ| graph.successors(succ).into_iter().any(|pred| pred == node))
    })
}
