/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![allow(dead_code)]

use bounding_diameters::io::NamedGraph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use webgraph::graphs::vec_graph::VecGraph;

/// The edges of the 19-vertex sample graph used in the documentation of the
/// algorithm.
pub const SAMPLE_EDGES: [(&str, &str); 22] = [
    ("A", "C"),
    ("B", "C"),
    ("B", "E"),
    ("C", "D"),
    ("C", "F"),
    ("D", "F"),
    ("E", "F"),
    ("E", "G"),
    ("F", "J"),
    ("F", "H"),
    ("F", "L"),
    ("G", "J"),
    ("G", "I"),
    ("H", "K"),
    ("L", "M"),
    ("L", "N"),
    ("L", "P"),
    ("N", "P"),
    ("P", "Q"),
    ("P", "R"),
    ("Q", "S"),
    ("S", "T"),
];

pub fn sample() -> NamedGraph {
    NamedGraph::from_edges(SAMPLE_EDGES)
}

/// Builds a symmetric graph with `num_nodes` nodes from undirected edges.
pub fn symmetric(num_nodes: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> VecGraph {
    let mut arcs = BTreeSet::new();
    for (u, v) in edges {
        if u != v {
            arcs.insert((u, v));
            arcs.insert((v, u));
        }
    }
    let mut graph = VecGraph::empty(num_nodes);
    graph.add_arcs(arcs);
    graph
}

pub fn path(num_nodes: usize) -> VecGraph {
    symmetric(num_nodes, (1..num_nodes).map(|i| (i - 1, i)))
}

pub fn cycle(num_nodes: usize) -> VecGraph {
    symmetric(num_nodes, (0..num_nodes).map(|i| (i, (i + 1) % num_nodes)))
}

pub fn star(num_leaves: usize) -> VecGraph {
    symmetric(num_leaves + 1, (1..=num_leaves).map(|i| (0, i)))
}

pub fn complete(num_nodes: usize) -> VecGraph {
    symmetric(
        num_nodes,
        (0..num_nodes).flat_map(|u| (u + 1..num_nodes).map(move |v| (u, v))),
    )
}

/// Returns the edges of a random connected graph: a random tree plus
/// `extra_edges` random edges.
pub fn random_connected_edges(
    num_nodes: usize,
    extra_edges: usize,
    seed: u64,
) -> Vec<(usize, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for v in 1..num_nodes {
        edges.push((rng.random_range(0..v), v));
    }
    if num_nodes > 1 {
        for _ in 0..extra_edges {
            edges.push((rng.random_range(0..num_nodes), rng.random_range(0..num_nodes)));
        }
    }
    edges
}

pub fn random_connected(num_nodes: usize, extra_edges: usize, seed: u64) -> VecGraph {
    symmetric(num_nodes, random_connected_edges(num_nodes, extra_edges, seed))
}
