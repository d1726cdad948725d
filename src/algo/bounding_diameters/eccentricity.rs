/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::DiameterError;
use crate::algo::visits::{
    breadth_first::{EventNoPred, SeqNoPred},
    Sequential,
};
use no_break::{NoBreak, Unbreakable};
use rayon::prelude::*;
use std::{ops::ControlFlow, ops::ControlFlow::Continue};
use webgraph::traits::RandomAccessGraph;

/// The eccentricity of a node, together with the distances from the node to
/// all other nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eccentricity {
    /// The node from which distances were computed.
    pub root: usize,
    /// The maximum distance from [`root`](Self::root).
    pub eccentricity: usize,
    /// The distance from [`root`](Self::root) of every node.
    pub distances: Box<[usize]>,
}

/// Computes eccentricities by breadth-first visits.
///
/// The oracle owns the visit, so the visit state is allocated once and reused
/// for every probe.
pub struct EccentricityOracle<G: RandomAccessGraph> {
    visit: SeqNoPred<G>,
}

impl<G: RandomAccessGraph> EccentricityOracle<G> {
    /// Creates a new oracle.
    ///
    /// # Arguments
    /// * `graph`: the graph; it must be symmetric.
    pub fn new(graph: G) -> Self {
        Self {
            visit: SeqNoPred::new(graph),
        }
    }

    /// Returns the number of nodes of the graph.
    pub fn num_nodes(&self) -> usize {
        self.visit.num_nodes()
    }

    /// Computes the eccentricity of `root` and its distances to all nodes.
    ///
    /// # Errors
    ///
    /// [`DiameterError::NodeOutOfBounds`] if `root` is not a node of the
    /// graph, and [`DiameterError::NotConnected`] if some node is not
    /// reachable from `root`.
    pub fn eccentricity(&mut self, root: usize) -> Result<Eccentricity, DiameterError> {
        let num_nodes = self.num_nodes();
        if root >= num_nodes {
            return Err(DiameterError::NodeOutOfBounds {
                node: root,
                num_nodes,
            });
        }

        self.visit.reset();
        let mut distances = vec![0; num_nodes].into_boxed_slice();
        let mut reached = 0;
        let mut eccentricity = 0;

        self.visit
            .visit([root], |event| -> ControlFlow<Unbreakable, ()> {
                if let EventNoPred::Unknown { node, distance } = event {
                    distances[node] = distance;
                    reached += 1;
                    // Nodes are discovered by nondecreasing distance
                    eccentricity = distance;
                }
                Continue(())
            })
            .continue_value_no_break();

        if reached != num_nodes {
            return Err(DiameterError::NotConnected {
                root,
                reached,
                num_nodes,
            });
        }

        Ok(Eccentricity {
            root,
            eccentricity,
            distances,
        })
    }
}

/// Computes the eccentricity of `root` in `graph`.
///
/// This is a convenience wrapper around [`EccentricityOracle`]; when computing
/// several eccentricities of the same graph, create an oracle instead.
pub fn eccentricity(
    graph: impl RandomAccessGraph,
    root: usize,
) -> Result<Eccentricity, DiameterError> {
    EccentricityOracle::new(graph).eccentricity(root)
}

/// Computes the eccentricities of all nodes with one breadth-first visit per
/// node, in parallel.
///
/// This is the exhaustive reference against which the *BoundingDiameters*
/// algorithm can be checked; it is quadratic, so it is practical only on
/// small graphs. Visits run on the current [rayon] thread pool.
pub fn all_eccentricities<G: RandomAccessGraph + Sync>(
    graph: &G,
) -> Result<Box<[usize]>, DiameterError> {
    (0..graph.num_nodes())
        .into_par_iter()
        .map_init(
            || EccentricityOracle::new(graph),
            |oracle, node| oracle.eccentricity(node).map(|e| e.eccentricity),
        )
        .collect::<Result<Vec<_>, _>>()
        .map(Vec::into_boxed_slice)
}

/// Computes the diameter as the maximum of all eccentricities.
///
/// The diameter of the empty graph is zero.
pub fn brute_force_diameter<G: RandomAccessGraph + Sync>(graph: &G) -> Result<usize, DiameterError> {
    Ok(all_eccentricities(graph)?.iter().copied().max().unwrap_or(0))
}
