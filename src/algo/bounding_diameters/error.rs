/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use thiserror::Error;

/// Errors that can occur while computing eccentricities or the diameter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiameterError {
    /// Some nodes cannot be reached from a probed node, so the graph has no
    /// finite diameter.
    #[error("Graph not connected: only {reached} out of {num_nodes} nodes are reachable from node {root}")]
    NotConnected {
        root: usize,
        reached: usize,
        num_nodes: usize,
    },

    /// A node index is not smaller than the number of nodes.
    #[error("Node {node} does not exist (the graph has {num_nodes} nodes)")]
    NodeOutOfBounds { node: usize, num_nodes: usize },
}
