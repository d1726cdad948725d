/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! An implementation of the *BoundingDiameters* algorithm.
//!
//! The algorithm has been described by Frank W. Takes and Walter A. Kosters in
//! “[Determining the diameter of small world
//! networks](https://doi.org/10.1145/2063576.2063748)”, *Proceedings of the
//! 20th ACM International Conference on Information and Knowledge
//! Management*, pages 1191–1196, ACM, 2011.
//!
//! The diameter of a connected undirected graph is computed without visiting
//! the graph from every node: at each iteration a node is selected, alternately
//! maximizing the upper bound or minimizing the lower bound on its
//! eccentricity, its eccentricity is computed by a breadth-first visit, and
//! the distances from it are used to tighten the bounds on the eccentricities
//! of the remaining nodes. Nodes that cannot influence the bounds on the
//! diameter anymore are discarded, and the computation stops when the bounds
//! on the diameter coincide.
//!
//! # Examples
//!
//! ```
//! use bounding_diameters::algo::bounding_diameters::run;
//! use dsi_progress_logger::no_logging;
//! use webgraph::graphs::vec_graph::VecGraph;
//!
//! // A path with four nodes
//! let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2), (2, 1), (2, 3), (3, 2)]);
//! let result = run(&graph, no_logging![]).unwrap();
//! assert_eq!(result.diameter, 3);
//! ```

mod bounds;
pub use bounds::*;

mod computer;
pub use computer::*;

mod eccentricity;
pub use eccentricity::*;

mod error;
pub use error::DiameterError;

mod output;
pub use output::Diameter;

mod selector;
pub use selector::*;

mod sink;
pub use sink::*;

use dsi_progress_logger::ProgressLog;
use webgraph::traits::RandomAccessGraph;

/// Computes the diameter of a connected undirected graph.
///
/// # Arguments
/// * `graph`: the graph; it must be symmetric.
/// * `pl`: a progress logger.
///
/// # Errors
///
/// [`DiameterError::NotConnected`] if the graph is not connected.
pub fn run<G: RandomAccessGraph>(
    graph: &G,
    pl: &mut impl ProgressLog,
) -> Result<Diameter, DiameterError> {
    run_with_sink(graph, NoSink, pl)
}

/// Computes the diameter of a connected undirected graph, passing the state
/// of each iteration to a sink.
///
/// See [`run`].
pub fn run_with_sink<G: RandomAccessGraph>(
    graph: &G,
    mut sink: impl IterationSink,
    pl: &mut impl ProgressLog,
) -> Result<Diameter, DiameterError> {
    let mut computer = BoundingDiametersComputer::new(graph);
    computer.compute(&mut sink, pl)
}
