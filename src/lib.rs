/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Exact computation of the diameter of undirected graphs using the
//! *BoundingDiameters* algorithm.
//!
//! Graphs are [WebGraph](webgraph) graphs implementing
//! [`RandomAccessGraph`](webgraph::traits::RandomAccessGraph); they must be
//! symmetric. Graphs with named nodes can be read from edge lists using
//! [`io::load_edge_list`].

pub mod algo;
pub mod io;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    pub use super::algo::traits::*;
}

/// Use `use bounding_diameters::prelude::*;` to import common utilities,
/// modules and all traits.
pub mod prelude {
    pub use super::algo::bounding_diameters::{
        run, run_with_sink, BoundingDiametersComputer, Diameter, DiameterError, LogSink, NoSink,
        Recorder,
    };
    pub use super::algo::visits::breadth_first;
    pub use super::io::{load_edge_list, load_edge_list_file, LoadError, NamedGraph};
    pub use super::traits::*;
    pub use super::utils::check_symmetric;
}
