/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms on undirected graphs.

pub mod bounding_diameters;

pub mod visits;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    pub use super::bounding_diameters::IterationSink;
    pub use super::visits::{Event, Sequential};
}
