/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The result of the *BoundingDiameters* algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diameter {
    /// The diameter.
    pub diameter: usize,
    /// A probed vertex whose eccentricity equals the diameter, or [`None`] if
    /// the graph is empty.
    pub diametral_vertex: Option<usize>,
    /// Number of iterations (that is, of breadth-first visits) performed.
    pub iterations: usize,
}
