/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Eccentricity;
use std::fmt;

/// A lower bound on an eccentricity or on the diameter.
///
/// The derived order places [`Unbounded`](LowerBound::Unbounded) below every
/// finite bound, so that [`Ord::max`] tightens a bound.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum LowerBound {
    /// Nothing is known yet (−∞).
    Unbounded,
    /// The quantity is at least this value.
    Finite(usize),
}

/// An upper bound on an eccentricity or on the diameter.
///
/// The derived order places [`Unbounded`](UpperBound::Unbounded) above every
/// finite bound, so that [`Ord::min`] tightens a bound.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum UpperBound {
    /// The quantity is at most this value.
    Finite(usize),
    /// Nothing is known yet (+∞).
    Unbounded,
}

impl LowerBound {
    /// Returns the value of the bound, or [`None`] if it is unbounded.
    pub fn finite(self) -> Option<usize> {
        match self {
            LowerBound::Unbounded => None,
            LowerBound::Finite(value) => Some(value),
        }
    }
}

impl UpperBound {
    /// Returns the value of the bound, or [`None`] if it is unbounded.
    pub fn finite(self) -> Option<usize> {
        match self {
            UpperBound::Finite(value) => Some(value),
            UpperBound::Unbounded => None,
        }
    }
}

impl fmt::Display for LowerBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowerBound::Unbounded => f.write_str("-∞"),
            LowerBound::Finite(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperBound::Finite(value) => write!(f, "{}", value),
            UpperBound::Unbounded => f.write_str("∞"),
        }
    }
}

/// Returns true if a node with eccentricity bounds `low` and `high` can leave
/// the active set, given the bounds `diameter_low` and `diameter_high` on the
/// diameter.
///
/// A node is removed when its eccentricity is pinned (`low == high`), or when
/// it can improve neither diameter bound, that is, `high ≤ diameter_low` and
/// `low ≥ diameter_high / 2`. The latter comparison is evaluated as
/// `2 · low ≥ diameter_high`, which is exact on integers.
///
/// Unbounded values never allow a removal.
pub fn is_removable(
    low: LowerBound,
    high: UpperBound,
    diameter_low: LowerBound,
    diameter_high: UpperBound,
) -> bool {
    let (LowerBound::Finite(low), UpperBound::Finite(high)) = (low, high) else {
        return false;
    };
    if low == high {
        return true;
    }
    match (diameter_low, diameter_high) {
        (LowerBound::Finite(diameter_low), UpperBound::Finite(diameter_high)) => {
            high <= diameter_low && 2 * low >= diameter_high
        }
        _ => false,
    }
}

/// The state of the bounds of the *BoundingDiameters* algorithm.
///
/// The tracker owns the lower and upper bounds on the eccentricity of every
/// node, the set of active nodes (those still able to influence the diameter
/// bounds), and the lower and upper bounds on the diameter. All bounds only
/// tighten over time.
#[derive(Debug, Clone)]
pub struct BoundTracker {
    /// The lower bounds on the eccentricities.
    lower: Box<[LowerBound]>,
    /// The upper bounds on the eccentricities.
    upper: Box<[UpperBound]>,
    /// The active nodes, in increasing order.
    active: Vec<usize>,
    /// The lower bound on the diameter.
    diameter_low: LowerBound,
    /// The upper bound on the diameter.
    diameter_high: UpperBound,
}

impl BoundTracker {
    /// Creates a tracker for a graph with `num_nodes` nodes, in which all
    /// nodes are active and all bounds are unbounded.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            lower: vec![LowerBound::Unbounded; num_nodes].into_boxed_slice(),
            upper: vec![UpperBound::Unbounded; num_nodes].into_boxed_slice(),
            active: (0..num_nodes).collect(),
            diameter_low: LowerBound::Unbounded,
            diameter_high: UpperBound::Unbounded,
        }
    }

    /// Returns the lower bounds on the eccentricities.
    pub fn lower(&self) -> &[LowerBound] {
        &self.lower
    }

    /// Returns the upper bounds on the eccentricities.
    pub fn upper(&self) -> &[UpperBound] {
        &self.upper
    }

    /// Returns the active nodes in increasing order.
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Returns the lower bound on the diameter.
    pub fn diameter_low(&self) -> LowerBound {
        self.diameter_low
    }

    /// Returns the upper bound on the diameter.
    pub fn diameter_high(&self) -> UpperBound {
        self.diameter_high
    }

    /// Returns true if the diameter bounds coincide.
    pub fn bounds_meet(&self) -> bool {
        matches!(
            (self.diameter_low, self.diameter_high),
            (LowerBound::Finite(low), UpperBound::Finite(high)) if low == high
        )
    }

    /// Returns true if the diameter is determined, that is, if the diameter
    /// bounds coincide or there are no more active nodes.
    pub fn is_converged(&self) -> bool {
        self.active.is_empty() || self.bounds_meet()
    }

    /// Tightens the bounds using the eccentricity of a probed node and its
    /// distances to all other nodes, and returns the nodes removed from the
    /// active set, in increasing order.
    ///
    /// The diameter bounds are updated first; then for each active node `w`
    /// at distance `d` from the probed node, whose eccentricity is `e`,
    /// the lower bound becomes at least max(`e` − `d`, `d`) and the upper
    /// bound at most `e` + `d`. Finally, removable nodes (see
    /// [`is_removable`]) leave the active set.
    ///
    /// # Panics
    ///
    /// If the distance vector is shorter than the number of nodes.
    pub fn update(&mut self, eccentricity: &Eccentricity) -> Vec<usize> {
        let ecc = eccentricity.eccentricity;
        let distances = &eccentricity.distances;

        self.diameter_low = self.diameter_low.max(LowerBound::Finite(ecc));
        self.diameter_high = self.diameter_high.min(UpperBound::Finite(2 * ecc));

        let Self {
            lower,
            upper,
            active,
            diameter_low,
            diameter_high,
        } = self;

        let mut removed = Vec::new();
        active.retain(|&node| {
            let d = distances[node];
            debug_assert!(d <= ecc, "distance {} exceeds eccentricity {}", d, ecc);

            let low = lower[node].max(LowerBound::Finite((ecc - d).max(d)));
            let high = upper[node].min(UpperBound::Finite(ecc + d));
            debug_assert!(low >= lower[node] && high <= upper[node]);
            lower[node] = low;
            upper[node] = high;

            if is_removable(low, high, *diameter_low, *diameter_high) {
                removed.push(node);
                false
            } else {
                true
            }
        });

        removed
    }
}
