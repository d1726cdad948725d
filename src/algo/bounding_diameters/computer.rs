/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::*;
use crate::utils::check_symmetric;
use dsi_progress_logger::ProgressLog;
use webgraph::traits::RandomAccessGraph;

/// The state of a [`BoundingDiametersComputer`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum State {
    /// The diameter is not known yet.
    Running,
    /// The diameter bounds coincide or no node is active.
    Converged,
}

/// The implementation of the *BoundingDiameters* algorithm on undirected
/// graphs.
///
/// Each [`step`](Self::step) performs one iteration atomically: it selects a
/// node, computes its eccentricity, and tightens the bounds. Callers that need
/// to stop the computation (e.g., on a deadline) can do so between steps;
/// [`compute`](Self::compute) runs steps until convergence.
pub struct BoundingDiametersComputer<'a, G: RandomAccessGraph> {
    graph: &'a G,
    oracle: EccentricityOracle<&'a G>,
    bounds: BoundTracker,
    /// Number of iterations performed until now.
    iterations: usize,
    /// A probed node whose eccentricity equals the lower bound on the diameter.
    diametral_vertex: Option<usize>,
    state: State,
}

impl<'a, G: RandomAccessGraph> BoundingDiametersComputer<'a, G> {
    /// Creates a new computer.
    ///
    /// # Arguments
    /// * `graph`: the graph; it must be symmetric.
    pub fn new(graph: &'a G) -> Self {
        debug_assert!(check_symmetric(graph), "graph should be symmetric");

        let bounds = BoundTracker::new(graph.num_nodes());
        let state = if bounds.is_converged() {
            State::Converged
        } else {
            State::Running
        };

        Self {
            graph,
            oracle: EccentricityOracle::new(graph),
            bounds,
            iterations: 0,
            diametral_vertex: None,
            state,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the number of iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the current bounds.
    pub fn bounds(&self) -> &BoundTracker {
        &self.bounds
    }

    /// Performs one iteration and returns the resulting state.
    ///
    /// After convergence this method does nothing.
    ///
    /// # Errors
    ///
    /// [`DiameterError::NotConnected`] if the graph is not connected; in this
    /// case no bound has been modified.
    pub fn step(&mut self, sink: &mut impl IterationSink) -> Result<State, DiameterError> {
        if self.state == State::Converged {
            return Ok(State::Converged);
        }

        let policy = SelectionPolicy::for_iteration(self.iterations);
        let Some(node) = select(
            self.graph,
            self.bounds.active(),
            self.bounds.lower(),
            self.bounds.upper(),
            policy,
        ) else {
            self.state = State::Converged;
            return Ok(self.state);
        };

        let eccentricity = self.oracle.eccentricity(node)?;

        if LowerBound::Finite(eccentricity.eccentricity) > self.bounds.diameter_low() {
            self.diametral_vertex = Some(node);
        }
        let removed = self.bounds.update(&eccentricity);

        sink.report(&IterationReport {
            iteration: self.iterations,
            policy,
            probed: node,
            eccentricity: eccentricity.eccentricity,
            active: self.bounds.active(),
            removed: &removed,
            lower: self.bounds.lower(),
            upper: self.bounds.upper(),
            diameter_low: self.bounds.diameter_low(),
            diameter_high: self.bounds.diameter_high(),
        });

        self.iterations += 1;
        if self.bounds.is_converged() {
            self.state = State::Converged;
        }
        Ok(self.state)
    }

    /// Runs the algorithm until convergence and returns the result.
    ///
    /// # Arguments
    /// * `sink`: a receiver of per-iteration diagnostics.
    /// * `pl`: a progress logger; each visit is an update.
    pub fn compute(
        &mut self,
        sink: &mut impl IterationSink,
        pl: &mut impl ProgressLog,
    ) -> Result<Diameter, DiameterError> {
        if self.state == State::Converged {
            return Ok(self.diameter());
        }

        pl.item_name("visit");
        pl.expected_updates(Some(self.graph.num_nodes()));
        pl.start("Computing BoundingDiameters...");

        while self.state == State::Running {
            self.step(sink)?;
            pl.update();
            pl.info(format_args!(
                "Lower bound: {} Upper bound: {} Active nodes: {}",
                self.bounds.diameter_low(),
                self.bounds.diameter_high(),
                self.bounds.active().len()
            ));
        }

        pl.done();
        Ok(self.diameter())
    }

    /// Returns the result, or [`None`] if the computation has not converged
    /// yet.
    pub fn output(&self) -> Option<Diameter> {
        (self.state == State::Converged).then(|| self.diameter())
    }

    fn diameter(&self) -> Diameter {
        Diameter {
            diameter: self.bounds.diameter_low().finite().unwrap_or(0),
            diametral_vertex: self.diametral_vertex,
            iterations: self.iterations,
        }
    }
}
