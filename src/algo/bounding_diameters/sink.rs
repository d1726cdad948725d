/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{LowerBound, SelectionPolicy, UpperBound};

/// The state of the algorithm at the end of an iteration.
///
/// The slices borrow from the computer, so a report is valid only during the
/// call to [`IterationSink::report`]; use [`to_snapshot`](Self::to_snapshot)
/// to keep it.
#[derive(Debug, Clone, Copy)]
pub struct IterationReport<'a> {
    /// The index of the iteration, starting from zero.
    pub iteration: usize,
    /// The policy used to select the probed node.
    pub policy: SelectionPolicy,
    /// The probed node.
    pub probed: usize,
    /// The eccentricity of the probed node.
    pub eccentricity: usize,
    /// The nodes still active after the iteration.
    pub active: &'a [usize],
    /// The nodes removed from the active set during the iteration.
    pub removed: &'a [usize],
    /// The lower bounds on the eccentricities.
    pub lower: &'a [LowerBound],
    /// The upper bounds on the eccentricities.
    pub upper: &'a [UpperBound],
    /// The lower bound on the diameter.
    pub diameter_low: LowerBound,
    /// The upper bound on the diameter.
    pub diameter_high: UpperBound,
}

/// An owned copy of an [`IterationReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationSnapshot {
    pub iteration: usize,
    pub policy: SelectionPolicy,
    pub probed: usize,
    pub eccentricity: usize,
    pub active: Box<[usize]>,
    pub removed: Box<[usize]>,
    pub lower: Box<[LowerBound]>,
    pub upper: Box<[UpperBound]>,
    pub diameter_low: LowerBound,
    pub diameter_high: UpperBound,
}

impl IterationReport<'_> {
    /// Copies the report into an owned snapshot.
    pub fn to_snapshot(&self) -> IterationSnapshot {
        IterationSnapshot {
            iteration: self.iteration,
            policy: self.policy,
            probed: self.probed,
            eccentricity: self.eccentricity,
            active: self.active.into(),
            removed: self.removed.into(),
            lower: self.lower.into(),
            upper: self.upper.into(),
            diameter_low: self.diameter_low,
            diameter_high: self.diameter_high,
        }
    }
}

/// A receiver of per-iteration diagnostics.
///
/// Sinks cannot influence the computation: [`report`](Self::report) returns
/// nothing, and sinks that perform I/O must handle their own failures.
pub trait IterationSink {
    /// Receives the state at the end of an iteration.
    fn report(&mut self, report: &IterationReport<'_>);
}

impl<S: IterationSink + ?Sized> IterationSink for &mut S {
    #[inline(always)]
    fn report(&mut self, report: &IterationReport<'_>) {
        (**self).report(report)
    }
}

/// A sink discarding all reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSink;

impl IterationSink for NoSink {
    #[inline(always)]
    fn report(&mut self, _report: &IterationReport<'_>) {}
}

/// A sink logging every report at debug level, optionally replacing node
/// indices with node names.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink<'a> {
    names: Option<&'a [String]>,
}

impl<'a> LogSink<'a> {
    /// Creates a sink logging node indices.
    pub fn new() -> Self {
        Self { names: None }
    }

    /// Creates a sink logging node names; `names[i]` is the name of node `i`.
    pub fn with_names(names: &'a [String]) -> Self {
        Self { names: Some(names) }
    }

    fn name(&self, node: usize) -> String {
        self.names
            .and_then(|names| names.get(node))
            .cloned()
            .unwrap_or_else(|| node.to_string())
    }

    fn names(&self, nodes: &[usize]) -> String {
        nodes
            .iter()
            .map(|&node| self.name(node))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl IterationSink for LogSink<'_> {
    fn report(&mut self, report: &IterationReport<'_>) {
        log::debug!(
            "Iteration {}: {} selected by {} and highest degree (eccentricity {})",
            report.iteration,
            self.name(report.probed),
            report.policy,
            report.eccentricity,
        );
        log::debug!(
            "ΔL = {}, ΔU = {}",
            report.diameter_low,
            report.diameter_high
        );
        log::debug!("Removed: [{}]", self.names(report.removed));
        log::debug!("Active: [{}]", self.names(report.active));
        if log::log_enabled!(log::Level::Trace) {
            for (node, (low, high)) in report.lower.iter().zip(report.upper).enumerate() {
                log::trace!("{}: [{}, {}]", self.name(node), low, high);
            }
        }
    }
}

/// A sink recording a snapshot of every report.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    snapshots: Vec<IterationSnapshot>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshots recorded so far.
    pub fn snapshots(&self) -> &[IterationSnapshot] {
        &self.snapshots
    }

    /// Returns the recorded snapshots.
    pub fn into_snapshots(self) -> Vec<IterationSnapshot> {
        self.snapshots
    }
}

impl IterationSink for Recorder {
    fn report(&mut self, report: &IterationReport<'_>) {
        self.snapshots.push(report.to_snapshot());
    }
}
