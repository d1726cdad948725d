/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use bounding_diameters::algo::bounding_diameters::IterationReport;
use bounding_diameters::prelude::*;
use dsi_progress_logger::no_logging;
use no_break::{NoBreak, Unbreakable};
use std::io::Cursor;
use std::ops::ControlFlow::{self, Continue};

/// A sink counting reports, used through the re-exported trait.
struct Counter(usize);

impl IterationSink for Counter {
    fn report(&mut self, _report: &IterationReport<'_>) {
        self.0 += 1;
    }
}

#[test]
fn test_prelude() -> Result<()> {
    let graph = load_edge_list(Cursor::new("a\tb\nb\tc\nc\td\n"), '\t', '#')?;
    assert!(check_symmetric(&graph.graph));

    let mut counter = Counter(0);
    let result: Diameter = run_with_sink(&graph.graph, &mut counter, no_logging![])?;
    assert_eq!(result.diameter, 3);
    assert_eq!(counter.0, result.iterations);
    assert_eq!(run(&graph.graph, no_logging![])?, result);

    let mut recorder = Recorder::new();
    let mut computer = BoundingDiametersComputer::new(&graph.graph);
    assert_eq!(computer.compute(&mut recorder, no_logging![])?, result);
    assert_eq!(recorder.snapshots().len(), result.iterations);
    Ok(())
}

#[test]
fn test_traits() {
    use bounding_diameters::traits::*;

    let graph = common::path(4);
    let mut visit = breadth_first::SeqNoPred::new(&graph);
    let mut count = 0;
    visit
        .visit([3], |event| -> ControlFlow<Unbreakable, ()> {
            if let breadth_first::EventNoPred::Unknown { .. } = event {
                count += 1;
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(count, 4);
}

#[test]
fn test_not_connected() {
    let graph = NamedGraph::from_edges([("a", "b"), ("c", "d")]);
    assert!(matches!(
        run(&graph.graph, no_logging![]),
        Err(DiameterError::NotConnected { .. })
    ));
}
