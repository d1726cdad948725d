/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{ensure, Context, Result};
use bounding_diameters::algo::bounding_diameters::{
    brute_force_diameter, run, run_with_sink, LogSink,
};
use bounding_diameters::io::{load_edge_list, load_edge_list_file, NamedGraph};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    about = "Computes the exact diameter of an undirected graph using the BoundingDiameters algorithm. The graph is read as a list of edges, one per line, each specified by the names of its endpoints separated by a TAB (but the separator is customizable). The graph must be connected.",
    version
)]
struct CliArgs {
    /// The file containing the edge list; if missing, the list is read from
    /// standard input.
    path: Option<PathBuf>,

    #[arg(long, default_value_t = '\t')]
    /// The column separator.
    separator: char,

    #[arg(long, default_value_t = '#')]
    /// Ignore lines that start with this symbol.
    comment: char,

    #[arg(short, long)]
    /// Log the bounds and the active nodes at each iteration.
    trace: bool,

    #[arg(long)]
    /// Check the result against the maximum of all eccentricities (quadratic).
    check: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    /// Increase the verbosity of logging.
    verbose: u8,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut verbosity = 2 + args.verbose as usize;
    if args.trace {
        verbosity = verbosity.max(3);
    }
    stderrlog::new()
        .verbosity(verbosity)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let graph: NamedGraph = match &args.path {
        Some(path) => {
            log::info!("Reading edges from {}...", path.display());
            load_edge_list_file(path, args.separator, args.comment)
                .with_context(|| format!("Cannot load {}", path.display()))?
        }
        None => {
            log::info!("Reading edges from stdin...");
            load_edge_list(std::io::stdin().lock(), args.separator, args.comment)?
        }
    };
    log::info!(
        "Read {} vertices and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    let mut pl = progress_logger![display_memory = true];
    let result = if args.trace {
        run_with_sink(&graph.graph, LogSink::with_names(&graph.names), &mut pl)?
    } else {
        run(&graph.graph, &mut pl)?
    };

    println!("Diameter: {}", result.diameter);
    if let Some(node) = result.diametral_vertex {
        println!("Diametral vertex: {}", graph.name(node).unwrap_or("?"));
    }
    println!("Iterations: {}", result.iterations);

    if args.check {
        let expected = brute_force_diameter(&graph.graph)?;
        ensure!(
            expected == result.diameter,
            "BoundingDiameters computed {} but the maximum eccentricity is {}",
            result.diameter,
            expected
        );
        log::info!("Check passed");
    }

    Ok(())
}
