/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use webgraph::graphs::vec_graph::VecGraph;
use webgraph::traits::{RandomAccessLabeling, SequentialLabeling};

/// Errors that can occur while loading an edge list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The edge list could not be read.
    #[error("Cannot read edge list: {0}")]
    Io(#[from] std::io::Error),
}

/// A symmetric graph whose nodes have names.
///
/// Node identifiers are assigned to names in order of first appearance.
#[derive(Debug, Clone)]
pub struct NamedGraph {
    /// The graph; it is symmetric, and has no loops or duplicate arcs.
    pub graph: VecGraph,
    /// The name of each node.
    pub names: Vec<String>,
    ids: HashMap<String, usize>,
}

/// Accumulates edges, assigning identifiers to names.
#[derive(Default)]
struct Builder {
    names: Vec<String>,
    ids: HashMap<String, usize>,
    arcs: BTreeSet<(usize, usize)>,
}

impl Builder {
    fn id(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    fn add_edge(&mut self, source: &str, target: &str) {
        let source = self.id(source);
        let target = self.id(target);
        // Loops do not change distances
        if source != target {
            self.arcs.insert((source, target));
            self.arcs.insert((target, source));
        }
    }

    fn build(self) -> NamedGraph {
        let mut graph = VecGraph::empty(self.names.len());
        graph.add_arcs(self.arcs);
        NamedGraph {
            graph,
            names: self.names,
            ids: self.ids,
        }
    }
}

impl NamedGraph {
    /// Builds a graph from a list of undirected edges between named nodes.
    ///
    /// # Examples
    /// ```
    /// # use bounding_diameters::io::NamedGraph;
    /// let graph = NamedGraph::from_edges([("a", "b"), ("b", "c"), ("c", "b")]);
    /// assert_eq!(graph.num_nodes(), 3);
    /// assert_eq!(graph.num_edges(), 2);
    /// assert_eq!(graph.node_id("c"), Some(2));
    /// ```
    pub fn from_edges<S: AsRef<str>>(edges: impl IntoIterator<Item = (S, S)>) -> Self {
        let mut builder = Builder::default();
        for (source, target) in edges {
            builder.add_edge(source.as_ref(), target.as_ref());
        }
        builder.build()
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Returns the number of undirected edges.
    pub fn num_edges(&self) -> usize {
        (self.graph.num_arcs() / 2) as usize
    }

    /// Returns the identifier of the node with the given name.
    pub fn node_id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Returns the name of a node.
    pub fn name(&self, node: usize) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }
}

/// Reads an undirected graph from a list of edges.
///
/// Each line contains the names of the two endpoints of an edge separated by
/// `separator`; further columns are ignored. Empty lines and lines starting
/// with `comment` are skipped, and so are, with a warning, lines with fewer
/// than two columns. Loops are discarded, and edges appearing several times
/// (in any direction) are added once.
pub fn load_edge_list(
    reader: impl BufRead,
    separator: char,
    comment: char,
) -> Result<NamedGraph, LoadError> {
    let mut builder = Builder::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(comment) {
            continue;
        }

        let mut columns = line.split(separator).map(str::trim);
        match (columns.next(), columns.next()) {
            (Some(source), Some(target)) if !source.is_empty() && !target.is_empty() => {
                builder.add_edge(source, target)
            }
            _ => log::warn!(
                "Line {}: {:?} does not contain two columns separated by {:?}",
                line_num + 1,
                line,
                separator
            ),
        }
    }

    Ok(builder.build())
}

/// Reads an undirected graph from a file containing a list of edges.
///
/// See [`load_edge_list`].
pub fn load_edge_list_file(
    path: impl AsRef<Path>,
    separator: char,
    comment: char,
) -> Result<NamedGraph, LoadError> {
    let file = File::open(path)?;
    load_edge_list(BufReader::new(file), separator, comment)
}
