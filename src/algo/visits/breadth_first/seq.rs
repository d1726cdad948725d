/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    breadth_first::{EventNoPred, FilterArgsNoPred},
    Sequential,
};
use nonmax::NonMaxUsize;
use std::{collections::VecDeque, ops::ControlFlow, ops::ControlFlow::Continue};
use sux::bits::BitVec;
use webgraph::traits::RandomAccessGraph;

/// A sequential breadth-first visit.
///
/// This implementation uses an algorithm that is slightly different from the
/// classical textbook algorithm, as we do not store distances of the nodes
/// from the root: distances are computed on the fly and passed to the callback
/// function by visiting nodes when they are discovered, rather than when they
/// are extracted from the queue.
///
/// This approach requires inserting a level separator between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// # Examples
///
/// Let's compute the distances from 0:
///
/// ```
/// use bounding_diameters::algo::visits::{breadth_first, Sequential};
/// use no_break::{NoBreak, Unbreakable};
/// use std::ops::ControlFlow::{self, Continue};
/// use webgraph::graphs::vec_graph::VecGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = breadth_first::SeqNoPred::new(&graph);
/// let mut d = [0; 4];
/// visit
///     .visit([0], |event| -> ControlFlow<Unbreakable, ()> {
///         if let breadth_first::EventNoPred::Unknown { node, distance } = event {
///             d[node] = distance;
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(d, [0, 1, 2, 2]);
/// ```
pub struct SeqNoPred<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels. [`NonMaxUsize`] is used to avoid
    /// storage for the option variant tag.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<G: RandomAccessGraph> SeqNoPred<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    /// Returns the number of nodes of the underlying graph.
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }
}

impl<G: RandomAccessGraph> Sequential<EventNoPred> for SeqNoPred<G> {
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(EventNoPred) -> ControlFlow<E, ()>,
        F: FnMut(FilterArgsNoPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.queue.clear();

        for root in roots {
            if self.visited[root]
                || !filter(FilterArgsNoPred {
                    node: root,
                    distance: 0,
                })
            {
                continue;
            }

            // We call the init event only if there are some non-filtered roots
            if self.queue.is_empty() {
                callback(EventNoPred::Init {})?;
            }

            self.visited.set(root, true);
            self.queue.push_back(Some(
                NonMaxUsize::new(root).expect("node index should never be usize::MAX"),
            ));

            callback(EventNoPred::Unknown {
                node: root,
                distance: 0,
            })?;
        }

        if self.queue.is_empty() {
            return Continue(());
        }

        callback(EventNoPred::DistanceChanged {
            distance: 0,
            nodes: self.queue.len(),
        })?;

        // Insert marker
        self.queue.push_back(None);
        let mut distance = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.get();
                    for succ in self.graph.successors(node) {
                        if !self.visited[succ] {
                            if filter(FilterArgsNoPred {
                                node: succ,
                                distance,
                            }) {
                                self.visited.set(succ, true);
                                callback(EventNoPred::Unknown {
                                    node: succ,
                                    distance,
                                })?;
                                self.queue.push_back(Some(
                                    NonMaxUsize::new(succ)
                                        .expect("node index should never be usize::MAX"),
                                ))
                            }
                        } else {
                            callback(EventNoPred::Known { node: succ })?;
                        }
                    }
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !self.queue.is_empty() {
                        callback(EventNoPred::DistanceChanged {
                            distance,
                            nodes: self.queue.len(),
                        })?;
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }

        callback(EventNoPred::Done {})
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
