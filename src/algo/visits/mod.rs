/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! A visit is driven by a callback receiving events of a type implementing
//! [`Event`], and by a filter receiving the associated
//! [`FilterArgs`](Event::FilterArgs). The callback returns a
//! [`ControlFlow`]: returning [`Break`](ControlFlow::Break) stops the visit
//! immediately and the break value is returned to the caller. Visits that
//! cannot be interrupted use [`Unbreakable`](no_break::Unbreakable) as break
//! type, and their result can be unwrapped with
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).

pub mod breadth_first;

use std::ops::ControlFlow;

/// Types of callback events generated during a visit.
pub trait Event {
    /// The type of the arguments passed to the filter.
    type FilterArgs;
}

/// A sequential visit.
///
/// Implementations must provide the
/// [`visit_filtered`](Sequential::visit_filtered) method, which visits the
/// graph starting from the given roots, invoking the callback on each event
/// and skipping nodes rejected by the filter.
///
/// Nodes visited by a previous call are not visited again until
/// [`reset`](Sequential::reset) is called.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified roots, using a filter.
    ///
    /// # Arguments
    ///
    /// * `roots`: the nodes to start the visit from.
    ///
    /// * `callback`: the callback function; returning
    ///   [`Break`](ControlFlow::Break) interrupts the visit.
    ///
    /// * `filter`: a function returning false for nodes that must not be
    ///   visited.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified roots.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered).
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
