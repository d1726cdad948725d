/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use bounding_diameters::algo::visits::{
    breadth_first::{EventNoPred, FilterArgsNoPred, SeqNoPred},
    Sequential,
};
use no_break::{NoBreak, Unbreakable};
use std::ops::ControlFlow::{self, Break, Continue};

#[test]
fn test_events() {
    // 0 - 1 - 2 and 0 - 3
    let graph = common::symmetric(4, [(0, 1), (1, 2), (0, 3)]);
    let mut visit = SeqNoPred::new(&graph);
    let mut events = vec![];
    visit
        .visit([0], |event| -> ControlFlow<Unbreakable, ()> {
            events.push(event);
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(
        events,
        vec![
            EventNoPred::Init {},
            EventNoPred::Unknown {
                node: 0,
                distance: 0
            },
            EventNoPred::DistanceChanged {
                nodes: 1,
                distance: 0
            },
            EventNoPred::Unknown {
                node: 1,
                distance: 1
            },
            EventNoPred::Unknown {
                node: 3,
                distance: 1
            },
            EventNoPred::DistanceChanged {
                nodes: 2,
                distance: 1
            },
            EventNoPred::Known { node: 0 },
            EventNoPred::Unknown {
                node: 2,
                distance: 2
            },
            EventNoPred::Known { node: 0 },
            EventNoPred::DistanceChanged {
                nodes: 1,
                distance: 2
            },
            EventNoPred::Known { node: 1 },
            EventNoPred::Done {},
        ]
    );
}

#[test]
fn test_distances_match_levels() {
    let graph = common::random_connected(100, 50, 42);
    let mut visit = SeqNoPred::new(&graph);
    let mut last = 0;
    let mut count = 0;
    visit
        .visit([17], |event| -> ControlFlow<Unbreakable, ()> {
            if let EventNoPred::Unknown { distance, .. } = event {
                assert!(distance == last || distance == last + 1);
                last = distance;
                count += 1;
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(count, 100);
}

#[test]
fn test_break() {
    let graph = common::path(10);
    let mut visit = SeqNoPred::new(&graph);
    let result = visit.visit([0], |event| {
        if let EventNoPred::Unknown { node, distance } = event {
            if distance == 3 {
                return Break(node);
            }
        }
        Continue(())
    });
    assert_eq!(result, Break(3));
}

#[test]
fn test_filter_and_reset() {
    let graph = common::path(6);
    let mut visit = SeqNoPred::new(&graph);
    let mut reached = vec![];
    visit
        .visit_filtered(
            [0],
            |event| -> ControlFlow<Unbreakable, ()> {
                if let EventNoPred::Unknown { node, .. } = event {
                    reached.push(node);
                }
                Continue(())
            },
            |FilterArgsNoPred { node, .. }| node != 3,
        )
        .continue_value_no_break();
    assert_eq!(reached, vec![0, 1, 2]);

    // Visited nodes are not visited again
    let mut init = false;
    visit
        .visit([1], |event| -> ControlFlow<Unbreakable, ()> {
            init |= event == EventNoPred::Init {};
            Continue(())
        })
        .continue_value_no_break();
    assert!(!init);

    visit.reset();
    reached.clear();
    visit
        .visit([5], |event| -> ControlFlow<Unbreakable, ()> {
            if let EventNoPred::Unknown { node, .. } = event {
                reached.push(node);
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(reached, vec![5, 4, 3, 2, 1, 0]);
}
