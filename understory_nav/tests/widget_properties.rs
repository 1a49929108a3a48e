// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the events a widget reports while handling input.

use kurbo::{Point, Rect, Vec2};
use proptest::prelude::*;

use understory_nav::{InputEvent, Key, NodeId, SideNav, Theme, Tree, WidgetEvent};

#[path = "../../understory_nav_tree/tests/support/outline.rs"]
mod outline;

use outline::{build, shape};

const WIDTH: f64 = 200.0;
const HEIGHT: f64 = 120.0;

fn widget() -> impl Strategy<Value = SideNav> {
    proptest::collection::vec(shape(), 1..5).prop_map(|shapes| {
        let mut next = 0;
        let tree = Tree::new(build(&shapes, &mut next));
        let theme = Theme {
            row_height: 20.0,
            ..Theme::default()
        };
        SideNav::with_tree(Rect::new(0.0, 0.0, WIDTH, HEIGHT), tree, theme).unwrap()
    })
}

fn point() -> impl Strategy<Value = Point> {
    (-10.0..WIDTH + 10.0, -10.0..HEIGHT + 10.0).prop_map(|(x, y)| Point::new(x, y))
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Down),
        Just(Key::Up),
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Home),
        Just(Key::End),
        Just(Key::PageUp),
        Just(Key::PageDown),
        Just(Key::Enter),
        Just(Key::Escape),
    ]
}

fn input() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        3 => point().prop_map(InputEvent::PointerMove),
        3 => point().prop_map(InputEvent::Click),
        1 => Just(InputEvent::PointerLeave),
        1 => (-60.0..60.0_f64).prop_map(|dy| InputEvent::Scroll(Vec2::new(0.0, dy))),
        4 => key().prop_map(InputEvent::Key),
    ]
}

fn sorted(mut ids: Vec<NodeId>) -> Vec<NodeId> {
    ids.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
    ids
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a hover event is reported exactly when the hovered id changes, and
    /// carries the new hovered id.
    #[test]
    fn property_hover_events_track_hovered_id(
        nav in widget(),
        inputs in proptest::collection::vec(input(), 1..40),
    ) {
        let mut nav = nav;
        for event in &inputs {
            let before = nav.state().hovered_id().cloned();
            let update = nav.handle_input(event);
            let after = nav.state().hovered_id().cloned();
            let hovers: Vec<_> = update
                .events
                .iter()
                .filter_map(|e| match e {
                    WidgetEvent::Hover(id) => Some(id.clone()),
                    _ => None,
                })
                .collect();
            if before == after {
                prop_assert!(hovers.is_empty());
            } else {
                prop_assert_eq!(hovers, vec![after]);
            }
        }
    }

    /// PROPERTY: expand and collapse events name exactly the ids that entered or left
    /// the expansion set. Only navigation may expand silently, to reveal its target.
    #[test]
    fn property_toggle_events_track_expansion(
        nav in widget(),
        inputs in proptest::collection::vec(input(), 1..40),
    ) {
        let mut nav = nav;
        for event in &inputs {
            let before = nav.state().expanded().clone();
            let update = nav.handle_input(event);
            let after = nav.state().expanded();

            let added = sorted(after.iter().filter(|id| !before.contains(id.as_str())).cloned().collect());
            let removed = sorted(before.iter().filter(|id| !after.contains(id.as_str())).cloned().collect());

            let mut expanded = Vec::new();
            let mut collapsed = Vec::new();
            let mut navigated = false;
            for e in &update.events {
                match e {
                    WidgetEvent::Expand(id) => expanded.push(id.clone()),
                    WidgetEvent::Collapse(id) => collapsed.push(id.clone()),
                    WidgetEvent::Navigate { .. } => navigated = true,
                    WidgetEvent::Hover(_) => {}
                }
            }

            prop_assert_eq!(sorted(collapsed), removed);
            let expanded = sorted(expanded);
            if navigated {
                prop_assert!(expanded.iter().all(|id| added.contains(id)));
            } else {
                prop_assert_eq!(expanded, added);
            }
        }
    }
}
