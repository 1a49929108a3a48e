// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for widget state mutators.

use kurbo::Rect;
use proptest::prelude::*;

use understory_nav_state::{Theme, WidgetState};
use understory_nav_tree::{NodeId, Tree, TreeNode};

#[path = "../../understory_nav_tree/tests/support/outline.rs"]
mod outline;

use outline::{build, shape};

/// A state with a random tree, frame height, and expansion set.
fn state() -> impl Strategy<Value = WidgetState> {
    (
        proptest::collection::vec(shape(), 1..5),
        proptest::collection::vec(any::<bool>(), 0..320),
        10.0..400.0_f64,
    )
        .prop_map(|(shapes, mask, height)| {
            let mut next = 0;
            let tree = Tree::new(build(&shapes, &mut next));
            let theme = Theme {
                row_height: 20.0,
                ..Theme::default()
            };
            let mut state =
                WidgetState::new(Rect::new(0.0, 0.0, 200.0, height), tree, theme).unwrap();
            for (i, on) in mask.iter().enumerate() {
                if *on {
                    state = state.expand(&format!("n{i}"));
                }
            }
            state
        })
}

/// Picks an id from the whole tree by index.
fn pick(state: &WidgetState, index: usize) -> NodeId {
    let all = state.tree().flatten();
    all[index % all.len()].id.clone()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: clamping the scroll offset is idempotent and stays in range.
    #[test]
    fn property_scroll_clamp_idempotent(s in state(), offset in -500.0..5000.0_f64) {
        let once = s.set_scroll_offset(offset);
        let twice = once.set_scroll_offset(offset);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.scroll_offset() >= 0.0);
        prop_assert!(once.scroll_offset() <= once.max_scroll());
    }

    /// PROPERTY: the active node is visible after `set_active`.
    #[test]
    fn property_active_implies_visible(s in state(), index in any::<usize>()) {
        let id = pick(&s, index);
        let next = s.set_active(id.as_str());
        prop_assert!(next.bounds().contains(id.as_str()));
        prop_assert_eq!(next.active_id(), Some(&id));
    }

    /// PROPERTY: expand then collapse restores the expansion set of a collapsed node.
    #[test]
    fn property_expand_collapse_round_trip(s in state(), index in any::<usize>()) {
        let id = pick(&s, index);
        let base = s.collapse(id.as_str());
        let round = base.expand(id.as_str()).collapse(id.as_str());
        prop_assert_eq!(round.expanded(), base.expanded());
        prop_assert_eq!(round.bounds(), base.bounds());
    }

    /// PROPERTY: every mutator keeps the scroll offset within range.
    #[test]
    fn property_mutators_keep_scroll_in_range(
        s in state(),
        index in any::<usize>(),
        offset in 0.0..5000.0_f64,
    ) {
        let scrolled = s.set_scroll_offset(offset);
        let id = pick(&s, index);
        for next in [
            scrolled.toggle_expanded(id.as_str()),
            scrolled.collapse_all(),
            scrolled.set_filter("n1"),
            scrolled.update_tree(Tree::new(vec![TreeNode::new("x", "X")])),
        ] {
            prop_assert!(next.scroll_offset() >= 0.0);
            prop_assert!(next.scroll_offset() <= next.max_scroll());
        }
    }
}
