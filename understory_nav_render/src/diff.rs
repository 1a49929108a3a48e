// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing the cheapest update between two states.

use alloc::vec::Vec;

use kurbo::Vec2;
use understory_nav_state::WidgetState;
use understory_nav_tree::NodeId;

use crate::row::{RowFlags, RowStyle, RowVisual, build_rows};

/// How much of the widget must be redrawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    /// The visible row set or its geometry changed.
    Structure,
    /// The scroll offset changed, possibly together with hover, focus, or selection.
    Scroll,
    /// Only hover, focus, or selection changed.
    Style,
    /// Nothing visible changed.
    Unchanged,
}

/// New style for one existing row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPatch {
    /// Row to patch.
    pub id: NodeId,
    /// Its new style.
    pub style: RowStyle,
}

/// What a host must do to bring its visuals up to date.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderInstructions {
    /// Replace every row.
    Rebuild {
        /// Visible rows top to bottom, in content space.
        rows: Vec<RowVisual>,
        /// Translation for the row layer.
        translation: Vec2,
        /// Total height of the rows.
        content_height: f64,
    },
    /// Move the row layer, then restyle the listed rows. Row geometry is unchanged.
    Translate {
        /// New translation for the row layer.
        translation: Vec2,
        /// Rows whose hover, focus, or selection changed along with the scroll, top to
        /// bottom. Empty for a plain scroll.
        patches: Vec<RowPatch>,
    },
    /// Restyle the listed rows, top to bottom.
    Restyle(Vec<RowPatch>),
    /// Do nothing.
    Nothing,
}

/// Classifies the change from `prev` to `next`.
///
/// Checks run in priority order so that a broad change supersedes narrower ones:
///
/// 1. [`Tier::Structure`] when the expansion set, the displayed tree handle, the frame,
///    or the theme differ.
/// 2. [`Tier::Scroll`] when the scroll offset differs. Any hover, focus, or selection
///    change that comes with it is carried as row patches.
/// 3. [`Tier::Style`] when hovered, focused, or active ids differ.
/// 4. [`Tier::Unchanged`] otherwise.
pub fn tier(prev: &WidgetState, next: &WidgetState) -> Tier {
    let structural = prev.expanded() != next.expanded()
        || !prev.tree().ptr_eq(next.tree())
        || prev.frame() != next.frame()
        || prev.theme() != next.theme();
    let scrolled = prev.scroll_offset() != next.scroll_offset();
    let restyled = prev.hovered_id() != next.hovered_id()
        || prev.focused_id() != next.focused_id()
        || prev.active_id() != next.active_id();

    if structural {
        Tier::Structure
    } else if scrolled {
        Tier::Scroll
    } else if restyled {
        Tier::Style
    } else {
        Tier::Unchanged
    }
}

/// Full rebuild from `state`, used for the first frame and for [`Tier::Structure`].
pub fn rebuild(state: &WidgetState) -> RenderInstructions {
    RenderInstructions::Rebuild {
        rows: build_rows(state),
        translation: state.scroll_translation(),
        content_height: state.content_height(),
    }
}

/// Computes the instructions that turn the visuals of `prev` into those of `next`.
pub fn render(prev: &WidgetState, next: &WidgetState) -> RenderInstructions {
    match tier(prev, next) {
        Tier::Structure => rebuild(next),
        Tier::Scroll => RenderInstructions::Translate {
            translation: next.scroll_translation(),
            patches: restyle(prev, next),
        },
        Tier::Style => RenderInstructions::Restyle(restyle(prev, next)),
        Tier::Unchanged => RenderInstructions::Nothing,
    }
}

/// Patches for the union of old and new hovered, focused, and active ids.
///
/// Rows that are not visible are skipped.
fn restyle(prev: &WidgetState, next: &WidgetState) -> Vec<RowPatch> {
    let pairs = [
        (prev.hovered_id(), next.hovered_id()),
        (prev.focused_id(), next.focused_id()),
        (prev.active_id(), next.active_id()),
    ];
    let bounds = next.bounds();
    let mut touched: Vec<(usize, &NodeId)> = Vec::new();
    for (old, new) in pairs {
        if old == new {
            continue;
        }
        for id in [old, new].into_iter().flatten() {
            if let Some(pos) = bounds.position(id.as_str())
                && !touched.iter().any(|&(p, _)| p == pos)
            {
                touched.push((pos, id));
            }
        }
    }
    touched.sort_unstable_by_key(|&(pos, _)| pos);
    touched
        .into_iter()
        .map(|(_, id)| RowPatch {
            id: id.clone(),
            style: RowStyle::resolve(next.theme(), RowFlags::of(next, id.as_str())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::{Point, Rect};
    use understory_nav_input::{InputEvent, Key, reduce};
    use understory_nav_state::Theme;
    use understory_nav_tree::{Tree, TreeNode};

    fn state() -> WidgetState {
        let tree = Tree::new(vec![
            TreeNode::new("a", "A").with_child(TreeNode::new("a1", "A1")),
            TreeNode::new("b", "B"),
            TreeNode::new("c", "C"),
            TreeNode::new("d", "D"),
            TreeNode::new("e", "E"),
        ]);
        let theme = Theme {
            row_height: 30.0,
            ..Theme::default()
        };
        WidgetState::new(Rect::new(0.0, 0.0, 200.0, 100.0), tree, theme).unwrap()
    }

    fn patched(instructions: &RenderInstructions) -> Vec<&str> {
        match instructions {
            RenderInstructions::Restyle(patches) => {
                patches.iter().map(|p| p.id.as_str()).collect()
            }
            other => panic!("expected restyle, got {other:?}"),
        }
    }

    #[test]
    fn identical_states_render_nothing() {
        let s = state();
        assert_eq!(render(&s, &s.clone()), RenderInstructions::Nothing);
        // Idempotent expand produces an equal value.
        let open = s.expand("a");
        assert_eq!(render(&open, &open.expand("a")), RenderInstructions::Nothing);
    }

    #[test]
    fn expansion_rebuilds() {
        let s = state();
        let next = s.toggle_expanded("a");
        match render(&s, &next) {
            RenderInstructions::Rebuild {
                rows,
                translation,
                content_height,
            } => {
                assert_eq!(rows.len(), 6);
                assert_eq!(translation, Vec2::ZERO);
                assert_eq!(content_height, 180.0);
            }
            other => panic!("expected rebuild, got {other:?}"),
        }
    }

    #[test]
    fn set_active_with_reveal_rebuilds() {
        let s = state();
        assert_eq!(tier(&s, &s.set_active("a1")), Tier::Structure);
        // Already visible: only styles change.
        assert_eq!(tier(&s, &s.set_active("b")), Tier::Style);
    }

    #[test]
    fn tree_replacement_rebuilds_even_with_same_content() {
        let s = state();
        let same = Tree::new(s.tree().roots().to_vec());
        assert_eq!(tier(&s, &s.update_tree(same)), Tier::Structure);
        assert_eq!(tier(&s, &s.set_filter("b")), Tier::Structure);
    }

    #[test]
    fn scroll_only_translates() {
        let s = state();
        let next = reduce(&s, &InputEvent::Scroll(Vec2::new(0.0, 20.0))).state;
        assert_eq!(
            render(&s, &next),
            RenderInstructions::Translate {
                translation: Vec2::new(0.0, -20.0),
                patches: Vec::new(),
            }
        );
    }

    #[test]
    fn hover_restyles_old_and_new_rows() {
        let s = state().set_hovered(Some(NodeId::from("c")));
        let next = reduce(&s, &InputEvent::PointerMove(Point::new(50.0, 40.0))).state;
        assert_eq!(next.hovered_id().map(NodeId::as_str), Some("b"));
        let instructions = render(&s, &next);
        assert_eq!(patched(&instructions), ["b", "c"]);
        if let RenderInstructions::Restyle(patches) = instructions {
            assert_eq!(patches[0].style.flags, RowFlags::HOVERED);
            assert_eq!(patches[1].style.flags, RowFlags::empty());
        }
    }

    #[test]
    fn focus_and_active_changes_patch_union() {
        let s = state().set_active("b").set_focused(Some(NodeId::from("b")));
        let next = s.set_active("d").set_focused(Some(NodeId::from("c")));
        assert_eq!(patched(&render(&s, &next)), ["b", "c", "d"]);
    }

    #[test]
    fn hidden_rows_are_not_patched() {
        let s = state();
        let next = s.set_focused(Some(NodeId::from("a1")));
        assert_eq!(render(&s, &next), RenderInstructions::Restyle(Vec::new()));
    }

    #[test]
    fn focus_move_with_auto_scroll_translates_and_patches() {
        let s = state().set_focused(Some(NodeId::from("c")));
        let next = reduce(&s, &InputEvent::Key(Key::Down)).state;
        assert_eq!(next.scroll_offset(), 20.0);
        assert_eq!(tier(&s, &next), Tier::Scroll);
        match render(&s, &next) {
            RenderInstructions::Translate {
                translation,
                patches,
            } => {
                assert_eq!(translation, Vec2::new(0.0, -20.0));
                let ids: Vec<_> = patches.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, ["c", "d"]);
                assert_eq!(patches[0].style.flags, RowFlags::empty());
                assert_eq!(patches[1].style.flags, RowFlags::FOCUSED);
            }
            other => panic!("expected translate, got {other:?}"),
        }
    }

    #[test]
    fn frame_change_rebuilds() {
        let s = state();
        let next = s.set_frame(Rect::new(0.0, 0.0, 300.0, 100.0)).unwrap();
        assert_eq!(tier(&s, &next), Tier::Structure);
    }
}
