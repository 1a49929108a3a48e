// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure input reduction.

use kurbo::{Point, Vec2};
use understory_nav_layout::scroll;
use understory_nav_state::WidgetState;
use understory_nav_tree::NodeId;

use crate::event::{InputEvent, Key, Outcome, Transition};
use crate::hit::{Region, hit_test};

/// Applies one input event to `state`.
pub fn reduce(state: &WidgetState, event: &InputEvent) -> Transition {
    let transition = match *event {
        InputEvent::PointerMove(point) => handle_pointer_move(state, point),
        InputEvent::PointerLeave => handle_pointer_leave(state),
        InputEvent::Click(point) => handle_click(state, point),
        InputEvent::Scroll(delta) => handle_scroll(state, delta),
        InputEvent::Key(key) => handle_key(state, key),
    };
    if transition.outcome != Outcome::NoOp {
        tracing::debug!(?event, outcome = ?transition.outcome, "input reduced");
    }
    transition
}

/// Chevron clicks toggle expansion; text clicks select and focus the row.
pub fn handle_click(state: &WidgetState, point: Point) -> Transition {
    let Some(hit) = hit_test(state, point) else {
        return Transition::no_op(state.clone());
    };
    match hit.region {
        Region::Chevron => Transition::no_op(state.toggle_expanded(hit.id.as_str())),
        Region::Text => Transition {
            state: state
                .set_active(hit.id.as_str())
                .set_focused(Some(hit.id.clone())),
            outcome: Outcome::Navigate(hit.id),
        },
    }
}

/// Tracks the row under the pointer.
pub fn handle_pointer_move(state: &WidgetState, point: Point) -> Transition {
    let hovered = hit_test(state, point).map(|hit| hit.id);
    if hovered.as_ref() == state.hovered_id() {
        return Transition::no_op(state.clone());
    }
    Transition::no_op(state.set_hovered(hovered))
}

/// Clears hover.
pub fn handle_pointer_leave(state: &WidgetState) -> Transition {
    Transition::no_op(state.set_hovered(None))
}

/// Scrolls by `delta.y × scroll_speed`, clamped.
pub fn handle_scroll(state: &WidgetState, delta: Vec2) -> Transition {
    let offset = state.scroll_offset() + delta.y * state.theme().scroll_speed;
    Transition::no_op(state.set_scroll_offset(offset))
}

/// Keyboard navigation over the visible rows.
///
/// Navigation starts from the focused node, or the active node when nothing is
/// focused. Moves never wrap. Every focus move scrolls the target into view with
/// minimal motion.
pub fn handle_key(state: &WidgetState, key: Key) -> Transition {
    match key {
        Key::Down => step(state, Step::Forward(1)),
        Key::Up => step(state, Step::Backward(1)),
        Key::PageDown => step(state, Step::Forward(rows_per_page(state))),
        Key::PageUp => step(state, Step::Backward(rows_per_page(state))),
        Key::Home => match state.bounds().first() {
            Some((id, _)) => Transition::no_op(focus(state, id)),
            None => Transition::no_op(state.clone()),
        },
        Key::End => match state.bounds().last() {
            Some((id, _)) => Transition::no_op(focus(state, id)),
            None => Transition::no_op(state.clone()),
        },
        Key::Right => expand_or_enter(state),
        Key::Left => collapse_or_exit(state),
        Key::Enter => match state.current_id().and_then(|id| state.tree().find(id.as_str())) {
            Some(node) => Transition {
                state: state.set_active(node.id.as_str()),
                outcome: Outcome::Navigate(node.id.clone()),
            },
            // Nothing current, or the current id is not in the displayed tree.
            None => Transition::no_op(state.clone()),
        },
        Key::Escape => Transition::no_op(state.set_focused(None)),
    }
}

/// Scrolls the minimum amount that brings `id`'s row fully into view.
///
/// Invisible ids leave the state unchanged.
pub fn auto_scroll(state: &WidgetState, id: &str) -> WidgetState {
    let Some(entry) = state.bounds().get(id) else {
        return state.clone();
    };
    let offset = scroll::reveal(
        state.scroll_offset(),
        entry.y(),
        entry.bottom(),
        state.viewport_height(),
    );
    state.set_scroll_offset(offset)
}

#[derive(Copy, Clone, Debug)]
enum Step {
    Forward(usize),
    Backward(usize),
}

fn focus(state: &WidgetState, id: &NodeId) -> WidgetState {
    auto_scroll(&state.set_focused(Some(id.clone())), id.as_str())
}

/// Whole rows that fit in the viewport, at least one.
fn rows_per_page(state: &WidgetState) -> usize {
    let rows = state.viewport_height() / state.theme().row_height;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Truncation toward zero counts whole rows; the value is non-negative."
    )]
    let whole = rows as usize;
    whole.max(1)
}

fn step(state: &WidgetState, step: Step) -> Transition {
    let bounds = state.bounds();
    let Some(last) = bounds.len().checked_sub(1) else {
        return Transition::no_op(state.clone());
    };
    let origin = state
        .current_id()
        .and_then(|id| bounds.position(id.as_str()));
    let target = match (origin, step) {
        // No current row, or it is hidden inside a collapsed subtree.
        (None, _) => 0,
        (Some(pos), Step::Forward(n)) => pos.saturating_add(n).min(last),
        (Some(pos), Step::Backward(n)) => pos.saturating_sub(n),
    };
    if origin == Some(target) {
        return Transition::no_op(state.clone());
    }
    match bounds.row(target) {
        Some((id, _)) => Transition::no_op(focus(state, id)),
        None => Transition::no_op(state.clone()),
    }
}

fn expand_or_enter(state: &WidgetState) -> Transition {
    let Some(node) = state.current_id().and_then(|id| state.tree().find(id.as_str())) else {
        return Transition::no_op(state.clone());
    };
    let Some(first_child) = node.children.first() else {
        return Transition::no_op(state.clone());
    };
    if state.is_expanded(node.id.as_str()) {
        Transition::no_op(focus(state, &first_child.id))
    } else {
        Transition {
            state: state.expand(node.id.as_str()),
            outcome: Outcome::Expand(node.id.clone()),
        }
    }
}

fn collapse_or_exit(state: &WidgetState) -> Transition {
    let Some(id) = state.current_id() else {
        return Transition::no_op(state.clone());
    };
    let id = id.as_str();
    let tree = state.tree();
    if tree.find(id).is_some_and(|n| n.has_children()) && state.is_expanded(id) {
        return Transition {
            state: state.collapse(id),
            outcome: Outcome::Collapse(NodeId::from(id)),
        };
    }
    match tree.parent_of(id) {
        Some(parent) => Transition::no_op(focus(state, &parent.id)),
        None => Transition::no_op(state.clone()),
    }
}
