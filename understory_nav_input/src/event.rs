// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events and reducer outcomes.

use kurbo::{Point, Vec2};
use understory_nav_state::WidgetState;
use understory_nav_tree::NodeId;

/// Navigation keys the widget reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Next visible row.
    Down,
    /// Previous visible row.
    Up,
    /// Expand, or step into the first child.
    Right,
    /// Collapse, or step out to the parent.
    Left,
    /// First visible row.
    Home,
    /// Last visible row.
    End,
    /// One viewport of rows up.
    PageUp,
    /// One viewport of rows down.
    PageDown,
    /// Activate the current row.
    Enter,
    /// Drop keyboard focus.
    Escape,
}

/// One discrete input delivered by the host. Points are widget-local.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to a point inside the widget.
    PointerMove(Point),
    /// The pointer left the widget.
    PointerLeave,
    /// Primary button click.
    Click(Point),
    /// Wheel or trackpad scroll; positive `y` scrolls down.
    Scroll(Vec2),
    /// Key press.
    Key(Key),
}

/// What an input means for the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing for the host to do; the state may still have changed visually.
    NoOp,
    /// The node was activated.
    Navigate(NodeId),
    /// The node was expanded from the keyboard.
    Expand(NodeId),
    /// The node was collapsed from the keyboard.
    Collapse(NodeId),
}

/// Next state plus the outcome of one input.
#[derive(Clone, Debug)]
pub struct Transition {
    /// State after the input.
    pub state: WidgetState,
    /// What happened.
    pub outcome: Outcome,
}

impl Transition {
    pub(crate) fn no_op(state: WidgetState) -> Self {
        Self {
            state,
            outcome: Outcome::NoOp,
        }
    }
}
