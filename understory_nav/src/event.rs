// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing events and commands.

use kurbo::Rect;
use understory_nav_render::RenderInstructions;
use understory_nav_tree::{NodeId, Tree};

/// Something the host may want to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A node was activated by a text click or Enter.
    ///
    /// The node's action, if any, has already run.
    Navigate {
        /// Activated node.
        id: NodeId,
        /// Its link target.
        link: Option<String>,
    },
    /// A node was expanded by the user or by [`Command::ToggleExpand`].
    Expand(NodeId),
    /// A node was collapsed by the user or by [`Command::ToggleExpand`].
    Collapse(NodeId),
    /// The hovered node changed.
    Hover(Option<NodeId>),
}

/// Imperative requests from the host, outside the input stream.
#[derive(Clone, Debug)]
pub enum Command {
    /// Select a node and reveal it. Does not emit [`WidgetEvent::Navigate`].
    SetActive(NodeId),
    /// Flip a node's expansion.
    ToggleExpand(NodeId),
    /// Expand every node with children.
    ExpandAll,
    /// Collapse everything.
    CollapseAll,
    /// Replace the tree.
    UpdateTree(Tree),
    /// Filter titles by a term; an empty term clears the filter.
    SetFilter(String),
    /// Move or resize the widget.
    SetFrame(Rect),
}

/// Result of feeding the widget one input or command.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// Events for the host, in the order they happened.
    pub events: Vec<WidgetEvent>,
    /// How to bring the visuals up to date.
    pub render: RenderInstructions,
}
