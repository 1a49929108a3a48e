// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful host-facing widget.

use kurbo::Rect;
use understory_nav_input::{Hit, InputEvent, Outcome, Region, hit_test, reduce};
use understory_nav_render::{RenderInstructions, rebuild, render};
use understory_nav_state::{Theme, WidgetState};
use understory_nav_tree::{NodeId, Tree};

use crate::config::{Payload, build_nodes};
use crate::demo::demo_tree;
use crate::error::Error;
use crate::event::{Command, Update, WidgetEvent};

/// A side navigation widget.
///
/// `SideNav` owns the current [`WidgetState`] and the state that was last rendered.
/// Every input or command advances the state through the pure reducer, collects
/// [`WidgetEvent`]s for the host, and diffs against the last rendered state to produce
/// [`RenderInstructions`]. The first update after construction is always a full rebuild.
#[derive(Debug)]
pub struct SideNav {
    state: WidgetState,
    rendered: Option<WidgetState>,
}

impl SideNav {
    /// Builds a widget from a construction payload.
    ///
    /// Fails when the frame is missing or invalid, when a node is malformed, or when ids
    /// repeat. Unknown ids in `active_id`, `focused_id`, or `expanded` are ignored.
    pub fn new(payload: Payload) -> Result<Self, Error> {
        let frame = payload.frame()?;
        let tree = match &payload.tree {
            Some(specs) => Tree::new(build_nodes(specs)?),
            None => {
                tracing::debug!("payload has no tree; using the demonstration tree");
                demo_tree()
            }
        };
        let theme = payload.theme.apply(Theme::default());
        let mut state = WidgetState::new(frame, tree, theme)?;

        for id in &payload.expanded {
            state = state.expand(id);
        }
        if let Some(id) = &payload.active_id {
            if !state.tree().contains(id) {
                tracing::warn!(id = id.as_str(), "payload active_id not in tree");
            }
            state = state.set_active(id);
        }
        if let Some(id) = &payload.focused_id {
            let known = state.tree().find(id).map(|node| node.id.clone());
            match known {
                Some(node_id) => state = state.set_focused(Some(node_id)),
                None => tracing::warn!(id = id.as_str(), "payload focused_id not in tree"),
            }
        }
        Ok(Self::from_state(state))
    }

    /// Parses a JSON payload and builds a widget from it.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::new(Payload::from_json(json)?)
    }

    /// Builds a widget around an existing tree, which may carry node actions.
    pub fn with_tree(frame: Rect, tree: Tree, theme: Theme) -> Result<Self, Error> {
        Ok(Self::from_state(WidgetState::new(frame, tree, theme)?))
    }

    /// Wraps a prepared state.
    pub fn from_state(state: WidgetState) -> Self {
        Self {
            state,
            rendered: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Feeds one input event.
    pub fn handle_input(&mut self, event: &InputEvent) -> Update {
        let prev = self.state.clone();
        let transition = reduce(&prev, event);
        self.state = transition.state;

        let mut events = Vec::new();
        match transition.outcome {
            Outcome::Navigate(id) => self.navigate(id, &mut events),
            Outcome::Expand(id) => events.push(WidgetEvent::Expand(id)),
            Outcome::Collapse(id) => events.push(WidgetEvent::Collapse(id)),
            Outcome::NoOp => {
                // Chevron clicks change expansion without an outcome.
                if let InputEvent::Click(point) = *event
                    && let Some(Hit {
                        id,
                        region: Region::Chevron,
                    }) = hit_test(&prev, point)
                {
                    self.push_toggle(&prev, id, &mut events);
                }
            }
        }
        self.push_hover(&prev, &mut events);
        self.finish(events)
    }

    /// Applies one host command.
    pub fn command(&mut self, command: Command) -> Result<Update, Error> {
        let prev = self.state.clone();
        let mut events = Vec::new();
        match command {
            Command::SetActive(id) => {
                if !prev.tree().contains(id.as_str()) {
                    tracing::debug!(%id, "SetActive: unknown id");
                }
                self.state = prev.set_active(id.as_str());
            }
            Command::ToggleExpand(id) => {
                self.state = prev.toggle_expanded(id.as_str());
                self.push_toggle(&prev, id, &mut events);
            }
            Command::ExpandAll => self.state = prev.expand_all(),
            Command::CollapseAll => self.state = prev.collapse_all(),
            Command::UpdateTree(tree) => self.state = prev.update_tree(tree),
            Command::SetFilter(term) => self.state = prev.set_filter(&term),
            Command::SetFrame(frame) => self.state = prev.set_frame(frame)?,
        }
        self.push_hover(&prev, &mut events);
        Ok(self.finish(events))
    }

    /// Instructions that bring visuals from the last rendered state to the current one,
    /// marking the current state as rendered.
    pub fn render(&mut self) -> RenderInstructions {
        let instructions = match &self.rendered {
            Some(prev) => render(prev, &self.state),
            None => rebuild(&self.state),
        };
        self.rendered = Some(self.state.clone());
        instructions
    }

    /// Runs the node's action, then reports the navigation.
    fn navigate(&self, id: NodeId, events: &mut Vec<WidgetEvent>) {
        let link = match self.state.tree().find(id.as_str()) {
            Some(node) => {
                if let Some(action) = &node.action {
                    action.invoke();
                }
                node.link_target.clone()
            }
            None => None,
        };
        tracing::debug!(%id, ?link, "navigate");
        events.push(WidgetEvent::Navigate { id, link });
    }

    fn push_toggle(&self, prev: &WidgetState, id: NodeId, events: &mut Vec<WidgetEvent>) {
        let was = prev.is_expanded(id.as_str());
        let is = self.state.is_expanded(id.as_str());
        match (was, is) {
            (false, true) => events.push(WidgetEvent::Expand(id)),
            (true, false) => events.push(WidgetEvent::Collapse(id)),
            _ => {}
        }
    }

    fn push_hover(&self, prev: &WidgetState, events: &mut Vec<WidgetEvent>) {
        if prev.hovered_id() != self.state.hovered_id() {
            events.push(WidgetEvent::Hover(self.state.hovered_id().cloned()));
        }
    }

    fn finish(&mut self, events: Vec<WidgetEvent>) -> Update {
        Update {
            events,
            render: self.render(),
        }
    }
}
