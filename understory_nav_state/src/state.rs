// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget state aggregate.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use understory_nav_layout::{BoundsMap, ExpansionSet, Metrics, compute_bounds, scroll};
use understory_nav_tree::{NodeId, Tree};

use crate::error::{Error, validate_frame};
use crate::theme::Theme;

/// One visible row, exported for inspection and automation tooling.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleRow<'a> {
    /// Node id.
    pub id: &'a NodeId,
    /// Node title.
    pub label: &'a str,
    /// Row rectangle in widget-local coordinates, scroll applied.
    pub bounds: Rect,
}

/// Everything a side navigation widget knows at one instant.
///
/// A `WidgetState` is a value. Every mutator borrows the current state and returns the
/// next one, so callers can keep both and compare them field by field. The bounds map
/// is always rebuilt from the displayed tree and the expansion set; it is never patched.
///
/// Two trees are tracked. The *source* tree is what the host supplied. The *displayed*
/// tree is the source tree narrowed by the current filter term, or the source tree
/// itself when no filter is active. Layout, hit testing, and navigation all use the
/// displayed tree.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState {
    frame: Rect,
    source: Tree,
    tree: Tree,
    filter: String,
    active: Option<NodeId>,
    focused: Option<NodeId>,
    hovered: Option<NodeId>,
    expanded: ExpansionSet,
    scroll_offset: f64,
    theme: Theme,
    bounds: BoundsMap,
}

impl WidgetState {
    /// Creates a state with nothing selected, nothing expanded, and no scroll.
    pub fn new(frame: Rect, tree: Tree, theme: Theme) -> Result<Self, Error> {
        validate_frame(frame)?;
        theme.validate()?;
        let state = Self {
            frame,
            source: tree.clone(),
            tree,
            filter: String::new(),
            active: None,
            focused: None,
            hovered: None,
            expanded: ExpansionSet::new(),
            scroll_offset: 0.0,
            theme,
            bounds: BoundsMap::default(),
        };
        Ok(state.relayout())
    }

    /// The widget's rectangle in its parent's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The tree being displayed, after filtering.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The tree supplied by the host, before filtering.
    pub fn source_tree(&self) -> &Tree {
        &self.source
    }

    /// The current filter term, empty when unfiltered.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The selected node.
    pub fn active_id(&self) -> Option<&NodeId> {
        self.active.as_ref()
    }

    /// The keyboard-focused node.
    pub fn focused_id(&self) -> Option<&NodeId> {
        self.focused.as_ref()
    }

    /// The node under the pointer.
    pub fn hovered_id(&self) -> Option<&NodeId> {
        self.hovered.as_ref()
    }

    /// The node keyboard navigation starts from: the focused node, else the active one.
    pub fn current_id(&self) -> Option<&NodeId> {
        self.focused.as_ref().or(self.active.as_ref())
    }

    /// Ids of expanded nodes.
    pub fn expanded(&self) -> &ExpansionSet {
        &self.expanded
    }

    /// Returns `true` if `id` is in the expansion set.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Vertical scroll offset, in `[0, max_scroll]`.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Translation to apply to the scrollable row layer.
    pub fn scroll_translation(&self) -> Vec2 {
        Vec2::new(0.0, -self.scroll_offset)
    }

    /// Display metrics and colors.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Bounds of every visible node.
    pub fn bounds(&self) -> &BoundsMap {
        &self.bounds
    }

    /// Layout metrics derived from the theme and frame.
    pub fn metrics(&self) -> Metrics {
        Metrics {
            row_height: self.theme.row_height,
            indent_width: self.theme.indent_width,
            frame_width: self.frame.width(),
        }
    }

    /// Total height of the visible rows.
    pub fn content_height(&self) -> f64 {
        self.bounds.content_height()
    }

    /// Height of the visible window onto the rows.
    pub fn viewport_height(&self) -> f64 {
        self.frame.height()
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        self.bounds.max_scroll(self.viewport_height())
    }

    /// Visible rows top to bottom, with labels and on-screen rectangles.
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        let offset = self.scroll_translation();
        // Pre-order restricted to visible nodes is exactly the bounds order.
        self.tree
            .flatten()
            .into_iter()
            .filter_map(|node| {
                self.bounds.get(node.id.as_str()).map(|entry| VisibleRow {
                    id: &node.id,
                    label: node.title.as_str(),
                    bounds: entry.rect + offset,
                })
            })
            .collect()
    }

    /// Flips the expansion of `id`.
    ///
    /// Ids that are missing from the displayed tree or have no children are ignored.
    pub fn toggle_expanded(&self, id: &str) -> Self {
        let Some(node_id) = self.expandable(id) else {
            return self.clone();
        };
        let mut next = self.clone();
        next.expanded.toggle(&node_id);
        next.relayout()
    }

    /// Expands `id`. Expanding an expanded node changes nothing.
    pub fn expand(&self, id: &str) -> Self {
        let Some(node_id) = self.expandable(id) else {
            return self.clone();
        };
        let mut next = self.clone();
        if next.expanded.insert(node_id) {
            next.relayout()
        } else {
            next
        }
    }

    /// Collapses `id`. Collapsing a collapsed node changes nothing.
    pub fn collapse(&self, id: &str) -> Self {
        let mut next = self.clone();
        if next.expanded.remove(id) {
            next.relayout()
        } else {
            next
        }
    }

    /// Expands every node that has children.
    pub fn expand_all(&self) -> Self {
        let mut next = self.clone();
        next.expanded.extend(self.tree.expandable_ids());
        next.relayout()
    }

    /// Collapses everything.
    pub fn collapse_all(&self) -> Self {
        let mut next = self.clone();
        next.expanded.clear();
        next.relayout()
    }

    /// Selects `id` and expands all of its ancestors so it becomes visible.
    ///
    /// Ids missing from the displayed tree are ignored.
    pub fn set_active(&self, id: &str) -> Self {
        let Some(node) = self.tree.find(id) else {
            tracing::trace!(id, "set_active: unknown id ignored");
            return self.clone();
        };
        let mut next = self.clone();
        next.active = Some(node.id.clone());
        if let Some(ancestors) = self.tree.ancestors_of(id) {
            next.expanded.extend(ancestors);
        }
        next.relayout()
    }

    /// Sets or clears keyboard focus. Expansion and bounds are untouched.
    pub fn set_focused(&self, id: Option<NodeId>) -> Self {
        Self {
            focused: id,
            ..self.clone()
        }
    }

    /// Sets or clears the hovered node.
    pub fn set_hovered(&self, id: Option<NodeId>) -> Self {
        Self {
            hovered: id,
            ..self.clone()
        }
    }

    /// Scrolls to `offset`, clamped to `[0, max_scroll]`.
    pub fn set_scroll_offset(&self, offset: f64) -> Self {
        let content = self.content_height();
        Self {
            scroll_offset: scroll::clamp_scroll(offset, content, self.viewport_height()),
            ..self.clone()
        }
    }

    /// Replaces the host tree.
    ///
    /// An active filter is re-applied to the new tree. The expansion set is kept as is;
    /// ids that no longer exist simply lay out nothing. Active, focused, and hovered ids
    /// that are missing from the new displayed tree are cleared, and the scroll offset
    /// is re-clamped.
    pub fn update_tree(&self, tree: Tree) -> Self {
        let mut next = self.clone();
        next.source = tree;
        next.apply_filter();
        next.retain_known_ids();
        next.relayout()
    }

    /// Narrows the displayed tree to titles containing `term`, case-insensitively.
    ///
    /// Matches keep their subtrees. Ancestors of matches are kept and expanded. A blank
    /// term restores the full tree; expansions made while filtering are kept.
    pub fn set_filter(&self, term: &str) -> Self {
        let mut next = self.clone();
        next.filter = String::from(term.trim());
        next.apply_filter();
        next.relayout()
    }

    /// Moves or resizes the widget. Row widths follow the frame width.
    pub fn set_frame(&self, frame: Rect) -> Result<Self, Error> {
        validate_frame(frame)?;
        Ok(Self {
            frame,
            ..self.clone()
        }
        .relayout())
    }

    /// Replaces the theme.
    pub fn set_theme(&self, theme: Theme) -> Result<Self, Error> {
        theme.validate()?;
        Ok(Self {
            theme,
            ..self.clone()
        }
        .relayout())
    }

    fn expandable(&self, id: &str) -> Option<NodeId> {
        match self.tree.find(id) {
            Some(node) if node.has_children() => Some(node.id.clone()),
            Some(_) => {
                tracing::trace!(id, "expansion change on a leaf ignored");
                None
            }
            None => {
                tracing::trace!(id, "expansion change on an unknown id ignored");
                None
            }
        }
    }

    fn apply_filter(&mut self) {
        let filtered = self.source.filter(&self.filter);
        self.tree = filtered.tree;
        self.expanded.extend(filtered.reveal);
    }

    fn retain_known_ids(&mut self) {
        let tree = &self.tree;
        for slot in [&mut self.active, &mut self.focused, &mut self.hovered] {
            if slot.as_ref().is_some_and(|id| !tree.contains(id.as_str())) {
                *slot = None;
            }
        }
    }

    /// Rebuilds bounds and re-clamps the scroll offset.
    fn relayout(mut self) -> Self {
        self.bounds = compute_bounds(self.tree.roots(), &self.expanded, &self.metrics());
        self.scroll_offset =
            scroll::clamp_scroll(self.scroll_offset, self.content_height(), self.viewport_height());
        self
    }
}
