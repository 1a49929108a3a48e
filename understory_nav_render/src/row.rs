// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row visual encoding.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_nav_state::{Rgba, Theme, WidgetState};
use understory_nav_tree::NodeId;

bitflags::bitflags! {
    /// Interaction status of a row.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// The row is the active (selected) node.
        const ACTIVE  = 0b0000_0001;
        /// The pointer is over the row.
        const HOVERED = 0b0000_0010;
        /// The row has keyboard focus.
        const FOCUSED = 0b0000_0100;
    }
}

impl RowFlags {
    /// Flags for `id` in `state`.
    pub fn of(state: &WidgetState, id: &str) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::ACTIVE, state.active_id().is_some_and(|a| a == id));
        flags.set(Self::HOVERED, state.hovered_id().is_some_and(|h| h == id));
        flags.set(Self::FOCUSED, state.focused_id().is_some_and(|f| f == id));
        flags
    }
}

/// Direction of a row's expand glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Chevron {
    /// Points right; children hidden.
    Collapsed,
    /// Points down; children shown.
    Expanded,
}

/// Paint parameters that depend on interaction status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowStyle {
    /// Status the style was derived from.
    pub flags: RowFlags,
    /// Row background fill.
    pub background: Rgba,
    /// Label color.
    pub text: Rgba,
    /// Accent bar color, present on the active row.
    pub accent: Option<Rgba>,
    /// Focus ring color, present on the focused row.
    pub focus_ring: Option<Rgba>,
}

impl RowStyle {
    /// Resolves the style for a row with the given status.
    ///
    /// Background priority is active, then hovered, then the default.
    pub fn resolve(theme: &Theme, flags: RowFlags) -> Self {
        let background = if flags.contains(RowFlags::ACTIVE) {
            theme.active_background
        } else if flags.contains(RowFlags::HOVERED) {
            theme.hover_background
        } else {
            theme.background
        };
        let active = flags.contains(RowFlags::ACTIVE);
        Self {
            flags,
            background,
            text: if active { theme.active_text } else { theme.text },
            accent: active.then_some(theme.accent),
            focus_ring: flags
                .contains(RowFlags::FOCUSED)
                .then_some(theme.focus_ring),
        }
    }
}

/// Everything needed to draw one row.
///
/// Rectangles and points are in content space; the host applies the scroll
/// translation to the whole row layer.
#[derive(Clone, Debug, PartialEq)]
pub struct RowVisual {
    /// Node id.
    pub id: NodeId,
    /// Label text.
    pub label: String,
    /// Depth of the node, `0` for roots.
    pub depth: usize,
    /// Full row rectangle.
    pub bounds: Rect,
    /// Expand glyph, for rows with children.
    pub chevron: Option<Chevron>,
    /// Where the glyph is drawn, vertically centered at the row's left edge.
    pub chevron_rect: Option<Rect>,
    /// Accent bar geometry along the row's left edge.
    pub accent_rect: Rect,
    /// Left end of the label's vertical center line.
    pub label_origin: Point,
    /// Status-dependent paint.
    pub style: RowStyle,
}

/// Builds visuals for every visible row of `state`, top to bottom.
pub fn build_rows(state: &WidgetState) -> Vec<RowVisual> {
    let theme = state.theme();
    let bounds = state.bounds();
    state
        .tree()
        .flatten()
        .into_iter()
        .filter_map(|node| {
            let entry = bounds.get(node.id.as_str())?;
            let rect = entry.rect;
            let center_y = rect.center().y;
            let half = theme.chevron_size / 2.0;
            let chevron = entry.has_children.then_some(if entry.expanded {
                Chevron::Expanded
            } else {
                Chevron::Collapsed
            });
            Some(RowVisual {
                id: node.id.clone(),
                label: node.title.clone(),
                depth: entry.depth,
                bounds: rect,
                chevron,
                chevron_rect: chevron.map(|_| {
                    Rect::new(
                        rect.x0,
                        center_y - half,
                        rect.x0 + theme.chevron_size,
                        center_y + half,
                    )
                }),
                accent_rect: Rect::new(rect.x0, rect.y0, rect.x0 + theme.accent_width, rect.y1),
                label_origin: Point::new(
                    rect.x0 + theme.chevron_extent() + theme.label_padding,
                    center_y,
                ),
                style: RowStyle::resolve(theme, RowFlags::of(state, node.id.as_str())),
            })
        })
        .collect()
}
