// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping widget-local points to rows.

use kurbo::Point;
use understory_nav_state::WidgetState;
use understory_nav_tree::NodeId;

/// Part of a row that was hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    /// The expand/collapse affordance at the start of a row with children.
    Chevron,
    /// The rest of the row.
    Text,
}

/// Result of [`hit_test`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The row's node.
    pub id: NodeId,
    /// Which part of the row.
    pub region: Region,
}

/// Finds the row under a widget-local point.
///
/// The point's `y` is offset by the scroll position before comparing against row
/// bounds. Points above the frame or at or below its bottom edge never hit, so rows
/// scrolled out of view cannot be clicked.
///
/// For rows with children, the first `chevron_size + chevron_margin` pixels from the
/// row's left edge are the [`Region::Chevron`]. Everything else is [`Region::Text`].
pub fn hit_test(state: &WidgetState, point: Point) -> Option<Hit> {
    if !(point.y >= 0.0 && point.y < state.viewport_height()) {
        return None;
    }
    let content = Point::new(point.x, point.y + state.scroll_offset());
    let chevron_extent = state.theme().chevron_extent();

    for (id, entry) in state.bounds().iter() {
        // Rows are stacked top to bottom.
        if entry.y() > content.y {
            break;
        }
        if entry.rect.contains(content) {
            let region = if entry.has_children && content.x < entry.x() + chevron_extent {
                Region::Chevron
            } else {
                Region::Text
            };
            return Some(Hit {
                id: id.clone(),
                region,
            });
        }
    }
    None
}
