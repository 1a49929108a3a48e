// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row bounds for visible nodes.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;
use understory_nav_tree::{NodeId, TreeNode};

use crate::expansion::ExpansionSet;
use crate::scroll;

/// Measurements that drive row layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Metrics {
    /// Height of every row.
    pub row_height: f64,
    /// Horizontal offset added per depth level.
    pub indent_width: f64,
    /// Width of the widget frame; rows extend to its right edge.
    pub frame_width: f64,
}

/// Geometry and structure of one visible row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundsEntry {
    /// Content-space rectangle, before scroll translation.
    pub rect: Rect,
    /// Depth of the node, `0` for roots.
    pub depth: usize,
    /// Whether the node has children.
    pub has_children: bool,
    /// Whether the node has children and is expanded.
    pub expanded: bool,
}

impl BoundsEntry {
    /// Left edge.
    pub fn x(&self) -> f64 {
        self.rect.x0
    }

    /// Top edge.
    pub fn y(&self) -> f64 {
        self.rect.y0
    }

    /// Width.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Bottom edge, `y + height`.
    pub fn bottom(&self) -> f64 {
        self.rect.y1
    }
}

/// Bounds of every visible node, in top-to-bottom order.
///
/// Keys are exactly the nodes reachable from the roots by descending only through
/// expanded nodes. Rows are stacked without overlap, so iteration order is both
/// pre-order and ascending `y`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundsMap {
    rows: Vec<(NodeId, BoundsEntry)>,
    index: HashMap<NodeId, usize>,
    content_height: f64,
}

impl BoundsMap {
    /// Bounds of a visible node.
    pub fn get(&self, id: &str) -> Option<&BoundsEntry> {
        self.index.get(id).map(|&i| &self.rows[i].1)
    }

    /// Returns `true` if the node is visible.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a visible node in top-to-bottom order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Row at a position in top-to-bottom order.
    pub fn row(&self, position: usize) -> Option<(&NodeId, &BoundsEntry)> {
        self.rows.get(position).map(|(id, entry)| (id, entry))
    }

    /// First visible row.
    pub fn first(&self) -> Option<(&NodeId, &BoundsEntry)> {
        self.row(0)
    }

    /// Last visible row.
    pub fn last(&self) -> Option<(&NodeId, &BoundsEntry)> {
        self.rows.last().map(|(id, entry)| (id, entry))
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates visible rows top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&NodeId, &BoundsEntry)> + '_ {
        self.rows.iter().map(|(id, entry)| (id, entry))
    }

    /// Iterates visible ids top to bottom.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = &NodeId> + '_ {
        self.rows.iter().map(|(id, _)| id)
    }

    /// Total height of all visible rows, the lowest row bottom.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Largest valid scroll offset for a viewport of the given height.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        scroll::max_scroll(self.content_height, viewport_height)
    }

    fn push(&mut self, id: NodeId, entry: BoundsEntry) {
        self.index.insert(id.clone(), self.rows.len());
        self.rows.push((id, entry));
    }
}

/// Lays out the visible rows of an outline.
///
/// Walks the roots depth-first, left to right, with a running `y` starting at `0`.
/// Each node gets `x = depth × indent_width`, `y = running y`,
/// `width = frame_width − x` (never negative), `height = row_height`. Children are
/// visited only when the node has children and its id is in `expanded`. The final
/// running `y` is the content height.
///
/// The walk uses an explicit stack, so arbitrarily deep outlines cannot overflow
/// the call stack.
pub fn compute_bounds(
    roots: &[TreeNode],
    expanded: &ExpansionSet,
    metrics: &Metrics,
) -> BoundsMap {
    let mut map = BoundsMap::default();
    let mut y = 0.0;
    let mut stack: Vec<(&TreeNode, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let has_children = node.has_children();
        let is_expanded = has_children && expanded.contains(node.id.as_str());
        #[allow(
            clippy::cast_precision_loss,
            reason = "Outline depths are far below 2^52."
        )]
        let x = depth as f64 * metrics.indent_width;
        let width = (metrics.frame_width - x).max(0.0);
        map.push(
            node.id.clone(),
            BoundsEntry {
                rect: Rect::new(x, y, x + width, y + metrics.row_height),
                depth,
                has_children,
                expanded: is_expanded,
            },
        );
        y += metrics.row_height;

        if is_expanded {
            // Reverse so children pop in their listed order.
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    map.content_height = y;
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_nav_tree::Tree;

    const METRICS: Metrics = Metrics {
        row_height: 30.0,
        indent_width: 16.0,
        frame_width: 200.0,
    };

    fn sample() -> Tree {
        Tree::new(vec![
            TreeNode::new("a", "A")
                .with_child(TreeNode::new("a1", "A1").with_child(TreeNode::new("a1x", "A1x")))
                .with_child(TreeNode::new("a2", "A2")),
            TreeNode::new("b", "B"),
        ])
    }

    fn visible(map: &BoundsMap) -> Vec<&str> {
        map.ids().map(NodeId::as_str).collect()
    }

    #[test]
    fn root_with_one_child_scenario() {
        let tree = Tree::new(vec![TreeNode::new("A", "A").with_child(TreeNode::new("B", "B"))]);

        let collapsed = compute_bounds(tree.roots(), &ExpansionSet::new(), &METRICS);
        assert_eq!(visible(&collapsed), ["A"]);
        assert_eq!(
            collapsed.get("A").unwrap().rect,
            Rect::new(0.0, 0.0, 200.0, 30.0)
        );

        let expanded: ExpansionSet = ["A"].into_iter().collect();
        let map = compute_bounds(tree.roots(), &expanded, &METRICS);
        assert_eq!(visible(&map), ["A", "B"]);
        assert_eq!(map.get("A").unwrap().rect, Rect::new(0.0, 0.0, 200.0, 30.0));
        let b = map.get("B").unwrap();
        assert_eq!((b.x(), b.y(), b.width(), b.height()), (16.0, 30.0, 184.0, 30.0));
        assert_eq!(b.depth, 1);
        assert!(map.get("A").unwrap().expanded);
    }

    #[test]
    fn collapsed_subtrees_take_no_space() {
        let tree = sample();
        // `a1` is expanded but hidden behind collapsed `a`.
        let expanded: ExpansionSet = ["a1"].into_iter().collect();
        let map = compute_bounds(tree.roots(), &expanded, &METRICS);
        assert_eq!(visible(&map), ["a", "b"]);
        assert_eq!(map.get("b").unwrap().y(), 30.0);
        assert_eq!(map.content_height(), 60.0);
    }

    #[test]
    fn nested_expansion_stacks_rows_in_pre_order() {
        let tree = sample();
        let expanded: ExpansionSet = ["a", "a1"].into_iter().collect();
        let map = compute_bounds(tree.roots(), &expanded, &METRICS);
        assert_eq!(visible(&map), ["a", "a1", "a1x", "a2", "b"]);
        assert_eq!(map.get("a1x").unwrap().x(), 32.0);
        assert_eq!(map.get("a1x").unwrap().depth, 2);
        assert_eq!(map.get("b").unwrap().y(), 120.0);
        assert_eq!(map.content_height(), 150.0);
        assert_eq!(map.position("a2"), Some(3));
        assert_eq!(map.last().map(|(id, _)| id.as_str()), Some("b"));
    }

    #[test]
    fn leaf_ids_in_expansion_set_are_ignored() {
        let tree = sample();
        let expanded: ExpansionSet = ["b", "gone"].into_iter().collect();
        let map = compute_bounds(tree.roots(), &expanded, &METRICS);
        assert_eq!(visible(&map), ["a", "b"]);
        assert!(!map.get("b").unwrap().expanded);
        assert!(!map.get("b").unwrap().has_children);
    }

    #[test]
    fn empty_tree_has_no_rows() {
        let map = compute_bounds(&[], &ExpansionSet::new(), &METRICS);
        assert!(map.is_empty());
        assert_eq!(map.content_height(), 0.0);
        assert_eq!(map.max_scroll(100.0), 0.0);
    }

    #[test]
    fn width_never_goes_negative() {
        let tree = sample();
        let expanded: ExpansionSet = ["a", "a1"].into_iter().collect();
        let narrow = Metrics {
            frame_width: 20.0,
            ..METRICS
        };
        let map = compute_bounds(tree.roots(), &expanded, &narrow);
        assert_eq!(map.get("a1x").unwrap().width(), 0.0);
    }

    #[test]
    fn max_scroll_subtracts_viewport() {
        let tree = sample();
        let expanded: ExpansionSet = ["a", "a1"].into_iter().collect();
        let map = compute_bounds(tree.roots(), &expanded, &METRICS);
        assert_eq!(map.max_scroll(100.0), 50.0);
        assert_eq!(map.max_scroll(500.0), 0.0);
    }
}
