// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_layout --heading-base-level=0

//! Understory Nav Layout: turns an outline plus its expansion state into stacked rows.
//!
//! Layout here is deliberately simple: every visible node gets one full-width row of
//! fixed height, indented by its depth. The interesting part is *which* nodes are
//! visible. A node is visible when it is a root or when every ancestor is in the
//! [`ExpansionSet`]. Children of collapsed nodes contribute neither rows nor vertical
//! space.
//!
//! - [`compute_bounds`]: `(tree, expansion set, metrics) → BoundsMap`. A pure function; the
//!   map is a derived cache and is always rebuilt, never patched.
//! - [`BoundsMap`]: visible rows in top-to-bottom order with id lookup and the total
//!   content height.
//! - [`scroll`]: clamping and minimal "reveal this row" scrolling over a 1D strip.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_nav_layout::{ExpansionSet, Metrics, compute_bounds};
//! use understory_nav_tree::{Tree, TreeNode};
//!
//! let tree = Tree::new(vec![TreeNode::new("a", "A").with_child(TreeNode::new("b", "B"))]);
//! let metrics = Metrics { row_height: 30.0, indent_width: 16.0, frame_width: 200.0 };
//!
//! let collapsed = compute_bounds(tree.roots(), &ExpansionSet::new(), &metrics);
//! assert_eq!(collapsed.len(), 1);
//! assert_eq!(collapsed.content_height(), 30.0);
//!
//! let expanded: ExpansionSet = ["a"].into_iter().collect();
//! let bounds = compute_bounds(tree.roots(), &expanded, &metrics);
//! assert_eq!(bounds.get("b").unwrap().rect, Rect::new(16.0, 30.0, 200.0, 60.0));
//! ```
//!
//! Coordinates are content-space logical pixels: `y = 0` is the top of the first row,
//! before any scroll translation is applied.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod expansion;
pub mod scroll;

pub use bounds::{BoundsEntry, BoundsMap, Metrics, compute_bounds};
pub use expansion::ExpansionSet;
