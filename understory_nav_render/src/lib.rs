// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_render --heading-base-level=0

//! Understory Nav Render: row visuals and render diffing for side navigation.
//!
//! Given the previous and next [`WidgetState`](understory_nav_state::WidgetState),
//! [`render`] picks the cheapest of four mutually exclusive updates:
//!
//! 1. **Rebuild** every row when the expansion set, the tree, the frame, or the theme
//!    changed.
//! 2. **Translate** the row layer when the scroll offset changed, restyling any rows
//!    whose hover, focus, or active status changed with it.
//! 3. **Restyle** just the rows whose hover, focus, or active status changed.
//! 4. **Nothing** otherwise.
//!
//! This crate does not draw. [`RenderInstructions`] describe rows as plain data
//! ([`RowVisual`], [`RowStyle`]) for a host to turn into scene nodes or draw calls.
//!
//! ## Row encoding
//!
//! - Background: active, else hovered, else default.
//! - Accent bar along the left edge of the active row.
//! - Chevron pointing right when collapsed and down when expanded, for rows with children.
//! - Label vertically centered after the chevron area.
//! - Focus ring around the focused row.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_nav_render::{RenderInstructions, render};
//! use understory_nav_state::{Theme, WidgetState};
//! use understory_nav_tree::{NodeId, Tree, TreeNode};
//!
//! let tree = Tree::new(vec![TreeNode::new("a", "A"), TreeNode::new("b", "B")]);
//! let prev = WidgetState::new(Rect::new(0.0, 0.0, 200.0, 100.0), tree, Theme::default())?;
//! let next = prev.set_hovered(Some(NodeId::from("b")));
//!
//! let RenderInstructions::Restyle(patches) = render(&prev, &next) else {
//!     unreachable!()
//! };
//! assert_eq!(patches.len(), 1);
//! assert_eq!(patches[0].id.as_str(), "b");
//! # Ok::<(), understory_nav_state::Error>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod diff;
mod row;

pub use diff::{RenderInstructions, RowPatch, Tier, rebuild, render, tier};
pub use row::{Chevron, RowFlags, RowStyle, RowVisual, build_rows};
