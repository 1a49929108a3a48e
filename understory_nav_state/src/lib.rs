// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_state --heading-base-level=0

//! Understory Nav State: the immutable state of a side navigation widget.
//!
//! [`WidgetState`] bundles the frame, the tree, the selection (active, focused, and
//! hovered ids), the expansion set, the scroll offset, the [`Theme`], and the bounds of
//! every visible row. Every mutator borrows the state and returns a new one; nothing
//! is changed in place. Keeping the previous value around is how renderers decide how
//! much to redraw.
//!
//! The bounds map is a cache derived from the displayed tree and the expansion set
//! via [`understory_nav_layout::compute_bounds`]. It is rebuilt after any change to
//! either, and the scroll offset is re-clamped whenever content or viewport height
//! can change.
//!
//! ## Invariants
//!
//! - `bounds` covers exactly the visible nodes.
//! - `scroll_offset` lies in `[0, max_scroll]`, where `max_scroll` is
//!   `max(0, content_height − frame_height)`.
//! - After [`WidgetState::set_active`] the active node is visible.
//!
//! Active and focused ids may otherwise point into collapsed subtrees.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_nav_state::{Theme, WidgetState};
//! use understory_nav_tree::{Tree, TreeNode};
//!
//! let tree = Tree::new(vec![
//!     TreeNode::new("guide", "Guide").with_child(TreeNode::new("install", "Install")),
//!     TreeNode::new("faq", "FAQ"),
//! ]);
//! let state = WidgetState::new(Rect::new(0.0, 0.0, 240.0, 400.0), tree, Theme::default())?;
//! assert!(!state.bounds().contains("install"));
//!
//! let next = state.set_active("install");
//! assert!(next.is_expanded("guide"));
//! assert!(next.bounds().contains("install"));
//! // The old value is untouched.
//! assert!(!state.bounds().contains("install"));
//! # Ok::<(), understory_nav_state::Error>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod state;
mod theme;

pub use error::Error;
pub use state::{VisibleRow, WidgetState};
pub use theme::{Rgba, Theme};
