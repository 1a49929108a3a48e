// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_input --heading-base-level=0

//! Understory Nav Input: hit testing and input reduction for side navigation.
//!
//! Everything here is a pure function from a [`WidgetState`](understory_nav_state::WidgetState)
//! and one event to a [`Transition`]: the next state plus an [`Outcome`] telling the host
//! whether to navigate. Nothing is mutated and nothing is dispatched; hosts decide what
//! to do with outcomes.
//!
//! ## Pointer
//!
//! [`hit_test`] maps a widget-local point to a row and a [`Region`]. Clicking the chevron
//! region of a row with children toggles it and reports [`Outcome::NoOp`]. Clicking the
//! text region selects and focuses the row and reports [`Outcome::Navigate`]. Pointer
//! moves update the hovered row.
//!
//! ## Keyboard
//!
//! Navigation is linear over the visible rows and never wraps:
//!
//! - Up/Down move one row; PageUp/PageDown move a viewport's worth of whole rows.
//! - Home/End jump to the first or last visible row.
//! - Right expands a collapsed node, or steps into the first child of an expanded one.
//! - Left collapses an expanded node, or steps out to the parent.
//! - Enter activates the current row. Escape drops focus.
//!
//! Focus moves call [`auto_scroll`], which scrolls as little as possible to bring the
//! target row fully into view.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_nav_input::{InputEvent, Key, Outcome, reduce};
//! use understory_nav_state::{Theme, WidgetState};
//! use understory_nav_tree::{Tree, TreeNode};
//!
//! let tree = Tree::new(vec![TreeNode::new("a", "A"), TreeNode::new("b", "B")]);
//! let state = WidgetState::new(Rect::new(0.0, 0.0, 200.0, 100.0), tree, Theme::default())?;
//!
//! let t = reduce(&state, &InputEvent::Key(Key::Down));
//! assert_eq!(t.state.focused_id().map(|id| id.as_str()), Some("a"));
//!
//! let t = reduce(&t.state, &InputEvent::Key(Key::Enter));
//! assert!(matches!(t.outcome, Outcome::Navigate(ref id) if id.as_str() == "a"));
//! # Ok::<(), understory_nav_state::Error>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod hit;
mod reduce;

pub use event::{InputEvent, Key, Outcome, Transition};
pub use hit::{Hit, Region, hit_test};
pub use reduce::{
    auto_scroll, handle_click, handle_key, handle_pointer_leave, handle_pointer_move,
    handle_scroll, reduce,
};
