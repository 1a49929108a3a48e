// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav --heading-base-level=0

//! Understory Nav: a hierarchical side navigation widget core.
//!
//! This crate ties the layers together for hosts:
//!
//! - [`understory_nav_tree`]: the immutable outline.
//! - [`understory_nav_layout`]: visible rows, bounds, and scroll arithmetic.
//! - [`understory_nav_state`]: the immutable widget state and its mutators.
//! - [`understory_nav_input`]: hit testing and the pure input reducer.
//! - [`understory_nav_render`]: row visuals and tiered render diffing.
//!
//! [`SideNav`] holds the current state, feeds input events and host [`Command`]s through
//! the reducer, runs node actions, and returns an [`Update`] with outbound
//! [`WidgetEvent`]s and the [`RenderInstructions`] needed to catch the visuals up.
//! It does not draw, capture input, or own a window; hosts do.
//!
//! ## Construction
//!
//! A [`Payload`] (usually JSON) carries the frame, the tree, optional initial
//! selection and expansion, and [`ThemeOverrides`]. Validation fails fast: a missing
//! frame, a malformed node, or a repeated id is an [`Error`]. Without a `tree`, the
//! built-in [`demo_tree`] is used.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_nav::{InputEvent, SideNav, WidgetEvent};
//!
//! let mut nav = SideNav::from_json(r#"{
//!     "frame": { "x": 0, "y": 0, "width": 240, "height": 400 },
//!     "tree": [
//!         { "id": "home", "title": "Home", "link": "/" },
//!         { "id": "docs", "title": "Docs", "children": [
//!             { "id": "intro", "title": "Intro", "link": "/docs/intro" }
//!         ]}
//!     ],
//!     "active_id": "intro"
//! }"#)?;
//!
//! // `docs` was expanded to reveal the active node; rows are 28px tall by default.
//! let update = nav.handle_input(&InputEvent::Click(Point::new(120.0, 70.0)));
//! assert!(matches!(
//!     &update.events[..],
//!     [WidgetEvent::Navigate { id, link: Some(link) }] if id.as_str() == "intro" && link == "/docs/intro"
//! ));
//! # Ok::<(), understory_nav::Error>(())
//! ```

mod config;
mod demo;
mod error;
mod event;
mod widget;

pub use config::{FrameSpec, KindSpec, NodeSpec, Payload, ThemeOverrides, build_nodes};
pub use demo::demo_tree;
pub use error::Error;
pub use event::{Command, Update, WidgetEvent};
pub use widget::SideNav;

pub use understory_nav_input::{self, InputEvent, Key, Outcome};
pub use understory_nav_layout;
pub use understory_nav_render::{self, RenderInstructions};
pub use understory_nav_state::{self, Rgba, Theme, WidgetState};
pub use understory_nav_tree::{self, NodeId, NodeKind, Tree, TreeNode};
