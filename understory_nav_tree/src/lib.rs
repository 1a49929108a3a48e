// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_tree --heading-base-level=0

//! Understory Nav Tree: the immutable outline model behind a side navigation.
//!
//! A navigation outline is an ordered forest of [`TreeNode`]s. Each node carries a stable
//! [`NodeId`], a display title, a semantic [`NodeKind`], an optional link target, an optional
//! [`Action`] callback, and its ordered children.
//!
//! Nodes are never edited in place. A host that wants a different outline builds a new one
//! and hands it over as a fresh [`Tree`] handle. Handles are cheap to clone and compare by
//! identity, which lets downstream crates detect "the tree was replaced" without walking it.
//!
//! ## Queries
//!
//! - [`find_by_id`] / [`Tree::find`]: depth-first search, first match wins.
//! - [`flatten`] / [`Tree::flatten`]: depth-first pre-order, parents before children.
//! - [`find_parent`] / [`Tree::parent_of`]: the node whose children contain the target.
//! - [`ancestors_of`] / [`Tree::ancestors_of`]: root-first chain of proper ancestors.
//! - [`Tree::filter`]: a filtered copy keeping matches, their subtrees, and their ancestors.
//!
//! Lookups that find nothing return `None`; they never panic.
//!
//! ## Example
//!
//! ```rust
//! use understory_nav_tree::{NodeKind, Tree, TreeNode};
//!
//! let tree = Tree::new(vec![
//!     TreeNode::new("guide", "Guide")
//!         .with_kind(NodeKind::Module)
//!         .with_child(TreeNode::new("install", "Install").with_link("/guide/install"))
//!         .with_child(TreeNode::new("usage", "Usage")),
//!     TreeNode::new("faq", "FAQ"),
//! ]);
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.parent_of("usage").map(|n| n.id.as_str()), Some("guide"));
//! assert_eq!(tree.depth_of("install"), Some(1));
//!
//! let order: Vec<&str> = tree.flatten().iter().map(|n| n.id.as_str()).collect();
//! assert_eq!(order, ["guide", "install", "usage", "faq"]);
//! ```
//!
//! ## Identifiers
//!
//! Ids must be unique across the whole tree. This is a caller contract: [`Tree::new`] only
//! checks it with a debug assertion, and [`first_duplicate_id`] is available for hosts that
//! validate untrusted input.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
mod tree;
mod types;

pub use filter::Filtered;
pub use tree::{
    Ancestors, Tree, TreeNode, ancestors_of, find_by_id, find_parent, first_duplicate_id,
    flatten, has_children,
};
pub use types::{Action, NodeId, NodeKind};
