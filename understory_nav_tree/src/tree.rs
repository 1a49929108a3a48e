// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline nodes, the shared tree handle, and read-only traversal queries.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::types::{Action, NodeId, NodeKind};

/// Root-first chain of proper ancestors of a node.
///
/// Navigation outlines are shallow, so the chain normally lives inline.
pub type Ancestors = SmallVec<[NodeId; 8]>;

/// One entry of the outline.
///
/// Depth and "has children" are not stored; they are derived from position in the tree.
#[derive(Clone, Debug)]
pub struct TreeNode {
    /// Stable identifier, unique across the whole tree.
    pub id: NodeId,
    /// Display string.
    pub title: String,
    /// Semantic hint; does not affect traversal.
    pub kind: NodeKind,
    /// Optional host-defined link, reported when navigation fires.
    pub link_target: Option<String>,
    /// Optional callback invoked when navigation fires.
    pub action: Option<Action>,
    /// Ordered children. Empty for leaves.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a leaf [`NodeKind::Page`] node.
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: NodeKind::default(),
            link_target: None,
            action: None,
            children: Vec::new(),
        }
    }

    /// Sets the node kind.
    #[must_use]
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the link target.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link_target = Some(link.into());
        self
    }

    /// Attaches an action callback.
    #[must_use]
    pub fn with_action(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Action::new(f));
        self
    }

    /// Appends one child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns `true` if the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Returns `true` if `node` has at least one child.
pub fn has_children(node: &TreeNode) -> bool {
    node.has_children()
}

/// Depth-first search for the node with the given id.
///
/// Short-circuits at the first match. With unique ids there is at most one.
pub fn find_by_id<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    let mut stack: Vec<&TreeNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.id == id {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}

/// Depth-first pre-order listing of every node, parents before children.
pub fn flatten(nodes: &[TreeNode]) -> Vec<&TreeNode> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children.iter().rev());
    }
    out
}

/// Finds the node whose children list contains `id`.
///
/// Returns `None` for roots and for ids that are not in the tree.
pub fn find_parent<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    let mut stack: Vec<&TreeNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.children.iter().any(|c| c.id == id) {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}

/// Returns the root-first chain of proper ancestors of `id`.
///
/// Every ancestor has children by construction. Roots yield an empty chain;
/// ids that are not in the tree yield `None`.
pub fn ancestors_of(nodes: &[TreeNode], id: &str) -> Option<Ancestors> {
    let mut stack: Vec<(&TreeNode, usize)> = nodes.iter().rev().map(|n| (n, 0)).collect();
    let mut path: SmallVec<[&TreeNode; 8]> = SmallVec::new();
    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        if node.id == id {
            return Some(path.iter().map(|n| n.id.clone()).collect());
        }
        path.push(node);
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }
    None
}

/// Returns the first id that occurs more than once, in pre-order.
pub fn first_duplicate_id(nodes: &[TreeNode]) -> Option<NodeId> {
    let mut seen: HashSet<&str> = HashSet::new();
    flatten(nodes)
        .into_iter()
        .find(|node| !seen.insert(node.id.as_str()))
        .map(|node| node.id.clone())
}

/// Shared handle to an immutable outline.
///
/// Cloning a `Tree` shares the node storage. Two handles compare equal only when they
/// share storage: building a new tree, even with identical content, yields a handle that
/// is not equal to the old one. Renderers rely on this to detect tree replacement.
#[derive(Clone, Debug)]
pub struct Tree {
    roots: Arc<[TreeNode]>,
}

impl Tree {
    /// Creates a tree from its root nodes.
    ///
    /// Ids must be unique; this is checked in debug builds only.
    pub fn new(roots: Vec<TreeNode>) -> Self {
        debug_assert!(
            first_duplicate_id(&roots).is_none(),
            "outline ids must be unique, found duplicate {:?}",
            first_duplicate_id(&roots)
        );
        Self {
            roots: Arc::from(roots),
        }
    }

    /// Creates an empty tree.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the root nodes in order.
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.flatten().len()
    }

    /// Returns `true` if both handles share the same node storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.roots, &other.roots)
    }

    /// See [`find_by_id`].
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        find_by_id(&self.roots, id)
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// See [`flatten`].
    pub fn flatten(&self) -> Vec<&TreeNode> {
        flatten(&self.roots)
    }

    /// See [`find_parent`].
    pub fn parent_of(&self, id: &str) -> Option<&TreeNode> {
        find_parent(&self.roots, id)
    }

    /// See [`ancestors_of`].
    pub fn ancestors_of(&self, id: &str) -> Option<Ancestors> {
        ancestors_of(&self.roots, id)
    }

    /// Depth of a node, `0` for roots.
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.ancestors_of(id).map(|chain| chain.len())
    }

    /// Ids of every node that has children, in pre-order.
    pub fn expandable_ids(&self) -> Vec<NodeId> {
        self.flatten()
            .into_iter()
            .filter(|n| n.has_children())
            .map(|n| n.id.clone())
            .collect()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl From<Vec<TreeNode>> for Tree {
    fn from(roots: Vec<TreeNode>) -> Self {
        Self::new(roots)
    }
}
