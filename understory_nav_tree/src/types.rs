// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for outline nodes: identifiers, kinds, and action callbacks.

use alloc::string::String;
use alloc::sync::Arc;
use core::borrow::Borrow;
use core::fmt;

/// Stable identifier of a node, unique across the whole tree.
///
/// The backing string is shared, so cloning an id is a reference-count bump.
/// `NodeId` borrows as `str`, so id-keyed maps can be queried with plain `&str`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:?})", &*self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(Arc::from(id))
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl From<&Self> for NodeId {
    fn from(id: &Self) -> Self {
        id.clone()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Semantic hint describing what a node stands for.
///
/// The kind never affects traversal, layout, or input handling. Hosts may use it to
/// pick icons or routing behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A top-level module or section.
    Module,
    /// A navigable page.
    #[default]
    Page,
    /// A task or workflow entry.
    Task,
    /// A purely structural grouping.
    Group,
    /// Anything else the host wants to distinguish.
    Custom,
}

/// Zero-argument callback attached to a node.
///
/// When present, firing navigation on the node invokes the callback before the
/// navigation event reaches the host.
#[derive(Clone)]
pub struct Action(Arc<dyn Fn() + Send + Sync>);

impl Action {
    /// Wraps a callback.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Runs the callback.
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn node_id_compares_with_str() {
        let id = NodeId::from("docs");
        assert_eq!(id, "docs");
        assert_eq!(id.as_str(), "docs");
        assert_eq!(id, NodeId::new(String::from("docs")));
    }

    #[test]
    fn node_id_borrows_as_str_for_map_lookups() {
        let mut set = hashbrown::HashSet::new();
        set.insert(NodeId::from("a"));
        assert!(set.contains("a"));
        assert!(!set.contains("b"));
    }

    #[test]
    fn action_invokes_shared_callback() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let action = Action::new(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
        });
        let copy = action.clone();
        action.invoke();
        copy.invoke();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }
}
