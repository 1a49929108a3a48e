// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of expanded node ids.

use hashbrown::HashSet;
use understory_nav_tree::NodeId;

/// Ids of the nodes whose children are shown.
///
/// Membership only matters for ids that exist in the current tree and have children.
/// Ids left over from an earlier tree, or ids of leaves, are harmless and ignored by
/// layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    ids: HashSet<NodeId>,
}

impl ExpansionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is marked expanded.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Marks `id` expanded. Returns `true` if it was not already.
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.ids.insert(id)
    }

    /// Clears the mark on `id`. Returns `true` if it was set.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flips the mark on `id` and returns the new membership.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        if self.ids.remove(id.as_str()) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Number of marked ids, stale ones included.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Removes every mark.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Iterates the marked ids in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.ids.iter()
    }
}

impl FromIterator<NodeId> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(NodeId::from).collect()
    }
}

impl Extend<NodeId> for ExpansionSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut set = ExpansionSet::new();
        let id = NodeId::from("a");
        assert!(set.toggle(&id));
        assert!(set.contains("a"));
        assert!(!set.toggle(&id));
        assert!(set.is_empty());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: ExpansionSet = ["x", "y"].into_iter().collect();
        let b: ExpansionSet = ["y", "x"].into_iter().collect();
        assert_eq!(a, b);
    }
}
