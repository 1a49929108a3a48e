// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Title filtering.

use alloc::vec::Vec;

use crate::tree::{Tree, TreeNode};
use crate::types::NodeId;

/// Result of [`Tree::filter`].
#[derive(Clone, Debug)]
pub struct Filtered {
    /// The filtered outline. Always a new handle unless the term was blank.
    pub tree: Tree,
    /// Nodes kept only because a descendant matched, in pre-order.
    ///
    /// A view must expand these for the matches to become visible.
    pub reveal: Vec<NodeId>,
}

impl Tree {
    /// Returns a copy of the outline restricted to titles containing `term`.
    ///
    /// Matching is case-insensitive. A matching node is kept with its whole subtree;
    /// a non-matching node is kept only if some descendant matches, in which case
    /// it is listed in [`Filtered::reveal`]. A blank term returns this handle unchanged.
    pub fn filter(&self, term: &str) -> Filtered {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Filtered {
                tree: self.clone(),
                reveal: Vec::new(),
            };
        }
        let mut reveal = Vec::new();
        let roots = filter_nodes(self.roots(), &needle, &mut reveal);
        Filtered {
            tree: Self::new(roots),
            reveal,
        }
    }
}

fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

/// A non-matching node whose children are still being filtered.
struct Pending<'a> {
    node: &'a TreeNode,
    next_child: usize,
    kept: Vec<TreeNode>,
    /// Index of this node's entry in `reveal`.
    slot: usize,
}

fn filter_nodes(roots: &[TreeNode], needle: &str, reveal: &mut Vec<NodeId>) -> Vec<TreeNode> {
    let mut kept_roots = Vec::new();
    let mut roots = roots.iter();
    let mut stack: Vec<Pending<'_>> = Vec::new();
    loop {
        let next = match stack.last_mut() {
            Some(top) => {
                let node = top.node;
                top.next_child += 1;
                node.children.get(top.next_child - 1)
            }
            None => match roots.next() {
                Some(root) => Some(root),
                None => break,
            },
        };

        let Some(node) = next else {
            // Every child of the top node has been filtered.
            let Some(done) = stack.pop() else { break };
            if done.kept.is_empty() {
                reveal.truncate(done.slot);
                continue;
            }
            let node = TreeNode {
                id: done.node.id.clone(),
                title: done.node.title.clone(),
                kind: done.node.kind,
                link_target: done.node.link_target.clone(),
                action: done.node.action.clone(),
                children: done.kept,
            };
            match stack.last_mut() {
                Some(parent) => parent.kept.push(node),
                None => kept_roots.push(node),
            }
            continue;
        };

        if title_matches(&node.title, needle) {
            match stack.last_mut() {
                Some(parent) => parent.kept.push(node.clone()),
                None => kept_roots.push(node.clone()),
            }
        } else {
            // Reserve the slot so `reveal` stays in pre-order.
            let slot = reveal.len();
            reveal.push(node.id.clone());
            stack.push(Pending {
                node,
                next_child: 0,
                kept: Vec::new(),
                slot,
            });
        }
    }
    kept_roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Tree {
        Tree::new(vec![
            TreeNode::new("settings", "Settings")
                .with_child(
                    TreeNode::new("network", "Network")
                        .with_child(TreeNode::new("proxy", "Proxy"))
                        .with_child(TreeNode::new("dns", "DNS servers")),
                )
                .with_child(TreeNode::new("display", "Display")),
            TreeNode::new("servers", "Servers").with_child(TreeNode::new("east", "East")),
            TreeNode::new("about", "About"),
        ])
    }

    fn flat_ids(tree: &Tree) -> Vec<&str> {
        tree.flatten().into_iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn blank_term_keeps_the_same_handle() {
        let tree = sample();
        let filtered = tree.filter("   ");
        assert!(filtered.tree.ptr_eq(&tree));
        assert!(filtered.reveal.is_empty());
    }

    #[test]
    fn matches_keep_ancestors_and_subtrees() {
        let tree = sample();
        let filtered = tree.filter("SERVER");
        // "DNS servers" matches deep down; "Servers" matches at the root with its subtree.
        assert_eq!(
            flat_ids(&filtered.tree),
            ["settings", "network", "dns", "servers", "east"]
        );
        assert_eq!(
            filtered.reveal,
            vec![NodeId::from("settings"), NodeId::from("network")]
        );
        assert!(!filtered.tree.ptr_eq(&tree));
    }

    #[test]
    fn no_match_yields_empty_tree() {
        let filtered = sample().filter("zzz");
        assert!(filtered.tree.is_empty());
        assert!(filtered.reveal.is_empty());
    }

    #[test]
    fn failed_branches_do_not_leak_into_reveal() {
        let filtered = sample().filter("display");
        assert_eq!(flat_ids(&filtered.tree), ["settings", "display"]);
        assert_eq!(filtered.reveal, vec![NodeId::from("settings")]);
    }

    #[test]
    fn deep_chains_filter_without_recursion() {
        let mut node = TreeNode::new("n0", "needle");
        for i in 1..2_000 {
            node = TreeNode::new(NodeId::new(alloc::format!("n{i}")), "level").with_child(node);
        }
        let tree = Tree::new(vec![node, TreeNode::new("other", "Other")]);
        let filtered = tree.filter("needle");
        assert_eq!(filtered.tree.len(), 2_000);
        assert_eq!(filtered.reveal.len(), 1_999);
        assert_eq!(filtered.reveal[0], NodeId::from("n1999"));
        assert_eq!(filtered.tree.depth_of("n0"), Some(1_999));
    }
}
