// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in demonstration outline.

use understory_nav_tree::{NodeKind, Tree, TreeNode};

fn page(id: &str, title: &str) -> TreeNode {
    TreeNode::new(id, title).with_link(format!("/{}", id.replace('.', "/")))
}

/// A small workbench outline used when a payload omits `tree`.
pub fn demo_tree() -> Tree {
    Tree::new(vec![
        TreeNode::new("overview", "Overview")
            .with_kind(NodeKind::Page)
            .with_link("/overview"),
        TreeNode::new("components", "Components")
            .with_kind(NodeKind::Module)
            .with_children([
                TreeNode::new("components.inputs", "Inputs")
                    .with_kind(NodeKind::Group)
                    .with_children([
                        page("components.inputs.button", "Button"),
                        page("components.inputs.checkbox", "Checkbox"),
                        page("components.inputs.slider", "Slider"),
                        page("components.inputs.text_field", "Text Field"),
                    ]),
                TreeNode::new("components.layout", "Layout")
                    .with_kind(NodeKind::Group)
                    .with_children([
                        page("components.layout.stack", "Stack"),
                        page("components.layout.grid", "Grid"),
                        page("components.layout.scroll", "Scroll Area"),
                    ]),
                TreeNode::new("components.navigation", "Navigation")
                    .with_kind(NodeKind::Group)
                    .with_children([
                        page("components.navigation.menu_bar", "Menu Bar"),
                        page("components.navigation.side_nav", "Side Navigation"),
                        page("components.navigation.tabs", "Tabs"),
                    ]),
            ]),
        TreeNode::new("workbench", "Workbench")
            .with_kind(NodeKind::Module)
            .with_children([
                TreeNode::new("workbench.run", "Run All Examples").with_kind(NodeKind::Task),
                TreeNode::new("workbench.inspect", "Inspect Layout").with_kind(NodeKind::Task),
                page("workbench.cards", "Card Column"),
            ]),
        TreeNode::new("settings", "Settings")
            .with_kind(NodeKind::Custom)
            .with_children([
                page("settings.theme", "Theme"),
                page("settings.keyboard", "Keyboard Shortcuts"),
            ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_nav_tree::first_duplicate_id;

    #[test]
    fn demo_tree_is_well_formed() {
        let tree = demo_tree();
        assert_eq!(first_duplicate_id(tree.roots()), None);
        assert_eq!(tree.roots().len(), 4);
        assert_eq!(
            tree.find("components.layout.grid")
                .and_then(|n| n.link_target.as_deref()),
            Some("/components/layout/grid")
        );
        assert_eq!(tree.depth_of("components.navigation.tabs"), Some(2));
    }
}
