// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random outline generators shared by the workspace property suites.
//!
//! Included with `#[path]` from each crate's `tests/` directory.

use proptest::prelude::*;
use understory_nav_tree::TreeNode;

/// Nesting skeleton of one root; ids are assigned by [`build`].
#[derive(Clone, Debug)]
pub(crate) struct Shape(pub(crate) Vec<Shape>);

/// Up to five levels deep with at most four children per node, sized around 64 nodes.
pub(crate) fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape(Vec::new())).prop_recursive(5, 64, 4, |inner| {
        proptest::collection::vec(inner, 0..4).prop_map(Shape)
    })
}

/// Builds nodes titled and identified `n0`, `n1`, ... in pre-order.
pub(crate) fn build(shapes: &[Shape], next: &mut usize) -> Vec<TreeNode> {
    let mut nodes = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let id = format!("n{next}");
        *next += 1;
        let children = build(&shape.0, next);
        nodes.push(TreeNode::new(id.as_str(), id.as_str()).with_children(children));
    }
    nodes
}
