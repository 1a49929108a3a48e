// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The construction payload.

use kurbo::Rect;
use serde::Deserialize;
use understory_nav_state::{Rgba, Theme};
use understory_nav_tree::{NodeKind, TreeNode, first_duplicate_id};

use crate::error::Error;

/// What a host hands over to build a [`SideNav`](crate::SideNav).
///
/// ```json
/// {
///   "frame": { "x": 0, "y": 0, "width": 240, "height": 600 },
///   "tree": [{ "id": "home", "title": "Home", "link": "/" }],
///   "active_id": "home",
///   "expanded": [],
///   "theme": { "row_height": 32 }
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payload {
    /// Widget rectangle in the parent's coordinate space. Required.
    #[serde(default)]
    pub frame: Option<FrameSpec>,
    /// Root nodes. When absent, the built-in demonstration tree is used.
    #[serde(default)]
    pub tree: Option<Vec<NodeSpec>>,
    /// Initially selected node; its ancestors are expanded.
    #[serde(default)]
    pub active_id: Option<String>,
    /// Initially focused node.
    #[serde(default)]
    pub focused_id: Option<String>,
    /// Initially expanded nodes.
    #[serde(default)]
    pub expanded: Vec<String>,
    /// Overrides applied on top of [`Theme::default`].
    #[serde(default)]
    pub theme: ThemeOverrides,
}

impl Payload {
    /// Parses a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The frame, or [`Error::MissingFrame`].
    pub fn frame(&self) -> Result<Rect, Error> {
        self.frame.map(Rect::from).ok_or(Error::MissingFrame)
    }
}

/// Origin and size of the widget frame.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameSpec {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl From<FrameSpec> for Rect {
    fn from(f: FrameSpec) -> Self {
        Self::new(f.x, f.y, f.x + f.width, f.y + f.height)
    }
}

/// Semantic node kind as spelled in payloads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindSpec {
    /// See [`NodeKind::Module`].
    Module,
    /// See [`NodeKind::Page`].
    #[default]
    Page,
    /// See [`NodeKind::Task`].
    Task,
    /// See [`NodeKind::Group`].
    Group,
    /// See [`NodeKind::Custom`].
    Custom,
}

impl From<KindSpec> for NodeKind {
    fn from(kind: KindSpec) -> Self {
        match kind {
            KindSpec::Module => Self::Module,
            KindSpec::Page => Self::Page,
            KindSpec::Task => Self::Task,
            KindSpec::Group => Self::Group,
            KindSpec::Custom => Self::Custom,
        }
    }
}

/// One node as spelled in payloads. Actions cannot be expressed here; attach them
/// with [`TreeNode::with_action`] and [`SideNav::with_tree`](crate::SideNav::with_tree).
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    /// Unique, non-empty id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Semantic kind, `page` when omitted.
    #[serde(default)]
    pub kind: KindSpec,
    /// Link target reported on navigation.
    #[serde(default, alias = "link_target")]
    pub link: Option<String>,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

/// Converts payload nodes into tree nodes, rejecting empty and duplicate ids.
pub fn build_nodes(specs: &[NodeSpec]) -> Result<Vec<TreeNode>, Error> {
    let roots = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| build_node(spec, format!("tree[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(id) = first_duplicate_id(&roots) {
        return Err(Error::DuplicateId(id.to_string()));
    }
    Ok(roots)
}

fn build_node(spec: &NodeSpec, path: String) -> Result<TreeNode, Error> {
    if spec.id.trim().is_empty() {
        return Err(Error::invalid_node(path, "id must not be empty"));
    }
    let children = spec
        .children
        .iter()
        .enumerate()
        .map(|(i, child)| build_node(child, format!("{path}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;
    let mut node = TreeNode::new(spec.id.as_str(), spec.title.as_str())
        .with_kind(spec.kind.into())
        .with_children(children);
    if let Some(link) = &spec.link {
        node = node.with_link(link.as_str());
    }
    Ok(node)
}

/// Theme fields to override. Absent fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverrides {
    /// See [`Theme::row_height`].
    pub row_height: Option<f64>,
    /// See [`Theme::indent_width`].
    pub indent_width: Option<f64>,
    /// See [`Theme::chevron_size`].
    pub chevron_size: Option<f64>,
    /// See [`Theme::chevron_margin`].
    pub chevron_margin: Option<f64>,
    /// See [`Theme::label_padding`].
    pub label_padding: Option<f64>,
    /// See [`Theme::accent_width`].
    pub accent_width: Option<f64>,
    /// See [`Theme::scroll_speed`].
    pub scroll_speed: Option<f64>,
    /// See [`Theme::background`], as `[r, g, b, a]`.
    pub background: Option<[u8; 4]>,
    /// See [`Theme::hover_background`].
    pub hover_background: Option<[u8; 4]>,
    /// See [`Theme::active_background`].
    pub active_background: Option<[u8; 4]>,
    /// See [`Theme::text`].
    pub text: Option<[u8; 4]>,
    /// See [`Theme::active_text`].
    pub active_text: Option<[u8; 4]>,
    /// See [`Theme::accent`].
    pub accent: Option<[u8; 4]>,
    /// See [`Theme::focus_ring`].
    pub focus_ring: Option<[u8; 4]>,
}

impl ThemeOverrides {
    /// Applies the present fields on top of `base`.
    pub fn apply(&self, base: Theme) -> Theme {
        let color = |o: Option<[u8; 4]>, d: Rgba| o.map_or(d, Rgba::from);
        Theme {
            row_height: self.row_height.unwrap_or(base.row_height),
            indent_width: self.indent_width.unwrap_or(base.indent_width),
            chevron_size: self.chevron_size.unwrap_or(base.chevron_size),
            chevron_margin: self.chevron_margin.unwrap_or(base.chevron_margin),
            label_padding: self.label_padding.unwrap_or(base.label_padding),
            accent_width: self.accent_width.unwrap_or(base.accent_width),
            scroll_speed: self.scroll_speed.unwrap_or(base.scroll_speed),
            background: color(self.background, base.background),
            hover_background: color(self.hover_background, base.hover_background),
            active_background: color(self.active_background, base.active_background),
            text: color(self.text, base.text),
            active_text: color(self.active_text, base.active_text),
            accent: color(self.accent, base.accent),
            focus_ring: color(self.focus_ring, base.focus_ring),
        }
    }
}
