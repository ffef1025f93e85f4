//! Editor preview rendering.

use crate::fragment::Fragment;
use crate::kinds;
use crate::scale::{px, resolve_dimensions};
use forge_core::{ComponentNode, ResolvedNode};

/// Device width the editor canvas simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    /// Full desktop canvas.
    #[default]
    Desktop,
    /// 768px tablet preview.
    Tablet,
    /// 375px phone preview.
    Mobile,
}

impl Viewport {
    /// Canvas width in pixels.
    #[must_use]
    pub fn width(self) -> f64 {
        match self {
            Self::Desktop => 1280.0,
            Self::Tablet => 768.0,
            Self::Mobile => 375.0,
        }
    }
}

/// Per-node rendering context.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    /// Whether this node is the editor selection.
    pub selected: bool,
    /// Device preview mode.
    pub viewport: Viewport,
}

/// Selection outline color.
const SELECTION_OUTLINE: &str = "2px solid #3b82f6";

/// Render a whole page structure.
#[must_use]
pub fn render_structure(structure: &[ComponentNode]) -> Vec<Fragment> {
    let ctx = RenderContext::default();
    structure.iter().map(|node| render_node(node, &ctx)).collect()
}

/// Render one node (and its children) into a preview fragment.
///
/// Unknown component types produce a visible marker instead of failing:
/// authors see exactly which node is broken, both here and in exports.
#[must_use]
pub fn render_node(node: &ComponentNode, ctx: &RenderContext) -> Fragment {
    let resolved = ResolvedNode::new(node);
    if !resolved.is_supported() {
        tracing::warn!(id = %node.id, kind = %node.kind, "unsupported component type");
        return unsupported_marker(node);
    }

    let (width, height) = resolve_dimensions(node);
    // The device preview narrows the canvas; nodes wider than the simulated
    // screen are capped to it, like the responsive export at runtime.
    let width = width.min(ctx.viewport.width());
    let inner = kinds::kind_for(&node.kind)
        .map(|k| k.render(&resolved, ctx))
        .unwrap_or_default();

    let child_ctx = RenderContext {
        selected: false,
        viewport: ctx.viewport,
    };
    let children: Vec<Fragment> = node
        .children
        .iter()
        .map(|child| render_node(child, &child_ctx))
        .collect();

    // A void tag cannot hold synthesized interior or children; fall back to
    // a div (an image without a src renders as a labeled placeholder box).
    let has_interior = !inner.is_empty() || !children.is_empty();
    let tag = effective_preview_tag(&resolved, has_interior);

    let mut fragment = Fragment::new(tag).attr("data-node-id", node.id.clone());
    if let Some(class) = resolved.class_name() {
        fragment = fragment.attr("class", class.to_string());
    }
    for (name, value) in &node.attributes {
        if name == "className" {
            continue;
        }
        if let Some(text) = value.as_str() {
            fragment = fragment.attr(name.clone(), text.to_string());
        }
    }

    for (property, value) in forge_core::resolve::style_pairs(&node.styles) {
        // The frame owns the box geometry; author values for these are
        // reflected through the resolved dimensions instead.
        if property == "width" || property == "height" || property == "overflow" {
            continue;
        }
        fragment = fragment.style(property, value);
    }
    fragment = fragment
        .style("width", px(width))
        .style("height", px(height))
        .style("overflow", "hidden")
        .style("box-sizing", "border-box");
    if ctx.selected {
        fragment = fragment.style("outline", SELECTION_OUTLINE);
    }

    fragment.with_children(inner).with_children(children)
}

fn effective_preview_tag(resolved: &ResolvedNode<'_>, has_interior: bool) -> String {
    let tag = resolved.effective_tag();
    let void = matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    );
    if void && has_interior {
        "div".to_string()
    } else {
        tag.to_string()
    }
}

fn unsupported_marker(node: &ComponentNode) -> Fragment {
    Fragment::new("div")
        .attr("data-node-id", node.id.clone())
        .attr("data-unsupported", node.kind.clone())
        .style("border", "2px dashed #ef4444")
        .style("background-color", "#fef2f2")
        .style("color", "#b91c1c")
        .style("padding", "8px")
        .style("font-size", "12px")
        .with_text(format!("Composant non supporté : {}", node.kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_renders_visible_marker() {
        let node = ComponentNode::new("hologram");
        let html = render_node(&node, &RenderContext::default()).to_html();
        assert!(html.contains("Composant non supporté : hologram"));
        assert!(html.contains("dashed #ef4444"));
    }

    #[test]
    fn button_without_content_shows_bouton() {
        let node = ComponentNode::new("button");
        let html = render_node(&node, &RenderContext::default()).to_html();
        assert!(html.contains("Bouton"));
        assert!(html.starts_with("<button"));
    }

    #[test]
    fn selection_adds_outline_without_touching_children() {
        let node = ComponentNode::new("container").with_child(ComponentNode::new("text"));
        let selected = RenderContext {
            selected: true,
            ..RenderContext::default()
        };
        let html = render_node(&node, &selected).to_html();
        assert_eq!(html.matches("outline: 2px solid #3b82f6").count(), 1);
    }

    #[test]
    fn dimensions_default_and_clamp() {
        let node = ComponentNode::new("text").with_style("width", "10px");
        let html = render_node(&node, &RenderContext::default()).to_html();
        assert!(html.contains("width: 50px"));
        assert!(html.contains("height: 100px"));
        assert!(html.contains("overflow: hidden"));
    }

    #[test]
    fn viewport_caps_node_width() {
        let node = ComponentNode::new("section").with_style("width", "1200px");
        let desktop = render_node(&node, &RenderContext::default()).to_html();
        assert!(desktop.contains("width: 1200px"));

        let mobile = RenderContext {
            viewport: Viewport::Mobile,
            ..RenderContext::default()
        };
        let html = render_node(&node, &mobile).to_html();
        assert!(html.contains("width: 375px"));
    }

    #[test]
    fn author_styles_survive_on_the_frame() {
        let node = ComponentNode::new("text").with_style("backgroundColor", "#fff");
        let html = render_node(&node, &RenderContext::default()).to_html();
        assert!(html.contains("background-color: #fff"));
    }

    #[test]
    fn children_render_recursively() {
        let node = ComponentNode::new("section")
            .with_child(ComponentNode::new("heading").with_content("Salut"));
        let html = render_node(&node, &RenderContext::default()).to_html();
        assert!(html.contains("Salut"));
    }

    #[test]
    fn structure_renders_every_root() {
        let fragments = render_structure(&[
            ComponentNode::new("text"),
            ComponentNode::new("button"),
        ]);
        assert_eq!(fragments.len(), 2);
    }
}
