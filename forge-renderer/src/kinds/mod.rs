//! Per-type rendering and export behavior.
//!
//! Each component type registers a [`ComponentKind`]: `render` produces the
//! editor preview for the node's interior, `export_static` synthesizes inner
//! markup from `componentData` for the static export. The outer element
//! (tag, id, classes, author styles) is owned by the callers in
//! [`crate::render`] and [`crate::export`].

mod commerce;
mod forms;
mod layout;
mod media;
mod navigation;
mod text;
mod widgets;

use crate::fragment::Fragment;
use crate::render::RenderContext;
use forge_core::ResolvedNode;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Type-specific interior behavior.
pub trait ComponentKind: Send + Sync {
    /// Editor preview fragments for the node interior.
    ///
    /// The default shows the node's effective content as text.
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        let content = node.effective_content();
        if content.is_empty() {
            Vec::new()
        } else {
            vec![Fragment::text(content)]
        }
    }

    /// Static-export fragments synthesized from `componentData`.
    ///
    /// Only called when the node carries component data; the default emits
    /// nothing, letting content and children speak for themselves.
    fn export_static(&self, _node: &ResolvedNode<'_>) -> Vec<Fragment> {
        Vec::new()
    }
}

/// Fallback behavior for types without a dedicated interior.
struct Plain;

impl ComponentKind for Plain {}

static PLAIN: Plain = Plain;

static REGISTRY: LazyLock<HashMap<&'static str, &'static (dyn ComponentKind)>> =
    LazyLock::new(|| {
        let mut kinds: HashMap<&'static str, &'static (dyn ComponentKind)> = HashMap::new();
        // Text-bearing types.
        kinds.insert("text", &text::TEXT);
        kinds.insert("heading", &text::HEADING);
        kinds.insert("paragraph", &text::PARAGRAPH);
        kinds.insert("link", &text::LINK);
        kinds.insert("blockquote", &text::BLOCKQUOTE);
        kinds.insert("code", &text::CODE);
        kinds.insert("badge", &text::BADGE);
        kinds.insert("price", &text::PRICE);
        kinds.insert("counter", &text::COUNTER);
        kinds.insert("clock", &text::CLOCK);
        kinds.insert("button", &text::BUTTON);
        kinds.insert("cart-button", &text::CART_BUTTON);
        // Media.
        kinds.insert("image", &media::IMAGE);
        kinds.insert("video", &media::VIDEO);
        kinds.insert("audio", &media::AUDIO);
        kinds.insert("gallery", &media::GALLERY);
        kinds.insert("carousel", &media::CAROUSEL);
        // Layout and composites.
        kinds.insert("container", &PLAIN);
        kinds.insert("section", &PLAIN);
        kinds.insert("flexbox", &PLAIN);
        kinds.insert("form", &PLAIN);
        kinds.insert("modal", &PLAIN);
        kinds.insert("tabs", &layout::TABS);
        kinds.insert("dropdown", &PLAIN);
        kinds.insert("tooltip", &PLAIN);
        kinds.insert("timeline", &layout::TIMELINE);
        kinds.insert("table", &PLAIN);
        kinds.insert("comments", &PLAIN);
        kinds.insert("social-share", &PLAIN);
        kinds.insert("profile-card", &PLAIN);
        kinds.insert("product-card", &PLAIN);
        kinds.insert("grid", &layout::GRID);
        kinds.insert("list", &layout::LIST);
        kinds.insert("accordion", &layout::ACCORDION);
        kinds.insert("card", &layout::CARD);
        kinds.insert("header", &layout::HEADER);
        kinds.insert("footer", &layout::FOOTER);
        // Navigation.
        kinds.insert("navbar", &navigation::NAVBAR);
        kinds.insert("navigation", &PLAIN);
        kinds.insert("menu", &PLAIN);
        kinds.insert("breadcrumb", &navigation::BREADCRUMB);
        kinds.insert("pagination", &navigation::PAGINATION);
        // Forms.
        kinds.insert("input", &forms::INPUT);
        kinds.insert("textarea", &forms::TEXTAREA);
        kinds.insert("select", &forms::SELECT);
        kinds.insert("checkbox", &forms::CHECKBOX);
        kinds.insert("radio", &forms::RADIO);
        // Commerce widgets.
        kinds.insert("rating", &commerce::RATING);
        // Charts and widgets.
        kinds.insert("chart", &widgets::CHART);
        kinds.insert("chart-bar", &widgets::CHART_BAR);
        kinds.insert("chart-line", &widgets::CHART_LINE);
        kinds.insert("chart-pie", &widgets::CHART_PIE);
        kinds.insert("progress", &widgets::PROGRESS);
        kinds.insert("weather", &widgets::WEATHER);
        kinds.insert("map", &widgets::MAP);
        kinds
    });

/// Look up the behavior for a component type.
#[must_use]
pub fn kind_for(kind: &str) -> Option<&'static dyn ComponentKind> {
    REGISTRY.get(kind).copied()
}

/// Read a navigation entry stored either as a bare string or as an object
/// (`{label, url}`, `{text, link}`, `{platform, url}` depending on the
/// kind). Returns `(label, href)`; bare strings link to `#`.
pub(crate) fn link_entry<'a>(
    entry: &'a serde_json::Value,
    label_key: &str,
    url_key: &str,
) -> Option<(&'a str, &'a str)> {
    if let Some(label) = entry.as_str() {
        return Some((label, "#"));
    }
    let label = entry.get(label_key).and_then(serde_json::Value::as_str)?;
    let url = entry
        .get(url_key)
        .and_then(serde_json::Value::as_str)
        .unwrap_or("#");
    Some((label, url))
}

/// Centered placeholder used for empty composites ("Carrousel vide", ...).
#[must_use]
pub(crate) fn empty_state(label: &str) -> Fragment {
    Fragment::new("div")
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .style("width", "100%")
        .style("height", "100%")
        .with_text(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::registry::DEFINITIONS;

    #[test]
    fn every_registry_kind_has_a_behavior() {
        for def in DEFINITIONS {
            assert!(kind_for(def.kind).is_some(), "no behavior for {}", def.kind);
        }
    }

    #[test]
    fn unknown_kind_has_no_behavior() {
        assert!(kind_for("hologram").is_none());
    }

    #[test]
    fn empty_state_shows_label() {
        let html = empty_state("Carrousel vide").to_html();
        assert!(html.contains("Carrousel vide"));
        assert!(html.contains("align-items: center"));
    }
}
