//! Effective-node resolution and style serialization.
//!
//! The renderer and the exporter both go through [`ResolvedNode`] so that
//! fallback tags and fallback content come from one place: a button with no
//! content reads "Bouton" in the editor preview and in the exported HTML.

use crate::node::ComponentNode;
use crate::registry::{ComponentDefinition, Registry};
use serde_json::{Map, Value};

/// A node paired with its registry definition.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedNode<'a> {
    /// The underlying node.
    pub node: &'a ComponentNode,
    /// Registry definition, absent for unknown types.
    pub definition: Option<&'static ComponentDefinition>,
}

impl<'a> ResolvedNode<'a> {
    /// Resolve a node against the registry.
    #[must_use]
    pub fn new(node: &'a ComponentNode) -> Self {
        Self {
            node,
            definition: Registry::definition(&node.kind),
        }
    }

    /// Whether the node's type is in the registry vocabulary.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.definition.is_some()
    }

    /// HTML tag: node override, else registry default, else `div`.
    #[must_use]
    pub fn effective_tag(&self) -> &str {
        self.node
            .tag
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.definition.map_or("div", |d| d.default_tag))
    }

    /// Text content: node content, else registry fallback, else empty.
    #[must_use]
    pub fn effective_content(&self) -> &str {
        match self.node.content.as_deref() {
            Some(content) if !content.is_empty() => content,
            _ => self
                .definition
                .and_then(|d| d.default_content)
                .unwrap_or(""),
        }
    }

    /// Node `className` attribute, if any.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.node.attribute("className")
    }
}

/// Convert a camelCase CSS property name to kebab-case.
///
/// `backgroundColor` → `background-color`. Already-kebab input passes
/// through unchanged.
#[must_use]
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse a pixel dimension out of a CSS value.
///
/// Accepts `"200px"`, `"200"`, `"200.5px"`. Percentages, keywords, and
/// garbage yield `None` so callers fall back to their defaults.
#[must_use]
pub fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    if number.is_empty() {
        return None;
    }
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether a style entry should survive serialization.
///
/// Empty and null values are dropped. A `lineHeight` expressed as a pixel
/// count above 50 is dropped too: those are element heights that leaked into
/// the typography map and would wreck multi-line text.
fn keep_style(key: &str, value: &Value) -> bool {
    let text = match value {
        Value::Null => return false,
        Value::String(s) => s.as_str(),
        _ => return true,
    };
    if text.is_empty() {
        return false;
    }
    if key == "lineHeight" {
        if let Some(px) = text.strip_suffix("px").and_then(|n| n.parse::<f64>().ok()) {
            if px > 50.0 {
                return false;
            }
        }
    }
    true
}

fn style_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Filter and kebab-case a style map into `(property, value)` pairs.
///
/// This is the shared front door for every serialization: the renderer puts
/// the pairs on fragments, the exporter prints them as rule bodies.
#[must_use]
pub fn style_pairs(styles: &Map<String, Value>) -> Vec<(String, String)> {
    styles
        .iter()
        .filter(|(k, v)| keep_style(k, v))
        .map(|(k, v)| (camel_to_kebab(k), style_value_text(v)))
        .collect()
}

/// Serialize a style map as declarations for a CSS rule body, one per line.
///
/// Keys are kebab-cased; filtered entries (see [`style_to_inline`]) are
/// omitted. Returns `None` when nothing survives the filter.
#[must_use]
pub fn style_to_css(styles: &Map<String, Value>) -> Option<String> {
    let declarations: Vec<String> = style_pairs(styles)
        .into_iter()
        .map(|(property, value)| format!("  {property}: {value};"))
        .collect();
    if declarations.is_empty() {
        None
    } else {
        Some(declarations.join("\n"))
    }
}

/// Serialize a style map as an inline `style` attribute value.
///
/// `prop:value` pairs joined with `;`, matching the persisted editor format.
#[must_use]
pub fn style_to_inline(styles: &Map<String, Value>) -> String {
    style_pairs(styles)
        .into_iter()
        .map(|(property, value)| format!("{property}:{value}"))
        .collect::<Vec<_>>()
        .join(";")
}
