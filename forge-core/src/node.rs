//! Component nodes - the building blocks of pages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Position and size of a node on the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X position (pixels from left).
    pub x: f64,
    /// Y position (pixels from top).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 100.0,
        }
    }
}

/// A node in a page's component tree.
///
/// Nodes are stored as JSON inside page content; every field except `id` and
/// `kind` is optional on the wire, so collections default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    /// Unique identifier within the page tree (client-assigned).
    pub id: String,
    /// Component type from the registry vocabulary ("button", "carousel", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Explicit HTML tag override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// HTML attributes (className, href, src, ...).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    /// Inline style map, camelCase CSS property names.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub styles: Map<String, Value>,
    /// Structured payload for composite components (slides, columns, items...).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub component_data: Map<String, Value>,
    /// Ordered child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
    /// Canvas placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl ComponentNode {
    /// Create a node of the given type with a fresh UUID id.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set the text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set a style property.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles
            .insert(property.into(), Value::String(value.into()));
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the canvas position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Get a string style value.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).and_then(Value::as_str)
    }

    /// Get a string attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }

    /// Get an array from `componentData`.
    #[must_use]
    pub fn data_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.component_data.get(key).and_then(Value::as_array)
    }

    /// Get a string from `componentData`.
    #[must_use]
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.component_data.get(key).and_then(Value::as_str)
    }

    /// Visit this node and all descendants, depth-first.
    pub fn walk<F: FnMut(&ComponentNode)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Whether this subtree contains a node of the given type.
    ///
    /// Used as the capability scan deciding which script blocks an export
    /// needs (carousel navigation, accordion toggling, modal wiring).
    #[must_use]
    pub fn contains_kind(&self, kind: &str) -> bool {
        if self.kind == kind {
            return true;
        }
        self.children.iter().any(|c| c.contains_kind(kind))
    }

    /// Total number of nodes in this subtree (including self).
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ComponentNode::node_count).sum::<usize>()
    }

    /// Maximum nesting depth of this subtree (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ComponentNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Find the first duplicated node id in a forest, if any.
///
/// Ids must be unique per page so that exported `#id` CSS rules and DOM
/// lookups are unambiguous.
#[must_use]
pub fn find_duplicate_id(structure: &[ComponentNode]) -> Option<String> {
    let mut seen = HashSet::new();
    let mut duplicate = None;
    for node in structure {
        node.walk(&mut |n| {
            if duplicate.is_none() && !seen.insert(n.id.clone()) {
                duplicate = Some(n.id.clone());
            }
        });
    }
    duplicate
}

/// Whether any tree in a forest contains a node of the given type.
#[must_use]
pub fn forest_contains_kind(structure: &[ComponentNode], kind: &str) -> bool {
    structure.iter().any(|n| n.contains_kind(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> ComponentNode {
        ComponentNode::new("section").with_child(
            ComponentNode::new("container")
                .with_child(ComponentNode::new("carousel"))
                .with_child(ComponentNode::new("button").with_content("OK")),
        )
    }

    #[test]
    fn deserializes_wire_shape() {
        let node: ComponentNode = serde_json::from_value(json!({
            "id": "hero-title",
            "type": "heading",
            "tag": "h1",
            "content": "Bienvenue",
            "styles": { "fontSize": "3rem" },
            "position": { "x": 0.0, "y": 0.0, "width": 800.0, "height": 120.0 }
        }))
        .unwrap();
        assert_eq!(node.kind, "heading");
        assert_eq!(node.tag.as_deref(), Some("h1"));
        assert_eq!(node.style("fontSize"), Some("3rem"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn serializes_type_and_component_data_keys() {
        let mut node = ComponentNode::new("carousel");
        node.component_data
            .insert("slides".to_string(), json!([{"title": "Un"}]));
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "carousel");
        assert!(value["componentData"]["slides"].is_array());
        // Empty collections stay off the wire.
        assert!(value.get("styles").is_none());
        assert!(value.get("children").is_none());
    }

    #[test]
    fn contains_kind_scans_nested_children() {
        let tree = sample_tree();
        assert!(tree.contains_kind("carousel"));
        assert!(tree.contains_kind("button"));
        assert!(!tree.contains_kind("accordion"));
    }

    #[test]
    fn node_count_and_depth() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn duplicate_ids_detected_across_roots() {
        let mut a = ComponentNode::new("text");
        a.id = "n1".to_string();
        let mut b = ComponentNode::new("button");
        b.id = "n1".to_string();
        assert_eq!(
            find_duplicate_id(&[a.clone(), b]),
            Some("n1".to_string())
        );
        assert_eq!(find_duplicate_id(&[a]), None);
    }

    #[test]
    fn forest_scan_checks_every_root() {
        let roots = vec![ComponentNode::new("text"), sample_tree()];
        assert!(forest_contains_kind(&roots, "carousel"));
        assert!(!forest_contains_kind(&roots, "modal"));
    }
}
