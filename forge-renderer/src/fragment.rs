//! Serializable UI fragments.
//!
//! A [`Fragment`] is the renderer's output unit: a plain element tree the
//! editor client can hydrate, and that the exporter can write out as HTML.

use serde::Serialize;

/// HTML void elements that never carry children or text.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// One element (or text leaf) of rendered output.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    /// Element tag. Empty for pure text leaves.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// Attribute pairs, in emission order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    /// Inline style pairs (kebab-case property, value).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<(String, String)>,
    /// Text content, emitted before children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child fragments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Fragment>,
}

impl Fragment {
    /// Create an element fragment.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create a text leaf.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::default()
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add an inline style declaration.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: Fragment) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Fragment>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether this fragment carries neither text nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    /// Write this fragment as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        if self.tag.is_empty() {
            if let Some(text) = &self.text {
                out.push_str(&escape_html(text));
            }
            for child in &self.children {
                child.write_html(out);
            }
            return;
        }

        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        if !self.styles.is_empty() {
            out.push_str(" style=\"");
            let inline = self
                .styles
                .iter()
                .map(|(p, v)| format!("{p}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(&escape_html(&inline));
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escape text for HTML attribute and body positions.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let fragment = Fragment::new("div")
            .attr("id", "hero")
            .style("color", "red")
            .child(Fragment::new("span").with_text("Bonjour"));
        assert_eq!(
            fragment.to_html(),
            "<div id=\"hero\" style=\"color: red\"><span>Bonjour</span></div>"
        );
    }

    #[test]
    fn text_leaf_is_escaped() {
        let fragment = Fragment::text("a < b & c");
        assert_eq!(fragment.to_html(), "a &lt; b &amp; c");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let fragment = Fragment::new("img").attr("src", "x.png");
        assert_eq!(fragment.to_html(), "<img src=\"x.png\">");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let fragment = Fragment::new("a").attr("href", "/?a=1&b=\"2\"");
        assert_eq!(
            fragment.to_html(),
            "<a href=\"/?a=1&amp;b=&quot;2&quot;\"></a>"
        );
    }

    #[test]
    fn serializes_for_the_preview_api() {
        let fragment = Fragment::new("div").with_text("x");
        let value = serde_json::to_value(&fragment).unwrap();
        assert_eq!(value["tag"], "div");
        assert_eq!(value["text"], "x");
        assert!(value.get("children").is_none());
    }
}
