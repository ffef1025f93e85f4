//! Commerce widget interiors.

use crate::fragment::Fragment;
use crate::kinds::ComponentKind;
use crate::render::RenderContext;
use forge_core::ResolvedNode;
use serde_json::Value;

/// Star rating: filled stars for the value, hollow for the rest.
pub struct RatingKind;

impl ComponentKind for RatingKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let max = node
            .node
            .component_data
            .get("max")
            .and_then(Value::as_u64)
            .unwrap_or(5)
            .clamp(1, 10);
        let value = node
            .node
            .component_data
            .get("value")
            .and_then(Value::as_u64)
            .unwrap_or(4)
            .min(max);
        let mut stars = String::new();
        for position in 1..=max {
            stars.push(if position <= value { '★' } else { '☆' });
        }
        vec![Fragment::new("span")
            .attr("class", "rating-stars")
            .style("color", "#f59e0b")
            .style("letter-spacing", "2px")
            .with_text(stars)]
    }
}

/// Star rating.
pub static RATING: RatingKind = RatingKind;

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::ComponentNode;
    use serde_json::json;

    #[test]
    fn rating_defaults_to_four_of_five() {
        let node = ComponentNode::new("rating");
        let html = RATING.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("★★★★☆"));
    }

    #[test]
    fn rating_respects_value_and_max() {
        let mut node = ComponentNode::new("rating");
        node.component_data.insert("value".to_string(), json!(2));
        node.component_data.insert("max".to_string(), json!(3));
        let html = RATING.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("★★☆"));
    }
}
