//! Form control interiors.

use crate::fragment::Fragment;
use crate::kinds::ComponentKind;
use crate::render::RenderContext;
use forge_core::ResolvedNode;
use serde_json::Value;

/// Single-line input. The element itself is the whole component.
pub struct InputKind;

impl ComponentKind for InputKind {
    fn render(&self, _node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        Vec::new()
    }
}

/// Multi-line input: content becomes the prefilled text.
pub struct TextareaKind;

impl ComponentKind for TextareaKind {}

/// Dropdown: options come from `componentData.options`, with a generic
/// placeholder set when none are configured yet.
pub struct SelectKind;

impl ComponentKind for SelectKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let configured: Vec<String> = node
            .node
            .data_array("options")
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let options = if configured.is_empty() {
            vec![
                "Option 1".to_string(),
                "Option 2".to_string(),
                "Option 3".to_string(),
            ]
        } else {
            configured
        };
        options
            .into_iter()
            .map(|label| Fragment::new("option").with_text(label))
            .collect()
    }
}

/// Toggle control: a box or dot next to its label text.
pub struct ToggleKind {
    input_type: &'static str,
}

impl ComponentKind for ToggleKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        vec![
            Fragment::new("input").attr("type", self.input_type),
            Fragment::new("span").with_text(node.effective_content()),
        ]
    }
}

/// Single-line input.
pub static INPUT: InputKind = InputKind;
/// Multi-line input.
pub static TEXTAREA: TextareaKind = TextareaKind;
/// Dropdown.
pub static SELECT: SelectKind = SelectKind;
/// Checkbox with label.
pub static CHECKBOX: ToggleKind = ToggleKind {
    input_type: "checkbox",
};
/// Radio button with label.
pub static RADIO: ToggleKind = ToggleKind { input_type: "radio" };

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::ComponentNode;
    use serde_json::json;

    #[test]
    fn select_defaults_to_three_generic_options() {
        let node = ComponentNode::new("select");
        let fragments = SELECT.export_static(&ResolvedNode::new(&node));
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].to_html(), "<option>Option 1</option>");
    }

    #[test]
    fn select_uses_configured_options() {
        let mut node = ComponentNode::new("select");
        node.component_data
            .insert("options".to_string(), json!(["S", "M", "L"]));
        let fragments = SELECT.export_static(&ResolvedNode::new(&node));
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[2].to_html(), "<option>L</option>");
    }

    #[test]
    fn checkbox_pairs_box_with_default_label() {
        let node = ComponentNode::new("checkbox");
        let fragments = CHECKBOX.export_static(&ResolvedNode::new(&node));
        assert_eq!(fragments[0].to_html(), "<input type=\"checkbox\">");
        assert!(fragments[1].to_html().contains("Case à cocher"));
    }

    #[test]
    fn input_has_no_interior() {
        let node = ComponentNode::new("input");
        assert!(INPUT
            .render(&ResolvedNode::new(&node), &RenderContext::default())
            .is_empty());
    }
}
