//! Navigation interiors: navbars, breadcrumbs, pagination.

use crate::fragment::Fragment;
use crate::kinds::{link_entry, ComponentKind};
use crate::render::RenderContext;
use forge_core::ResolvedNode;
use serde_json::Value;

/// Navigation bar: brand on the left, link items on the right.
pub struct NavbarKind;

impl ComponentKind for NavbarKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let data = &node.node.component_data;
        if data.is_empty() {
            return Vec::new();
        }
        let brand = node.node.data_str("brand").unwrap_or("");
        let mut bar = Fragment::new("div")
            .style("display", "flex")
            .style("align-items", "center")
            .style("justify-content", "space-between")
            .style("width", "100%");
        if !brand.is_empty() {
            bar = bar.child(
                Fragment::new("span")
                    .attr("class", "navbar-brand")
                    .style("font-weight", "bold")
                    .with_text(brand),
            );
        }
        let links = node
            .node
            .data_array("items")
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| link_entry(entry, "label", "url"))
                    .fold(
                        Fragment::new("div")
                            .attr("class", "navbar-items")
                            .style("display", "flex")
                            .style("gap", "1rem"),
                        |row, (label, url)| {
                            row.child(
                                Fragment::new("a")
                                    .attr("href", url.to_string())
                                    .with_text(label),
                            )
                        },
                    )
            })
            .unwrap_or_else(|| Fragment::new("div").attr("class", "navbar-items"));
        vec![bar.child(links)]
    }
}

/// Breadcrumb trail: items joined with `›`.
pub struct BreadcrumbKind;

impl ComponentKind for BreadcrumbKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let Some(items) = node.node.data_array("items").filter(|i| !i.is_empty()) else {
            return Vec::new();
        };
        let labels: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
        let mut trail = Fragment::new("nav")
            .attr("class", "breadcrumb")
            .style("display", "flex")
            .style("align-items", "center")
            .style("gap", "0.5rem");
        let last = labels.len().saturating_sub(1);
        for (index, label) in labels.iter().enumerate() {
            if index == last {
                trail = trail.child(Fragment::new("span").with_text(*label));
            } else {
                trail = trail
                    .child(Fragment::new("a").attr("href", "#").with_text(*label))
                    .child(Fragment::new("span").with_text("›"));
            }
        }
        vec![trail]
    }
}

/// Page selector: previous/next arrows around numbered buttons.
pub struct PaginationKind;

impl ComponentKind for PaginationKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let total = node
            .node
            .component_data
            .get("totalPages")
            .and_then(Value::as_u64)
            .unwrap_or(3)
            .clamp(1, 9);
        let current = node
            .node
            .component_data
            .get("currentPage")
            .and_then(Value::as_u64)
            .unwrap_or(1)
            .clamp(1, total);
        let mut row = Fragment::new("nav")
            .attr("class", "pagination")
            .style("display", "flex")
            .style("gap", "0.25rem")
            .child(Fragment::new("button").with_text("‹"));
        for page in 1..=total {
            let mut button = Fragment::new("button").with_text(page.to_string());
            if page == current {
                button = button.attr("data-active", "true");
            }
            row = row.child(button);
        }
        vec![row.child(Fragment::new("button").with_text("›"))]
    }
}

/// Navigation bar.
pub static NAVBAR: NavbarKind = NavbarKind;
/// Breadcrumb trail.
pub static BREADCRUMB: BreadcrumbKind = BreadcrumbKind;
/// Page selector.
pub static PAGINATION: PaginationKind = PaginationKind;

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::ComponentNode;
    use serde_json::json;

    #[test]
    fn navbar_shows_brand_and_links() {
        let mut node = ComponentNode::new("navbar");
        node.component_data.insert("brand".to_string(), json!("Forge"));
        node.component_data
            .insert("items".to_string(), json!(["Accueil", "Blog"]));
        let html = NAVBAR.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("Forge"));
        assert!(html.contains(">Blog</a>"));
    }

    #[test]
    fn navbar_items_in_object_form_keep_label_and_url() {
        let mut node = ComponentNode::new("navbar");
        node.component_data.insert(
            "items".to_string(),
            json!([
                { "url": "/accueil", "label": "Accueil" },
                { "url": "/contact", "label": "Contact" }
            ]),
        );
        let html = NAVBAR.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("href=\"/accueil\">Accueil</a>"));
        assert!(html.contains("href=\"/contact\">Contact</a>"));
    }

    #[test]
    fn breadcrumb_last_item_is_not_a_link() {
        let mut node = ComponentNode::new("breadcrumb");
        node.component_data
            .insert("items".to_string(), json!(["Accueil", "Produits", "Chaussures"]));
        let html = BREADCRUMB.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains(">Accueil</a>"));
        assert!(html.contains("<span>Chaussures</span>"));
        assert_eq!(html.matches("›").count(), 2);
    }

    #[test]
    fn pagination_marks_current_page() {
        let mut node = ComponentNode::new("pagination");
        node.component_data.insert("totalPages".to_string(), json!(5));
        node.component_data.insert("currentPage".to_string(), json!(2));
        let html = PAGINATION.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert_eq!(html.matches("<button").count(), 7);
        assert!(html.contains("data-active=\"true\">2</button>"));
    }
}
