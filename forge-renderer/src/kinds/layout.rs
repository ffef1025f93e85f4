//! Composite layout interiors: grids, lists, accordions, cards, page chrome.
//!
//! These kinds synthesize the same markup for the editor preview and for the
//! static export, so a populated grid looks identical in both places.

use crate::fragment::Fragment;
use crate::kinds::{empty_state, link_entry, ComponentKind};
use crate::render::RenderContext;
use forge_core::ResolvedNode;
use serde_json::Value;

fn str_field<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}

/// Item grid fed by `componentData.gridItems`.
pub struct GridKind;

impl ComponentKind for GridKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let Some(items) = node.node.data_array("gridItems").filter(|i| !i.is_empty()) else {
            return vec![empty_state("Grille vide")];
        };
        let grid = items.iter().fold(
            Fragment::new("div")
                .attr("class", "grid-items")
                .style("display", "grid")
                .style("grid-template-columns", "repeat(auto-fit, minmax(200px, 1fr))")
                .style("gap", "1rem"),
            |grid, item| {
                let mut cell = Fragment::new("div").attr("class", "grid-item");
                if let Some(title) = str_field(item, "title") {
                    cell = cell.child(Fragment::new("h3").with_text(title));
                }
                if let Some(content) = str_field(item, "content") {
                    cell = cell.child(Fragment::new("p").with_text(content));
                }
                grid.child(cell)
            },
        );
        vec![grid]
    }
}

/// Bullet list fed by `componentData.items`.
pub struct ListKind;

impl ComponentKind for ListKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let Some(items) = node.node.data_array("items").filter(|i| !i.is_empty()) else {
            return vec![empty_state("Liste vide")];
        };
        items
            .iter()
            .filter_map(Value::as_str)
            .map(|item| Fragment::new("li").with_text(item))
            .collect()
    }
}

/// Question/answer accordion fed by `componentData.items`.
///
/// The first panel opens by default; headers carry `toggleAccordion(index)`
/// handlers backed by the exported script.
pub struct AccordionKind;

impl ComponentKind for AccordionKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let Some(items) = node.node.data_array("items").filter(|i| !i.is_empty()) else {
            return vec![empty_state("Accordéon vide")];
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let question = str_field(item, "question").unwrap_or("");
                let answer = str_field(item, "answer").unwrap_or("");
                let header = Fragment::new("button")
                    .attr("class", "accordion-header")
                    .attr("onclick", format!("toggleAccordion({index})"))
                    .style("width", "100%")
                    .style("text-align", "left")
                    .with_text(question);
                let content = Fragment::new("div")
                    .attr("class", "accordion-content")
                    .style("display", if index == 0 { "block" } else { "none" })
                    .with_text(answer);
                Fragment::new("div")
                    .attr("class", "accordion-item")
                    .child(header)
                    .child(content)
            })
            .collect()
    }
}

/// Tab strip fed by `componentData.tabs`.
///
/// The first tab is active and only its panel is visible; the preview and
/// the export share the markup.
pub struct TabsKind;

impl ComponentKind for TabsKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let Some(tabs) = node.node.data_array("tabs").filter(|t| !t.is_empty()) else {
            return vec![empty_state("Onglets vides")];
        };
        let strip = tabs.iter().enumerate().fold(
            Fragment::new("div")
                .attr("class", "tabs-header")
                .style("display", "flex")
                .style("gap", "0.5rem")
                .style("border-bottom", "1px solid #e5e7eb"),
            |strip, (index, tab)| {
                let mut button = Fragment::new("button")
                    .attr("class", "tab-button")
                    .with_text(str_field(tab, "title").unwrap_or(""));
                if index == 0 {
                    button = button.attr("data-active", "true");
                }
                strip.child(button)
            },
        );
        let panels = tabs.iter().enumerate().map(|(index, tab)| {
            Fragment::new("div")
                .attr("class", "tab-panel")
                .style("display", if index == 0 { "block" } else { "none" })
                .with_text(str_field(tab, "content").unwrap_or(""))
        });
        let mut fragments = vec![strip];
        fragments.extend(panels);
        fragments
    }
}

/// Vertical event timeline fed by `componentData.events`.
pub struct TimelineKind;

impl ComponentKind for TimelineKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let Some(events) = node.node.data_array("events").filter(|e| !e.is_empty()) else {
            return vec![empty_state("Chronologie vide")];
        };
        let column = events.iter().fold(
            Fragment::new("div")
                .attr("class", "timeline")
                .style("display", "flex")
                .style("flex-direction", "column")
                .style("gap", "1rem")
                .style("border-left", "2px solid #3b82f6")
                .style("padding-left", "1rem"),
            |column, event| {
                let mut entry = Fragment::new("div").attr("class", "timeline-item");
                if let Some(date) = str_field(event, "date") {
                    entry = entry.child(
                        Fragment::new("span")
                            .attr("class", "timeline-date")
                            .style("color", "#6b7280")
                            .style("font-size", "0.875rem")
                            .with_text(date),
                    );
                }
                if let Some(title) = str_field(event, "title") {
                    entry = entry.child(Fragment::new("strong").with_text(title));
                }
                if let Some(description) = str_field(event, "description") {
                    entry = entry.child(Fragment::new("p").with_text(description));
                }
                column.child(entry)
            },
        );
        vec![column]
    }
}

/// Content card: image, title, body from `componentData`.
pub struct CardKind;

impl ComponentKind for CardKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let data = &node.node.component_data;
        let mut fragments = Vec::new();
        if let Some(url) = data.get("imageUrl").and_then(Value::as_str) {
            if !url.is_empty() {
                fragments.push(
                    Fragment::new("img")
                        .attr("class", "card-image")
                        .attr("src", url.to_string())
                        .attr("alt", "")
                        .style("width", "100%")
                        .style("object-fit", "cover"),
                );
            }
        }
        if let Some(title) = data.get("title").and_then(Value::as_str) {
            fragments.push(
                Fragment::new("h3")
                    .attr("class", "card-title")
                    .with_text(title),
            );
        }
        if let Some(content) = data.get("content").and_then(Value::as_str) {
            fragments.push(
                Fragment::new("p")
                    .attr("class", "card-content")
                    .with_text(content),
            );
        }
        fragments
    }
}

/// Site header: logo, navigation links, optional search field.
pub struct HeaderKind;

impl ComponentKind for HeaderKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let data = &node.node.component_data;
        if data.is_empty() {
            return Vec::new();
        }
        let logo = node.node.data_str("logo").unwrap_or("Logo");
        let mut bar = Fragment::new("div")
            .style("display", "flex")
            .style("align-items", "center")
            .style("justify-content", "space-between")
            .style("width", "100%")
            .child(
                Fragment::new("div")
                    .attr("class", "header-logo")
                    .style("font-weight", "bold")
                    .with_text(logo),
            );
        let links = node
            .node
            .data_array("navigation")
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| link_entry(entry, "text", "link"))
                    .fold(
                        Fragment::new("nav")
                            .style("display", "flex")
                            .style("gap", "1rem"),
                        |nav, (label, url)| {
                            nav.child(
                                Fragment::new("a")
                                    .attr("href", url.to_string())
                                    .with_text(label),
                            )
                        },
                    )
            })
            .unwrap_or_else(|| Fragment::new("nav"));
        bar = bar.child(links);
        if data.get("showSearch").and_then(Value::as_bool) == Some(true) {
            bar = bar.child(
                Fragment::new("input")
                    .attr("type", "search")
                    .attr("placeholder", "Rechercher..."),
            );
        }
        vec![bar]
    }
}

/// Site footer: company name, link row, social row, copyright line.
pub struct FooterKind;

impl ComponentKind for FooterKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let data = &node.node.component_data;
        if data.is_empty() {
            return Vec::new();
        }
        let company = node.node.data_str("company").unwrap_or("");
        let mut column = Fragment::new("div")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("align-items", "center")
            .style("gap", "0.5rem")
            .style("width", "100%");
        if !company.is_empty() {
            column = column.child(Fragment::new("strong").with_text(company));
        }
        for (key, class, label_key) in [
            ("links", "footer-links", "label"),
            ("socialMedia", "footer-social", "platform"),
        ] {
            if let Some(entries) = node.node.data_array(key).filter(|e| !e.is_empty()) {
                let row = entries
                    .iter()
                    .filter_map(|entry| link_entry(entry, label_key, "url"))
                    .fold(
                        Fragment::new("div")
                            .attr("class", class)
                            .style("display", "flex")
                            .style("gap", "1rem"),
                        |row, (label, url)| {
                            row.child(
                                Fragment::new("a")
                                    .attr("href", url.to_string())
                                    .with_text(label),
                            )
                        },
                    );
                column = column.child(row);
            }
        }
        // Exports are reproducible, so the fallback line carries no year.
        let copyright = node
            .node
            .data_str("copyright")
            .map(ToString::to_string)
            .unwrap_or_else(|| format!("© {company}. Tous droits réservés."));
        column = column.child(
            Fragment::new("p")
                .attr("class", "footer-copyright")
                .with_text(copyright),
        );
        vec![column]
    }
}

/// Item grid.
pub static GRID: GridKind = GridKind;
/// Bullet list.
pub static LIST: ListKind = ListKind;
/// Question/answer accordion.
pub static ACCORDION: AccordionKind = AccordionKind;
/// Tab strip.
pub static TABS: TabsKind = TabsKind;
/// Event timeline.
pub static TIMELINE: TimelineKind = TimelineKind;
/// Content card.
pub static CARD: CardKind = CardKind;
/// Site header.
pub static HEADER: HeaderKind = HeaderKind;
/// Site footer.
pub static FOOTER: FooterKind = FooterKind;

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::ComponentNode;
    use serde_json::json;

    fn with_data(kind: &str, key: &str, value: Value) -> ComponentNode {
        let mut node = ComponentNode::new(kind);
        node.component_data.insert(key.to_string(), value);
        node
    }

    #[test]
    fn empty_grid_reports_grille_vide() {
        let node = with_data("grid", "gridItems", json!([]));
        let html = GRID.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("Grille vide"));
    }

    #[test]
    fn grid_items_carry_title_and_content() {
        let node = with_data(
            "grid",
            "gridItems",
            json!([{ "title": "Rapide", "content": "Livraison 24h" }]),
        );
        let html = GRID.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("<h3>Rapide</h3>"));
        assert!(html.contains("<p>Livraison 24h</p>"));
        assert!(html.contains("minmax(200px, 1fr)"));
    }

    #[test]
    fn list_items_become_li_rows() {
        let node = with_data("list", "items", json!(["Un", "Deux"]));
        let fragments = LIST.export_static(&ResolvedNode::new(&node));
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].to_html(), "<li>Un</li>");
    }

    #[test]
    fn empty_list_reports_liste_vide() {
        let node = ComponentNode::new("list");
        let html = LIST.render(&ResolvedNode::new(&node), &RenderContext::default())[0].to_html();
        assert!(html.contains("Liste vide"));
    }

    #[test]
    fn accordion_opens_first_panel_only() {
        let node = with_data(
            "accordion",
            "items",
            json!([
                { "question": "Q1", "answer": "R1" },
                { "question": "Q2", "answer": "R2" }
            ]),
        );
        let fragments = ACCORDION.export_static(&ResolvedNode::new(&node));
        let first = fragments[0].to_html();
        let second = fragments[1].to_html();
        assert!(first.contains("display: block"));
        assert!(first.contains("toggleAccordion(0)"));
        assert!(second.contains("display: none"));
        assert!(second.contains("toggleAccordion(1)"));
    }

    #[test]
    fn empty_accordion_reports_accordeon_vide() {
        let node = with_data("accordion", "items", json!([]));
        let html = ACCORDION.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("Accordéon vide"));
    }

    #[test]
    fn tabs_show_first_panel_only() {
        let node = with_data(
            "tabs",
            "tabs",
            json!([
                { "title": "Description", "content": "Détails" },
                { "title": "Avis", "content": "5 étoiles" }
            ]),
        );
        let fragments = TABS.export_static(&ResolvedNode::new(&node));
        let strip = fragments[0].to_html();
        assert!(strip.contains("data-active=\"true\""));
        assert!(strip.contains(">Description</button>"));
        assert!(fragments[1].to_html().contains("display: block"));
        assert!(fragments[2].to_html().contains("display: none"));
    }

    #[test]
    fn empty_tabs_report_onglets_vides() {
        let node = ComponentNode::new("tabs");
        let html = TABS.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("Onglets vides"));
    }

    #[test]
    fn timeline_lists_events_in_order() {
        let node = with_data(
            "timeline",
            "events",
            json!([
                { "date": "2020", "title": "Création", "description": "Lancement" },
                { "date": "2023", "title": "Expansion" }
            ]),
        );
        let html = TIMELINE.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("<strong>Création</strong>"));
        assert!(html.contains("<p>Lancement</p>"));
        assert!(html.find("2020") < html.find("2023"));
    }

    #[test]
    fn empty_timeline_reports_chronologie_vide() {
        let node = with_data("timeline", "events", json!([]));
        let html = TIMELINE.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("Chronologie vide"));
    }

    #[test]
    fn card_renders_present_fields_only() {
        let node = with_data("card", "title", json!("Offre"));
        let fragments = CARD.export_static(&ResolvedNode::new(&node));
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].to_html().contains("Offre"));
    }

    #[test]
    fn header_builds_logo_nav_and_search() {
        let mut node = ComponentNode::new("header");
        node.component_data.insert("logo".to_string(), json!("MaBoutique"));
        node.component_data
            .insert("navigation".to_string(), json!(["Accueil", "Contact"]));
        node.component_data.insert("showSearch".to_string(), json!(true));
        let html = HEADER.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("MaBoutique"));
        assert!(html.contains(">Accueil</a>"));
        assert!(html.contains("type=\"search\""));
    }

    #[test]
    fn header_navigation_accepts_object_entries() {
        let mut node = ComponentNode::new("header");
        node.component_data.insert(
            "navigation".to_string(),
            json!([{ "text": "Boutique", "link": "/boutique" }, "Contact"]),
        );
        let html = HEADER.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("href=\"/boutique\">Boutique</a>"));
        assert!(html.contains("href=\"#\">Contact</a>"));
    }

    #[test]
    fn footer_links_and_social_accept_object_entries() {
        let mut node = ComponentNode::new("footer");
        node.component_data.insert("company".to_string(), json!("PageForge"));
        node.component_data.insert(
            "links".to_string(),
            json!([{ "label": "Mentions légales", "url": "/mentions" }]),
        );
        node.component_data.insert(
            "socialMedia".to_string(),
            json!([{ "platform": "Instagram", "url": "https://instagram.com/pf" }]),
        );
        let html = FOOTER.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("href=\"/mentions\">Mentions légales</a>"));
        assert!(html.contains("href=\"https://instagram.com/pf\">Instagram</a>"));
    }

    #[test]
    fn footer_copyright_fallback_has_no_year() {
        let node = with_data("footer", "company", json!("PageForge"));
        let html = FOOTER.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("© PageForge. Tous droits réservés."));
    }
}
