//! Chart and widget interiors.
//!
//! Charts export as labeled static placeholders: the bundles carry no
//! charting runtime, so the block names what would render there.

use crate::fragment::Fragment;
use crate::kinds::ComponentKind;
use crate::render::RenderContext;
use forge_core::ResolvedNode;
use serde_json::Value;

/// Chart placeholder labeled with its chart type.
pub struct ChartKind {
    default_type: &'static str,
}

impl ChartKind {
    fn placeholder(&self, node: &ResolvedNode<'_>) -> Fragment {
        let chart_type = node.node.data_str("chartType").unwrap_or(self.default_type);
        let mut block = Fragment::new("div")
            .attr("class", "chart-placeholder")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("width", "100%")
            .style("height", "100%")
            .style(
                "background-image",
                "repeating-linear-gradient(45deg, #f3f4f6 0, #f3f4f6 10px, #e5e7eb 10px, #e5e7eb 20px)",
            );
        if let Some(title) = node.node.data_str("title") {
            block = block.child(
                Fragment::new("strong")
                    .attr("class", "chart-title")
                    .with_text(title),
            );
        }
        block.child(Fragment::new("span").with_text(format!("Graphique {chart_type}")))
    }
}

impl ComponentKind for ChartKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        vec![self.placeholder(node)]
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        vec![self.placeholder(node)]
    }
}

/// Progress bar: a track with a percentage-wide fill.
pub struct ProgressKind;

impl ComponentKind for ProgressKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let value = node
            .node
            .component_data
            .get("value")
            .and_then(Value::as_u64)
            .unwrap_or(60)
            .min(100);
        let fill = Fragment::new("div")
            .attr("class", "progress-fill")
            .style("width", format!("{value}%"))
            .style("height", "100%")
            .style("background-color", "#3b82f6")
            .style("border-radius", "inherit");
        vec![Fragment::new("div")
            .attr("class", "progress-track")
            .style("width", "100%")
            .style("height", "100%")
            .style("background-color", "#e5e7eb")
            .style("border-radius", "9999px")
            .style("overflow", "hidden")
            .child(fill)]
    }
}

/// Placeholder widget labeled in French (weather card, map).
pub struct LabeledWidgetKind {
    label: &'static str,
    detail_key: &'static str,
}

impl ComponentKind for LabeledWidgetKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        self.export_static(node)
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let mut block = Fragment::new("div")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("width", "100%")
            .style("height", "100%")
            .style("background-color", "#f3f4f6")
            .style("color", "#6b7280")
            .child(Fragment::new("span").with_text(self.label));
        if let Some(detail) = node.node.data_str(self.detail_key) {
            block = block.child(Fragment::new("strong").with_text(detail));
        }
        vec![block]
    }
}

/// Generic chart, type taken from `componentData.chartType`.
pub static CHART: ChartKind = ChartKind { default_type: "bar" };
/// Bar chart.
pub static CHART_BAR: ChartKind = ChartKind { default_type: "bar" };
/// Line chart.
pub static CHART_LINE: ChartKind = ChartKind {
    default_type: "line",
};
/// Pie chart.
pub static CHART_PIE: ChartKind = ChartKind { default_type: "pie" };
/// Progress bar.
pub static PROGRESS: ProgressKind = ProgressKind;
/// Weather card placeholder.
pub static WEATHER: LabeledWidgetKind = LabeledWidgetKind {
    label: "Météo",
    detail_key: "city",
};
/// Map placeholder.
pub static MAP: LabeledWidgetKind = LabeledWidgetKind {
    label: "Carte",
    detail_key: "location",
};
