//! Media interiors: images, video, audio, galleries, carousels.

use crate::fragment::Fragment;
use crate::kinds::{empty_state, ComponentKind};
use crate::render::RenderContext;
use crate::scale::{content_scale, px, resolve_dimensions, scaled};
use forge_core::ResolvedNode;
use serde_json::Value;

/// Pull a URL out of an image entry: either a bare string or an object
/// with a `url`/`src` field, which is how the editor persists uploads.
fn image_url(entry: &Value) -> Option<&str> {
    entry
        .as_str()
        .or_else(|| entry.get("url").and_then(Value::as_str))
        .or_else(|| entry.get("src").and_then(Value::as_str))
}

fn media_placeholder(label: &str, node: &ResolvedNode<'_>) -> Fragment {
    let (width, height) = resolve_dimensions(node.node);
    let scale = content_scale(width, height, 0.4, 0.4);
    let font = scaled(13.0, scale, 10.0, 20.0);
    empty_state(label)
        .style("background-color", "#f3f4f6")
        .style("color", "#6b7280")
        .style("font-size", px(font))
}

/// `<img>` interior: the frame itself becomes the image when a source is
/// set, so this only supplies the no-source placeholder.
pub struct ImageKind;

impl ComponentKind for ImageKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        if node.node.attribute("src").is_some_and(|s| !s.is_empty()) {
            return Vec::new();
        }
        vec![media_placeholder("Image", node)]
    }
}

/// Video player interior.
pub struct VideoKind;

impl ComponentKind for VideoKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        if node.node.attribute("src").is_some_and(|s| !s.is_empty()) {
            return Vec::new();
        }
        vec![media_placeholder("Vidéo", node)]
    }
}

/// Audio player interior.
pub struct AudioKind;

impl ComponentKind for AudioKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        if node.node.attribute("src").is_some_and(|s| !s.is_empty()) {
            return Vec::new();
        }
        vec![media_placeholder("Audio", node)]
    }
}

/// Image grid fed by `componentData.images`.
pub struct GalleryKind;

impl GalleryKind {
    fn images<'a>(node: &'a ResolvedNode<'_>) -> Vec<&'a str> {
        node.node
            .data_array("images")
            .map(|entries| entries.iter().filter_map(image_url).collect())
            .unwrap_or_default()
    }
}

impl ComponentKind for GalleryKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        let images = Self::images(node);
        if images.is_empty() {
            return vec![empty_state("Galerie vide")];
        }
        let grid = images
            .iter()
            .take(4)
            .fold(
                Fragment::new("div")
                    .style("display", "grid")
                    .style("grid-template-columns", "repeat(2, 1fr)")
                    .style("gap", "4px")
                    .style("width", "100%")
                    .style("height", "100%"),
                |grid, url| {
                    grid.child(
                        Fragment::new("img")
                            .attr("src", (*url).to_string())
                            .attr("alt", "")
                            .style("width", "100%")
                            .style("height", "100%")
                            .style("object-fit", "cover"),
                    )
                },
            );
        vec![grid]
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let images = Self::images(node);
        if images.is_empty() {
            return vec![empty_state("Galerie vide")];
        }
        let grid = images.iter().fold(
            Fragment::new("div")
                .attr("class", "gallery-grid")
                .style("display", "grid")
                .style("grid-template-columns", "repeat(auto-fit, minmax(200px, 1fr))")
                .style("gap", "1rem"),
            |grid, url| {
                grid.child(
                    Fragment::new("img")
                        .attr("src", (*url).to_string())
                        .attr("alt", "")
                        .style("width", "100%")
                        .style("object-fit", "cover"),
                )
            },
        );
        vec![grid]
    }
}

/// Sliding image carousel fed by `componentData.images`.
pub struct CarouselKind;

impl ComponentKind for CarouselKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        let images = GalleryKind::images(node);
        // No curated images yet: the editor shows demo slides so the author
        // can judge the layout, unless an empty list was set on purpose.
        if images.is_empty() {
            if node.node.component_data.contains_key("images") {
                return vec![empty_state("Carrousel vide")];
            }
            return vec![demo_slides(node)];
        }

        let first = Fragment::new("img")
            .attr("src", images[0].to_string())
            .attr("alt", "")
            .style("width", "100%")
            .style("height", "100%")
            .style("object-fit", "cover");
        vec![
            Fragment::new("div")
                .style("position", "relative")
                .style("width", "100%")
                .style("height", "100%")
                .child(first)
                .child(dots(images.len(), node)),
        ]
    }

    fn export_static(&self, node: &ResolvedNode<'_>) -> Vec<Fragment> {
        let images = GalleryKind::images(node);
        if images.is_empty() {
            return vec![empty_state("Carrousel vide")];
        }
        let slides = images.iter().enumerate().fold(
            Fragment::new("div").attr("class", "carousel-track"),
            |track, (index, url)| {
                let mut slide = Fragment::new("img")
                    .attr("class", "carousel-item")
                    .attr("src", (*url).to_string())
                    .attr("alt", "");
                if index > 0 {
                    slide = slide.style("display", "none");
                }
                track.child(slide)
            },
        );
        let counter = Fragment::new("div")
            .attr("class", "carousel-counter")
            .with_text(format!("1/{}", images.len()));
        let nav_dots = (0..images.len()).fold(
            Fragment::new("div").attr("class", "carousel-dots"),
            |row, index| {
                let mut dot = Fragment::new("span").attr("class", "carousel-dot");
                if index == 0 {
                    dot = dot.attr("data-active", "true");
                }
                row.child(dot)
            },
        );
        vec![Fragment::new("div")
            .attr("class", "carousel")
            .child(slides)
            .child(counter)
            .child(nav_dots)]
    }
}

/// Three colored demo slides, first visible, with navigation dots.
fn demo_slides(node: &ResolvedNode<'_>) -> Fragment {
    const COLORS: [&str; 3] = ["#3b82f6", "#10b981", "#f59e0b"];
    let mut wrapper = Fragment::new("div")
        .style("position", "relative")
        .style("width", "100%")
        .style("height", "100%");
    for (index, color) in COLORS.iter().enumerate() {
        let mut slide = Fragment::new("div")
            .style("width", "100%")
            .style("height", "100%")
            .style("background-color", (*color).to_string());
        if index > 0 {
            slide = slide.style("display", "none");
        }
        wrapper = wrapper.child(slide);
    }
    wrapper.child(dots(COLORS.len(), node))
}

fn dots(count: usize, node: &ResolvedNode<'_>) -> Fragment {
    let (width, height) = resolve_dimensions(node.node);
    let scale = content_scale(width, height, 0.3, 0.3);
    let size = scaled(8.0, scale, 4.0, 12.0);
    let mut row = Fragment::new("div")
        .style("position", "absolute")
        .style("bottom", "6px")
        .style("left", "50%")
        .style("transform", "translateX(-50%)")
        .style("display", "flex")
        .style("gap", "4px");
    for index in 0..count {
        let dot = Fragment::new("span")
            .style("width", px(size))
            .style("height", px(size))
            .style("border-radius", "50%")
            .style(
                "background-color",
                if index == 0 { "#ffffff" } else { "rgba(255, 255, 255, 0.5)" },
            );
        row = row.child(dot);
    }
    row
}

/// Image placeholder or pass-through.
pub static IMAGE: ImageKind = ImageKind;
/// Video placeholder or pass-through.
pub static VIDEO: VideoKind = VideoKind;
/// Audio placeholder or pass-through.
pub static AUDIO: AudioKind = AudioKind;
/// Image grid.
pub static GALLERY: GalleryKind = GalleryKind;
/// Image carousel.
pub static CAROUSEL: CarouselKind = CarouselKind;

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::ComponentNode;
    use serde_json::json;

    fn with_images(kind: &str, images: Value) -> ComponentNode {
        let mut node = ComponentNode::new(kind);
        node.component_data.insert("images".to_string(), images);
        node
    }

    #[test]
    fn image_with_src_adds_no_interior() {
        let node = ComponentNode::new("image").with_attribute("src", "photo.jpg");
        let fragments = IMAGE.render(&ResolvedNode::new(&node), &RenderContext::default());
        assert!(fragments.is_empty());
    }

    #[test]
    fn image_without_src_shows_placeholder() {
        let node = ComponentNode::new("image");
        let html = IMAGE.render(&ResolvedNode::new(&node), &RenderContext::default())[0].to_html();
        assert!(html.contains("Image"));
        assert!(html.contains("#f3f4f6"));
    }

    #[test]
    fn empty_carousel_reports_carrousel_vide() {
        let node = with_images("carousel", json!([]));
        let preview =
            CAROUSEL.render(&ResolvedNode::new(&node), &RenderContext::default())[0].to_html();
        let export = CAROUSEL.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(preview.contains("Carrousel vide"));
        assert!(export.contains("Carrousel vide"));
    }

    #[test]
    fn carousel_without_data_shows_demo_slides() {
        let node = ComponentNode::new("carousel");
        let html =
            CAROUSEL.render(&ResolvedNode::new(&node), &RenderContext::default())[0].to_html();
        assert!(html.contains("#3b82f6"));
        assert!(html.contains("#10b981"));
    }

    #[test]
    fn carousel_export_counts_slides() {
        let node = with_images("carousel", json!(["a.jpg", "b.jpg", "c.jpg"]));
        let html = CAROUSEL.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("1/3"));
        assert!(html.contains("carousel-item"));
        assert_eq!(html.matches("carousel-dot\"").count(), 3);
    }

    #[test]
    fn gallery_reads_object_entries() {
        let node = with_images("gallery", json!([{ "url": "x.png" }]));
        let html = GALLERY.export_static(&ResolvedNode::new(&node))[0].to_html();
        assert!(html.contains("src=\"x.png\""));
    }

    #[test]
    fn empty_gallery_reports_galerie_vide() {
        let node = with_images("gallery", json!([]));
        let html = GALLERY.render(&ResolvedNode::new(&node), &RenderContext::default())[0].to_html();
        assert!(html.contains("Galerie vide"));
    }
}
