//! Text-bearing interiors: headings, paragraphs, labels, buttons.

use crate::fragment::Fragment;
use crate::kinds::ComponentKind;
use crate::render::RenderContext;
use crate::scale::{content_scale, line_clamp, px, resolve_dimensions, scaled};
use forge_core::ResolvedNode;

/// Adaptive text interior.
///
/// A single span whose font size follows the container: `base` at the
/// 200x100 reference size, clamped to `min..=max` as the node shrinks or
/// grows. Long text is line-clamped to what the height can hold.
pub struct TextKind {
    base: f64,
    min: f64,
    max: f64,
}

impl ComponentKind for TextKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        let content = node.effective_content();
        if content.is_empty() {
            return Vec::new();
        }
        let (width, height) = resolve_dimensions(node.node);
        let scale = content_scale(width, height, 0.4, 0.4);
        let font = scaled(self.base, scale, self.min, self.max);
        let clamp = line_clamp(height, font);
        vec![Fragment::new("span")
            .style("font-size", px(font))
            .style("line-height", "1.4")
            .style("display", "-webkit-box")
            .style("-webkit-box-orient", "vertical")
            .style("-webkit-line-clamp", clamp.to_string())
            .style("overflow", "hidden")
            .with_text(content)]
    }
}

/// Button interior: a single non-wrapping label.
pub struct ButtonKind {
    base: f64,
}

impl ComponentKind for ButtonKind {
    fn render(&self, node: &ResolvedNode<'_>, _ctx: &RenderContext) -> Vec<Fragment> {
        let content = node.effective_content();
        if content.is_empty() {
            return Vec::new();
        }
        let (width, height) = resolve_dimensions(node.node);
        let scale = content_scale(width, height, 0.5, 0.5);
        let font = scaled(self.base, scale, 10.0, 22.0);
        vec![Fragment::new("span")
            .style("font-size", px(font))
            .style("white-space", "nowrap")
            .style("text-overflow", "ellipsis")
            .style("overflow", "hidden")
            .with_text(content)]
    }
}

/// Running text.
pub static TEXT: TextKind = TextKind {
    base: 16.0,
    min: 10.0,
    max: 32.0,
};
/// Headings scale harder than body text.
pub static HEADING: TextKind = TextKind {
    base: 24.0,
    min: 12.0,
    max: 48.0,
};
/// Paragraphs.
pub static PARAGRAPH: TextKind = TextKind {
    base: 14.0,
    min: 10.0,
    max: 24.0,
};
/// Hyperlinks.
pub static LINK: TextKind = TextKind {
    base: 14.0,
    min: 10.0,
    max: 22.0,
};
/// Quotations.
pub static BLOCKQUOTE: TextKind = TextKind {
    base: 15.0,
    min: 10.0,
    max: 24.0,
};
/// Monospace blocks.
pub static CODE: TextKind = TextKind {
    base: 13.0,
    min: 9.0,
    max: 20.0,
};
/// Small pill labels.
pub static BADGE: TextKind = TextKind {
    base: 12.0,
    min: 9.0,
    max: 18.0,
};
/// Price tags.
pub static PRICE: TextKind = TextKind {
    base: 18.0,
    min: 11.0,
    max: 32.0,
};
/// Animated number counters.
pub static COUNTER: TextKind = TextKind {
    base: 20.0,
    min: 12.0,
    max: 40.0,
};
/// Clock faces.
pub static CLOCK: TextKind = TextKind {
    base: 18.0,
    min: 11.0,
    max: 32.0,
};
/// Plain buttons.
pub static BUTTON: ButtonKind = ButtonKind { base: 14.0 };
/// Add-to-cart buttons.
pub static CART_BUTTON: ButtonKind = ButtonKind { base: 13.0 };
