//! Responsive content scaling.
//!
//! Editor nodes carry free-form pixel dimensions; inner content (fonts, dots,
//! icons) follows the container so a shrunken component stays legible instead
//! of overflowing.

use forge_core::{parse_px, ComponentNode};

/// Reference width against which content scale is computed.
pub const BASE_WIDTH: f64 = 200.0;
/// Reference height against which content scale is computed.
pub const BASE_HEIGHT: f64 = 100.0;
/// Smallest width a node renders at.
pub const MIN_WIDTH: f64 = 50.0;
/// Smallest height a node renders at.
pub const MIN_HEIGHT: f64 = 30.0;

/// Resolve a node's render dimensions in pixels.
///
/// Styles win over canvas position; missing values fall back to the
/// 200x100 defaults, and the result is clamped to the render minimums.
#[must_use]
pub fn resolve_dimensions(node: &ComponentNode) -> (f64, f64) {
    let position = node.position;
    let width = node
        .style("width")
        .and_then(parse_px)
        .or(position.map(|p| p.width))
        .unwrap_or(BASE_WIDTH);
    let height = node
        .style("height")
        .and_then(parse_px)
        .or(position.map(|p| p.height))
        .unwrap_or(BASE_HEIGHT);
    (width.max(MIN_WIDTH), height.max(MIN_HEIGHT))
}

/// Content scale factor for a container.
///
/// Geometric mean of the per-axis ratios so a wide-but-short container does
/// not blow its text up the way a single-axis ratio would. Each axis ratio is
/// floored (floors live in 0.3..=0.5 depending on how much shrink the
/// content type tolerates).
#[must_use]
pub fn content_scale(width: f64, height: f64, floor_w: f64, floor_h: f64) -> f64 {
    let rw = (width / BASE_WIDTH).max(floor_w);
    let rh = (height / BASE_HEIGHT).max(floor_h);
    (rw * rh).sqrt()
}

/// Scale a base size and clamp the result.
#[must_use]
pub fn scaled(base: f64, scale: f64, min: f64, max: f64) -> f64 {
    (base * scale).clamp(min, max)
}

/// Number of text lines that fit in `height` at `font_size`.
///
/// Uses the 1.4 line-height the editor assumes; never below one line.
#[must_use]
pub fn line_clamp(height: f64, font_size: f64) -> u32 {
    let lines = (height / (font_size * 1.4)).floor();
    if lines < 1.0 {
        1
    } else {
        // Clamped above 1.0 so the cast is lossless for any sane height.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            lines.min(f64::from(u32::MAX)) as u32
        }
    }
}

/// Format a pixel value the way the editor does (no trailing zeros).
#[must_use]
pub fn px(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{}px", value.round())
    } else {
        format!("{value:.1}px")
    }
}
