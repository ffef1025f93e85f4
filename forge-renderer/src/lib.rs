//! # PageForge Renderer
//!
//! Turns component trees into editor preview fragments and static site
//! bundles.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               forge-renderer                │
//! ├─────────────────────────────────────────────┤
//! │  Fragments       │  Component Kinds         │
//! │  - Preview tree  │  - render()              │
//! │  - HTML writer   │  - export_static()       │
//! ├─────────────────────────────────────────────┤
//! │  Scaling         │  Exporter                │
//! │  - Dimensions    │  - HTML documents        │
//! │  - Content scale │  - styles.css / script.js│
//! │  - Line clamps   │  - package.json / README │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod export;
pub mod fragment;
pub mod kinds;
pub mod render;
pub mod scale;

pub use export::{ExportBundle, ExportFile, ExportOptions, ProjectExporter};
pub use fragment::Fragment;
pub use render::{render_node, render_structure, RenderContext, Viewport};

/// Renderer crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
