//! # PageForge Core
//!
//! Core model for the PageForge website builder engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 forge-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Component Tree  │  Component Registry      │
//! │  - Nodes         │  - Definitions           │
//! │  - Walkers       │  - Default styles        │
//! │  - Positions     │  - CSS properties        │
//! ├─────────────────────────────────────────────┤
//! │  Project Store   │  Node Resolution         │
//! │  - CRUD          │  - Effective tag/content │
//! │  - Soft delete   │  - Style serialization   │
//! │  - Templates     │  - Unit parsing          │
//! └─────────────────────────────────────────────┘
//! ```

// The built-in template seeds in `templates.rs` are deep `json!` literals.
#![recursion_limit = "256"]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod node;
pub mod project;
pub mod registry;
pub mod resolve;
pub mod store;
pub mod templates;

pub use error::{ForgeError, ForgeResult};
pub use node::{find_duplicate_id, forest_contains_kind, ComponentNode, Position};
pub use project::{
    Asset, InsertPage, InsertProject, InsertTemplate, Page, PageContent, PageMeta, PageRef,
    Project, ProjectContent, ProjectSettings, ProjectStyles, SeoSettings, Template, UpdatePage,
    UpdateProject,
};
pub use registry::{ComponentDefinition, Registry};
pub use resolve::{camel_to_kebab, parse_px, style_pairs, style_to_css, style_to_inline, ResolvedNode};
pub use store::ProjectStore;

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
