//! Project, template, and page records.
//!
//! These mirror the JSON persisted by the editor: camelCase keys, optional
//! everything inside `content`, millisecond timestamps.

use crate::node::ComponentNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page metadata used in `<head>` generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Meta keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Meta author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Viewport override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
}

/// The editable content of one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// Root component trees, in document order.
    #[serde(default)]
    pub structure: Vec<ComponentNode>,
    /// Page-scoped CSS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,
    /// Page-scoped scripts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<String>,
    /// Head metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// A page entry embedded in project content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRef {
    /// Page id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL path ("/", "/contact", ...).
    pub path: String,
    /// Page content.
    #[serde(default)]
    pub content: PageContent,
}

/// A static asset referenced by the project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset id.
    pub id: String,
    /// File name.
    pub name: String,
    /// Storage path or URL.
    pub path: String,
    /// MIME-ish type hint ("image", "font", ...).
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// Project-wide stylesheet content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStyles {
    /// Global CSS appended to every export.
    #[serde(default)]
    pub global: String,
    /// Extra selector → declarations pairs.
    #[serde(default)]
    pub components: BTreeMap<String, String>,
}

/// Everything the editor stores on a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContent {
    /// Pages, in navigation order.
    #[serde(default)]
    pub pages: Vec<PageRef>,
    /// Uploaded assets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,
    /// Project stylesheets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<ProjectStyles>,
    /// Default head metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// SEO settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    /// Site title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Site description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Site keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// Project-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    /// Responsive breakpoints (name → min width in px).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub breakpoints: BTreeMap<String, u32>,
    /// SEO defaults applied when pages carry no meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoSettings>,
}

/// A project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Record id (UUID).
    pub id: String,
    /// Project name, unique among active projects.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project type: "single-page" or "multi-page".
    #[serde(rename = "type")]
    pub project_type: String,
    /// Template id this project was seeded from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Project content.
    pub content: ProjectContent,
    /// Project settings.
    pub settings: ProjectSettings,
    /// Creation time, ms since epoch.
    pub created_at: u64,
    /// Last update time, ms since epoch.
    pub updated_at: u64,
    /// False once soft-deleted.
    pub is_active: bool,
}

/// A template record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Record id (UUID).
    pub id: String,
    /// Template name.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Gallery category.
    pub category: String,
    /// Thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Seed content (structure + styles like a page).
    pub content: PageContent,
    /// Search tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Whether the template ships with the engine.
    pub is_built_in: bool,
    /// Creation time, ms since epoch.
    pub created_at: u64,
}

/// A standalone page record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Record id (UUID).
    pub id: String,
    /// Owning project id.
    pub project_id: String,
    /// Display name.
    pub name: String,
    /// URL path.
    pub path: String,
    /// Page content.
    pub content: PageContent,
    /// Head metadata.
    pub meta: PageMeta,
    /// Creation time, ms since epoch.
    pub created_at: u64,
    /// Last update time, ms since epoch.
    pub updated_at: u64,
}

/// Payload to create a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProject {
    /// Project name (required, non-empty).
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project type.
    #[serde(rename = "type")]
    pub project_type: String,
    /// Template id to seed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Partial update for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ProjectContent>,
    /// Replacement settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ProjectSettings>,
}

/// Payload to create a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTemplate {
    /// Template name (required, non-empty).
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Gallery category (required, non-empty).
    pub category: String,
    /// Thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Seed content.
    #[serde(default)]
    pub content: PageContent,
    /// Search tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Payload to create a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPage {
    /// Owning project id. Usually supplied by the route path.
    #[serde(default)]
    pub project_id: String,
    /// Display name (required, non-empty).
    pub name: String,
    /// URL path (required, must start with `/`).
    pub path: String,
    /// Page content.
    #[serde(default)]
    pub content: PageContent,
    /// Head metadata.
    #[serde(default)]
    pub meta: PageMeta,
}

/// Partial update for a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePage {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Replacement content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PageContent>,
    /// Replacement metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_serializes_with_camel_case_keys() {
        let project = Project {
            id: "p1".to_string(),
            name: "Mon site".to_string(),
            description: None,
            project_type: "single-page".to_string(),
            template: None,
            content: ProjectContent::default(),
            settings: ProjectSettings::default(),
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
            is_active: true,
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["type"], "single-page");
        assert_eq!(value["isActive"], true);
        assert!(value["createdAt"].is_u64());
        assert!(value.get("project_type").is_none());
    }

    #[test]
    fn page_content_defaults_to_empty_structure() {
        let content: PageContent = serde_json::from_value(json!({})).unwrap();
        assert!(content.structure.is_empty());
        assert!(content.styles.is_none());
    }

    #[test]
    fn insert_project_parses_wire_type_field() {
        let insert: InsertProject = serde_json::from_value(json!({
            "name": "Boutique",
            "type": "multi-page",
            "template": "tpl-1"
        }))
        .unwrap();
        assert_eq!(insert.project_type, "multi-page");
        assert_eq!(insert.template.as_deref(), Some("tpl-1"));
    }

    #[test]
    fn update_page_fields_are_all_optional() {
        let update: UpdatePage = serde_json::from_value(json!({ "name": "Accueil" })).unwrap();
        assert_eq!(update.name.as_deref(), Some("Accueil"));
        assert!(update.path.is_none());
        assert!(update.content.is_none());
    }
}
