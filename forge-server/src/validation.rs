//! Input validation for untrusted payloads.
//!
//! All user-supplied input is validated before it reaches the store.
//! Failures collect into field-level errors so the editor can annotate
//! the offending form controls in one round trip.

use forge_core::{
    find_duplicate_id, ComponentNode, InsertPage, InsertProject, InsertTemplate, PageContent,
    UpdatePage, UpdateProject,
};
use serde::Serialize;

/// Maximum length for project, template, and page names.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum length for descriptions.
pub const MAX_DESCRIPTION_LEN: usize = 1000;
/// Maximum length for page paths.
pub const MAX_PATH_LEN: usize = 200;
/// Maximum component nodes per page structure.
pub const MAX_STRUCTURE_NODES: usize = 5000;
/// Maximum nesting depth per page structure.
pub const MAX_STRUCTURE_DEPTH: usize = 50;

/// Allowed project types.
pub const PROJECT_TYPES: &[&str] = &["single-page", "multi-page"];

/// One field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Offending field, dotted for nested payloads.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn check_name(name: &str, field: &str, errors: &mut Vec<FieldError>) {
    if name.trim().is_empty() {
        errors.push(FieldError::new(field, "name is required"));
    } else if name.len() > MAX_NAME_LEN {
        errors.push(FieldError::new(
            field,
            format!("name too long (max {MAX_NAME_LEN} chars)"),
        ));
    }
}

fn check_description(description: Option<&str>, field: &str, errors: &mut Vec<FieldError>) {
    if let Some(text) = description {
        if text.len() > MAX_DESCRIPTION_LEN {
            errors.push(FieldError::new(
                field,
                format!("description too long (max {MAX_DESCRIPTION_LEN} chars)"),
            ));
        }
    }
}

fn check_path(path: &str, field: &str, errors: &mut Vec<FieldError>) {
    if !path.starts_with('/') {
        errors.push(FieldError::new(field, "path must start with '/'"));
    } else if path.len() > MAX_PATH_LEN {
        errors.push(FieldError::new(
            field,
            format!("path too long (max {MAX_PATH_LEN} chars)"),
        ));
    } else if path.contains("..") {
        errors.push(FieldError::new(field, "path contains invalid segments"));
    }
}

fn check_structure(structure: &[ComponentNode], field: &str, errors: &mut Vec<FieldError>) {
    let total: usize = structure.iter().map(ComponentNode::node_count).sum();
    if total > MAX_STRUCTURE_NODES {
        errors.push(FieldError::new(
            field,
            format!("too many components (max {MAX_STRUCTURE_NODES})"),
        ));
    }
    let depth = structure.iter().map(ComponentNode::depth).max().unwrap_or(0);
    if depth > MAX_STRUCTURE_DEPTH {
        errors.push(FieldError::new(
            field,
            format!("components nested too deeply (max {MAX_STRUCTURE_DEPTH})"),
        ));
    }
    if let Some(id) = find_duplicate_id(structure) {
        errors.push(FieldError::new(
            field,
            format!("duplicate component id \"{id}\""),
        ));
    }
}

fn check_content(content: &PageContent, field: &str, errors: &mut Vec<FieldError>) {
    check_structure(&content.structure, &format!("{field}.structure"), errors);
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a project creation payload.
///
/// # Errors
///
/// Returns all field failures at once.
pub fn validate_insert_project(insert: &InsertProject) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_name(&insert.name, "name", &mut errors);
    check_description(insert.description.as_deref(), "description", &mut errors);
    if !PROJECT_TYPES.contains(&insert.project_type.as_str()) {
        errors.push(FieldError::new(
            "type",
            "type must be \"single-page\" or \"multi-page\"",
        ));
    }
    finish(errors)
}

/// Validate a partial project update.
///
/// # Errors
///
/// Returns all field failures at once.
pub fn validate_update_project(updates: &UpdateProject) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Some(name) = &updates.name {
        check_name(name, "name", &mut errors);
    }
    check_description(updates.description.as_deref(), "description", &mut errors);
    if let Some(content) = &updates.content {
        for (index, page) in content.pages.iter().enumerate() {
            check_path(&page.path, &format!("content.pages[{index}].path"), &mut errors);
            check_content(
                &page.content,
                &format!("content.pages[{index}].content"),
                &mut errors,
            );
        }
    }
    finish(errors)
}

/// Validate a template creation payload.
///
/// # Errors
///
/// Returns all field failures at once.
pub fn validate_insert_template(insert: &InsertTemplate) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_name(&insert.name, "name", &mut errors);
    check_description(insert.description.as_deref(), "description", &mut errors);
    if insert.category.trim().is_empty() {
        errors.push(FieldError::new("category", "category is required"));
    }
    check_content(&insert.content, "content", &mut errors);
    finish(errors)
}

/// Validate a page creation payload.
///
/// # Errors
///
/// Returns all field failures at once.
pub fn validate_insert_page(insert: &InsertPage) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_name(&insert.name, "name", &mut errors);
    check_path(&insert.path, "path", &mut errors);
    check_content(&insert.content, "content", &mut errors);
    finish(errors)
}

/// Validate a partial page update.
///
/// # Errors
///
/// Returns all field failures at once.
pub fn validate_update_page(updates: &UpdatePage) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Some(name) = &updates.name {
        check_name(name, "name", &mut errors);
    }
    if let Some(path) = &updates.path {
        check_path(path, "path", &mut errors);
    }
    if let Some(content) = &updates.content {
        check_content(content, "content", &mut errors);
    }
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_project(name: &str, project_type: &str) -> InsertProject {
        InsertProject {
            name: name.to_string(),
            description: None,
            project_type: project_type.to_string(),
            template: None,
        }
    }

    #[test]
    fn valid_project_passes() {
        assert!(validate_insert_project(&insert_project("Mon site", "single-page")).is_ok());
        assert!(validate_insert_project(&insert_project("Boutique", "multi-page")).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let errors = validate_insert_project(&insert_project("  ", "single-page")).unwrap_err();
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn unknown_project_type_is_rejected() {
        let errors = validate_insert_project(&insert_project("Site", "spa")).unwrap_err();
        assert_eq!(errors[0].field, "type");
    }

    #[test]
    fn oversized_name_is_rejected() {
        let errors =
            validate_insert_project(&insert_project(&"x".repeat(101), "single-page")).unwrap_err();
        assert!(errors[0].message.contains("100"));
    }

    #[test]
    fn failures_accumulate() {
        let mut insert = insert_project("", "spa");
        insert.description = Some("y".repeat(2000));
        let errors = validate_insert_project(&insert).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn page_path_must_be_absolute() {
        let insert = InsertPage {
            project_id: "p1".to_string(),
            name: "Contact".to_string(),
            path: "contact".to_string(),
            ..InsertPage::default()
        };
        let errors = validate_insert_page(&insert).unwrap_err();
        assert_eq!(errors[0].field, "path");
    }

    #[test]
    fn traversal_paths_are_rejected() {
        let insert = InsertPage {
            project_id: "p1".to_string(),
            name: "Evil".to_string(),
            path: "/../etc".to_string(),
            ..InsertPage::default()
        };
        assert!(validate_insert_page(&insert).is_err());
    }

    #[test]
    fn duplicate_component_ids_are_rejected() {
        let mut a = ComponentNode::new("text");
        a.id = "dup".to_string();
        let mut b = ComponentNode::new("button");
        b.id = "dup".to_string();
        let insert = InsertPage {
            project_id: "p1".to_string(),
            name: "Accueil".to_string(),
            path: "/".to_string(),
            content: PageContent {
                structure: vec![a, b],
                ..PageContent::default()
            },
            ..InsertPage::default()
        };
        let errors = validate_insert_page(&insert).unwrap_err();
        assert!(errors[0].message.contains("dup"));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let mut root = ComponentNode::new("text");
        for _ in 0..MAX_STRUCTURE_DEPTH {
            let mut parent = ComponentNode::new("container");
            parent.children.push(root);
            root = parent;
        }
        let insert = InsertPage {
            project_id: "p1".to_string(),
            name: "Profond".to_string(),
            path: "/".to_string(),
            content: PageContent {
                structure: vec![root],
                ..PageContent::default()
            },
            ..InsertPage::default()
        };
        let errors = validate_insert_page(&insert).unwrap_err();
        assert!(errors[0].message.contains("nested too deeply"));
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(validate_update_project(&UpdateProject::default()).is_ok());
        assert!(validate_update_page(&UpdatePage::default()).is_ok());
    }
}
