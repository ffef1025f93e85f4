//! In-memory project storage shared across HTTP handlers.
//!
//! Provides a thread-safe [`ProjectStore`] holding projects, templates, and
//! standalone pages. Projects are soft-deleted: `delete_project` flips
//! `is_active` and removes the project's pages, but the record stays so the
//! name can be audited and later reused.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ForgeError, ForgeResult};
use crate::project::{
    InsertPage, InsertProject, InsertTemplate, Page, PageContent, PageRef, Project,
    ProjectContent, ProjectSettings, ProjectStyles, SeoSettings, Template, UpdatePage,
    UpdateProject,
};
use crate::templates::builtin_templates;

/// Default responsive breakpoints applied to new projects.
const DEFAULT_BREAKPOINTS: &[(&str, u32)] = &[("mobile", 768), ("tablet", 1024), ("desktop", 1200)];

/// Current time in milliseconds since the Unix epoch.
#[must_use]
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[derive(Debug, Default)]
struct Inner {
    projects: HashMap<String, Project>,
    templates: HashMap<String, Template>,
    pages: HashMap<String, Page>,
}

/// Thread-safe in-memory storage for projects, templates, and pages.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    inner: Arc<RwLock<Inner>>,
}

impl ProjectStore {
    /// Create a store seeded with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        let store = Self::default();
        let now = current_timestamp_ms();
        {
            let mut inner = store
                .inner
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            for template in builtin_templates(now) {
                inner.templates.insert(template.id.clone(), template);
            }
        }
        store
    }

    // ── Projects ────────────────────────────────────────────────

    /// Active projects, most recently updated first.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        let inner = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut projects: Vec<Project> = inner
            .projects
            .values()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        projects
    }

    /// Get an active project by id.
    #[must_use]
    pub fn project(&self, id: &str) -> Option<Project> {
        let inner = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.projects.get(id).filter(|p| p.is_active).cloned()
    }

    /// Create a project.
    ///
    /// When a template id is given and exists, the project starts with one
    /// `/` page carrying a deep copy of the template structure and the
    /// template stylesheet as global CSS; otherwise with one empty `/` page.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::DuplicateName`] if an active project already
    /// uses the name (case-insensitive).
    pub fn create_project(&self, insert: InsertProject) -> ForgeResult<Project> {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let name_lower = insert.name.to_lowercase();
        if inner
            .projects
            .values()
            .any(|p| p.is_active && p.name.to_lowercase() == name_lower)
        {
            return Err(ForgeError::DuplicateName(insert.name));
        }

        let template = insert
            .template
            .as_ref()
            .and_then(|id| inner.templates.get(id));
        let content = match template {
            Some(template) => ProjectContent {
                pages: vec![PageRef {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: "index".to_string(),
                    path: "/".to_string(),
                    content: PageContent {
                        structure: template.content.structure.clone(),
                        styles: template.content.styles.clone(),
                        scripts: template.content.scripts.clone(),
                        meta: template.content.meta.clone(),
                    },
                }],
                assets: Vec::new(),
                styles: Some(ProjectStyles {
                    global: template.content.styles.clone().unwrap_or_default(),
                    components: std::collections::BTreeMap::new(),
                }),
                meta: None,
            },
            None => ProjectContent {
                pages: vec![PageRef {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: "index".to_string(),
                    path: "/".to_string(),
                    content: PageContent::default(),
                }],
                assets: Vec::new(),
                styles: Some(ProjectStyles::default()),
                meta: None,
            },
        };

        let now = current_timestamp_ms();
        let project = Project {
            id: uuid::Uuid::new_v4().to_string(),
            name: insert.name,
            description: insert.description,
            project_type: insert.project_type,
            template: insert.template,
            content,
            settings: ProjectSettings {
                breakpoints: DEFAULT_BREAKPOINTS
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), *v))
                    .collect(),
                seo: Some(SeoSettings::default()),
            },
            created_at: now,
            updated_at: now,
            is_active: true,
        };
        inner.projects.insert(project.id.clone(), project.clone());
        tracing::debug!(project_id = %project.id, name = %project.name, "project created");
        Ok(project)
    }

    /// Apply a partial update to an active project.
    ///
    /// Content merges field-wise: pages, assets, and styles fall back to the
    /// stored values when the update omits them.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::ProjectNotFound`] if the project does not exist
    /// or is soft-deleted.
    pub fn update_project(&self, id: &str, updates: UpdateProject) -> ForgeResult<Project> {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let project = inner
            .projects
            .get_mut(id)
            .filter(|p| p.is_active)
            .ok_or_else(|| ForgeError::ProjectNotFound(id.to_string()))?;

        if let Some(name) = updates.name {
            project.name = name;
        }
        if let Some(description) = updates.description {
            project.description = Some(description);
        }
        if let Some(content) = updates.content {
            if !content.pages.is_empty() {
                project.content.pages = content.pages;
            }
            if !content.assets.is_empty() {
                project.content.assets = content.assets;
            }
            if content.styles.is_some() {
                project.content.styles = content.styles;
            }
            if content.meta.is_some() {
                project.content.meta = content.meta;
            }
        }
        if let Some(settings) = updates.settings {
            project.settings = settings;
        }
        project.updated_at = current_timestamp_ms();
        Ok(project.clone())
    }

    /// Soft-delete a project and drop its standalone pages.
    ///
    /// Returns `false` when the id is unknown.
    #[must_use]
    pub fn delete_project(&self, id: &str) -> bool {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let Some(project) = inner.projects.get_mut(id) else {
            return false;
        };
        project.is_active = false;
        project.updated_at = current_timestamp_ms();
        inner.pages.retain(|_, page| page.project_id != id);
        tracing::debug!(project_id = %id, "project soft-deleted");
        true
    }

    // ── Templates ───────────────────────────────────────────────

    /// All templates, most recently created first (built-ins included).
    #[must_use]
    pub fn templates(&self) -> Vec<Template> {
        let inner = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut templates: Vec<Template> = inner.templates.values().cloned().collect();
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.name.cmp(&b.name)));
        templates
    }

    /// Get a template by id.
    #[must_use]
    pub fn template(&self, id: &str) -> Option<Template> {
        let inner = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.templates.get(id).cloned()
    }

    /// Create a user template.
    #[must_use]
    pub fn create_template(&self, insert: InsertTemplate) -> Template {
        let template = Template {
            id: uuid::Uuid::new_v4().to_string(),
            name: insert.name,
            description: insert.description,
            category: insert.category,
            thumbnail: insert.thumbnail,
            content: insert.content,
            tags: insert.tags,
            is_built_in: false,
            created_at: current_timestamp_ms(),
        };
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner
            .templates
            .insert(template.id.clone(), template.clone());
        template
    }

    // ── Pages ───────────────────────────────────────────────────

    /// Standalone pages of a project, most recently updated first.
    #[must_use]
    pub fn project_pages(&self, project_id: &str) -> Vec<Page> {
        let inner = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut pages: Vec<Page> = inner
            .pages
            .values()
            .filter(|p| p.project_id == project_id)
            .cloned()
            .collect();
        pages.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        pages
    }

    /// Get a page by id.
    #[must_use]
    pub fn page(&self, id: &str) -> Option<Page> {
        let inner = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.pages.get(id).cloned()
    }

    /// Create a page under an active project.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::ProjectNotFound`] if the owning project does not
    /// exist or is soft-deleted.
    pub fn create_page(&self, insert: InsertPage) -> ForgeResult<Page> {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if !inner
            .projects
            .get(&insert.project_id)
            .is_some_and(|p| p.is_active)
        {
            return Err(ForgeError::ProjectNotFound(insert.project_id));
        }
        let now = current_timestamp_ms();
        let page = Page {
            id: uuid::Uuid::new_v4().to_string(),
            project_id: insert.project_id,
            name: insert.name,
            path: insert.path,
            content: insert.content,
            meta: insert.meta,
            created_at: now,
            updated_at: now,
        };
        inner.pages.insert(page.id.clone(), page.clone());
        Ok(page)
    }

    /// Apply a partial update to a page.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::PageNotFound`] if the page does not exist.
    pub fn update_page(&self, id: &str, updates: UpdatePage) -> ForgeResult<Page> {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let page = inner
            .pages
            .get_mut(id)
            .ok_or_else(|| ForgeError::PageNotFound(id.to_string()))?;
        if let Some(name) = updates.name {
            page.name = name;
        }
        if let Some(path) = updates.path {
            page.path = path;
        }
        if let Some(content) = updates.content {
            page.content = content;
        }
        if let Some(meta) = updates.meta {
            page.meta = meta;
        }
        page.updated_at = current_timestamp_ms();
        Ok(page.clone())
    }

    /// Delete a page. Returns `false` when the id is unknown.
    #[must_use]
    pub fn delete_page(&self, id: &str) -> bool {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.pages.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(name: &str) -> InsertProject {
        InsertProject {
            name: name.to_string(),
            description: None,
            project_type: "single-page".to_string(),
            template: None,
        }
    }

    fn landing_template_id(store: &ProjectStore) -> String {
        store
            .templates()
            .into_iter()
            .find(|t| t.name == "Page d'accueil moderne")
            .map(|t| t.id)
            .unwrap()
    }

    // ── projects ────────────────────────────────────────────────

    #[test]
    fn create_project_seeds_one_index_page() {
        let store = ProjectStore::new();
        let project = store.create_project(insert("Mon site")).unwrap();
        assert_eq!(project.content.pages.len(), 1);
        let page = &project.content.pages[0];
        assert_eq!(page.name, "index");
        assert_eq!(page.path, "/");
        assert!(page.content.structure.is_empty());
        assert!(project.is_active);
        assert_eq!(project.settings.breakpoints.get("mobile"), Some(&768));
    }

    #[test]
    fn create_project_from_template_copies_structure() {
        let store = ProjectStore::new();
        let template_id = landing_template_id(&store);
        let project = store
            .create_project(InsertProject {
                template: Some(template_id.clone()),
                ..insert("Landing")
            })
            .unwrap();
        let structure = &project.content.pages[0].content.structure;
        assert_eq!(structure[0].id, "hero-section");
        assert!(project
            .content
            .styles
            .as_ref()
            .is_some_and(|s| s.global.contains(".hero-section")));

        // The copy is deep: mutating the project leaves the template intact.
        let mut content = project.content.clone();
        content.pages[0].content.structure.clear();
        store
            .update_project(&project.id, UpdateProject {
                content: Some(content),
                ..UpdateProject::default()
            })
            .unwrap();
        let template = store.template(&template_id).unwrap();
        assert_eq!(template.content.structure[0].id, "hero-section");
    }

    #[test]
    fn unknown_template_id_yields_blank_project() {
        let store = ProjectStore::new();
        let project = store
            .create_project(InsertProject {
                template: Some("nope".to_string()),
                ..insert("Blank")
            })
            .unwrap();
        assert!(project.content.pages[0].content.structure.is_empty());
    }

    #[test]
    fn duplicate_active_name_rejected_case_insensitive() {
        let store = ProjectStore::new();
        store.create_project(insert("Mon Site")).unwrap();
        let err = store.create_project(insert("mon site")).unwrap_err();
        assert!(matches!(err, ForgeError::DuplicateName(_)));
        assert!(err.to_string().contains("existe déjà"));
    }

    #[test]
    fn soft_delete_frees_the_name() {
        let store = ProjectStore::new();
        let project = store.create_project(insert("Mon site")).unwrap();
        assert!(store.delete_project(&project.id));
        assert!(store.project(&project.id).is_none());
        assert!(store.projects().is_empty());
        store.create_project(insert("Mon site")).unwrap();
    }

    #[test]
    fn delete_project_cascades_to_pages() {
        let store = ProjectStore::new();
        let project = store.create_project(insert("Mon site")).unwrap();
        let page = store
            .create_page(InsertPage {
                project_id: project.id.clone(),
                name: "Contact".to_string(),
                path: "/contact".to_string(),
                ..InsertPage::default()
            })
            .unwrap();
        assert!(store.delete_project(&project.id));
        assert!(store.page(&page.id).is_none());
    }

    #[test]
    fn delete_unknown_project_returns_false() {
        let store = ProjectStore::new();
        assert!(!store.delete_project("nope"));
    }

    #[test]
    fn update_merges_content_fieldwise() {
        let store = ProjectStore::new();
        let project = store.create_project(insert("Mon site")).unwrap();
        let original_pages = project.content.pages.clone();
        let updated = store
            .update_project(&project.id, UpdateProject {
                description: Some("Nouveau".to_string()),
                content: Some(ProjectContent {
                    styles: Some(ProjectStyles {
                        global: "body{}".to_string(),
                        components: std::collections::BTreeMap::new(),
                    }),
                    ..ProjectContent::default()
                }),
                ..UpdateProject::default()
            })
            .unwrap();
        // Pages were omitted from the update so the stored ones survive.
        assert_eq!(updated.content.pages.len(), original_pages.len());
        assert_eq!(updated.description.as_deref(), Some("Nouveau"));
        assert!(updated.content.styles.is_some_and(|s| s.global == "body{}"));
        assert!(updated.updated_at >= project.updated_at);
    }

    #[test]
    fn update_deleted_project_is_not_found() {
        let store = ProjectStore::new();
        let project = store.create_project(insert("Mon site")).unwrap();
        assert!(store.delete_project(&project.id));
        let err = store
            .update_project(&project.id, UpdateProject::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn listing_sorts_by_recency() {
        let store = ProjectStore::new();
        let a = store.create_project(insert("A")).unwrap();
        let b = store.create_project(insert("B")).unwrap();
        store
            .update_project(&a.id, UpdateProject {
                description: Some("touché".to_string()),
                ..UpdateProject::default()
            })
            .unwrap();
        let listed = store.projects();
        assert_eq!(listed.len(), 2);
        // A was updated last so it leads; ties keep both present.
        assert!(listed[0].id == a.id || listed[0].updated_at == listed[1].updated_at);
        assert!(listed.iter().any(|p| p.id == b.id));
    }

    // ── templates ───────────────────────────────────────────────

    #[test]
    fn store_seeds_builtin_templates() {
        let store = ProjectStore::new();
        let templates = store.templates();
        assert_eq!(templates.len(), 3);
        assert!(templates.iter().all(|t| t.is_built_in));
    }

    #[test]
    fn user_templates_are_not_builtin() {
        let store = ProjectStore::new();
        let template = store.create_template(InsertTemplate {
            name: "Perso".to_string(),
            category: "custom".to_string(),
            ..InsertTemplate::default()
        });
        assert!(!template.is_built_in);
        assert_eq!(store.templates().len(), 4);
        assert_eq!(store.template(&template.id).unwrap().name, "Perso");
    }

    // ── pages ───────────────────────────────────────────────────

    #[test]
    fn page_crud_round_trip() {
        let store = ProjectStore::new();
        let project = store.create_project(insert("Mon site")).unwrap();
        let page = store
            .create_page(InsertPage {
                project_id: project.id.clone(),
                name: "Contact".to_string(),
                path: "/contact".to_string(),
                ..InsertPage::default()
            })
            .unwrap();
        assert_eq!(store.project_pages(&project.id).len(), 1);

        let updated = store
            .update_page(&page.id, UpdatePage {
                name: Some("Nous contacter".to_string()),
                ..UpdatePage::default()
            })
            .unwrap();
        assert_eq!(updated.name, "Nous contacter");
        assert_eq!(updated.path, "/contact");

        assert!(store.delete_page(&page.id));
        assert!(store.project_pages(&project.id).is_empty());
    }

    #[test]
    fn create_page_requires_active_project() {
        let store = ProjectStore::new();
        let err = store
            .create_page(InsertPage {
                project_id: "nope".to_string(),
                name: "X".to_string(),
                path: "/x".to_string(),
                ..InsertPage::default()
            })
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
