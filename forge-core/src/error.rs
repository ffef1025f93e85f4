//! Error types for PageForge operations.

use thiserror::Error;

/// Result type for PageForge operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Errors that can occur in PageForge operations.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// Project not found or soft-deleted.
    #[error("Projet avec l'ID {0} introuvable")]
    ProjectNotFound(String),

    /// Template not found.
    #[error("Template {0} introuvable")]
    TemplateNotFound(String),

    /// Page not found.
    #[error("Page {0} introuvable")]
    PageNotFound(String),

    /// An active project with the same name already exists.
    #[error("Un projet avec le nom \"{0}\" existe déjà")]
    DuplicateName(String),

    /// Project has no exportable content.
    #[error("Le projet \"{0}\" n'a aucune page définie. Veuillez créer au moins une page avant d'exporter.")]
    EmptyProject(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ForgeError {
    /// Whether this error denotes a missing resource (maps to HTTP 404).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound(_) | Self::TemplateNotFound(_) | Self::PageNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_are_french() {
        let err = ForgeError::ProjectNotFound("abc".to_string());
        assert!(err.to_string().contains("introuvable"));
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_project_names_the_project() {
        let err = ForgeError::EmptyProject("Mon site".to_string());
        assert!(err.to_string().contains("Mon site"));
        assert!(err.to_string().contains("aucune page"));
        assert!(!err.is_not_found());
    }
}
