//! # PageForge Server
//!
//! Local embedded REST API for the PageForge editor. Binds to localhost
//! only; the editor frontend and the exporter are its only clients.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod health;
pub mod routes;
pub mod validation;

use axum::routing::get;
use axum::Router;
use forge_core::ProjectStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Project, template, and page storage.
    pub store: ProjectStore,
}

impl AppState {
    /// Create state backed by a fresh store (built-in templates seeded).
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ProjectStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the API router.
///
/// Kept separate from `main` so integration tests can drive the router
/// directly without binding a socket.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/api/health", get(health::api_health))
        .route(
            "/api/projects",
            get(routes::list_projects).post(routes::create_project),
        )
        .route(
            "/api/projects/from-template",
            axum::routing::post(routes::create_project_from_template),
        )
        .route(
            "/api/projects/{id}",
            get(routes::get_project)
                .patch(routes::update_project)
                .delete(routes::delete_project),
        )
        .route("/api/projects/{id}/export", axum::routing::post(routes::export_project))
        .route(
            "/api/projects/{id}/pages",
            get(routes::list_pages).post(routes::create_page),
        )
        .route(
            "/api/pages/{id}",
            get(routes::get_page)
                .patch(routes::update_page)
                .delete(routes::delete_page),
        )
        .route(
            "/api/templates",
            get(routes::list_templates).post(routes::create_template),
        )
        .route("/api/templates/{id}", get(routes::get_template))
        .with_state(state)
}
