//! Landing-site API and admin dashboard backend.
//!
//! Exports the core types and the router for testing and reuse.

pub mod cms;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod notify;
pub mod routes;
pub mod security;

pub use config::Config;
pub use error::{AppError, Result};
pub use notify::PublishHub;

use axum::{
    routing::{get, post},
    Router,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: Config,
    pub publish: PublishHub,
}

impl AppState {
    /// Create a new AppState with the given pool and configuration
    pub fn new(pool: sqlx::PgPool, config: Config) -> Self {
        Self {
            pool,
            config,
            publish: PublishHub::new(),
        }
    }
}

/// Build the full API router over the given state
pub fn router(state: AppState) -> Router {
    use routes::*;

    Router::new()
        .route("/health", get(health_check))
        .route("/api/gate/unlock", post(unlock_gate))
        .route("/api/gate/status", get(gate_status))
        .route(
            "/api/content/published",
            get(get_published_content).post(publish_content),
        )
        .route("/api/content/events", get(publish_events))
        .route("/api/reviews", get(list_reviews).post(submit_review))
        .route("/api/reviews/:id/moderate", post(moderate_review))
        .route("/api/admin/reviews", get(admin_list_reviews))
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            axum::routing::put(update_user).delete(delete_user),
        )
        .route(
            "/api/analytics",
            get(list_analytics).post(regenerate_analytics),
        )
        .route("/api/auth/me", get(current_operator))
        .route("/api/contact", post(submit_contact))
        .with_state(state)
}
