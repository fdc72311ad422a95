pub mod health;

use axum::{
    routing::{any, get, post},
    Router,
};

use crate::contact::handlers::handle_recruiter_contact;
use crate::projects::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Contact relay answers every method so non-POST gets a JSON 405
        .route("/api/recruiter-contact", any(handle_recruiter_contact))
        .route("/api/projects", get(handlers::handle_list_projects))
        .route("/api/projects/:slug", get(handlers::handle_get_project))
        .route(
            "/api/projects/:slug/views",
            post(handlers::handle_report_view),
        )
        .with_state(state)
}
