use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/domains", get(handlers::list_domains).post(handlers::add_domain))
        .route("/api/domains/:id", get(handlers::get_domain).post(handlers::update_domain))
        .route("/api/domains/:id/delete", post(handlers::delete_domain))
        .route("/api/domains/:id/renew", post(handlers::renew_domain))
        .route("/api/project", post(handlers::project_renewal))
        .with_state(state)
}
