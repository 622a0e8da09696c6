//! Form builder core and REST backend.
//!
//! The library holds the editing model (catalog, schema operations, field
//! configuration logic, metrics estimator, preview computations), the
//! persistence client, and the SQLite-backed REST server that stores form
//! schemas.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod controls;
pub mod db;
pub mod errors;
pub mod geo;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod preview;
pub mod schema;
pub mod session;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::Repository;

/// Shared handler state: the repository plus the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

/// Assemble the full router. `/api/*` routes sit behind the PSK layer;
/// `/health` does not.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();

    let api_routes = Router::new()
        .route("/forms", get(api::list_forms))
        .route("/forms", post(api::create_form))
        .route("/forms/{id}", get(api::get_form))
        .route("/forms/{id}", put(api::update_form))
        .route("/forms/{id}", delete(api::delete_form))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
