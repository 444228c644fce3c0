//! psymetric-api
//!
//! HTTP JSON surface over the scoring engine: browse scales, open
//! administrations, record answers, complete them and read the
//! interpreted results.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use psymetric_scoring::all_instruments;
use psymetric_storage::catalog::load_catalog;
use psymetric_storage::error::StorageError;
use psymetric_storage::memory::MemoryStore;

use config::ServiceConfig;
pub use state::AppState;

/// Build the shared store from configuration. Built-in instruments are
/// installed first so a catalog can add norms to them.
pub fn build_state(config: &ServiceConfig) -> Result<AppState, StorageError> {
    let store = MemoryStore::new();
    if config.builtin_instruments {
        for instrument in all_instruments() {
            store.install_instrument(instrument.as_ref())?;
        }
    }
    if let Some(path) = &config.catalog {
        store.install_catalog(load_catalog(path)?)?;
    }
    info!(scales = store.scales()?.len(), "store ready");
    Ok(AppState {
        store: Arc::new(store),
    })
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Scales (public reference data)
        .route("/scales", get(routes::scales::list_scales))
        .route("/scales/{id}", get(routes::scales::get_scale))
        // Administrations
        .route(
            "/administrations",
            post(routes::administrations::create_administration),
        )
        .route(
            "/administrations/{id}",
            get(routes::administrations::get_administration),
        )
        .route(
            "/administrations/{id}/responses",
            post(routes::administrations::record_responses),
        )
        .route(
            "/administrations/{id}/responses/{sequence}",
            put(routes::administrations::record_response),
        )
        .route(
            "/administrations/{id}/complete",
            post(routes::administrations::complete_administration),
        )
        .route(
            "/administrations/{id}/results",
            get(routes::administrations::get_results).post(routes::administrations::recompute_results),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
