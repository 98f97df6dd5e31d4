pub mod config;
pub mod errors;
pub mod layout;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;
pub mod views;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::layout::default_page_config;
use crate::routes::build_router;
use crate::state::AppState;

/// The complete application router.
///
/// This is what a hosted platform adapter mounts; the binary serves it itself
/// only for local runs.
pub fn build_app(config: Config) -> Router {
    let state = AppState {
        config,
        page_config: default_page_config(),
    };

    build_router(state).layer(TraceLayer::new_for_http())
}
