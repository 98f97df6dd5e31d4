pub mod generate;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_index))
        .route("/resume", get(pages::handle_resume_form))
        .route("/career", get(pages::handle_career_form))
        .route("/career/preview", post(pages::handle_career_preview))
        // PDF
        .route("/generate", post(generate::handle_generate))
        // Static assets (CSS, the optional font file)
        .fallback_service(assets)
        .with_state(state)
}
