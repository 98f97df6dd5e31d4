//! HTML page handlers.

use axum::{extract::rejection::FormRejection, response::Html, Form};

use crate::errors::AppError;
use crate::views;

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(views::index_page())
}

/// GET /resume
pub async fn handle_resume_form() -> Html<String> {
    Html(views::resume_form())
}

/// GET /career
pub async fn handle_career_form() -> Html<String> {
    Html(views::career_form())
}

/// POST /career/preview
///
/// Echoes whatever was submitted, keeping the order of the form body.
pub async fn handle_career_preview(
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(fields) = form.map_err(|e| AppError::Validation(e.body_text()))?;
    Ok(Html(views::career_preview(&fields)))
}
