//! POST /generate: résumé form to downloadable PDF.

use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::IntoResponse,
    Form,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeSubmission;
use crate::render::render_resume_blocking;
use crate::state::AppState;

pub const PDF_FILENAME: &str = "hoikushi-resume.pdf";

/// POST /generate
///
/// Renders the submitted fields and returns the PDF as an attachment.
/// A missing display font is not an error; the renderer falls back to Helvetica.
pub async fn handle_generate(
    State(state): State<AppState>,
    form: Result<Form<ResumeSubmission>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(submission) = form.map_err(|e| AppError::Validation(e.body_text()))?;

    info!(
        "Generating resume PDF (desired_position={}, experience={}, pr_text={})",
        submission.desired_position().is_some(),
        submission.experience().is_some(),
        submission.pr_text().is_some()
    );

    let today = chrono::Local::now().date_naive();
    let pdf = render_resume_blocking(
        submission,
        today,
        state.config.font_path.clone(),
        state.page_config.clone(),
    )
    .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
        ],
        Bytes::from(pdf),
    ))
}
