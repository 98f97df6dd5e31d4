//! Résumé rendering: font selection → layout → PDF bytes.
//!
//! `render_resume` is a pure function of (submission, date, font path) apart from
//! reading the font file. It is CPU-bound, so request handlers go through
//! `render_resume_blocking`, which runs it on the blocking pool.

pub mod date;
pub mod fonts;
pub mod pdf;
pub mod resume;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::errors::AppError;
use crate::layout::PageConfig;
use crate::models::ResumeSubmission;

pub use fonts::{load_display_font, DisplayFont};
pub use resume::lay_out_resume;

/// Renders `submission` to PDF bytes.
pub fn render_resume(
    submission: &ResumeSubmission,
    today: NaiveDate,
    font_path: &Path,
    page: PageConfig,
) -> Result<Vec<u8>, AppError> {
    let font = load_display_font(font_path);
    let doc = lay_out_resume(submission, today, font.family(), page);
    let bytes = pdf::write_pdf(&doc, &font)?;

    info!(
        "Rendered resume: font={:?} pages={} lines={} bytes={}",
        doc.font,
        doc.page_count(),
        doc.line_count(),
        bytes.len()
    );
    Ok(bytes)
}

/// `render_resume` on `tokio::task::spawn_blocking`.
pub async fn render_resume_blocking(
    submission: ResumeSubmission,
    today: NaiveDate,
    font_path: PathBuf,
    page: PageConfig,
) -> Result<Vec<u8>, AppError> {
    tokio::task::spawn_blocking(move || render_resume(&submission, today, &font_path, page))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_config;

    #[tokio::test]
    async fn test_render_without_font_asset() {
        let submission = ResumeSubmission {
            name: "Hanako Yamada".to_string(),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        let bytes = render_resume_blocking(
            submission,
            today,
            PathBuf::from("/nonexistent/font.ttf"),
            default_page_config(),
        )
        .await
        .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_with_embedded_font() {
        let submission = ResumeSubmission {
            name: "Hanako Yamada".to_string(),
            experience: "Three years at a municipal nursery.".to_string(),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        let bytes = render_resume(
            &submission,
            today,
            &fonts::tests::fixture_font_path(),
            default_page_config(),
        )
        .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
