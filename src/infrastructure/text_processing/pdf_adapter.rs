use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, RawDocument};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        collect_pages((0..page_count).map(|page_index| doc.extract_text(page_index)))
    }
}

/// Keeps pages with text. Unreadable pages are skipped unless no page yields
/// text, in which case the first page error is returned.
fn collect_pages<E: std::fmt::Display>(
    results: impl Iterator<Item = Result<String, E>>,
) -> Result<Vec<String>, FileLoaderError> {
    let mut pages = Vec::new();
    let mut first_error = None;

    for (page_index, result) in results.enumerate() {
        match result {
            Ok(text) if !text.trim().is_empty() => pages.push(text),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(page = page_index + 1, error = %e, "Skipping unreadable PDF page");
                first_error.get_or_insert_with(|| format!("page {}: {e}", page_index + 1));
            }
        }
    }

    match first_error {
        Some(error) if pages.is_empty() => Err(FileLoaderError::ExtractionFailed(format!(
            "no readable pages, first error on {error}"
        ))),
        _ => Ok(pages),
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self), fields(path = %document.path.display()))]
    async fn extract_text(&self, document: &RawDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != Some(ContentType::Pdf) {
            return Err(FileLoaderError::UnsupportedFileType(document.mime.clone()));
        }

        let path = document.path.clone();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        let sanitized_pages: Vec<String> = pages
            .iter()
            .map(|page| sanitize_extracted_text(page))
            .filter(|t| !t.is_empty())
            .collect();

        Ok(sanitized_pages.join("\n\n"))
    }
}
