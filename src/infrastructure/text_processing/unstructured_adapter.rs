use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, RawDocument};

use super::text_sanitizer::sanitize_extracted_text;

/// Best-effort extraction for loosely structured text formats (markdown,
/// HTML, CSV, JSON, XML, RTF). Markup other than HTML is passed through.
pub struct UnstructuredAdapter;

impl UnstructuredAdapter {
    fn is_html(mime: &str) -> bool {
        let mime = mime.to_ascii_lowercase();
        mime.starts_with("text/html") || mime.starts_with("application/xhtml+xml")
    }

    fn html_to_text(html: &str) -> String {
        let document = Html::parse_document(html);
        let mut paragraphs = Vec::new();

        let root = Selector::parse("body")
            .ok()
            .and_then(|selector| document.select(&selector).next());

        let texts: Vec<&str> = match root {
            Some(body) => body.text().collect(),
            None => document.root_element().text().collect(),
        };

        for text in texts {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                paragraphs.push(trimmed);
            }
        }

        paragraphs.join("\n")
    }
}

#[async_trait]
impl FileLoader for UnstructuredAdapter {
    #[tracing::instrument(skip(self), fields(path = %document.path.display(), mime = %document.mime))]
    async fn extract_text(&self, document: &RawDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != Some(ContentType::Unstructured) {
            return Err(FileLoaderError::UnsupportedFileType(document.mime.clone()));
        }

        let data = tokio::fs::read(document.path()).await.map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {}: {e}", document.file_name()))
        })?;

        let raw = String::from_utf8_lossy(&data);
        let text = if Self::is_html(&document.mime) {
            Self::html_to_text(&raw)
        } else {
            raw.into_owned()
        };

        Ok(sanitize_extracted_text(&text))
    }
}
