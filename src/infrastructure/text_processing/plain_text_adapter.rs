use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, RawDocument};

const UTF8_BOM: char = '\u{FEFF}';

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    #[tracing::instrument(skip(self), fields(path = %document.path.display()))]
    async fn extract_text(&self, document: &RawDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != Some(ContentType::Text) {
            return Err(FileLoaderError::UnsupportedFileType(document.mime.clone()));
        }

        let data = tokio::fs::read(document.path()).await.map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {}: {e}", document.file_name()))
        })?;

        let text = String::from_utf8(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;

        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }
}
