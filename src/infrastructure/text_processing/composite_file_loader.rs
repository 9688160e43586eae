use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, RawDocument};

use super::{PdfAdapter, PlainTextAdapter, UnstructuredAdapter};

/// Routes each document to the adapter registered for its content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Plain text, PDF and unstructured adapters.
    pub fn with_default_adapters() -> Self {
        let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let unstructured_adapter: Arc<dyn FileLoader> = Arc::new(UnstructuredAdapter);

        Self::new(vec![
            (ContentType::Text, text_adapter),
            (ContentType::Pdf, pdf_adapter),
            (ContentType::Unstructured, unstructured_adapter),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(&self, document: &RawDocument) -> Result<String, FileLoaderError> {
        let (content_type, adapter) = document
            .content_type()
            .and_then(|content_type| Some((content_type, self.adapters.get(&content_type)?)))
            .ok_or_else(|| FileLoaderError::UnsupportedFileType(document.mime.clone()))?;

        tracing::debug!(
            content_type = content_type.as_str(),
            mime = %document.mime,
            "Routing document to adapter"
        );
        adapter.extract_text(document).await
    }
}
