use std::sync::Arc;

use async_trait::async_trait;

use docthread::application::ports::{FileLoader, FileLoaderError};
use docthread::domain::{ContentType, RawDocument};
use docthread::infrastructure::text_processing::CompositeFileLoader;

use crate::helpers::temp_file_with;

struct FixedLoader(&'static str);

#[async_trait]
impl FileLoader for FixedLoader {
    async fn extract_text(&self, _document: &RawDocument) -> Result<String, FileLoaderError> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn given_registered_content_type_when_loading_then_routes_to_its_adapter() {
    let text_loader: Arc<dyn FileLoader> = Arc::new(FixedLoader("from text"));
    let pdf_loader: Arc<dyn FileLoader> = Arc::new(FixedLoader("from pdf"));
    let loader = CompositeFileLoader::new(vec![
        (ContentType::Text, text_loader),
        (ContentType::Pdf, pdf_loader),
    ]);

    let text = loader
        .extract_text(&RawDocument::with_mime("a.bin", "application/pdf"))
        .await
        .unwrap();

    assert_eq!(text, "from pdf");
}

#[tokio::test]
async fn given_unregistered_content_type_when_loading_then_returns_unsupported() {
    let text_loader: Arc<dyn FileLoader> = Arc::new(FixedLoader("from text"));
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_loader)]);

    let result = loader
        .extract_text(&RawDocument::with_mime("page.html", "text/html"))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFileType(mime)) if mime == "text/html"
    ));
}

#[tokio::test]
async fn given_image_upload_when_loading_with_defaults_then_returns_unsupported() {
    let file = temp_file_with(".png", b"\x89PNG");
    let loader = CompositeFileLoader::with_default_adapters();

    let result = loader
        .extract_text(&RawDocument::from_path(file.path()))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFileType(_))
    ));
}

#[tokio::test]
async fn given_text_upload_when_loading_with_defaults_then_returns_text() {
    let file = temp_file_with(".txt", b"default adapters");
    let loader = CompositeFileLoader::with_default_adapters();

    let text = loader
        .extract_text(&RawDocument::from_path(file.path()))
        .await
        .unwrap();

    assert_eq!(text, "default adapters");
}
