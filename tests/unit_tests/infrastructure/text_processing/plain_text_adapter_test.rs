use docthread::application::ports::{FileLoader, FileLoaderError};
use docthread::domain::RawDocument;
use docthread::infrastructure::text_processing::PlainTextAdapter;

use crate::helpers::temp_file_with;

#[tokio::test]
async fn given_valid_utf8_file_when_extracting_then_returns_contents() {
    let file = temp_file_with(".txt", b"Hello, this is plain text.");
    let document = RawDocument::from_path(file.path());

    let result = PlainTextAdapter.extract_text(&document).await;

    assert_eq!(result.unwrap(), "Hello, this is plain text.");
}

#[tokio::test]
async fn given_file_with_bom_when_extracting_then_bom_is_stripped() {
    let file = temp_file_with(".txt", "\u{FEFF}Intro".as_bytes());
    let document = RawDocument::from_path(file.path());

    let result = PlainTextAdapter.extract_text(&document).await;

    assert_eq!(result.unwrap(), "Intro");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_returns_extraction_failed() {
    let file = temp_file_with(".txt", &[0xFF, 0xFE, 0xFD]);
    let document = RawDocument::from_path(file.path());

    let result = PlainTextAdapter.extract_text(&document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_missing_file_when_extracting_then_returns_extraction_failed() {
    let document = RawDocument::from_path("/no/such/file.txt");

    let result = PlainTextAdapter.extract_text(&document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_text_content_type_when_extracting_then_returns_unsupported() {
    let file = temp_file_with(".pdf", b"%PDF-1.4");
    let document = RawDocument::from_path(file.path());

    let result = PlainTextAdapter.extract_text(&document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFileType(_))
    ));
}
