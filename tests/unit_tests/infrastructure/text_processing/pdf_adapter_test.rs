use docthread::application::ports::{FileLoader, FileLoaderError};
use docthread::domain::RawDocument;
use docthread::infrastructure::text_processing::PdfAdapter;

use crate::helpers::temp_file_with;

const TWO_PAGE_PDF: &[u8] = include_bytes!("../fixtures/two_pages.pdf");
const BLANK_PDF: &[u8] = include_bytes!("../fixtures/blank.pdf");

#[tokio::test]
async fn given_two_page_pdf_when_extracting_then_pages_are_joined_by_blank_line() {
    let file = temp_file_with(".pdf", TWO_PAGE_PDF);
    let document = RawDocument::from_path(file.path());

    let text = PdfAdapter::new().extract_text(&document).await.unwrap();

    let pages: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(pages.len(), 2, "unexpected page split: {text:?}");
    assert!(pages[0].contains("Hello page one"));
    assert!(pages[1].contains("Second page here"));
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_returns_empty_text() {
    let file = temp_file_with(".pdf", BLANK_PDF);
    let document = RawDocument::from_path(file.path());

    let text = PdfAdapter::new().extract_text(&document).await.unwrap();

    assert!(text.trim().is_empty());
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_returns_extraction_failed() {
    let file = temp_file_with(".pdf", b"definitely not a pdf");
    let document = RawDocument::from_path(file.path());

    let result = PdfAdapter::new().extract_text(&document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_pdf_content_type_when_extracting_then_returns_unsupported() {
    let file = temp_file_with(".txt", b"text");
    let document = RawDocument::from_path(file.path());

    let result = PdfAdapter::new().extract_text(&document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFileType(_))
    ));
}
