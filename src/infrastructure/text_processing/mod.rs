mod composite_file_loader;
mod pdf_adapter;
mod plain_text_adapter;
mod recursive_character_splitter;
mod text_sanitizer;
mod unstructured_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use recursive_character_splitter::RecursiveCharacterSplitter;
pub use text_sanitizer::sanitize_extracted_text;
pub use unstructured_adapter::UnstructuredAdapter;
