use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, TextSplitter};
use crate::domain::{ConfigurationError, GenerationConfig, RawDocument, Thread};

use super::thread_composer::{ComposeError, ThreadComposer};

/// Document-to-thread pipeline: load, bound, re-chunk, compose.
///
/// Chunking happens in two passes. The ingestion pass (`chunk_size`,
/// `chunk_overlap`, `max_chunks`) caps how much of the document enters the
/// pipeline at all. The thread pass (`thread_chunk_size`,
/// `thread_chunk_overlap`) cuts that bounded text into the pieces that feed
/// individual generation calls.
pub struct ThreadPipeline<F: ?Sized, S: ?Sized, L: ?Sized> {
    file_loader: Arc<F>,
    text_splitter: Arc<S>,
    composer: ThreadComposer<L>,
}

impl<F, S, L> ThreadPipeline<F, S, L>
where
    F: FileLoader + ?Sized,
    S: TextSplitter + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(file_loader: Arc<F>, text_splitter: Arc<S>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            text_splitter,
            composer: ThreadComposer::new(llm_client),
        }
    }

    /// Runs the pipeline on a file whose type is guessed from its extension.
    pub async fn run_pipeline(
        &self,
        path: impl AsRef<Path>,
        config: &GenerationConfig,
    ) -> Result<Thread, PipelineError> {
        let document = RawDocument::from_path(path.as_ref());
        self.run_document(&document, config).await
    }

    #[tracing::instrument(
        skip(self, config),
        fields(
            path = %document.path.display(),
            mime = %document.mime,
        )
    )]
    pub async fn run_document(
        &self,
        document: &RawDocument,
        config: &GenerationConfig,
    ) -> Result<Thread, PipelineError> {
        config.validate()?;

        let text = self.file_loader.extract_text(document).await?;
        if text.trim().is_empty() {
            tracing::warn!("Document contains no extractable text");
            return Err(PipelineError::EmptyDocument);
        }

        let bounded = self.bound_ingested_text(&text, config);

        let thread_chunks = self.text_splitter.split(
            bounded,
            config.thread_chunk_size,
            config.thread_chunk_overlap,
        );

        tracing::info!(
            text_chars = bounded.chars().count(),
            thread_chunks = thread_chunks.len(),
            "Document prepared for generation"
        );

        let thread = self
            .composer
            .compose(&thread_chunks, bounded, config)
            .await?;

        Ok(thread)
    }

    /// Ingestion pass: keeps the prefix of `text` covered by the first
    /// `max_chunks` chunks.
    fn bound_ingested_text<'a>(&self, text: &'a str, config: &GenerationConfig) -> &'a str {
        let chunks = self
            .text_splitter
            .split(text, config.chunk_size, config.chunk_overlap);

        if chunks.len() <= config.max_chunks {
            return text;
        }

        let end_char = chunks[config.max_chunks - 1].end_offset();
        tracing::debug!(
            ingested_chunks = chunks.len(),
            retained_chunks = config.max_chunks,
            end_char,
            "Truncating document to max_chunks"
        );

        match text.char_indices().nth(end_char) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailure(String),
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(#[from] ConfigurationError),
    #[error("document contains no text")]
    EmptyDocument,
    #[error("generation failed: {0}")]
    GenerationFailure(#[source] ComposeError),
}

impl PipelineError {
    /// Only generation failures may succeed when retried unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::GenerationFailure(_))
    }
}

impl From<FileLoaderError> for PipelineError {
    fn from(error: FileLoaderError) -> Self {
        match error {
            FileLoaderError::UnsupportedFileType(mime) => Self::UnsupportedFileType(mime),
            FileLoaderError::ExtractionFailed(message) => Self::ExtractionFailure(message),
        }
    }
}

impl From<ComposeError> for PipelineError {
    fn from(error: ComposeError) -> Self {
        match error {
            ComposeError::Configuration(e) => Self::ConfigurationInvalid(e),
            ComposeError::NoContent => Self::EmptyDocument,
            other => Self::GenerationFailure(other),
        }
    }
}
