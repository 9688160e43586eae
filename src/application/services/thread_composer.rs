use std::fmt;
use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{
    ConfigurationError, GenerationConfig, Post, PostFailurePolicy, TextChunk, Thread, TitleSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComposerState {
    Init,
    TitleGenerated,
    PostsGenerated(usize),
    Complete,
    Failed,
}

impl fmt::Display for ComposerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => f.write_str("init"),
            Self::TitleGenerated => f.write_str("title_generated"),
            Self::PostsGenerated(k) => write!(f, "posts_generated({k})"),
            Self::Complete => f.write_str("complete"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

struct Run {
    state: ComposerState,
}

impl Run {
    fn new() -> Self {
        Self {
            state: ComposerState::Init,
        }
    }

    fn advance(&mut self, next: ComposerState) {
        tracing::debug!(from = %self.state, to = %next, "Composer state transition");
        self.state = next;
    }

    fn fail(&mut self, error: ComposeError) -> ComposeError {
        tracing::warn!(from = %self.state, error = %error, "Thread composition failed");
        self.state = ComposerState::Failed;
        error
    }
}

/// Builds a [`Thread`] from thread chunks with one title call followed by
/// one call per post, strictly in chunk order.
pub struct ThreadComposer<L: ?Sized> {
    llm_client: Arc<L>,
}

impl<L> ThreadComposer<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// `source_text` is the bounded document text the chunks were cut from; it
    /// only feeds the title when [`TitleSource::LeadingCharacters`] is chosen.
    #[tracing::instrument(
        skip_all,
        fields(
            chunk_count = chunks.len(),
            model = %config.model_name,
            max_posts = config.max_posts,
        )
    )]
    pub async fn compose(
        &self,
        chunks: &[TextChunk],
        source_text: &str,
        config: &GenerationConfig,
    ) -> Result<Thread, ComposeError> {
        let mut run = Run::new();

        let title_prompt = config.title_prompt().map_err(|e| run.fail(e.into()))?;
        let thread_prompt = config.thread_prompt().map_err(|e| run.fail(e.into()))?;

        let title_input = match title_input(chunks, source_text, config.title_source) {
            Some(input) => input,
            None => return Err(run.fail(ComposeError::NoContent)),
        };

        let title = self
            .llm_client
            .generate(title_prompt, &title_input, config)
            .await
            .map_err(|e| run.fail(ComposeError::Title(e)))?;
        let title = clean_title(&title);
        if title.is_empty() {
            return Err(run.fail(ComposeError::Title(LlmClientError::InvalidResponse(
                "model returned an empty title".to_string(),
            ))));
        }
        run.advance(ComposerState::TitleGenerated);

        let mut posts = Vec::with_capacity(config.max_posts);
        let mut failed_chunks = Vec::new();

        for chunk in chunks {
            if posts.len() >= config.max_posts {
                break;
            }

            if chunk.is_blank() {
                tracing::debug!(chunk_index = chunk.index, "Skipping blank chunk");
                continue;
            }

            match self
                .llm_client
                .generate(thread_prompt, &chunk.text, config)
                .await
            {
                Ok(content) => {
                    posts.push(Post::new(content.trim()));
                    run.advance(ComposerState::PostsGenerated(posts.len()));
                }
                Err(source) => match config.post_failure_policy {
                    PostFailurePolicy::Abort => {
                        return Err(run.fail(ComposeError::Post {
                            index: chunk.index,
                            source,
                        }));
                    }
                    PostFailurePolicy::Skip => {
                        tracing::warn!(
                            chunk_index = chunk.index,
                            error = %source,
                            "Post generation failed, skipping chunk"
                        );
                        failed_chunks.push(chunk.index);
                    }
                },
            }
        }

        run.advance(ComposerState::Complete);
        tracing::info!(
            post_count = posts.len(),
            failed_count = failed_chunks.len(),
            "Thread composed"
        );

        Ok(Thread::new(title, posts).with_failed_chunks(failed_chunks))
    }
}

fn title_input(chunks: &[TextChunk], source_text: &str, source: TitleSource) -> Option<String> {
    let first_chunk = chunks.iter().find(|c| !c.is_blank())?;

    match source {
        TitleSource::FirstThreadChunk => Some(first_chunk.text.clone()),
        TitleSource::LeadingCharacters { chars } => {
            let slice: String = source_text.chars().take(chars).collect();
            if slice.trim().is_empty() {
                Some(first_chunk.text.clone())
            } else {
                Some(slice)
            }
        }
    }
}

fn clean_title(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}'))
        .trim()
        .to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("no non-blank chunks to compose from")]
    NoContent,
    #[error("title generation: {0}")]
    Title(#[source] LlmClientError),
    #[error("post generation for chunk {index}: {source}")]
    Post {
        index: usize,
        #[source]
        source: LlmClientError,
    },
}
