use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use crate::application::ports::{ConfigRepository, LlmClient};
use crate::application::services::{ThreadPipeline, ThreadService};
use crate::domain::{RawDocument, UserId};
use crate::infrastructure::llm::{MockLlmClient, create_llm_client};
use crate::infrastructure::persistence::{InMemoryConfigRepository, InMemoryThreadRepository};
use crate::infrastructure::text_processing::{CompositeFileLoader, RecursiveCharacterSplitter};
use crate::presentation::config::Settings;

const OFFLINE_RESPONSE: &str = "Offline preview: no model was called.";

pub struct GenerateOptions<'a> {
    pub path: &'a Path,
    pub mime: Option<String>,
    pub user: Option<String>,
    pub offline: bool,
    pub pretty: bool,
}

pub async fn generate_command(
    settings: Settings,
    options: GenerateOptions<'_>,
) -> anyhow::Result<()> {
    let llm_client: Arc<dyn LlmClient> = if options.offline {
        tracing::info!("Offline mode, model API will not be called");
        Arc::new(MockLlmClient::new(OFFLINE_RESPONSE))
    } else {
        Arc::new(create_llm_client(&settings.llm).context("failed to configure LLM client")?)
    };

    let pipeline = Arc::new(ThreadPipeline::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        Arc::new(RecursiveCharacterSplitter::new()),
        llm_client,
    ));

    let service = ThreadService::new(
        pipeline,
        Arc::new(InMemoryConfigRepository::new(settings.generation)),
        Arc::new(InMemoryThreadRepository::new()),
    );

    let document = match options.mime {
        Some(mime) => RawDocument::with_mime(options.path, mime),
        None => RawDocument::from_path(options.path),
    };

    let stored = service
        .generate(options.user.map(UserId::new), &document)
        .await
        .with_context(|| format!("failed to generate thread from {}", options.path.display()))?;

    print_json(&stored, options.pretty)
}

pub async fn config_command(settings: Settings, user: Option<String>) -> anyhow::Result<()> {
    let repository = InMemoryConfigRepository::new(settings.generation);
    let user_id = user.map(UserId::new);
    let config = repository.get_config(user_id.as_ref()).await?;

    print_json(&config, true)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}
