mod config_repository;
mod file_loader;
mod llm_client;
mod repository_error;
mod text_splitter;
mod thread_repository;

pub use config_repository::ConfigRepository;
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use text_splitter::TextSplitter;
pub use thread_repository::ThreadRepository;
