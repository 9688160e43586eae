mod environment;
mod settings;

pub use environment::{Environment, EnvironmentError};
pub use settings::{LlmProvider, LlmSettings, LoggingSettings, Settings};
