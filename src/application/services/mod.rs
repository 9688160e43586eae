mod thread_composer;
mod thread_pipeline;
mod thread_service;

pub use thread_composer::{ComposeError, ThreadComposer};
pub use thread_pipeline::{PipelineError, ThreadPipeline};
pub use thread_service::{ThreadService, ThreadServiceError};
