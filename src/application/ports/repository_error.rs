#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] crate::domain::ConfigurationError),
    #[error("storage failed: {0}")]
    StorageFailed(String),
}
