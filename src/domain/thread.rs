use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
}

impl Post {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Generated output of one pipeline run: a title and its posts in chunk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub title: String,
    pub posts: Vec<Post>,
    /// Thread-chunk indices whose post generation failed and was skipped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_chunks: Vec<usize>,
}

impl Thread {
    pub fn new(title: impl Into<String>, posts: Vec<Post>) -> Self {
        Self {
            title: title.into(),
            posts,
            failed_chunks: Vec::new(),
        }
    }

    pub fn with_failed_chunks(mut self, failed_chunks: Vec<usize>) -> Self {
        self.failed_chunks = failed_chunks;
        self
    }

    pub fn is_partial(&self) -> bool {
        !self.failed_chunks.is_empty()
    }
}
