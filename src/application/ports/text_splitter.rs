use crate::domain::TextChunk;

/// Splits text into ordered chunks of at most `chunk_size` characters.
///
/// Must be deterministic: equal inputs give equal chunk sequences.
pub trait TextSplitter: Send + Sync {
    fn split(&self, text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<TextChunk>;
}
