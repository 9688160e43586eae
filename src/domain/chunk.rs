/// A bounded slice of document text, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub offset: usize,
    pub text: String,
}

impl TextChunk {
    pub fn new(index: usize, offset: usize, text: String) -> Self {
        Self {
            index,
            offset,
            text,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Char offset one past the last character of this chunk.
    pub fn end_offset(&self) -> usize {
        self.offset + self.char_len()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
