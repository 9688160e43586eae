use crate::application::ports::TextSplitter;
use crate::domain::TextChunk;

const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// A contiguous run of the source text that is never split further.
#[derive(Debug, Clone, Copy)]
struct Piece {
    start: usize,
    end: usize,
    char_start: usize,
    chars: usize,
}

/// Splits on the coarsest separator present (paragraphs, then lines, then
/// words, then characters), recursing into any piece that is still larger
/// than the chunk size, then greedily merges pieces back into chunks.
///
/// Sizes are counted in chars. Separators stay attached to the piece they
/// end, so every chunk is a contiguous slice of the input (before trimming).
///
/// Overlap is carried in whole pieces: the next chunk starts with the longest
/// run of trailing pieces that fits in `chunk_overlap`. Character-level
/// splits therefore overlap by exactly `chunk_overlap` chars, while word-level
/// splits overlap by at most that much and never start mid-word.
pub struct RecursiveCharacterSplitter {
    separators: Vec<String>,
}

impl Default for RecursiveCharacterSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecursiveCharacterSplitter {
    pub fn new() -> Self {
        Self::with_separators(DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect())
    }

    /// Custom separators, coarsest first. Character splitting is always
    /// available as the last resort, whether or not `""` is listed.
    pub fn with_separators(separators: Vec<String>) -> Self {
        Self { separators }
    }

    fn atomize(
        &self,
        text: &str,
        base: usize,
        depth: usize,
        chunk_size: usize,
        out: &mut Vec<Piece>,
    ) {
        let remaining = self.separators.get(depth..).unwrap_or_default();
        let position = remaining
            .iter()
            .position(|sep| sep.is_empty() || text.contains(sep.as_str()));

        let (separator, next_depth) = match position {
            Some(offset) => (remaining[offset].as_str(), depth + offset + 1),
            None => ("", self.separators.len()),
        };

        let mut cursor = base;
        for segment in split_keeping_separator(text, separator) {
            let start = cursor;
            cursor += segment.len();
            let chars = segment.chars().count();

            if chars <= chunk_size || separator.is_empty() {
                out.push(Piece {
                    start,
                    end: cursor,
                    char_start: 0,
                    chars,
                });
            } else {
                self.atomize(segment, start, next_depth, chunk_size, out);
            }
        }
    }

    fn merge(
        pieces: &[Piece],
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Vec<(usize, usize, usize)> {
        let mut spans = Vec::new();
        let mut window: Vec<Piece> = Vec::new();
        let mut window_chars = 0usize;

        for piece in pieces {
            if window_chars + piece.chars > chunk_size && !window.is_empty() {
                spans.push(window_span(&window));

                let mut drop = 0;
                while window_chars > chunk_overlap
                    || (window_chars + piece.chars > chunk_size && window_chars > 0)
                {
                    window_chars -= window[drop].chars;
                    drop += 1;
                }
                window.drain(..drop);
            }

            window.push(*piece);
            window_chars += piece.chars;
        }

        if !window.is_empty() {
            spans.push(window_span(&window));
        }

        spans
    }
}

fn window_span(window: &[Piece]) -> (usize, usize, usize) {
    let first = window[0];
    let last = window[window.len() - 1];
    (first.start, last.end, first.char_start)
}

fn split_keeping_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        text.char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect()
    } else {
        text.split_inclusive(separator).collect()
    }
}

impl TextSplitter for RecursiveCharacterSplitter {
    fn split(&self, text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<TextChunk> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chunk_size = chunk_size.max(1);
        let chunk_overlap = chunk_overlap.min(chunk_size - 1);

        let mut pieces = Vec::new();
        self.atomize(text, 0, 0, chunk_size, &mut pieces);

        let mut char_cursor = 0;
        for piece in &mut pieces {
            piece.char_start = char_cursor;
            char_cursor += piece.chars;
        }

        Self::merge(&pieces, chunk_size, chunk_overlap)
            .into_iter()
            .filter_map(|(start, end, char_start)| {
                let raw = &text[start..end];
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let leading = raw[..raw.len() - raw.trim_start().len()].chars().count();
                Some((char_start + leading, trimmed.to_string()))
            })
            .enumerate()
            .map(|(index, (offset, text))| TextChunk::new(index, offset, text))
            .collect()
    }
}
