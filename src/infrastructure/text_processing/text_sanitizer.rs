use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\n[ \t]*(?P<suffix>\w)").unwrap());

/// Cleans text pulled out of PDFs and markup before it is chunked.
///
/// Normalizes to NFKC (which also unfolds ligatures), rejoins words hyphenated
/// across line breaks, drops control characters, collapses runs of
/// whitespace inside lines, and keeps at most one blank line between
/// paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .replace("\r\n", "\n")
        .replace(['\r', '\u{000C}'], "\n")
        .nfkc()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    let joined = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in joined.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(collapsed);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}
