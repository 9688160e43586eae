use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static CREDENTIAL_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?P<key>bearer\s+|api[_-]?key=|password=|secret=|token=)[^\s&"']+"#)
        .unwrap()
});

static OPENAI_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sk-[A-Za-z0-9_\-]{8,}").unwrap());

/// Shortens prompt text and masks credentials so it can be logged.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = CREDENTIAL_ASSIGNMENT.replace_all(trimmed, "${key}[REDACTED]");
    let redacted = OPENAI_KEY.replace_all(&redacted, "[REDACTED]");

    let total_chars = redacted.chars().count();
    if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{visible}... ({total_chars} chars total)")
    } else {
        redacted.into_owned()
    }
}
