pub const CONTENT_PLACEHOLDER: &str = "{content}";

/// Substitutes `content` for the `{content}` placeholder of a prompt template.
pub fn render_prompt(template: &str, content: &str) -> String {
    template.replacen(CONTENT_PLACEHOLDER, content, 1)
}

pub fn placeholder_count(template: &str) -> usize {
    template.matches(CONTENT_PLACEHOLDER).count()
}
