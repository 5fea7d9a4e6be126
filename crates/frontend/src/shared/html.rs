//! HTML escaping for text that is rendered through `inner_html`

/// Escape text so the browser shows it literally instead of parsing it as markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Markup of a chat bubble body: one escaped paragraph, line breaks kept
pub fn message_paragraph_html(text: &str) -> String {
    let body = escape_html(text).replace('\n', "<br/>");
    format!("<p>{}</p>", body)
}
