//! Text helpers: escaping, description cleanup and example highlighting.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect("static pattern compiles"));
    };
}

// ─── Escaping ─────────────────────────────────────────────────────────────────

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// The first `max` characters of `s`.
pub(crate) fn truncate(s: &str, max: usize) -> &str {
    s.char_indices().nth(max).map_or(s, |(i, _)| &s[..i])
}

// ─── Descriptions ─────────────────────────────────────────────────────────────

pattern!(QUOTE_MARKS, r"[»«›‹]");
pattern!(PRINTF_ANY, r"%\d*[dsfx]");
pattern!(CAMEL_JOIN, r"([a-z])([A-Z])");
pattern!(DIGIT_LETTER, r"(\d)([A-Za-z])");
pattern!(LETTER_DIGIT, r"([A-Za-z])(\d)");
pattern!(AFTER_PUNCT, r"([.,:])([A-Za-z])");
pattern!(DOT_RUN, r"\.\.+");
pattern!(SPACE_BEFORE_PUNCT, r"\s+([.,;:])");
pattern!(WHITESPACE, r"\s+");

/// Tidies a description scraped from the API pages.
///
/// Page text arrives with guillemets from link decorations, printf
/// placeholders and words glued together where markup was stripped.
pub fn clean_description(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = QUOTE_MARKS.replace_all(text, "");
    let text = text
        .replace("%d", "<number>")
        .replace("%s", "<value>")
        .replace("%f", "<decimal>");
    let text = PRINTF_ANY.replace_all(&text, "<value>");
    let text = CAMEL_JOIN.replace_all(&text, "${1} ${2}");
    let text = DIGIT_LETTER.replace_all(&text, "${1} ${2}");
    let text = LETTER_DIGIT.replace_all(&text, "${1} ${2}");
    let text = AFTER_PUNCT.replace_all(&text, "${1} ${2}");
    let text = DOT_RUN.replace_all(&text, ".");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "${1}");
    WHITESPACE.replace_all(&text, " ").trim().to_owned()
}

/// Cleaned preview of a description for listings.
pub(crate) fn summary(description: &str) -> String {
    let cleaned = clean_description(truncate(description, 100));
    if cleaned.is_empty() { "No description".to_owned() } else { cleaned }
}

// ─── Go highlighting ──────────────────────────────────────────────────────────

pattern!(
    GO_KEYWORD,
    r"\b(func|return|if|else|for|range|var|const|type|struct|interface|package|import|defer|go|select|case|default|break|continue|nil|true|false)\b"
);
pattern!(GO_COMMENT, r"(//[^\n]*)");
pattern!(GO_STRING, r"(&quot;[^&]*?&quot;)");
pattern!(GO_NUMBER, r"\b(\d+\.?\d*)\b");
pattern!(GO_TYPE, r"(tg\.)([A-Z][A-Za-z0-9]*)");
pattern!(GO_CALL, r"(client\.)([A-Z][A-Za-z0-9]*)");

/// Escapes a Go example and wraps its tokens in `<span class="…">`.
pub fn highlight_go(code: &str) -> String {
    let code = escape_html(code);
    let code = GO_KEYWORD.replace_all(&code, r#"<span class="keyword">${1}</span>"#);
    let code = GO_COMMENT.replace_all(&code, r#"<span class="comment">${1}</span>"#);
    let code = GO_STRING.replace_all(&code, r#"<span class="string">${1}</span>"#);
    let code = GO_NUMBER.replace_all(&code, r#"<span class="number">${1}</span>"#);
    let code = GO_TYPE.replace_all(&code, r#"<span class="package">${1}</span><span class="type">${2}</span>"#);
    GO_CALL
        .replace_all(&code, r#"<span class="package">${1}</span><span class="function">${2}</span>"#)
        .into_owned()
}
