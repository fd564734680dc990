//! POSIX shell quoting for text spliced into command strings.

/// Wrap `text` in single quotes, escaping embedded quotes as `'\''`.
pub fn single_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// `text` as-is when it is a plain shell word, otherwise single-quoted.
pub fn quote_if_needed(text: &str) -> String {
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+,:@%=".contains(c));
    if plain {
        text.to_string()
    } else {
        single_quote(text)
    }
}
