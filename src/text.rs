/// Keeps at most `max` characters (not bytes) of `s`.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Collapses line breaks so user-supplied text can sit in a Markdown heading.
pub(crate) fn single_line(s: &str) -> String {
    s.split(['\n', '\r'])
        .filter(|part| !part.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short prefix of an upstream error body for log and error messages.
pub(crate) fn snippet(body: &str) -> &str {
    truncate_chars(body, 200)
}
