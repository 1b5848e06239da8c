// src/core/sanitize.rs

/// Concatenate text fragments, dropping any fragment that begins with a
/// backslash. The site embeds literal backslash-prefixed formatting artifacts
/// as standalone text nodes; they are removed whole, not unescaped. Result is
/// trimmed of surrounding whitespace.
pub fn join_clean<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for f in fragments {
        if !f.starts_with('\\') {
            out.push_str(f);
        }
    }
    out.trim().to_string()
}

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Corpus example strings start with a one-character delimiter artifact.
/// Drop it, then trim.
pub fn strip_lead_delim(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str().trim()
}
