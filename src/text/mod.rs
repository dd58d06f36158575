pub mod punctuation;
pub mod sentences;
pub mod stats;

pub use punctuation::{PunctuationMode, normalize_punctuation};
pub use sentences::{Boundaries, split_sentences};
pub use stats::TextStats;

/// Cut `s` to at most `max_chars` characters, marking the cut with `…`.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            let truncated = &s[..idx];
            format!("{}…", truncated.trim_end())
        }
        None => s.to_string(),
    }
}

/// Normalize CRLF and lone CR line endings to LF.
pub fn normalize_line_endings(s: &str) -> String {
    if s.contains('\r') {
        s.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        s.to_string()
    }
}
