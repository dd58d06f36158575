//! Sentence splitting for Japanese prose.
//!
//! Newline runs are paragraph boundaries: they flush whatever fragment is
//! pending, but a sentence that wraps across a line without punctuation is
//! split there. That is an accepted approximation.

/// Sentence-terminal marks.
pub const TERMINAL_MARKS: &[char] = &['。', '．', '.', '!', '?', '！', '？'];

/// Pause marks, treated as delimiters only by [`Boundaries::WithPauses`].
///
/// ASCII `,` is what `、` becomes in Western punctuation.
pub const PAUSE_MARKS: &[char] = &['、', '，', ','];

/// Closing brackets and quotes that stay attached to the sentence they close.
/// ASCII `"` and `'` open as often as they close, so they are not listed.
pub const CLOSING_MARKS: &[char] = &[
    '」', '』', '）', ')', '】', '〕', '〉', '》', ']', '］', '”', '’',
];

/// Which marks end a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundaries {
    /// `。．.!?！？` only.
    TerminalOnly,
    /// Terminal marks plus `、，,`.
    WithPauses,
}

impl Boundaries {
    fn is_delimiter(self, c: char) -> bool {
        TERMINAL_MARKS.contains(&c) || (self == Self::WithPauses && PAUSE_MARKS.contains(&c))
    }
}

/// Split `text` into trimmed, non-empty sentences.
///
/// Each delimiter stays attached to its sentence, together with any run of
/// further delimiters or closing brackets that follows it. A trailing
/// fragment without punctuation is still returned.
pub fn split_sentences(text: &str, boundaries: Boundaries) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\n' || c == '\r' {
            flush(&mut current, &mut sentences);
            i += 1;
            continue;
        }

        current.push(c);

        if boundaries.is_delimiter(c) && !is_digit_separator(&chars, i) {
            while let Some(&next) = chars.get(i + 1) {
                if boundaries.is_delimiter(next) || CLOSING_MARKS.contains(&next) {
                    current.push(next);
                    i += 1;
                } else {
                    break;
                }
            }
            flush(&mut current, &mut sentences);
        }

        i += 1;
    }

    flush(&mut current, &mut sentences);
    sentences
}

fn flush(current: &mut String, sentences: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

// `3.14` and `1,000` are not boundaries.
fn is_digit_separator(chars: &[char], i: usize) -> bool {
    matches!(chars[i], '.' | ',')
        && i > 0
        && chars[i - 1].is_ascii_digit()
        && chars.get(i + 1).is_some_and(char::is_ascii_digit)
}

/// Strip trailing closing brackets, quotes and whitespace.
pub fn trim_closing(sentence: &str) -> &str {
    sentence.trim_end_matches(|c: char| c.is_whitespace() || CLOSING_MARKS.contains(&c))
}

/// The sentence body with trailing brackets, terminal and pause marks removed.
pub fn sentence_body(sentence: &str) -> &str {
    trim_closing(sentence).trim_end_matches(|c: char| {
        c.is_whitespace()
            || CLOSING_MARKS.contains(&c)
            || TERMINAL_MARKS.contains(&c)
            || PAUSE_MARKS.contains(&c)
    })
}
