//! Cleanup of raw model output before validation.

use super::validate::ends_politely;
use crate::style::WritingStyle;
use crate::text::sentences::CLOSING_MARKS;
use crate::text::{Boundaries, normalize_line_endings, split_sentences};

/// Phrases a model uses to introduce its answer instead of just giving it.
const ACKNOWLEDGEMENT_PHRASES: &[&str] = &[
    "了解しました",
    "承知しました",
    "かしこまりました",
    "わかりました",
    "分かりました",
    "以下が",
    "以下は",
    "以下に",
    "書き換えました",
    "整えました",
    "修正しました",
    "変換しました",
    "お待たせしました",
    "こちらが",
    "こちらは",
    "はい、",
];

/// Normalize line endings, strip a wrapping code fence and, for strict
/// styles, a leading conversational preamble.
pub fn normalize_output(raw: &str, style: WritingStyle) -> String {
    let text = normalize_line_endings(raw);
    let mut text = strip_code_fences(text.trim());
    if !style.requires_strict_enforcement() {
        return text;
    }
    // A preamble can sit in front of a fenced block.
    loop {
        let stripped = strip_code_fences(strip_preamble(&text));
        if stripped == text {
            return text;
        }
        text = stripped;
    }
}

/// Remove fences when the whole text is one fenced block, repeatedly.
///
/// The opening line is three or more backticks or tildes plus an optional
/// info string; the last line must repeat the same fence exactly.
pub fn strip_code_fences(text: &str) -> String {
    let mut current = text.trim().to_string();
    while let Some(inner) = unwrap_fenced_block(&current) {
        current = inner;
    }
    current
}

fn unwrap_fenced_block(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return None;
    }

    let opening = lines[0].trim_start();
    let fence_char = opening.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let fence_len = opening.chars().take_while(|c| *c == fence_char).count();
    if fence_len < 3 {
        return None;
    }
    let fence: String = std::iter::repeat_n(fence_char, fence_len).collect();

    let closing = lines[lines.len() - 1].trim();
    if closing != fence {
        return None;
    }

    Some(lines[1..lines.len() - 1].join("\n").trim().to_string())
}

fn is_preamble(sentence: &str) -> bool {
    ACKNOWLEDGEMENT_PHRASES
        .iter()
        .any(|phrase| sentence.contains(phrase))
        && ends_politely(sentence.trim_end_matches([':', '：']))
}

fn strip_preamble(text: &str) -> &str {
    let mut rest = text;
    for sentence in split_sentences(text, Boundaries::TerminalOnly) {
        if !is_preamble(&sentence) {
            break;
        }
        let Some(after) = rest.trim_start().strip_prefix(sentence.as_str()) else {
            break;
        };
        rest = after.trim_start_matches(|c: char| c.is_whitespace() || CLOSING_MARKS.contains(&c));
    }
    rest
}
