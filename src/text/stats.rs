use super::normalize_line_endings;
use super::sentences::{Boundaries, split_sentences};
use serde::Serialize;

/// Characters per 400-character manuscript sheet (原稿用紙).
pub const MANUSCRIPT_PAGE_CHARS: usize = 400;

/// Counts shown next to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_whitespace: usize,
    pub lines: usize,
    pub paragraphs: usize,
    pub sentences: usize,
    pub manuscript_pages: usize,
}

impl TextStats {
    pub fn measure(text: &str) -> Self {
        let text = normalize_line_endings(text);
        if text.is_empty() {
            return Self::default();
        }

        let characters = text.chars().count();
        let characters_no_whitespace = text.chars().filter(|c| !c.is_whitespace()).count();
        let lines = text.split('\n').count();
        let paragraphs = count_paragraphs(&text);
        let sentences = split_sentences(&text, Boundaries::TerminalOnly).len();

        Self {
            characters,
            characters_no_whitespace,
            lines,
            paragraphs,
            sentences,
            manuscript_pages: characters_no_whitespace.div_ceil(MANUSCRIPT_PAGE_CHARS),
        }
    }
}

fn count_paragraphs(text: &str) -> usize {
    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }
    }
    paragraphs
}
