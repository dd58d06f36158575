//! Polite-ending check for the だ・である family.

use crate::style::WritingStyle;
use crate::text::sentences::{sentence_body, trim_closing};
use crate::text::{Boundaries, split_sentences, truncate_with_ellipsis};

/// Sentence endings that belong to the です・ます register.
pub const POLITE_SUFFIXES: &[&str] = &[
    "です",
    "ます",
    "でした",
    "ました",
    "でしょう",
    "ましょう",
    "ません",
    "ですか",
    "ますか",
    "ですね",
    "ますね",
    "ですよ",
    "ますよ",
    "ですよね",
    "ますよね",
    "でしょうか",
    "ましょうか",
    "ください",
    "下さい",
    "くださいませ",
    "ございます",
    "ございました",
];

const REASON_QUOTE_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Compliant,
    NonCompliant {
        /// Caller-facing message quoting the first offender.
        reason: String,
        /// Instruction fed into the next attempt's prompt.
        corrective_directive: String,
        /// Every offending sentence, in order.
        offending_sentences: Vec<String>,
    },
}

impl ValidationResult {
    pub fn is_compliant(&self) -> bool {
        matches!(self, Self::Compliant)
    }
}

/// Whether `sentence` ends in polite register, ignoring trailing marks.
pub fn ends_politely(sentence: &str) -> bool {
    let body = sentence_body(sentence);
    POLITE_SUFFIXES.iter().any(|suffix| body.ends_with(suffix))
}

/// Check `text` against the sentence-ending contract of `style`.
///
/// Styles without strict enforcement always pass.
pub fn validate_style(text: &str, style: WritingStyle) -> ValidationResult {
    if !style.requires_strict_enforcement() {
        return ValidationResult::Compliant;
    }

    let offending_sentences: Vec<String> = split_sentences(text, Boundaries::WithPauses)
        .iter()
        .filter(|sentence| ends_politely(sentence))
        .map(|sentence| trim_closing(sentence).to_string())
        .collect();

    let Some(first) = offending_sentences.first() else {
        return ValidationResult::Compliant;
    };

    let reason = format!(
        "「{}」がです・ます調で終わっています",
        truncate_with_ellipsis(first, REASON_QUOTE_CHARS)
    );
    let corrective_directive = corrective_directive(&offending_sentences);

    ValidationResult::NonCompliant {
        reason,
        corrective_directive,
        offending_sentences,
    }
}

fn corrective_directive(offenders: &[String]) -> String {
    let mut directive = String::from(
        "前回の出力には、です・ます調で終わる次の文が残っていた。これらをすべて、意味を変えずにだ・である調へ書き換えること。\n",
    );
    for sentence in offenders {
        directive.push_str("- ");
        directive.push_str(sentence);
        directive.push('\n');
    }
    directive.push_str("出力する前に、すべての文末がだ・である調になっていることを一文ずつ確認すること。");
    directive
}
