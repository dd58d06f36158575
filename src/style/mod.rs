//! Fixed registry of writing styles and the instructions that produce them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Target sentence-ending register.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum WritingStyle {
    /// だ・である, formal literary register.
    #[default]
    Dearu,
    /// だ・である with a less mechanical rhythm.
    DearuNatural,
    /// です・ます, polite register.
    Desumasu,
    /// です・ます with a less mechanical rhythm.
    DesumasuNatural,
}

impl WritingStyle {
    /// Whether transformed output must pass the polite-ending check.
    pub fn requires_strict_enforcement(self) -> bool {
        matches!(self, Self::Dearu | Self::DearuNatural)
    }

    pub fn preset(self) -> &'static StylePreset {
        match self {
            Self::Dearu => &DEARU,
            Self::DearuNatural => &DEARU_NATURAL,
            Self::Desumasu => &DESUMASU,
            Self::DesumasuNatural => &DESUMASU_NATURAL,
        }
    }
}

/// Illustrative before/after pair shown to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSample {
    pub before: &'static str,
    pub after: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    pub label: &'static str,
    pub description: &'static str,
    /// Baseline tone instruction, always sent.
    pub tone: &'static str,
    /// Stricter tone instruction, sent only on strict retries.
    pub strict_tone: Option<&'static str>,
    /// Paragraph and flow guidance.
    pub directives: &'static [&'static str],
    pub sample: Option<StyleSample>,
}

static DEARU: StylePreset = StylePreset {
    label: "だ・である調",
    description: "論文や報告書向けの、断定的で硬い文体。",
    tone: "すべての文末を「だ」「である」「した」などの常体に統一すること。",
    strict_tone: Some(
        "「です」「ます」「でした」「ました」「でしょう」「ください」で終わる文を一文たりとも残してはならない。\
         引用や会話文の中であっても、地の文として出力する文の文末は常体にすること。",
    ),
    directives: &[],
    sample: Some(StyleSample {
        before: "本日の会議では新しい方針が決まりました。詳細は追って共有します。",
        after: "本日の会議では新しい方針が決まった。詳細は追って共有する。",
    }),
};

static DEARU_NATURAL: StylePreset = StylePreset {
    label: "だ・である調（自然）",
    description: "常体を保ちつつ、機械的な反復を避けた読みやすい文体。",
    tone: "すべての文末を常体に統一しつつ、「である」の連続を避け、「だ」「した」「している」「のだ」などを文脈に応じて使い分けること。",
    strict_tone: Some(
        "文末の言い換えに迷った場合でも、「です」「ます」系の敬体へ戻してはならない。\
         体言止めや「〜のだ」を適度に混ぜ、同じ文末が三回以上続かないようにすること。",
    ),
    directives: &[
        "一文を長くしすぎず、読点で区切りながら自然なリズムを保つこと。",
        "段落の冒頭と末尾で同じ言い回しを繰り返さないこと。",
        "接続詞の多用を避け、文と文のつながりは内容で示すこと。",
    ],
    sample: Some(StyleSample {
        before: "この機能はとても便利です。作業時間を大きく短縮できます。ぜひ試してください。",
        after: "この機能は実に便利だ。作業時間を大きく短縮できる。一度試してみる価値はある。",
    }),
};

static DESUMASU: StylePreset = StylePreset {
    label: "です・ます調",
    description: "案内文やビジネス文書向けの、丁寧で柔らかい文体。",
    tone: "すべての文末を「です」「ます」「でした」「ました」などの敬体に統一すること。",
    strict_tone: None,
    directives: &[],
    sample: Some(StyleSample {
        before: "本日の会議では新しい方針が決まった。詳細は追って共有する。",
        after: "本日の会議では新しい方針が決まりました。詳細は追って共有します。",
    }),
};

static DESUMASU_NATURAL: StylePreset = StylePreset {
    label: "です・ます調（自然）",
    description: "敬体を保ちつつ、話し言葉に近い自然な流れを持つ文体。",
    tone: "すべての文末を敬体に統一しつつ、「です」「ます」の単調な連続を避け、「でしょう」「ません」「ましょう」なども文脈に応じて使い分けること。",
    strict_tone: None,
    directives: &[
        "読み手に語りかけるような自然な流れを意識すること。",
        "同じ文末表現が三回以上続かないようにすること。",
        "硬すぎる漢語は、意味を変えない範囲で和語に言い換えてよい。",
    ],
    sample: None,
};
