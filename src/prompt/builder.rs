use super::engine::{PromptKind, TeraEngine};
use crate::text::PunctuationMode;
use crate::transform::{AttemptConfig, EnforcementLevel, TransformRequest};
use tera::Context;

const HYGIENE_RULES: &[&str] = &[
    "書き換えた本文だけを出力すること。",
    "「了解しました」「以下が書き換えた文章です」などの前置き、説明、注釈、感想を付けないこと。",
    "Markdownの装飾（見出し、太字、記号の追加）やコードブロックを使わないこと。",
];

const SELF_CHECK: &str = "出力する前に、すべての文の文末が「です」「ます」「でした」「ました」「でしょう」「ください」などの敬体になっていないか確認し、残っていれば常体に直すこと。";

const REINFORCED_LINES: &[&str] = &[
    "書き換えの例:",
    "「資料を確認しました。」→「資料を確認した。」",
    "「問題はありません。」→「問題はない。」",
    "「ご注意ください。」→「注意が必要だ。」",
];

const MAXIMUM_LINES: &[&str] = &[
    "出力の前に、本文を一文ずつ読み、各文の文末を個別に点検すること。",
    "敬体の文末が一つでも残っている間は出力せず、すべて常体に直してから出力すること。",
];

fn punctuation_directive(mode: PunctuationMode) -> &'static str {
    match mode {
        PunctuationMode::Japanese => "読点は「、」、句点は「。」を使うこと。「，」「．」は使わないこと。",
        PunctuationMode::Academic => "読点は全角の「，」、句点は全角の「．」を使うこと。「、」「。」は使わないこと。",
        PunctuationMode::Western => "読点は半角の「,」、句点は半角の「.」を使うこと。「、」「。」は使わないこと。",
    }
}

fn reinforcement_lines(level: EnforcementLevel) -> &'static [&'static str] {
    match level {
        EnforcementLevel::Standard => &[],
        EnforcementLevel::Reinforced => REINFORCED_LINES,
        EnforcementLevel::Maximum => MAXIMUM_LINES,
    }
}

/// Renders the instruction block for each transform attempt and the
/// AI-likelihood audit.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    engine: TeraEngine,
}

impl PromptBuilder {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            engine: TeraEngine::new()?,
        })
    }

    /// Instruction block for one attempt.
    ///
    /// The corrective directive, the strict tone and the self-check section
    /// only appear when `attempt.strict_mode` is set.
    pub fn transform_prompt(
        &self,
        request: &TransformRequest,
        attempt: &AttemptConfig,
        corrective: Option<&str>,
    ) -> anyhow::Result<String> {
        let preset = request.style.preset();
        let strict = attempt.strict_mode;

        let mut ctx = Context::new();
        ctx.insert(
            "corrective",
            if strict { corrective.unwrap_or_default() } else { "" },
        );
        ctx.insert("label", preset.label);
        ctx.insert("tone", preset.tone);
        ctx.insert(
            "strict_tone",
            if strict { preset.strict_tone.unwrap_or_default() } else { "" },
        );
        ctx.insert("directives", preset.directives);
        ctx.insert("punctuation", punctuation_directive(request.punctuation));
        ctx.insert("hygiene", HYGIENE_RULES);
        ctx.insert("strict", &strict);
        ctx.insert("self_check", SELF_CHECK);
        ctx.insert("reinforcement", reinforcement_lines(attempt.enforcement));
        ctx.insert(
            "sample_before",
            preset.sample.map(|s| s.before).unwrap_or_default(),
        );
        ctx.insert(
            "sample_after",
            preset.sample.map(|s| s.after).unwrap_or_default(),
        );
        ctx.insert("text", &request.text);

        self.engine.render(PromptKind::Transform, &ctx)
    }

    /// Audit prompt asking for a strict JSON verdict on `text`.
    pub fn ai_check_prompt(&self, text: &str) -> anyhow::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("text", text);
        self.engine.render(PromptKind::AiCheck, &ctx)
    }
}
