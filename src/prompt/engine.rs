use super::templates::{AI_CHECK_TEMPLATE, TRANSFORM_TEMPLATE};
use anyhow::Context as _;
use tera::Tera;

/// The prompts the crate knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Transform,
    AiCheck,
}

impl PromptKind {
    pub const ALL: [Self; 2] = [Self::Transform, Self::AiCheck];

    pub fn template_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::AiCheck => "ai_check",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::Transform => TRANSFORM_TEMPLATE,
            Self::AiCheck => AI_CHECK_TEMPLATE,
        }
    }
}

/// Tera engine preloaded with every [`PromptKind`] template.
///
/// Template names carry no extension, so Tera never HTML-escapes the
/// user text inserted into them.
#[derive(Debug, Clone)]
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        for kind in PromptKind::ALL {
            tera.add_raw_template(kind.template_name(), kind.source())
                .with_context(|| format!("Failed to compile {} template", kind.template_name()))?;
        }
        Ok(Self { tera })
    }

    pub fn render(&self, kind: PromptKind, context: &tera::Context) -> anyhow::Result<String> {
        self.tera
            .render(kind.template_name(), context)
            .with_context(|| format!("Failed to render {} prompt", kind.template_name()))
    }
}
