use crate::cli::commands::{Cli, Commands, InputArgs};
use anyhow::{Context, Result, bail};
use buntai::text::normalize_punctuation;
use buntai::{
    AiLikelihoodAnalyzer, Config, StyleTransformer, TextStats, TransformRequest, WritingStyle,
};
use std::io::Read;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::info;

/// Resolve the text argument, `--file`, or stdin, in that order.
fn read_input(input: InputArgs) -> Result<String> {
    if let Some(text) = input.text {
        return Ok(text);
    }
    if let Some(path) = input.file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    if buf.trim().is_empty() {
        bail!("No input text. Pass TEXT, --file <PATH>, or pipe text on stdin.");
    }
    Ok(buf)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_styles() -> String {
    let mut out = String::new();
    for style in WritingStyle::iter() {
        let preset = style.preset();
        let marker = if style.requires_strict_enforcement() {
            " (strict)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{style:<18} {}{marker}\n  {}\n",
            preset.label, preset.description
        ));
    }
    out
}

#[allow(clippy::too_many_lines)]
pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Transform {
            input,
            style,
            punctuation,
            temperature,
            high_accuracy,
            json,
        } => {
            let text = read_input(input)?;
            let mut request =
                TransformRequest::new(text, style, punctuation)?.with_high_accuracy(high_accuracy);
            if let Some(temperature) = temperature {
                request = request.with_temperature(temperature)?;
            }

            let transformer = StyleTransformer::new(Arc::new(config))?;
            let result = transformer.transform(&request).await?;
            info!(
                model = %result.model,
                api_version = %result.api_version,
                attempts = result.attempts,
                "Transform complete"
            );

            if json {
                print_json(&result)?;
            } else {
                println!("{}", result.output_text);
            }
            Ok(())
        }
        Commands::AiCheck { input, json } => {
            let text = read_input(input)?;
            let analyzer = AiLikelihoodAnalyzer::new(Arc::new(config))?;
            let verdict = analyzer.analyze(&text).await?;

            if json {
                print_json(&verdict)?;
            } else {
                println!("AI likelihood: {}/100 ({})", verdict.score, verdict.confidence);
                println!("{}", verdict.reasoning);
            }
            Ok(())
        }
        Commands::Punctuate { input, mode } => {
            let text = read_input(input)?;
            print!("{}", normalize_punctuation(&text, mode));
            if !text.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Commands::Stats { input, json } => {
            let text = read_input(input)?;
            let stats = TextStats::measure(&text);

            if json {
                print_json(&stats)?;
            } else {
                println!("Characters:           {}", stats.characters);
                println!("Characters (no space): {}", stats.characters_no_whitespace);
                println!("Lines:                {}", stats.lines);
                println!("Paragraphs:           {}", stats.paragraphs);
                println!("Sentences:            {}", stats.sentences);
                println!("Manuscript pages:     {}", stats.manuscript_pages);
            }
            Ok(())
        }
        Commands::Styles => {
            print!("{}", render_styles());
            Ok(())
        }
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            if port == 0 {
                info!("Starting gateway on {host} (random port)");
            } else {
                info!("Starting gateway on {host}:{port}");
            }
            buntai::gateway::run_gateway(&host, port, config).await
        }
    }
}
