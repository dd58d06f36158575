use buntai::{PunctuationMode, WritingStyle};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// `buntai` - Japanese sentence-ending style transformer backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "buntai")]
#[command(version)]
#[command(about = "Rewrite Japanese text between だ・である and です・ます styles.", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the input text comes from. Falls back to stdin.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to process
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite text into a target sentence-ending style
    Transform {
        #[command(flatten)]
        input: InputArgs,

        /// Target style (dearu, dearu-natural, desumasu, desumasu-natural)
        #[arg(short, long, default_value = "dearu")]
        style: WritingStyle,

        /// Punctuation dialect (japanese, academic, western)
        #[arg(short, long, default_value = "japanese")]
        punctuation: PunctuationMode,

        /// Temperature (0.0 - 2.0); defaults to [transform] default_temperature
        #[arg(short, long)]
        temperature: Option<f64>,

        /// Try the configured high-accuracy model first
        #[arg(long)]
        high_accuracy: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate how likely the text is to be AI-generated
    AiCheck {
        #[command(flatten)]
        input: InputArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert punctuation marks without calling the model
    Punctuate {
        #[command(flatten)]
        input: InputArgs,

        /// Punctuation dialect (japanese, academic, western)
        #[arg(short, long, default_value = "japanese")]
        mode: PunctuationMode,
    },

    /// Count characters, lines, paragraphs, sentences and manuscript pages
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available writing styles
    Styles,

    /// Start the HTTP gateway
    Serve {
        /// Port to listen on (use 0 for random available port); defaults to [gateway] port
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to; defaults to [gateway] host
        #[arg(long)]
        host: Option<String>,
    },
}
