//! CLI module for tldw.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand, ValueEnum};

/// tldw - Too Long; Didn't Watch
///
/// Summarize YouTube videos, ask questions about them, and read their captions
/// from the terminal. Works with any OpenAI-compatible LLM API (Groq by default).
#[derive(Parser, Debug)]
#[command(name = "tldw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// API key for the LLM provider
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// LLM model to use (overrides config)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session for a video
    Shell {
        /// YouTube video URL (prompted for if omitted)
        url: Option<String>,
    },

    /// Summarize a video
    Summarize {
        /// YouTube video URL
        url: String,
    },

    /// Ask a question about a video
    Ask {
        /// YouTube video URL
        url: String,

        /// The question to ask
        question: String,
    },

    /// Print the full transcript of a video
    Transcript {
        /// YouTube video URL
        url: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = TranscriptFormat::Text)]
        format: TranscriptFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Output format for the transcript command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from([
            "tldw",
            "ask",
            "https://youtu.be/abc123",
            "What is it about?",
            "--api-key",
            "dummy",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("dummy"));
        match cli.command {
            Commands::Ask { url, question } => {
                assert_eq!(url, "https://youtu.be/abc123");
                assert_eq!(question, "What is it about?");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_transcript_format() {
        let cli = Cli::try_parse_from(["tldw", "transcript", "https://youtu.be/x", "--format", "json"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Transcript {
                format: TranscriptFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_shell_url_optional() {
        let cli = Cli::try_parse_from(["tldw", "-vv", "shell"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Shell { url: None }));
    }
}
