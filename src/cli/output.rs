//! CLI output formatting utilities.

use crate::transcript::Transcript;
use crate::video::VideoReference;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Player view: where to watch the video.
    pub fn video(video: &VideoReference) {
        Output::header("Video");
        let watch = video.watch_url();
        Output::kv("Watch", &watch);
        if video.url() != watch {
            Output::kv("Link", video.url());
        }
        Output::kv("Embed", &video.embed_url());
    }

    /// Summary view.
    pub fn summary(text: &str) {
        Output::header("Summary");
        println!("{}\n", text.trim());
    }

    /// Q&A view.
    pub fn answer(question: &str, text: &str) {
        Output::header("Answer");
        println!("{} {}", style("Q:").dim(), question.trim());
        println!("{}\n", text.trim());
    }

    /// Full transcript view.
    pub fn transcript(transcript: &Transcript) {
        Output::header("Full Transcript");
        Output::kv(
            "Length",
            &format!(
                "{} words, {} caption fragments",
                transcript.word_count(),
                transcript.fragment_count
            ),
        );
        println!("\n{}\n", transcript.text);
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
