//! Interactive shell for exploring one video at a time.

use super::{load_video, render_state};
use crate::cli::preflight;
use crate::cli::Output;
use crate::config::Settings;
use crate::error::TldwError;
use crate::session::Session;
use crate::video::extract_video_id;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A line entered at the shell prompt.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Summary,
    Ask(&'a str),
    Transcript,
    Video,
    Open(&'a str),
    Key,
    Help,
    Exit,
    Empty,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> ShellCommand<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "summary" | "summarize" => ShellCommand::Summary,
        "ask" => ShellCommand::Ask(rest),
        "transcript" | "subtitles" => ShellCommand::Transcript,
        "video" => ShellCommand::Video,
        "open" => ShellCommand::Open(rest),
        "key" => ShellCommand::Key,
        "help" | "?" => ShellCommand::Help,
        "exit" | "quit" => ShellCommand::Exit,
        _ if extract_video_id(line).is_some() => ShellCommand::Open(line),
        _ => ShellCommand::Unknown(word),
    }
}

fn print_help() {
    Output::header("Commands");
    Output::kv("summary", "Summarize the video");
    Output::kv("ask <question>", "Ask a question about the video");
    Output::kv("transcript", "Show the full transcript");
    Output::kv("video", "Show where to watch the video");
    Output::kv("open <url>", "Load a different video (or just paste a link)");
    Output::kv("key", "Enter a new API key");
    Output::kv("exit", "Leave the shell");
    println!();
}

/// Read one line from stdin. Returns `None` at end of input.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{} ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn report(e: &TldwError) {
    match e {
        TldwError::NotReady | TldwError::MissingCredential => Output::warning(&e.to_string()),
        _ => Output::error(&e.to_string()),
    }
}

/// Run the interactive shell.
pub async fn run_shell(
    url: Option<String>,
    api_key: Option<&str>,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    let credential =
        preflight::resolve_credential(api_key, &settings).or_else(preflight::prompt_credential);

    let mut session = Session::from_settings(&settings, model)?.with_credential(credential);

    println!("\n{}", style("YouTube Video AI Agent").bold().cyan());
    println!(
        "{}\n",
        style("Summarize videos, read subtitles, and chat with content. Type 'help' for commands.")
            .dim()
    );

    Output::kv("Model", &session.model().model);
    println!();

    let url = match url {
        Some(url) => Some(url),
        None if session.has_credential() => read_line(&style("Paste YouTube video link:").bold().to_string())?,
        None => None,
    };
    load_video(&mut session, url.as_deref()).await;

    loop {
        let Some(line) = read_line(&style("tldw>").green().bold().to_string())? else {
            break;
        };

        let command = parse_command(&line);
        debug!("Shell command: {:?}", command);

        match command {
            ShellCommand::Empty => continue,
            ShellCommand::Exit => {
                Output::info("Goodbye!");
                break;
            }
            ShellCommand::Help => print_help(),
            ShellCommand::Summary => {
                let spinner = Output::spinner("Analyzing video content...");
                let result = session.summarize().await;
                spinner.finish_and_clear();
                match result {
                    Ok(summary) => Output::summary(&summary.text),
                    Err(e) => report(&e),
                }
            }
            ShellCommand::Ask("") => Output::warning("Usage: ask <question>"),
            ShellCommand::Ask(question) => {
                let spinner = Output::spinner("Thinking...");
                let result = session.answer(question).await;
                spinner.finish_and_clear();
                match result {
                    Ok(answer) => Output::answer(question, &answer.text),
                    Err(e) => report(&e),
                }
            }
            ShellCommand::Transcript => match session.transcript() {
                Ok(transcript) => Output::transcript(transcript),
                Err(e) => report(&e),
            },
            ShellCommand::Video => match session.ready() {
                Ok(ready) => Output::video(&ready.video),
                Err(e) => report(&e),
            },
            ShellCommand::Open("") => Output::warning("Usage: open <url>"),
            ShellCommand::Open(url) => load_video(&mut session, Some(url)).await,
            ShellCommand::Key => {
                session.set_credential(preflight::prompt_credential());
                if session.has_credential() {
                    Output::success("API key updated.");
                } else {
                    render_state(session.state());
                }
            }
            ShellCommand::Unknown(word) => {
                Output::warning(&format!("Unknown command '{}'. Type 'help' for commands.", word))
            }
        }
    }

    Ok(())
}
