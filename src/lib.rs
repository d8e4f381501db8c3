//! tldw - Too Long; Didn't Watch
//!
//! Summarize YouTube videos and ask questions about them using their captions
//! and an OpenAI-compatible LLM API.
//!
//! # Architecture
//!
//! - `video` - Video ID extraction from YouTube links
//! - `transcript` - Caption retrieval and assembly
//! - `llm` - Prompt composition and completion providers
//! - `session` - Explicit session state machine tying the above together
//! - `config` - Settings and prompt templates
//! - `cli` - Command-line interface and interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use tldw::config::Settings;
//! use tldw::llm::Credential;
//! use tldw::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let mut session = Session::from_settings(&settings, None)?
//!         .with_credential(Credential::new("gsk_..."));
//!
//!     session.submit(Some("https://youtu.be/dQw4w9WgXcQ")).await;
//!     println!("{}", session.summarize().await?);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod openai;
pub mod session;
pub mod transcript;
pub mod video;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Result, TldwError};
