//! Pre-flight checks before talking to the LLM provider.
//!
//! Resolves the API key from the command line, the environment, or an
//! interactive prompt, before any network call is made.

use crate::config::Settings;
use crate::llm::Credential;
use console::{style, Term};

/// Resolve the API key without prompting.
///
/// The `--api-key` flag wins, then the environment variable named in
/// `llm.api_key_env`. Blank values count as missing.
pub fn resolve_credential(flag: Option<&str>, settings: &Settings) -> Option<Credential> {
    flag.and_then(Credential::new).or_else(|| {
        std::env::var(&settings.llm.api_key_env)
            .ok()
            .and_then(Credential::new)
    })
}

/// Ask for the API key on the terminal with input hidden.
///
/// Returns `None` when the user enters nothing or stdin is not a terminal.
pub fn prompt_credential() -> Option<Credential> {
    let term = Term::stderr();
    if !term.is_term() {
        return None;
    }

    term.write_str(&format!("{} ", style("API key:").bold())).ok()?;
    term.read_secure_line().ok().and_then(Credential::new)
}
