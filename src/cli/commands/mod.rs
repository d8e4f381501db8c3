//! CLI command implementations.

mod ask;
mod config;
mod shell;
mod summarize;
mod transcript;

pub use ask::run_ask;
pub use config::run_config;
pub use shell::run_shell;
pub use summarize::run_summarize;
pub use transcript::run_transcript;

use crate::cli::Output;
use crate::config::Settings;
use crate::error::TldwError;
use crate::llm::Credential;
use crate::session::{IdleReason, Session, SessionError, SessionState};
use anyhow::Result;

/// Render a resting session state.
pub(crate) fn render_state(state: &SessionState) {
    match state {
        SessionState::Idle(IdleReason::MissingCredential) => {
            Output::warning(IdleReason::MissingCredential.message())
        }
        SessionState::Idle(reason) => Output::info(reason.message()),
        SessionState::Ready(ready) => {
            Output::video(&ready.video);
            Output::success(&format!(
                "Transcript loaded ({} words).",
                ready.transcript.word_count()
            ));
        }
        SessionState::Error(e) => Output::error(e.user_message()),
        SessionState::Parsing { .. } | SessionState::Fetching { .. } => {}
    }
}

/// Submit a URL to the session behind a spinner.
pub(crate) async fn load_video(session: &mut Session, url: Option<&str>) {
    let spinner = Output::spinner("Fetching transcript...");
    let state = session.submit(url).await;
    spinner.finish_and_clear();
    render_state(state);
}

/// Build a session and load a video for one-shot commands.
async fn open_video(
    url: &str,
    credential: Option<Credential>,
    model: Option<String>,
    settings: &Settings,
) -> Result<Session> {
    let mut session = Session::from_settings(settings, model)?.with_credential(credential);
    load_video(&mut session, Some(url)).await;

    let err = match session.state() {
        SessionState::Ready(_) => None,
        SessionState::Error(SessionError::InvalidUrl(url)) => {
            Some(TldwError::InvalidUrl(url.clone()))
        }
        SessionState::Error(SessionError::NoTranscript(e)) => {
            Some(TldwError::NoTranscript(e.clone()))
        }
        SessionState::Idle(IdleReason::MissingCredential) => Some(TldwError::MissingCredential),
        _ => Some(TldwError::NotReady),
    };

    match err {
        None => Ok(session),
        Some(e) => Err(e.into()),
    }
}
