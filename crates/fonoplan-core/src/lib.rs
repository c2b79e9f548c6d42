pub mod activity;
pub mod client;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod prompt;
pub mod session;

use client::GenerationBackend;
use error::FonoplanError;
use model::{GeneratedActivity, SessionRequest};

/// Main API entry point: run one full generation attempt.
///
/// Builds the prompt from the session request (including any extracted
/// references), submits it once to the backend, and parses the response
/// into a structured activity. No state is kept; callers needing the
/// attempt lifecycle use [`session::SessionState`].
pub async fn generate_activity(
    request: &SessionRequest,
    backend: &dyn GenerationBackend,
) -> Result<GeneratedActivity, FonoplanError> {
    let prompt_text = prompt::build_prompt(request);
    let raw = backend.submit(&prompt_text).await?;
    activity::parse_activity(&raw)
}
