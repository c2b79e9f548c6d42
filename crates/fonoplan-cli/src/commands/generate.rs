use std::path::PathBuf;

use fonoplan_core::client::GeminiClient;
use fonoplan_core::error::FonoplanError;
use fonoplan_core::session::SessionState;

use crate::output;

pub async fn run(
    session_file: PathBuf,
    refs: Vec<PathBuf>,
    api_key: Option<String>,
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), FonoplanError> {
    let key = api_key
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .unwrap_or_default();

    let request = super::load_request(&session_file, &refs)?;
    let requested_minutes = request.duration_minutes;

    let client = GeminiClient::new(key);
    let mut state = SessionState::new(request);
    let activity = state.generate(&client).await?;

    let total = activity.total_minutes();
    if total != requested_minutes {
        eprintln!("warning: procedure phases sum to {total} min, requested {requested_minutes} min");
    }

    match output_format {
        "json" => output::json::print_activity(activity)?,
        _ => output::text::print(activity),
    }

    if let Some(path) = out {
        std::fs::write(&path, fonoplan_core::export::plain_text(activity))?;
        eprintln!("Activity exported to {}", path.display());
    }

    Ok(())
}
