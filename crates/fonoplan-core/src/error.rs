#[derive(Debug, thiserror::Error)]
pub enum FonoplanError {
    #[error("invalid upload: {reason}")]
    InvalidUpload { reason: String },

    #[error("a Gemini API key is required. Get one at https://aistudio.google.com/app/apikey")]
    MissingCredential,

    #[error("request to the generation API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed generation API response: {0}")]
    MalformedResponse(String),

    #[error("could not parse the generated activity: {0}")]
    UnparsableActivity(String),

    #[error("a generation attempt is already in progress")]
    AttemptInFlight,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
