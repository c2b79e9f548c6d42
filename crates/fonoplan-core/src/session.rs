use crate::activity;
use crate::client::GenerationBackend;
use crate::error::FonoplanError;
use crate::model::{GeneratedActivity, SessionRequest};
use crate::prompt;

/// Phases of one generation attempt. `Failed` is terminal for the attempt;
/// the caller re-enters `Idle` via `reset` before retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Building,
    AwaitingResponse,
    Parsing,
    Ready,
    Failed,
}

/// Explicit session-state value object: owns the form data for one active
/// session plus the outcome of the latest generation attempt. Passed to and
/// returned from operations instead of living in ambient mutable state.
#[derive(Debug)]
pub struct SessionState {
    pub request: SessionRequest,
    phase: GenerationPhase,
    activity: Option<GeneratedActivity>,
    last_error: Option<String>,
}

impl SessionState {
    pub fn new(request: SessionRequest) -> Self {
        SessionState {
            request,
            phase: GenerationPhase::Idle,
            activity: None,
            last_error: None,
        }
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn activity(&self) -> Option<&GeneratedActivity> {
        self.activity.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(
            self.phase,
            GenerationPhase::Building | GenerationPhase::AwaitingResponse | GenerationPhase::Parsing
        )
    }

    /// Return to `Idle` after a finished attempt, keeping the form data.
    pub fn reset(&mut self) {
        self.phase = GenerationPhase::Idle;
        self.activity = None;
        self.last_error = None;
    }

    /// Drive one generation attempt through
    /// `Building -> AwaitingResponse -> Parsing -> Ready | Failed`.
    ///
    /// Re-entry while an attempt is in flight is rejected; form state is
    /// never touched, so a failed attempt can be retried as-is.
    pub async fn generate(
        &mut self,
        backend: &dyn GenerationBackend,
    ) -> Result<&GeneratedActivity, FonoplanError> {
        if self.is_in_flight() {
            return Err(FonoplanError::AttemptInFlight);
        }

        self.activity = None;
        self.last_error = None;

        self.phase = GenerationPhase::Building;
        let prompt_text = prompt::build_prompt(&self.request);

        self.phase = GenerationPhase::AwaitingResponse;
        let raw = match backend.submit(&prompt_text).await {
            Ok(raw) => raw,
            Err(e) => return Err(self.fail(e)),
        };

        self.phase = GenerationPhase::Parsing;
        match activity::parse_activity(&raw) {
            Ok(parsed) => {
                self.phase = GenerationPhase::Ready;
                Ok(&*self.activity.insert(parsed))
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&mut self, err: FonoplanError) -> FonoplanError {
        self.phase = GenerationPhase::Failed;
        self.last_error = Some(err.to_string());
        err
    }
}
