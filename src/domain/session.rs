//! Generation session state machine.
//!
//! Sequences one generation at a time: Idle → Loading → (Success | Error),
//! re-entrant from any state. Superseded in-flight resolutions are ignored by
//! comparing a monotonically increasing generation token, so the latest
//! `begin` always wins even if the UI fails to prevent overlapping calls.

use super::error::AppError;
use super::generated::GeneratedPrompt;

/// Opaque handle identifying one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationToken(u64);

/// Observable lifecycle of the current generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success(GeneratedPrompt),
    Error(String),
}

/// Transient per-view session. Replaced wholesale on each transition; no
/// history is retained.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    latest: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    /// Start a new generation attempt, clearing any prior result or error.
    ///
    /// Allowed from any state. The returned token must be presented back to
    /// [`resolve`](Self::resolve); tokens from earlier attempts become stale.
    pub fn begin(&mut self) -> GenerationToken {
        self.latest += 1;
        self.state = SessionState::Loading;
        GenerationToken(self.latest)
    }

    /// Resolve a generation attempt.
    ///
    /// Honored only when `token` belongs to the most recent `begin` and the
    /// session is still loading; stale or duplicate resolutions are ignored.
    /// Returns whether the resolution was applied.
    pub fn resolve(
        &mut self,
        token: GenerationToken,
        outcome: &Result<GeneratedPrompt, AppError>,
    ) -> bool {
        if token.0 != self.latest || self.state != SessionState::Loading {
            return false;
        }
        self.state = match outcome {
            Ok(result) => SessionState::Success(result.clone()),
            Err(err) => SessionState::Error(err.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Result<GeneratedPrompt, AppError> {
        Ok(GeneratedPrompt::PlainText(text.to_string()))
    }

    #[test]
    fn starts_idle() {
        assert_eq!(*Session::new().state(), SessionState::Idle);
    }

    #[test]
    fn begin_moves_to_loading_and_resolve_to_success() {
        let mut session = Session::new();
        let token = session.begin();
        assert!(session.is_loading());

        assert!(session.resolve(token, &plain("hola")));
        assert_eq!(*session.state(), SessionState::Success(GeneratedPrompt::PlainText("hola".to_string())));
    }

    #[test]
    fn resolve_failure_moves_to_error() {
        let mut session = Session::new();
        let token = session.begin();
        assert!(session.resolve(token, &Err(AppError::Upstream("timeout".to_string()))));
        assert_eq!(*session.state(), SessionState::Error("timeout".to_string()));
    }

    #[test]
    fn begin_clears_previous_outcome() {
        let mut session = Session::new();
        let token = session.begin();
        session.resolve(token, &plain("primero"));

        session.begin();
        assert!(session.is_loading());
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut session = Session::new();
        let first = session.begin();
        let second = session.begin();

        // The superseded call resolves first; the session must stay loading.
        assert!(!session.resolve(first, &plain("viejo")));
        assert!(session.is_loading());

        assert!(session.resolve(second, &plain("nuevo")));
        assert_eq!(
            *session.state(),
            SessionState::Success(GeneratedPrompt::PlainText("nuevo".to_string()))
        );
    }

    #[test]
    fn duplicate_resolution_is_ignored() {
        let mut session = Session::new();
        let token = session.begin();
        assert!(session.resolve(token, &plain("hola")));
        assert!(!session.resolve(token, &Err(AppError::Unknown)));
        assert_eq!(
            *session.state(),
            SessionState::Success(GeneratedPrompt::PlainText("hola".to_string()))
        );
    }
}
