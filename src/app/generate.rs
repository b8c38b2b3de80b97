//! Generation flow: drives one session lifecycle per submission.

use crate::domain::{AppError, GeneratedPrompt, PromptRequest, Session, template};
use crate::ports::GenerationClient;

/// Options collected from the CLI surface.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Industry, service or profession. Interactive form when absent.
    pub industry: Option<String>,
    /// Problem type key or label.
    pub problem_type: Option<String>,
    /// Complexity key or label.
    pub complexity: Option<String>,
    /// Prompt format key or label. Ignored for app creation.
    pub prompt_format: Option<String>,
    /// Whether to copy the result to the clipboard on success.
    pub copy_to_clipboard: bool,
}

/// Run one generation attempt against the session.
///
/// Moves the session to loading, builds the meta-prompt, performs the single
/// upstream call, and resolves the session with the outcome. The outcome is
/// also returned so the caller can propagate failures without re-reading the
/// session state.
pub fn run_generation(
    session: &mut Session,
    client: &impl GenerationClient,
    request: &PromptRequest,
) -> Result<GeneratedPrompt, AppError> {
    let token = session.begin();
    let outcome = template::build(request).and_then(|spec| client.generate(&spec));
    session.resolve(token, &outcome);
    outcome
}
