//! Generation client port definition.

use crate::domain::{AppError, GeneratedPrompt, TemplateSpec};

/// Port for the upstream text-generation service.
///
/// Callers hold at most one call in flight; implementations perform exactly
/// one outbound request per invocation, with no retries and no caching.
pub trait GenerationClient {
    /// Generate a prompt for the given template spec and normalize the raw
    /// response into the shape the spec declares.
    fn generate(&self, spec: &TemplateSpec) -> Result<GeneratedPrompt, AppError>;
}
