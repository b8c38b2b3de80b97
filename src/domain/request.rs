use super::catalog::{Complexity, ProblemType, PromptFormat};
use super::error::AppError;

/// A validated generation request, built once per form submission.
///
/// The industry is guaranteed non-blank and trimmed; validation happens here
/// at the boundary, never inside the template builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    industry: String,
    problem_type: ProblemType,
    complexity: Complexity,
    prompt_format: PromptFormat,
}

impl PromptRequest {
    /// Build a request, trimming the industry and rejecting blank input.
    pub fn new(
        industry: &str,
        problem_type: ProblemType,
        complexity: Complexity,
        prompt_format: PromptFormat,
    ) -> Result<Self, AppError> {
        let industry = industry.trim();
        if industry.is_empty() {
            return Err(AppError::Validation(
                "Por favor, especifica una industria, servicio o profesión.".to_string(),
            ));
        }
        Ok(Self { industry: industry.to_string(), problem_type, complexity, prompt_format })
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn problem_type(&self) -> ProblemType {
        self.problem_type
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    /// The requested prompt format. Ignored by the builder for app creation.
    pub fn prompt_format(&self) -> PromptFormat {
        self.prompt_format
    }
}
