//! Form surface: resolves a validated request from CLI flags, falling back to
//! an interactive terminal form for fields the user did not supply.
//!
//! The prompt-format selector is skipped when the chosen problem type is app
//! creation, mirroring the template builder's conditional use of the field.

use dialoguer::{Input, Select};

use crate::app::generate::GenerateOptions;
use crate::domain::{AppError, Complexity, ProblemType, PromptFormat, PromptRequest};

/// Resolve a request from the given options.
///
/// Selector flags are parsed eagerly so invalid values fail before any
/// prompting. When the industry flag is present the form never blocks:
/// missing selectors fall back to the form's initial values (app creation,
/// intermediate, detailed instructions).
pub fn resolve_request(options: &GenerateOptions) -> Result<PromptRequest, AppError> {
    let problem_type = options.problem_type.as_deref().map(parse_problem_type).transpose()?;
    let complexity = options.complexity.as_deref().map(parse_complexity).transpose()?;
    let prompt_format = options.prompt_format.as_deref().map(parse_prompt_format).transpose()?;

    match &options.industry {
        Some(industry) => PromptRequest::new(
            industry,
            problem_type.unwrap_or(ProblemType::AppCreation),
            complexity.unwrap_or(Complexity::Intermediate),
            prompt_format.unwrap_or(PromptFormat::Instructions),
        ),
        None => {
            let industry = prompt_industry()?;
            let problem_type = match problem_type {
                Some(value) => value,
                None => select_problem_type()?,
            };
            let complexity = match complexity {
                Some(value) => value,
                None => select_complexity()?,
            };
            let prompt_format = match prompt_format {
                Some(value) => value,
                None if problem_type.uses_prompt_format() => select_prompt_format()?,
                None => PromptFormat::Instructions,
            };
            PromptRequest::new(&industry, problem_type, complexity, prompt_format)
        }
    }
}

fn parse_problem_type(value: &str) -> Result<ProblemType, AppError> {
    ProblemType::from_name(value).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid problem type '{}': expected one of {}",
            value,
            keys(&ProblemType::ALL.map(|p| p.key()))
        ))
    })
}

fn parse_complexity(value: &str) -> Result<Complexity, AppError> {
    Complexity::from_name(value).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid complexity '{}': expected one of {}",
            value,
            keys(&Complexity::ALL.map(|c| c.key()))
        ))
    })
}

fn parse_prompt_format(value: &str) -> Result<PromptFormat, AppError> {
    PromptFormat::from_name(value).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid prompt format '{}': expected one of {}",
            value,
            keys(&PromptFormat::ALL.map(|f| f.key()))
        ))
    })
}

fn keys(values: &[&str]) -> String {
    values.join(", ")
}

fn prompt_industry() -> Result<String, AppError> {
    Input::new()
        .with_prompt("Industria, servicio o profesión")
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("Por favor, especifica una industria, servicio o profesión.")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read industry: {}", err)))
}

fn select_problem_type() -> Result<ProblemType, AppError> {
    let labels: Vec<&str> = ProblemType::ALL.iter().map(|p| p.display_name()).collect();
    Ok(ProblemType::ALL[select_index("Tipo de problema", &labels, 0)?])
}

fn select_complexity() -> Result<Complexity, AppError> {
    let labels: Vec<&str> = Complexity::ALL.iter().map(|c| c.display_name()).collect();
    Ok(Complexity::ALL[select_index("Nivel de complejidad", &labels, 1)?])
}

fn select_prompt_format() -> Result<PromptFormat, AppError> {
    let labels: Vec<&str> = PromptFormat::ALL.iter().map(|f| f.display_name()).collect();
    Ok(PromptFormat::ALL[select_index("Formato del prompt", &labels, 0)?])
}

fn select_index(prompt: &str, items: &[&str], default: usize) -> Result<usize, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|err| AppError::Validation(format!("Failed to read selection: {}", err)))
}
