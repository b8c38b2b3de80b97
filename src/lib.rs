//! promptgen: generate tailored AI prompts for any industry via the Gemini API.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::GenerateOptions;
pub use domain::{
    AppError, AppProposal, Complexity, GeminiApiConfig, GeneratedPrompt, ProblemType,
    PromptFormat, PromptRequest, Session, SessionState, TemplateSpec,
};

use ports::ClipboardWriter;
use services::{ArboardClipboard, HttpGeminiClient};

/// Generate one prompt: resolve the request, call the Gemini API, print the
/// result, and copy it to the clipboard when requested.
pub fn generate(options: GenerateOptions) -> Result<(), AppError> {
    let request = app::form::resolve_request(&options)?;
    let client = HttpGeminiClient::from_env_with_config(&GeminiApiConfig::default())?;
    let mut session = Session::new();

    println!("\nGenerando prompt...\n");
    let prompt = app::generate::run_generation(&mut session, &client, &request)?;

    let copy_text = prompt.to_copy_text();
    println!("{}", copy_text);

    if options.copy_to_clipboard {
        let mut clipboard = ArboardClipboard::new()?;
        clipboard.write_text(&copy_text)?;
        println!("\n📋 Prompt copiado al portapapeles");
    }

    Ok(())
}
