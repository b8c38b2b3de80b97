pub mod catalog;
pub mod config;
pub mod error;
pub mod generated;
pub mod request;
pub mod session;
pub mod template;

pub use catalog::{Complexity, ProblemType, PromptFormat};
pub use config::{DEFAULT_MODEL, GEMINI_API_KEY_ENV, GeminiApiConfig};
pub use error::AppError;
pub use generated::{AppProposal, GeneratedPrompt};
pub use request::PromptRequest;
pub use session::{GenerationToken, Session, SessionState};
pub use template::TemplateSpec;
