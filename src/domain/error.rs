use thiserror::Error;

/// Library-wide error type for promptgen operations.
///
/// User-facing generation failures keep the Spanish wording shown in the
/// terminal; configuration and environment problems use developer-facing
/// English messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Form-boundary validation failure. Never reaches the generation client.
    #[error("{0}")]
    Validation(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The API returned no usable text.
    #[error("La API no devolvió contenido. Inténtalo de nuevo con otros parámetros.")]
    EmptyResponse,

    /// Structured mode expected JSON matching the proposal schema.
    #[error("La respuesta de la API no es un JSON válido ({0})")]
    MalformedResponse(String),

    /// The generation call itself failed; carries the upstream message.
    #[error("{0}")]
    Upstream(String),

    /// Failure that could not be classified.
    #[error("Ocurrió un error inesperado al contactar la API.")]
    Unknown,

    /// Prompt template rendering failed.
    #[error("Failed to render prompt template: {0}")]
    Template(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
