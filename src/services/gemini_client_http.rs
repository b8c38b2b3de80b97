//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::domain::{
    AppError, AppProposal, GEMINI_API_KEY_ENV, GeminiApiConfig, GeneratedPrompt, TemplateSpec,
};
use crate::ports::GenerationClient;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

// Fixed sampling tuned for creative but controlled output, applied to every
// request regardless of content.
const TEMPERATURE: f64 = 0.8;
const TOP_P: f64 = 0.95;
const TOP_K: u32 = 40;

/// HTTP client for the Gemini generateContent API.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = config
            .api_url
            .join(&format!("v1beta/models/{}:generateContent", config.model))
            .map_err(|e| AppError::config_error(format!("Invalid API URL: {}", e)))?;

        Ok(Self { api_key, endpoint, client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            AppError::Configuration(format!("{} environment variable not set", GEMINI_API_KEY_ENV))
        })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, spec: &TemplateSpec) -> Result<GeneratedPrompt, AppError> {
        let request = build_request(spec);
        let raw = self.send_request(&request)?;
        normalize(spec, &raw)
    }
}

impl HttpGeminiClient {
    fn send_request(&self, request: &GenerateContentRequest) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|e| AppError::Upstream(e.to_string()))?;

        if !status.is_success() {
            return Err(upstream_error(&body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Upstream(format!("Failed to parse API response: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content.parts.into_iter().map(|part| part.text).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default();

        Ok(text)
    }
}

fn build_request(spec: &TemplateSpec) -> GenerateContentRequest {
    let (response_mime_type, response_schema) = match spec {
        TemplateSpec::FreeText { .. } => (None, None),
        TemplateSpec::Structured { schema, .. } => {
            (Some("application/json".to_string()), Some(schema.clone()))
        }
    };

    GenerateContentRequest {
        contents: vec![Content { parts: vec![Part { text: spec.text().to_string() }] }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            response_mime_type,
            response_schema,
        },
    }
}

/// Classify a non-success response: pass the service message through when
/// present, otherwise fall back to the unclassified error.
fn upstream_error(body: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|response| response.error)
        .and_then(|error| error.message);

    match message {
        Some(message) => AppError::Upstream(message),
        None => AppError::Unknown,
    }
}

/// Map the raw response text into the shape the spec declares.
fn normalize(spec: &TemplateSpec, raw: &str) -> Result<GeneratedPrompt, AppError> {
    match spec {
        TemplateSpec::FreeText { .. } => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(AppError::EmptyResponse);
            }
            Ok(GeneratedPrompt::PlainText(trimmed.to_string()))
        }
        TemplateSpec::Structured { .. } => {
            if raw.trim().is_empty() {
                return Err(AppError::EmptyResponse);
            }
            let proposal: AppProposal = serde_json::from_str(raw)
                .map_err(|e| AppError::MalformedResponse(e.to_string()))?;
            Ok(GeneratedPrompt::AppProposal(proposal))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Complexity, ProblemType, PromptFormat, PromptRequest, template};
    use mockito::Matcher;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn client_for(server: &mockito::Server) -> HttpGeminiClient {
        let config = GeminiApiConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 5,
        };
        HttpGeminiClient::new("fake-key".to_string(), &config).unwrap()
    }

    fn free_text_spec() -> TemplateSpec {
        let request = PromptRequest::new(
            "cafetería",
            ProblemType::ContentCreation,
            Complexity::Beginner,
            PromptFormat::Questions,
        )
        .unwrap();
        template::build(&request).unwrap()
    }

    fn structured_spec() -> TemplateSpec {
        let request = PromptRequest::new(
            "fisioterapia",
            ProblemType::AppCreation,
            Complexity::Intermediate,
            PromptFormat::Instructions,
        )
        .unwrap();
        template::build(&request).unwrap()
    }

    fn text_response(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[test]
    fn free_text_success_is_trimmed() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .match_header(X_GOOG_API_KEY, "fake-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(text_response("  hola  "))
            .create();

        let result = client_for(&server).generate(&free_text_spec()).unwrap();
        assert_eq!(result, GeneratedPrompt::PlainText("hola".to_string()));
    }

    #[test]
    fn free_text_request_uses_fixed_sampling_without_schema() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", GENERATE_PATH)
            .match_body(Matcher::PartialJson(serde_json::json!({
                "generationConfig": { "temperature": 0.8, "topP": 0.95, "topK": 40 }
            })))
            .with_status(200)
            .with_body(text_response("hola"))
            .create();

        client_for(&server).generate(&free_text_spec()).unwrap();
        mock.assert();

        // The free-text body must not carry a structured-output contract.
        let body = serde_json::to_value(build_request(&free_text_spec())).unwrap();
        assert!(body["generationConfig"].get("responseSchema").is_none());
        assert!(body["generationConfig"].get("responseMimeType").is_none());
    }

    #[test]
    fn whitespace_only_text_is_empty_response() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(200)
            .with_body(text_response("   "))
            .create();

        let result = client_for(&server).generate(&free_text_spec());
        assert!(matches!(result, Err(AppError::EmptyResponse)));
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create();

        let result = client_for(&server).generate(&free_text_spec());
        assert!(matches!(result, Err(AppError::EmptyResponse)));
    }

    #[test]
    fn structured_success_parses_proposal() {
        let proposal_json = r#"{
            "problema": "P",
            "usuariosAfectados": "U",
            "solucionPropuesta": "S",
            "funcionalidadesClave": ["a", "b", "c"],
            "beneficiosEsperados": "B",
            "impactoPotencial": "I"
        }"#;
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", GENERATE_PATH)
            .match_body(Matcher::PartialJson(serde_json::json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .with_status(200)
            .with_body(text_response(proposal_json))
            .create();

        let result = client_for(&server).generate(&structured_spec()).unwrap();
        match result {
            GeneratedPrompt::AppProposal(proposal) => {
                assert_eq!(proposal.problema, "P");
                assert_eq!(proposal.funcionalidades_clave, vec!["a", "b", "c"]);
                assert_eq!(proposal.impacto_potencial, "I");
            }
            GeneratedPrompt::PlainText(_) => panic!("expected structured proposal"),
        }
        mock.assert();
    }

    #[test]
    fn structured_non_json_is_malformed_response() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(200)
            .with_body(text_response("no es json"))
            .create();

        let result = client_for(&server).generate(&structured_spec());
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn structured_missing_field_is_malformed_response() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(200)
            .with_body(text_response(r#"{"problema": "P"}"#))
            .create();

        let result = client_for(&server).generate(&structured_spec());
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn structured_empty_text_is_empty_response() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(200)
            .with_body(text_response(""))
            .create();

        let result = client_for(&server).generate(&structured_spec());
        assert!(matches!(result, Err(AppError::EmptyResponse)));
    }

    #[test]
    fn service_error_message_is_passed_through() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(500)
            .with_body(r#"{"error": {"message": "timeout"}}"#)
            .create();

        let result = client_for(&server).generate(&free_text_spec());
        match result {
            Err(AppError::Upstream(message)) => assert!(message.contains("timeout")),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn service_error_without_message_is_unknown() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", GENERATE_PATH).with_status(503).with_body("oops").create();

        let result = client_for(&server).generate(&free_text_spec());
        assert!(matches!(result, Err(AppError::Unknown)));
    }

    #[test]
    fn single_call_per_invocation() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", GENERATE_PATH)
            .with_status(500)
            .with_body(r#"{"error": {"message": "quota"}}"#)
            .expect(1)
            .create();

        let _ = client_for(&server).generate(&free_text_spec());
        mock.assert();
    }
}
