//! Creative generation collaborators.
//!
//! Everything creative (palettes, logos, typography, brand voices, imagery
//! keywords) is produced by external services. This module holds the thin
//! clients for those services and the parsing contract that turns loosely
//! structured model output into typed responses. A collaborator failure is
//! always local to the step that asked; it never blocks navigation.

pub mod claude;
pub mod huemint;
pub mod responses;
pub mod unsplash;

pub use claude::ClaudeClient;
pub use huemint::{HuemintClient, PaletteRequest};
pub use unsplash::{InspirationImage, UnsplashClient};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from creative generation collaborators.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No credentials available for the service.
    #[error("{service} API key not set. Pass it to the constructor or set {env_var}.")]
    MissingCredentials {
        service: &'static str,
        env_var: &'static str,
    },

    /// Transport-level failure.
    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{service} returned status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// The response could not be parsed into the requested shape.
    #[error("malformed {service} response: {message}")]
    MalformedResponse {
        service: &'static str,
        message: String,
    },
}

/// Outcome of a structured prompt call.
///
/// Mirrors the collaborator contract: `success` plus optional typed data, the
/// raw model text, and an error message. Step components branch on `success`
/// and keep their "no suggestion yet" state otherwise.
#[derive(Debug, Clone)]
pub struct PromptResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub raw_response: Option<String>,
    pub error: Option<String>,
}

impl<T> PromptResult<T> {
    /// Successful result with parsed data and the raw text it came from.
    pub fn ok(data: T, raw_response: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            raw_response: Some(raw_response),
            error: None,
        }
    }

    /// Failed result carrying only an error message.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            raw_response: None,
            error: Some(error.into()),
        }
    }
}

/// Seam between prompt assembly and transport.
///
/// [`ClaudeClient`] is the production implementation; tests substitute a
/// canned backend.
#[async_trait]
pub trait BrandPromptModel: Send + Sync {
    /// Submit a fully built prompt and return the model's raw text.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("valid regex"));

/// Parse a structured model response according to its declared response format.
///
/// When the format requests JSON, the first top-level `{…}` object is extracted
/// from the raw text (models often wrap JSON in prose) and deserialized;
/// failure to find or parse it is a hard error, never a partial result. For
/// non-JSON formats the trimmed raw text is deserialized directly, which
/// succeeds for `String` targets.
pub fn parse_structured_response<T: DeserializeOwned>(
    raw: &str,
    response_format: &str,
    service: &'static str,
) -> Result<T, GenerationError> {
    let cleaned = raw.trim();

    if response_format.to_lowercase().contains("json") {
        let json_text = JSON_OBJECT
            .find(cleaned)
            .map(|m| m.as_str())
            .unwrap_or(cleaned);
        return serde_json::from_str(json_text).map_err(|e| GenerationError::MalformedResponse {
            service,
            message: format!("failed to parse JSON response: {e}"),
        });
    }

    serde_json::from_value(serde_json::Value::String(cleaned.to_string())).map_err(|e| {
        GenerationError::MalformedResponse {
            service,
            message: format!("failed to read plain-text response: {e}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Palette {
        colors: Vec<String>,
    }

    #[test]
    fn test_parse_extracts_first_json_object() {
        let raw = "Here is your palette:\n{\"colors\": [\"#112233\"]}\nEnjoy!";
        let parsed: Palette =
            parse_structured_response(raw, "Return a JSON object", "claude").unwrap();
        assert_eq!(parsed.colors, vec!["#112233"]);
    }

    #[test]
    fn test_parse_invalid_json_is_hard_error() {
        let raw = "{not valid json";
        let result: Result<Palette, _> =
            parse_structured_response(raw, "Return a JSON object", "claude");
        assert!(matches!(
            result,
            Err(GenerationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_parse_missing_json_is_hard_error() {
        let raw = "I could not produce a palette.";
        let result: Result<Palette, _> =
            parse_structured_response(raw, "Return a JSON object", "claude");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_plain_text_format() {
        let parsed: String =
            parse_structured_response("  a short summary  ", "plain prose", "claude").unwrap();
        assert_eq!(parsed, "a short summary");
    }

    #[test]
    fn test_prompt_result_constructors() {
        let ok = PromptResult::ok(1u32, "raw".to_string());
        assert!(ok.success);
        assert_eq!(ok.data, Some(1));
        let err: PromptResult<u32> = PromptResult::err("boom");
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("boom"));
    }
}
