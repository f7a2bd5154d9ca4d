//! Anthropic-backed prompt model.
//!
//! Direct integration with the Anthropic Messages API via `reqwest`:
//! a single user message carrying the brand-strategist prompt, retry with
//! exponential backoff on 429/5xx, and text extraction from the `content[]`
//! block array. The prompt template embeds the full [`BrandDiscovery`]
//! context as JSON so every creative suggestion is grounded in the user's
//! answers.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::profile::BrandDiscovery;

use super::{parse_structured_response, BrandPromptModel, GenerationError, PromptResult};

/// Default model used for brand generation tasks.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default completion budget.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

const SERVICE: &str = "anthropic";

/// Anthropic Messages API client for brand generation prompts.
#[derive(Debug, Clone)]
pub struct ClaudeClient {
    /// Model name sent with every request.
    pub model: String,
    /// Maximum tokens in the completion.
    pub max_tokens: u32,
    /// Maximum number of retries on 429/5xx.
    pub max_retries: u32,
    /// Request timeout in seconds.
    pub timeout_secs: f64,
    api_key: Option<String>,
    base_url: String,
    anthropic_version: String,
}

impl ClaudeClient {
    /// Create a client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Optional API key (defaults to the `ANTHROPIC_API_KEY`
    ///   environment variable).
    /// * `base_url` - Optional custom base URL.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let api_key = api_key.or_else(|| std::env::var("ANTHROPIC_API_KEY").ok());
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            max_retries: 2,
            timeout_secs: 120.0,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.anthropic.com".to_string()),
            anthropic_version: "2023-06-01".to_string(),
        }
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the Messages API request body for a single-user-message prompt.
    pub fn build_request_body(&self, prompt: &str) -> Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        })
    }

    /// Concatenate the text blocks of a Messages API response.
    fn extract_text(response: &Value) -> Result<String, GenerationError> {
        let content = response
            .get("content")
            .and_then(|c| c.as_array())
            .ok_or_else(|| GenerationError::MalformedResponse {
                service: SERVICE,
                message: "no content array in response".to_string(),
            })?;

        let mut text_parts: Vec<&str> = Vec::new();
        for block in content {
            let block_type = block.get("type").and_then(|t| t.as_str()).unwrap_or("");
            if block_type == "text" {
                if let Some(text) = block.get("text").and_then(|t| t.as_str()) {
                    text_parts.push(text);
                }
            } else {
                log::debug!("ignoring Anthropic content block type: {}", block_type);
            }
        }

        Ok(text_parts.concat())
    }
}

#[async_trait]
impl BrandPromptModel for ClaudeClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key =
            self.api_key
                .as_deref()
                .ok_or(GenerationError::MissingCredentials {
                    service: "Anthropic",
                    env_var: "ANTHROPIC_API_KEY",
                })?;

        let body = self.build_request_body(prompt);
        let endpoint = format!("{}/v1/messages", self.base_url);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs_f64(self.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Transport {
                service: SERVICE,
                source: e,
            })?;

        let mut last_error: Option<GenerationError> = None;
        let mut retry_delay = Duration::from_secs(1);

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                log::warn!("Anthropic API retry attempt {} after {:?}", attempt, retry_delay);
                tokio::time::sleep(retry_delay).await;
                retry_delay *= 2;
            }

            let response = match client
                .post(&endpoint)
                .header("content-type", "application/json")
                .header("x-api-key", api_key)
                .header("anthropic-version", &self.anthropic_version)
                .json(&body)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    last_error = Some(GenerationError::Transport {
                        service: SERVICE,
                        source: e,
                    });
                    continue;
                }
            };

            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                if let Some(retry_after) = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                {
                    retry_delay = Duration::from_secs(retry_after);
                }
                last_error = Some(GenerationError::Status {
                    service: SERVICE,
                    status: status.as_u16(),
                    body: "rate limited".to_string(),
                });
                continue;
            }

            if status.is_server_error() {
                let text = response.text().await.unwrap_or_default();
                last_error = Some(GenerationError::Status {
                    service: SERVICE,
                    status: status.as_u16(),
                    body: text,
                });
                continue;
            }

            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(GenerationError::Status {
                    service: SERVICE,
                    status: status.as_u16(),
                    body: text,
                });
            }

            let parsed: Value =
                response
                    .json()
                    .await
                    .map_err(|e| GenerationError::Transport {
                        service: SERVICE,
                        source: e,
                    })?;

            return Self::extract_text(&parsed);
        }

        Err(last_error.unwrap_or(GenerationError::Status {
            service: SERVICE,
            status: 0,
            body: "request was never attempted".to_string(),
        }))
    }
}

/// Build the brand-strategist prompt: task instruction, response-format
/// requirements, and the full discovery context as JSON.
pub fn build_brand_prompt(
    instruction: &str,
    response_format: &str,
    discovery: &BrandDiscovery,
) -> String {
    let context = serde_json::to_string_pretty(discovery).unwrap_or_else(|_| "{}".to_string());
    format!(
        r#"
You are a professional brand strategist and designer. You will be provided with comprehensive brand discovery information about a company, and you need to complete a specific brand-related task.

BRAND CONTEXT:
{context}

TASK:
{instruction}

RESPONSE FORMAT REQUIREMENTS:
{response_format}

IMPORTANT INSTRUCTIONS:
1. Base all recommendations on the provided brand context
2. Ensure your response matches EXACTLY the specified format
3. If the format specifies JSON, return valid JSON only
4. Consider the company's industry, target audience, and brand values in your recommendations
5. Provide thoughtful, professional recommendations that align with the brand's identity
6. If any brand context is missing or unclear, make reasonable assumptions based on industry best practices

Please provide your response in the exact format specified above.
"#
    )
}

/// Run one generation task against a prompt model.
///
/// Transport and parse failures are folded into the returned
/// [`PromptResult`] so callers can branch on `success` without unwinding;
/// the raw model text is kept alongside parsed data for debugging.
pub async fn prompt_brand_task<T: DeserializeOwned>(
    model: &dyn BrandPromptModel,
    instruction: &str,
    response_format: &str,
    discovery: &BrandDiscovery,
) -> PromptResult<T> {
    let prompt = build_brand_prompt(instruction, response_format, discovery);

    let raw = match model.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("brand prompt failed: {}", e);
            return PromptResult::err(e.to_string());
        }
    };

    match parse_structured_response::<T>(&raw, response_format, SERVICE) {
        Ok(data) => PromptResult::ok(data, raw),
        Err(e) => {
            log::warn!("brand prompt returned unparseable data: {}", e);
            PromptResult::err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::responses::{ColorPaletteSuggestion, COLOR_PALETTE_PROMPT};

    struct CannedModel(Result<String, &'static str>);

    #[async_trait]
    impl BrandPromptModel for CannedModel {
        async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
            match &self.0 {
                Ok(raw) => Ok(raw.clone()),
                Err(message) => Err(GenerationError::MalformedResponse {
                    service: SERVICE,
                    message: message.to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_build_request_body() {
        let client = ClaudeClient::new(Some("test-key".to_string()), None);
        let body = client.build_request_body("hello");
        assert_eq!(body["model"], DEFAULT_MODEL);
        assert_eq!(body["max_tokens"], DEFAULT_MAX_TOKENS);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_prompt_embeds_context_and_task() {
        let mut discovery = BrandDiscovery::default();
        discovery.business_name = "Acme".to_string();
        let prompt = build_brand_prompt("Pick colors", "Return a JSON object", &discovery);
        assert!(prompt.contains("\"businessName\": \"Acme\""));
        assert!(prompt.contains("TASK:\nPick colors"));
        assert!(prompt.contains("Return a JSON object"));
    }

    #[test]
    fn test_extract_text_concatenates_blocks() {
        let response = serde_json::json!({
            "content": [
                {"type": "text", "text": "part one "},
                {"type": "tool_use", "id": "x"},
                {"type": "text", "text": "part two"}
            ]
        });
        assert_eq!(
            ClaudeClient::extract_text(&response).unwrap(),
            "part one part two"
        );
    }

    #[test]
    fn test_extract_text_requires_content_array() {
        let response = serde_json::json!({"error": "overloaded"});
        assert!(ClaudeClient::extract_text(&response).is_err());
    }

    #[test]
    fn test_missing_api_key() {
        let client = ClaudeClient {
            api_key: None,
            ..ClaudeClient::new(Some("x".to_string()), None)
        };
        let result = tokio_test::block_on(client.complete("hi"));
        assert!(matches!(
            result,
            Err(GenerationError::MissingCredentials { .. })
        ));
    }

    #[test]
    fn test_prompt_brand_task_success() {
        let model = CannedModel(Ok(
            "Sure!\n{\"colors\": [\"#111111\", \"#222222\"], \"description\": \"why\"}"
                .to_string(),
        ));
        let discovery = BrandDiscovery::default();
        let result: PromptResult<ColorPaletteSuggestion> = tokio_test::block_on(prompt_brand_task(
            &model,
            COLOR_PALETTE_PROMPT.instruction,
            COLOR_PALETTE_PROMPT.response_format,
            &discovery,
        ));
        assert!(result.success);
        assert_eq!(result.data.unwrap().colors.len(), 2);
        assert!(result.raw_response.unwrap().starts_with("Sure!"));
    }

    #[test]
    fn test_prompt_brand_task_parse_failure_is_not_partial() {
        let model = CannedModel(Ok("no json here".to_string()));
        let discovery = BrandDiscovery::default();
        let result: PromptResult<ColorPaletteSuggestion> = tokio_test::block_on(prompt_brand_task(
            &model,
            COLOR_PALETTE_PROMPT.instruction,
            COLOR_PALETTE_PROMPT.response_format,
            &discovery,
        ));
        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(result.error.is_some());
    }

    #[test]
    fn test_prompt_brand_task_transport_failure() {
        let model = CannedModel(Err("boom"));
        let discovery = BrandDiscovery::default();
        let result: PromptResult<ColorPaletteSuggestion> = tokio_test::block_on(prompt_brand_task(
            &model,
            COLOR_PALETTE_PROMPT.instruction,
            COLOR_PALETTE_PROMPT.response_format,
            &discovery,
        ));
        assert!(!result.success);
    }
}
