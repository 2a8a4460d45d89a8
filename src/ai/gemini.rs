//! Minimal client for the Gemini `generateContent` REST endpoint.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{AiConfig, SecureString};

use super::error::AiError;

/// `generateContent` request body.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One piece of content: text or inline binary data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Parts of the first candidate.
    pub fn parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// All text parts of the first candidate, concatenated.
    pub fn text(&self) -> String {
        self.parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// HTTP client bound to one API key.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: SecureString,
}

impl GeminiClient {
    pub fn new(config: &AiConfig, api_key: SecureString) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|e| AiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Send a single-turn user message made of `parts` to `model`.
    pub async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
    ) -> Result<GenerateContentResponse, AiError> {
        let url = self.endpoint(model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        tracing::debug!(url = %url, model = %model, "Sending generateContent request");

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Gemini API error"
            );

            return Err(AiError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| AiError::Parse(format!("Failed to parse response JSON: {}", e)))?;

        tracing::info!(
            model = %model,
            latency_ms,
            parts = parsed.parts().len(),
            "generateContent completed"
        );

        Ok(parsed)
    }

    /// Text-only convenience wrapper. Returns an empty string when the model
    /// produced no text.
    pub async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        let response = self.generate_content(model, vec![Part::text(prompt)]).await?;
        Ok(response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_in_gemini_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text("hello")],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_none());
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"Hello, "},{"text":"world"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.text(), "Hello, world");
    }

    #[test]
    fn response_without_candidates_is_empty() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.parts().is_empty());
        assert_eq!(response.text(), "");
    }

    #[test]
    fn parses_inline_data_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[
                {"text":"here you go"},
                {"inlineData":{"mimeType":"image/jpeg","data":"QUJD"}}
            ]}}]}"#,
        )
        .unwrap();
        let inline = response.parts()[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(inline.data, "QUJD");
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let config = AiConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..AiConfig::default()
        };
        let client = GeminiClient::new(&config, SecureString::new("k".to_string())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
