// Vertex AI generateContent implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::prompt::build_coaching_prompt;
use super::ReportGenerator;
use crate::config::GenerateConfig;
use crate::error::{LektioError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Concatenate the part texts of the first candidate
pub fn extract_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Vertex AI implementation
pub struct VertexGenerator {
    client: Client,
    project_id: String,
    location: String,
    config: GenerateConfig,
}

impl VertexGenerator {
    pub fn new(project_id: String, location: String, config: GenerateConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client creation should not fail");

        Self {
            client,
            project_id,
            location,
            config,
        }
    }

    fn model_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.config.endpoint, self.project_id, self.location, self.config.model
        )
    }
}

#[async_trait]
impl ReportGenerator for VertexGenerator {
    async fn generate(&self, transcript: &str) -> Result<String> {
        let prompt = build_coaching_prompt(transcript);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = self.model_url();
        debug!("Sending generation request to: {}", url);

        let mut builder = self.client.post(&url).json(&request);
        if let Some(token) = &self.config.auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LektioError::Generate(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LektioError::Generate(format!(
                "Vertex AI error {}: {}",
                status, error_text
            )));
        }

        let generation: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LektioError::Generate(format!("Failed to parse response: {}", e)))?;

        let report = extract_text(&generation);
        if report.trim().is_empty() {
            return Err(LektioError::EmptyReport);
        }

        info!("Generated feedback report: {} chars", report.len());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r###"{
                "candidates": [
                    {
                        "content": {
                            "role": "model",
                            "parts": [
                                {"text": "## Strengths\n"},
                                {"text": "- Clear instructions\n"}
                            ]
                        }
                    },
                    {
                        "content": {
                            "role": "model",
                            "parts": [{"text": "ignored second candidate"}]
                        }
                    }
                ]
            }"###,
        )
        .unwrap();

        assert_eq!(extract_text(&response), "## Strengths\n- Clear instructions\n");
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_text(&response), "");
    }

    #[test]
    fn test_extract_text_candidate_without_content() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert_eq!(extract_text(&response), "");
    }

    #[test]
    fn test_model_url() {
        let generator = VertexGenerator::new(
            "esl-feedback-agent".to_string(),
            "us-central1".to_string(),
            GenerateConfig {
                endpoint: "https://us-central1-aiplatform.googleapis.com".to_string(),
                model: "gemini-1.5-flash-001".to_string(),
                timeout_secs: 300,
                auth_token: None,
            },
        );

        assert_eq!(
            generator.model_url(),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/esl-feedback-agent/locations/us-central1/publishers/google/models/gemini-1.5-flash-001:generateContent"
        );
    }
}
