// Google Cloud Speech-to-Text implementation
//
// Uses the v1 REST surface: a longrunningrecognize request returns an
// operation name, which is polled until done or the configured timeout
// elapses. Only the top alternative of each recognized segment is kept.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Transcriber;
use crate::config::TranscribeConfig;
use crate::error::{LektioError, Result};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongRunningRecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: String,
    pub sample_rate_hertz: u32,
    pub language_code: String,
    pub enable_automatic_punctuation: bool,
    pub use_enhanced: bool,
    pub model: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecognitionAudio {
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    pub response: Option<LongRunningRecognizeResponse>,
    pub error: Option<OperationError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LongRunningRecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
    pub confidence: Option<f32>,
}

/// Join the top alternative of each segment with newlines, preserving
/// the order returned by the service
pub fn join_transcript(response: &LongRunningRecognizeResponse) -> String {
    response
        .results
        .iter()
        .filter_map(|result| result.alternatives.first())
        .map(|alternative| alternative.transcript.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cloud Speech-to-Text implementation
pub struct GoogleSpeechTranscriber {
    client: Client,
    config: TranscribeConfig,
}

impl GoogleSpeechTranscriber {
    pub fn new(config: TranscribeConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("HTTP client creation should not fail");

        Self { client, config }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Submit the long-running recognition job and return its operation name
    async fn start_recognition(&self, uri: &str) -> Result<String> {
        let request = LongRunningRecognizeRequest {
            config: RecognitionConfig {
                encoding: self.config.encoding.clone(),
                sample_rate_hertz: self.config.sample_rate_hertz,
                language_code: self.config.language_code.clone(),
                enable_automatic_punctuation: self.config.enable_automatic_punctuation,
                use_enhanced: self.config.use_enhanced,
                model: self.config.model.clone(),
            },
            audio: RecognitionAudio {
                uri: uri.to_string(),
            },
        };

        let url = format!("{}/v1/speech:longrunningrecognize", self.config.endpoint);
        debug!("Submitting recognition request to: {}", url);

        let response = self
            .apply_auth(self.client.post(&url).json(&request))
            .send()
            .await
            .map_err(|e| LektioError::Transcribe(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LektioError::Transcribe(format!(
                "Speech API error {}: {}",
                status, error_text
            )));
        }

        let operation: Operation = response
            .json()
            .await
            .map_err(|e| LektioError::Transcribe(format!("Failed to parse operation: {}", e)))?;

        Ok(operation.name)
    }

    /// Poll the operation until done, returning the recognition response
    async fn wait_for_operation(&self, name: &str) -> Result<LongRunningRecognizeResponse> {
        let url = format!("{}/v1/operations/{}", self.config.endpoint, name);
        let poll_interval = Duration::from_secs(self.config.poll_interval_secs);

        loop {
            let response = self
                .apply_auth(self.client.get(&url))
                .send()
                .await
                .map_err(|e| LektioError::Transcribe(format!("Poll request failed: {}", e)))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                return Err(LektioError::Transcribe(format!(
                    "Operation poll error {}: {}",
                    status, error_text
                )));
            }

            let operation: Operation = response.json().await.map_err(|e| {
                LektioError::Transcribe(format!("Failed to parse operation status: {}", e))
            })?;

            if let Some(error) = operation.error {
                return Err(LektioError::Transcribe(format!(
                    "Recognition failed with code {}: {}",
                    error.code, error.message
                )));
            }

            if operation.done {
                return Ok(operation.response.unwrap_or(LongRunningRecognizeResponse {
                    results: Vec::new(),
                }));
            }

            debug!("Operation {} still running", name);
            tokio::time::sleep(poll_interval).await;
        }
    }
}

#[async_trait]
impl Transcriber for GoogleSpeechTranscriber {
    async fn transcribe(&self, uri: &str) -> Result<String> {
        info!("Starting transcription of: {}", uri);

        let operation_name = self.start_recognition(uri).await?;
        info!("Waiting for transcription operation: {}", operation_name);

        let timeout = Duration::from_secs(self.config.timeout_secs);
        let response = tokio::time::timeout(timeout, self.wait_for_operation(&operation_name))
            .await
            .map_err(|_| LektioError::Timeout(self.config.timeout_secs))??;

        let transcript = join_transcript(&response);
        info!(
            "Transcription completed: {} segments, {} chars",
            response.results.len(),
            transcript.len()
        );

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_transcript_uses_top_alternative_in_order() {
        let response = LongRunningRecognizeResponse {
            results: vec![
                SpeechRecognitionResult {
                    alternatives: vec![
                        SpeechRecognitionAlternative {
                            transcript: "Hello class".to_string(),
                            confidence: Some(0.95),
                        },
                        SpeechRecognitionAlternative {
                            transcript: "Hello crass".to_string(),
                            confidence: Some(0.40),
                        },
                    ],
                },
                SpeechRecognitionResult {
                    alternatives: vec![SpeechRecognitionAlternative {
                        transcript: "Today we learn colors".to_string(),
                        confidence: Some(0.92),
                    }],
                },
            ],
        };

        assert_eq!(
            join_transcript(&response),
            "Hello class\nToday we learn colors"
        );
    }

    #[test]
    fn test_join_transcript_empty_results() {
        let response = LongRunningRecognizeResponse { results: vec![] };
        assert_eq!(join_transcript(&response), "");
    }

    #[test]
    fn test_join_transcript_skips_results_without_alternatives() {
        let response = LongRunningRecognizeResponse {
            results: vec![
                SpeechRecognitionResult {
                    alternatives: vec![],
                },
                SpeechRecognitionResult {
                    alternatives: vec![SpeechRecognitionAlternative {
                        transcript: "ok".to_string(),
                        confidence: None,
                    }],
                },
            ],
        };
        assert_eq!(join_transcript(&response), "ok");
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = LongRunningRecognizeRequest {
            config: RecognitionConfig {
                encoding: "MP4".to_string(),
                sample_rate_hertz: 16000,
                language_code: "en-US".to_string(),
                enable_automatic_punctuation: true,
                use_enhanced: true,
                model: "video".to_string(),
            },
            audio: RecognitionAudio {
                uri: "gs://esl-videos/uploads/u42/lesson1.mp4".to_string(),
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["config"]["sampleRateHertz"], 16000);
        assert_eq!(json["config"]["languageCode"], "en-US");
        assert_eq!(json["config"]["enableAutomaticPunctuation"], true);
        assert_eq!(json["config"]["useEnhanced"], true);
        assert_eq!(
            json["audio"]["uri"],
            "gs://esl-videos/uploads/u42/lesson1.mp4"
        );
    }

    #[test]
    fn test_operation_parses_pending_and_done() {
        let pending: Operation =
            serde_json::from_str(r#"{"name": "operations/123"}"#).unwrap();
        assert!(!pending.done);
        assert!(pending.response.is_none());

        let done: Operation = serde_json::from_str(
            r#"{
                "name": "operations/123",
                "done": true,
                "response": {
                    "results": [
                        {"alternatives": [{"transcript": "Hello class", "confidence": 0.95}]}
                    ]
                }
            }"#,
        )
        .unwrap();
        assert!(done.done);
        let response = done.response.unwrap();
        assert_eq!(response.results.len(), 1);
    }

    #[test]
    fn test_operation_parses_error_status() {
        let failed: Operation = serde_json::from_str(
            r#"{"name": "operations/123", "done": true, "error": {"code": 3, "message": "bad audio"}}"#,
        )
        .unwrap();
        let error = failed.error.unwrap();
        assert_eq!(error.code, 3);
        assert_eq!(error.message, "bad audio");
    }
}
