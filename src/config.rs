use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LektioError, Result};

// Default values for transcription polling
fn default_poll_interval_secs() -> u64 {
    10
}

fn default_transcribe_timeout_secs() -> u64 {
    900
}

fn default_generate_timeout_secs() -> u64 {
    300
}

fn default_storage_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Cloud project id
    pub project_id: String,
    /// Region for the Vertex AI endpoint
    pub location: String,
    /// Bucket receiving generated feedback reports
    pub reports_bucket: String,
    pub transcribe: TranscribeConfig,
    pub generate: GenerateConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribeConfig {
    /// Speech-to-Text API endpoint
    pub endpoint: String,
    /// Audio encoding of the uploaded videos
    pub encoding: String,
    /// Sample rate in hertz
    pub sample_rate_hertz: u32,
    /// Recognition language code
    pub language_code: String,
    /// Insert punctuation into the transcript
    pub enable_automatic_punctuation: bool,
    /// Use the enhanced model variant
    pub use_enhanced: bool,
    /// Recognition model tuned for the source material
    pub model: String,
    /// Upper bound on the long-running recognize wait
    #[serde(default = "default_transcribe_timeout_secs")]
    pub timeout_secs: u64,
    /// Interval between operation status polls
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Static bearer token; credential rotation is out of scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Vertex AI API endpoint
    pub endpoint: String,
    /// Generative model name
    pub model: String,
    /// Request timeout for the generation call
    #[serde(default = "default_generate_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Cloud Storage API endpoint
    pub endpoint: String,
    /// Request timeout for object writes
    #[serde(default = "default_storage_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_id: "esl-feedback-agent".to_string(),
            location: "us-central1".to_string(),
            reports_bucket: "esl-feedback-reports".to_string(),
            transcribe: TranscribeConfig {
                endpoint: "https://speech.googleapis.com".to_string(),
                encoding: "MP4".to_string(),
                sample_rate_hertz: 16000,
                language_code: "en-US".to_string(),
                enable_automatic_punctuation: true,
                use_enhanced: true,
                model: "video".to_string(),
                timeout_secs: 900,
                poll_interval_secs: 10,
                auth_token: None,
            },
            generate: GenerateConfig {
                endpoint: "https://us-central1-aiplatform.googleapis.com".to_string(),
                model: "gemini-1.5-flash-001".to_string(),
                timeout_secs: 300,
                auth_token: None,
            },
            storage: StorageConfig {
                endpoint: "https://storage.googleapis.com".to_string(),
                timeout_secs: 120,
                auth_token: None,
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LektioError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| LektioError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LektioError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| LektioError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
