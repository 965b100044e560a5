// Modular transcription architecture
//
// This module provides speech-to-text implementations through a factory pattern:
// - Google: Cloud Speech-to-Text long-running recognition over REST
//
// To add a new transcription service:
// 1. Create service-specific data structures for parsing JSON
// 2. Implement the Transcriber trait for your service
// 3. Add the service to TranscriberImplementation enum
// 4. Update the factory to create your implementation

pub mod google;

use async_trait::async_trait;

use crate::config::TranscribeConfig;
use crate::error::Result;

/// Main trait for transcription operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the object at `uri` and return the newline-joined
    /// transcript of the recognized segments
    async fn transcribe(&self, uri: &str) -> Result<String>;
}

/// Transcriber implementation type
#[derive(Debug, Clone)]
pub enum TranscriberImplementation {
    Google,
    // Future implementations can be added here:
    // AssemblyAI,
    // Azure,
}

/// Factory for creating transcriber instances
pub struct TranscriberFactory;

impl TranscriberFactory {
    /// Create a transcriber based on implementation type
    pub fn create_transcriber(
        implementation: TranscriberImplementation,
        config: TranscribeConfig,
    ) -> Box<dyn Transcriber> {
        match implementation {
            TranscriberImplementation::Google => {
                Box::new(google::GoogleSpeechTranscriber::new(config))
            }
        }
    }

    /// Create with the default implementation
    pub fn create_default(config: TranscribeConfig) -> Box<dyn Transcriber> {
        Self::create_transcriber(TranscriberImplementation::Google, config)
    }
}
