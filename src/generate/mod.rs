// Modular report generation architecture
//
// This module provides generative-model implementations through a factory
// pattern:
// - Vertex: Vertex AI generateContent over REST

pub mod prompt;
pub mod vertex;

use async_trait::async_trait;

use crate::config::GenerateConfig;
use crate::error::Result;

/// Main trait for feedback report generation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Generate a Markdown coaching report from a lesson transcript
    async fn generate(&self, transcript: &str) -> Result<String>;
}

/// Generator implementation type
#[derive(Debug, Clone)]
pub enum GeneratorImplementation {
    Vertex,
    // Future implementations can be added here:
    // Ollama,
    // OpenAI,
}

/// Factory for creating generator instances
pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Create a generator based on implementation type
    pub fn create_generator(
        implementation: GeneratorImplementation,
        project_id: String,
        location: String,
        config: GenerateConfig,
    ) -> Box<dyn ReportGenerator> {
        match implementation {
            GeneratorImplementation::Vertex => {
                Box::new(vertex::VertexGenerator::new(project_id, location, config))
            }
        }
    }

    /// Create with the default implementation
    pub fn create_default(
        project_id: String,
        location: String,
        config: GenerateConfig,
    ) -> Box<dyn ReportGenerator> {
        Self::create_generator(GeneratorImplementation::Vertex, project_id, location, config)
    }
}
