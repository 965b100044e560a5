use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{LektioError, Result};
use crate::event::{ParsedPath, UploadEvent};
use crate::generate::{GeneratorFactory, ReportGenerator};
use crate::storage::{report_destination, ObjectStore, ObjectStoreFactory};
use crate::transcribe::{Transcriber, TranscriberFactory};

/// Upload-triggered feedback pipeline.
///
/// One invocation handles one upload event: parse the object path,
/// transcribe the video, generate the coaching report, save it. Stages run
/// strictly in sequence and any failure aborts the remainder.
pub struct Pipeline {
    config: Config,
    transcriber: Box<dyn Transcriber>,
    generator: Box<dyn ReportGenerator>,
    store: Box<dyn ObjectStore>,
}

impl Pipeline {
    /// Create a pipeline backed by the live Google Cloud services
    pub fn new(config: Config) -> Self {
        let transcriber = TranscriberFactory::create_default(config.transcribe.clone());
        let generator = GeneratorFactory::create_default(
            config.project_id.clone(),
            config.location.clone(),
            config.generate.clone(),
        );
        let store = ObjectStoreFactory::create_default(config.storage.clone());

        Self::with_services(config, transcriber, generator, store)
    }

    /// Create a pipeline with injected service implementations
    pub fn with_services(
        config: Config,
        transcriber: Box<dyn Transcriber>,
        generator: Box<dyn ReportGenerator>,
        store: Box<dyn ObjectStore>,
    ) -> Self {
        Self {
            config,
            transcriber,
            generator,
            store,
        }
    }

    /// Handle one upload event, returning the report destination on success
    pub async fn handle_event(&self, event: &UploadEvent) -> Result<String> {
        let parsed = ParsedPath::parse(&event.name)?;

        let transcript = self.transcriber.transcribe(&event.uri()).await?;
        if transcript.trim().is_empty() {
            return Err(LektioError::EmptyTranscript);
        }
        info!(
            user_id = %parsed.user_id,
            file_name = %parsed.file_name,
            "Transcription completed"
        );

        let report = self.generator.generate(&transcript).await?;
        if report.trim().is_empty() {
            return Err(LektioError::EmptyReport);
        }
        info!(
            user_id = %parsed.user_id,
            file_name = %parsed.file_name,
            "Feedback report generated"
        );

        let destination = report_destination(&parsed.user_id, &parsed.file_name);
        self.store
            .put_text(&self.config.reports_bucket, &destination, &report)
            .await?;

        Ok(destination)
    }

    /// Handle one upload event without propagating failures.
    ///
    /// Malformed paths and service errors are logged and swallowed so the
    /// host never crash-loops on bad input. Returns the report destination
    /// when the pipeline completed.
    pub async fn run(&self, event: &UploadEvent) -> Option<String> {
        let invocation_id = Uuid::new_v4();
        info!(
            %invocation_id,
            bucket = %event.bucket,
            object = %event.name,
            "Processing upload"
        );

        match self.handle_event(event).await {
            Ok(destination) => {
                info!(
                    %invocation_id,
                    object = %event.name,
                    %destination,
                    "Process complete"
                );
                Some(destination)
            }
            Err(e) => {
                warn!(
                    %invocation_id,
                    object = %event.name,
                    error = %e,
                    "Aborting pipeline"
                );
                None
            }
        }
    }
}
