// Modular object storage architecture
//
// This module provides object store implementations through a factory
// pattern:
// - Gcs: Cloud Storage JSON media upload over REST

pub mod gcs;

use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::error::Result;

/// Prefix for generated feedback reports
pub const REPORTS_PREFIX: &str = "reports";

/// Main trait for object storage writes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` as a UTF-8 `text/plain` object at `key` in `bucket`,
    /// overwriting any existing object
    async fn put_text(&self, bucket: &str, key: &str, body: &str) -> Result<()>;
}

/// Compute the report destination for an upload.
///
/// Pure function of `(user_id, file_name)`; a second upload with the same
/// file name overwrites the prior report.
pub fn report_destination(user_id: &str, file_name: &str) -> String {
    format!(
        "{}/{}/feedback-for-{}.txt",
        REPORTS_PREFIX, user_id, file_name
    )
}

/// Object store implementation type
#[derive(Debug, Clone)]
pub enum ObjectStoreImplementation {
    Gcs,
    // Future implementations can be added here:
    // S3,
    // Local,
}

/// Factory for creating object store instances
pub struct ObjectStoreFactory;

impl ObjectStoreFactory {
    /// Create an object store based on implementation type
    pub fn create_store(
        implementation: ObjectStoreImplementation,
        config: StorageConfig,
    ) -> Box<dyn ObjectStore> {
        match implementation {
            ObjectStoreImplementation::Gcs => Box::new(gcs::GcsObjectStore::new(config)),
        }
    }

    /// Create with the default implementation
    pub fn create_default(config: StorageConfig) -> Box<dyn ObjectStore> {
        Self::create_store(ObjectStoreImplementation::Gcs, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_destination() {
        assert_eq!(
            report_destination("u42", "lesson1.mp4"),
            "reports/u42/feedback-for-lesson1.mp4.txt"
        );
    }

    #[test]
    fn test_report_destination_deterministic() {
        let first = report_destination("u42", "lesson1.mp4");
        let second = report_destination("u42", "lesson1.mp4");
        assert_eq!(first, second);
    }
}
