use serde::Deserialize;

use crate::error::{LektioError, Result};

/// Expected prefix for uploaded lesson videos
pub const UPLOADS_PREFIX: &str = "uploads";

/// Object-creation notification emitted by the storage system
#[derive(Debug, Clone, Deserialize)]
pub struct UploadEvent {
    /// Bucket the object was uploaded to
    pub bucket: String,
    /// Object path within the bucket
    pub name: String,
}

impl UploadEvent {
    /// Storage URI of the uploaded object
    pub fn uri(&self) -> String {
        format!("gs://{}/{}", self.bucket, self.name)
    }
}

/// Decomposed upload path `uploads/<userId>/<fileName>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    pub user_id: String,
    pub file_name: String,
}

impl ParsedPath {
    /// Parse `uploads/<userId>/<fileName>` into its components.
    ///
    /// Paths with extra separators are rejected rather than truncated: a
    /// file name containing `/` would otherwise lose its tail and collide
    /// with another upload's report destination.
    pub fn parse(object_path: &str) -> Result<Self> {
        let segments: Vec<&str> = object_path.split('/').collect();

        if segments.len() < 3 {
            return Err(LektioError::InvalidPath(format!(
                "expected uploads/<userId>/<fileName>, got '{}'",
                object_path
            )));
        }

        if segments[0] != UPLOADS_PREFIX {
            return Err(LektioError::InvalidPath(format!(
                "path does not start with '{}/': '{}'",
                UPLOADS_PREFIX, object_path
            )));
        }

        if segments.len() > 3 {
            return Err(LektioError::InvalidPath(format!(
                "too many path segments in '{}'",
                object_path
            )));
        }

        if segments[1].is_empty() || segments[2].is_empty() {
            return Err(LektioError::InvalidPath(format!(
                "empty userId or fileName in '{}'",
                object_path
            )));
        }

        Ok(Self {
            user_id: segments[1].to_string(),
            file_name: segments[2].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_path() {
        let parsed = ParsedPath::parse("uploads/u42/lesson1.mp4").unwrap();
        assert_eq!(parsed.user_id, "u42");
        assert_eq!(parsed.file_name, "lesson1.mp4");
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert!(ParsedPath::parse("videos/u42/lesson1.mp4").is_err());
    }

    #[test]
    fn test_parse_rejects_too_few_segments() {
        assert!(ParsedPath::parse("lesson1.mp4").is_err());
        assert!(ParsedPath::parse("uploads/lesson1.mp4").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_segments() {
        assert!(ParsedPath::parse("uploads/u42/nested/lesson1.mp4").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_components() {
        assert!(ParsedPath::parse("uploads//lesson1.mp4").is_err());
        assert!(ParsedPath::parse("uploads/u42/").is_err());
    }

    #[test]
    fn test_event_uri() {
        let event = UploadEvent {
            bucket: "esl-videos".to_string(),
            name: "uploads/u42/lesson1.mp4".to_string(),
        };
        assert_eq!(event.uri(), "gs://esl-videos/uploads/u42/lesson1.mp4");
    }

    #[test]
    fn test_event_deserializes_notification_payload() {
        let payload = r#"{"bucket": "esl-videos", "name": "uploads/u42/lesson1.mp4", "contentType": "video/mp4"}"#;
        let event: UploadEvent = serde_json::from_str(payload).unwrap();
        assert_eq!(event.bucket, "esl-videos");
        assert_eq!(event.name, "uploads/u42/lesson1.mp4");
    }
}
