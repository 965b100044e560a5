use thiserror::Error;

#[derive(Error, Debug)]
pub enum LektioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid object path: {0}")]
    InvalidPath(String),

    #[error("Transcription error: {0}")]
    Transcribe(String),

    #[error("Transcription timed out after {0}s")]
    Timeout(u64),

    #[error("Transcription produced an empty transcript")]
    EmptyTranscript,

    #[error("Report generation error: {0}")]
    Generate(String),

    #[error("Report generation produced an empty report")]
    EmptyReport,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LektioError>;
