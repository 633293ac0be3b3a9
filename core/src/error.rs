use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort processing of a single track file.
///
/// Fixes dropped during ingestion (duplicate position, speed outlier,
/// out-of-order timestamp) are data cleaning, not errors, and never show up here.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("malformed track document: {0}")]
    Decode(String),

    #[error("track has no points")]
    EmptyTrack,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config parse at {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("file '{0}' has no valid route markers")]
    HtmlMarkup(PathBuf),

    #[error("directory '{0}' contains no track scripts")]
    NoTrackFiles(PathBuf),

    #[error("output path '{0}' is not a directory")]
    OutputNotDirectory(PathBuf),

    #[error("bad file pattern: {0}")]
    Pattern(String),

    #[error("metrics export failed: {0}")]
    Metrics(String),
}

pub type Result<T> = std::result::Result<T, TrackError>;

impl From<gpx::errors::GpxError> for TrackError {
    fn from(e: gpx::errors::GpxError) -> Self {
        TrackError::Decode(e.to_string())
    }
}

impl From<glob::PatternError> for TrackError {
    fn from(e: glob::PatternError) -> Self {
        TrackError::Pattern(e.to_string())
    }
}

impl From<glob::GlobError> for TrackError {
    fn from(e: glob::GlobError) -> Self {
        TrackError::Io(e.into())
    }
}
