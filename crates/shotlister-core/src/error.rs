//! Error types for shotlister.

use thiserror::Error;

/// Main error type for shotlister operations.
#[derive(Error, Debug)]
pub enum ShotlisterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid timecode {value:?}: {reason}")]
    InvalidTimecode { value: String, reason: String },

    #[error("Frame count {frames} does not fit a timecode at {rate}")]
    FrameCountOutOfRange { frames: u64, rate: String },

    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(String),

    #[error("Malformed EDL entry at line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    #[error("Frame rate probe failed for {path}: {reason}")]
    ProbeFailure { path: String, reason: String },

    #[error("Frame capture failed for {output}: {reason}")]
    CaptureFailure { output: String, reason: String },

    #[error("FFmpeg unavailable: {0}")]
    FfmpegUnavailable(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for shotlister operations.
pub type Result<T> = std::result::Result<T, ShotlisterError>;
