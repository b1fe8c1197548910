//! Shotlister Media - FFmpeg integration
//!
//! This crate shells out to ffprobe/ffmpeg (resolved through
//! ffmpeg-sidecar, which falls back to a downloaded static build when
//! no system installation exists) for the two media operations the
//! pipeline needs:
//! - Probing a video's rational frame rate
//! - Capturing a single thumbnail frame at a given position

pub mod capture;
pub mod probe;

pub use capture::{CaptureJob, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use probe::probe_frame_rate;

use shotlister_core::{Result, ShotlisterError};

/// Ensure an FFmpeg installation is available. Call once at startup.
///
/// When no system FFmpeg is found, downloads a static build into the
/// sidecar directory so first runs work on a bare machine.
pub fn init() -> Result<()> {
    if !ffmpeg_sidecar::command::ffmpeg_is_installed() {
        tracing::info!("No FFmpeg installation found, downloading a static build");
        ffmpeg_sidecar::download::auto_download()
            .map_err(|e| ShotlisterError::FfmpegUnavailable(e.to_string()))?;
    }
    Ok(())
}
