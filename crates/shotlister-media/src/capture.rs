//! Single-frame capture via ffmpeg.
//!
//! One blocking ffmpeg invocation per job: seek, decode one frame,
//! scale it down to thumbnail size, write a PNG. Deterministic output
//! paths plus `-y` make re-runs overwrite rather than accumulate.

use serde::{Deserialize, Serialize};
use shotlister_core::{RationalTime, Result, ShotlisterError};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Default thumbnail width in pixels.
pub const DEFAULT_WIDTH: u32 = 203;
/// Default thumbnail height in pixels.
pub const DEFAULT_HEIGHT: u32 = 120;

/// A single frame-capture invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureJob {
    /// Source video file.
    pub video_path: PathBuf,
    /// Position to capture, in seconds.
    pub position: RationalTime,
    /// Image file to write.
    pub output_path: PathBuf,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl CaptureJob {
    /// Create a capture job at the default thumbnail size.
    pub fn new(
        video_path: impl Into<PathBuf>,
        position: RationalTime,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            video_path: video_path.into(),
            position,
            output_path: output_path.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Override the output size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Build the FFmpeg command arguments for this job.
    pub fn ffmpeg_args(&self) -> Vec<String> {
        vec![
            "-y".into(),
            "-ss".into(),
            format!("{}", self.position.to_seconds_f64()),
            "-i".into(),
            self.video_path.to_string_lossy().into_owned(),
            "-frames:v".into(),
            "1".into(),
            "-q:v".into(),
            "2".into(),
            "-vf".into(),
            format!("scale={}:{}", self.width, self.height),
            self.output_path.to_string_lossy().into_owned(),
        ]
    }

    /// Run the capture, blocking until FFmpeg exits.
    pub fn run(&self) -> Result<()> {
        let args = self.ffmpeg_args();
        debug!("Running ffmpeg {}", args.join(" "));

        let output = Command::new(ffmpeg_sidecar::paths::ffmpeg_path())
            .args(&args)
            .output()
            .map_err(|e| self.failure(format!("failed to spawn ffmpeg: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                last_stderr_line(&stderr)
            )));
        }
        Ok(())
    }

    fn failure(&self, reason: String) -> ShotlisterError {
        ShotlisterError::CaptureFailure {
            output: self.output_path.display().to_string(),
            reason,
        }
    }
}

/// FFmpeg prefixes stderr with banner lines; the last non-empty line
/// carries the actual failure.
fn last_stderr_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .trim()
        .to_string()
}
