//! Frame-rate probing via ffprobe.

use shotlister_core::{FrameRate, Result, ShotlisterError};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Arguments asking ffprobe for the primary video stream's rational
/// frame rate, printed bare on stdout.
pub fn ffprobe_args(video_path: &Path) -> Vec<String> {
    vec![
        "-v".into(),
        "error".into(),
        "-select_streams".into(),
        "v:0".into(),
        "-show_entries".into(),
        "stream=r_frame_rate".into(),
        "-of".into(),
        "default=noprint_wrappers=1:nokey=1".into(),
        video_path.to_string_lossy().into_owned(),
    ]
}

/// Probe the rational frame rate of the primary video stream.
pub fn probe_frame_rate(video_path: &Path) -> Result<FrameRate> {
    let args = ffprobe_args(video_path);
    debug!("Running ffprobe {}", args.join(" "));

    let output = Command::new(ffmpeg_sidecar::ffprobe::ffprobe_path())
        .args(&args)
        .output()
        .map_err(|e| probe_failure(video_path, format!("failed to spawn ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(probe_failure(
            video_path,
            format!("ffprobe exited with {}: {}", output.status, stderr.trim()),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_probe_output(&stdout).map_err(|e| probe_failure(video_path, e.to_string()))
}

/// Parse ffprobe's `r_frame_rate` output (e.g. `24000/1001`).
pub fn parse_probe_output(stdout: &str) -> Result<FrameRate> {
    let line = stdout.lines().next().map(str::trim).unwrap_or("");
    if line.is_empty() {
        return Err(ShotlisterError::InvalidFrameRate(
            "stream reported no frame rate".to_string(),
        ));
    }
    line.parse()
}

fn probe_failure(path: &Path, reason: String) -> ShotlisterError {
    ShotlisterError::ProbeFailure {
        path: path.display().to_string(),
        reason,
    }
}
