//! The shot list pipeline: resolve the rate, parse, write the CSV,
//! plan captures, run them.
//!
//! Everything up to and including capture planning is fail-fast; the
//! capture loop itself is fail-soft, collecting one outcome per task so
//! a single bad frame never aborts the rest of the run.

use shotlister_core::{FrameRate, Result, ShotlisterError, Timecode};
use shotlister_edl::{parse_edl_file, EntrySchema, ShotList, ShotRecord, SHOTLIST_DIR};
use shotlister_media::{probe_frame_rate, CaptureJob};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Subdirectory of `shotlist/` that receives captured frames.
pub const SCREENSHOTS_DIR: &str = "screenshots";

/// Validated input for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// EDL file to parse.
    pub edl_path: PathBuf,
    /// Video the screenshots are captured from.
    pub video_path: PathBuf,
    /// Output root; generated files land under `<output_dir>/shotlist/`.
    pub output_dir: PathBuf,
    /// Frame rate override; probed from the video when `None`.
    pub frame_rate: Option<FrameRate>,
}

impl RunConfig {
    /// Check that both input files exist before any work starts.
    pub fn validate(&self) -> Result<()> {
        if !self.edl_path.is_file() {
            return Err(ShotlisterError::InvalidParameter(format!(
                "EDL file not found: {}",
                self.edl_path.display()
            )));
        }
        if !self.video_path.is_file() {
            return Err(ShotlisterError::InvalidParameter(format!(
                "video file not found: {}",
                self.video_path.display()
            )));
        }
        Ok(())
    }

    /// Resolve the frame rate, probing the video when no override is set.
    pub fn resolve_frame_rate(&self) -> Result<FrameRate> {
        match self.frame_rate {
            Some(rate) => Ok(rate),
            None => probe_frame_rate(&self.video_path),
        }
    }
}

/// Which boundary of a shot a capture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRole {
    In,
    Out,
}

impl fmt::Display for CaptureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "In"),
            Self::Out => write!(f, "Out"),
        }
    }
}

/// One planned frame capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTask {
    pub shot_number: String,
    pub clip_name: String,
    /// Position to capture; for `Out` roles this is already the
    /// adjusted out-point.
    pub timecode: Timecode,
    pub role: CaptureRole,
    pub output_path: PathBuf,
}

impl CaptureTask {
    /// Deterministic screenshot file name: `Shot<NN>_<Role>_<clean>.png`
    /// with the shot number zero-padded to at least two characters.
    pub fn file_name(shot_number: &str, role: CaptureRole, clip_name: &str) -> String {
        format!(
            "Shot{:0>2}_{}_{}.png",
            shot_number,
            role,
            sanitize_clip_name(clip_name)
        )
    }
}

/// Replace path-hostile characters (space, comma, period) in a clip
/// name with underscores, one for one.
pub fn sanitize_clip_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | ',' | '.' => '_',
            other => other,
        })
        .collect()
}

/// Plan both captures for every record, in shot order: the program-in
/// frame, then the adjusted program-out frame.
pub fn plan_capture_tasks(
    shot_list: &ShotList,
    rate: FrameRate,
    screenshots_dir: &Path,
) -> Result<Vec<CaptureTask>> {
    let mut tasks = Vec::with_capacity(shot_list.len() * 2);
    for record in shot_list {
        record.program_in.validate(rate)?;
        let out_point = record.program_out.adjust_out_point(rate)?;
        tasks.push(task_for(record, CaptureRole::In, record.program_in, screenshots_dir));
        tasks.push(task_for(record, CaptureRole::Out, out_point, screenshots_dir));
    }
    Ok(tasks)
}

fn task_for(
    record: &ShotRecord,
    role: CaptureRole,
    timecode: Timecode,
    dir: &Path,
) -> CaptureTask {
    CaptureTask {
        shot_number: record.shot_number.clone(),
        clip_name: record.clip_name.clone(),
        timecode,
        role,
        output_path: dir.join(CaptureTask::file_name(
            &record.shot_number,
            role,
            &record.clip_name,
        )),
    }
}

/// Result of attempting one capture.
#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    pub task: CaptureTask,
    /// `None` on success, otherwise the rendered error.
    pub error: Option<String>,
}

impl CaptureOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything one run produced; the final report is derived from this
/// alone.
#[derive(Debug)]
pub struct RunSummary {
    /// Frame rate the run used.
    pub frame_rate: FrameRate,
    /// Number of parsed shots.
    pub shot_count: usize,
    /// Path of the CSV written.
    pub csv_path: PathBuf,
    /// Per-capture outcomes, in task order.
    pub outcomes: Vec<CaptureOutcome>,
}

impl RunSummary {
    pub fn captures_succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn captures_failed(&self) -> usize {
        self.outcomes.len() - self.captures_succeeded()
    }
}

/// Run the full pipeline for a validated configuration.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;

    let rate = config.resolve_frame_rate()?;
    info!("Using frame rate {}", rate);

    let shot_list = parse_edl_file(&config.edl_path, &EntrySchema::default())?;
    info!(
        "Parsed {} shots from {}",
        shot_list.len(),
        config.edl_path.display()
    );

    let csv_path = shot_list.write_csv(&config.edl_path, &config.output_dir)?;
    info!("Shot list written to {}", csv_path.display());

    let screenshots_dir = config.output_dir.join(SHOTLIST_DIR).join(SCREENSHOTS_DIR);
    std::fs::create_dir_all(&screenshots_dir)?;

    let tasks = plan_capture_tasks(&shot_list, rate, &screenshots_dir)?;
    let outcomes = run_captures(&config.video_path, rate, tasks);

    Ok(RunSummary {
        frame_rate: rate,
        shot_count: shot_list.len(),
        csv_path,
        outcomes,
    })
}

/// Run every capture in order, collecting per-task outcomes instead of
/// aborting on the first failure.
fn run_captures(
    video_path: &Path,
    rate: FrameRate,
    tasks: Vec<CaptureTask>,
) -> Vec<CaptureOutcome> {
    let mut outcomes = Vec::with_capacity(tasks.len());
    for task in tasks {
        let result = capture_one(video_path, rate, &task);
        match &result {
            Ok(()) => info!(
                "Captured shot {} {} at {} -> {}",
                task.shot_number,
                task.role,
                task.timecode,
                task.output_path.display()
            ),
            Err(e) => warn!("Shot {} {} capture failed: {}", task.shot_number, task.role, e),
        }
        outcomes.push(CaptureOutcome {
            task,
            error: result.err().map(|e| e.to_string()),
        });
    }
    outcomes
}

fn capture_one(video_path: &Path, rate: FrameRate, task: &CaptureTask) -> Result<()> {
    let position = task.timecode.to_seconds(rate)?;
    CaptureJob::new(video_path, position, &task.output_path).run()
}
