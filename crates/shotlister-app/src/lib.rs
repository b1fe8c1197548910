//! Shotlister App - Pipeline behind the `shotlister` binary
//!
//! Exposed as a library so integration tests can drive the pipeline
//! without going through the CLI.

pub mod pipeline;

pub use pipeline::{
    plan_capture_tasks, sanitize_clip_name, CaptureOutcome, CaptureRole, CaptureTask,
    RunConfig, RunSummary, SCREENSHOTS_DIR,
};
