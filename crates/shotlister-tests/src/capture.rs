//! End-to-end tests: parsed shots in, capture plans and ffmpeg commands out.

use shotlister_app::{plan_capture_tasks, CaptureRole, RunConfig};
use shotlister_core::{FrameRate, RationalTime};
use shotlister_edl::{parse_edl, EntrySchema, ShotList};
use shotlister_media::CaptureJob;
use std::path::Path;

// ── Helpers ──────────────────────────────────────────────────────────────

const PROMO_EDL: &str = "\
TITLE: PROMO_CUT_V3
FCM: NON-DROP FRAME

001  AX       V     C        01:00:00:00 01:00:10:00 10:00:00:00 10:00:10:00
* FROM CLIP NAME: TEST_CLIP

002  AX       V     C        02:00:00:00 02:00:05:00 10:00:10:00 10:00:15:03
* FROM CLIP NAME: Beach Sunset.mov
";

fn promo_shots() -> ShotList {
    parse_edl(PROMO_EDL, &EntrySchema::default()).unwrap()
}

// ── Capture planning ─────────────────────────────────────────────────────

#[test]
fn planning_yields_two_tasks_per_shot_in_order() {
    let tasks =
        plan_capture_tasks(&promo_shots(), FrameRate::FPS_25, Path::new("shots")).unwrap();
    assert_eq!(tasks.len(), 4);

    let roles: Vec<CaptureRole> = tasks.iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![
            CaptureRole::In,
            CaptureRole::Out,
            CaptureRole::In,
            CaptureRole::Out
        ]
    );
    assert_eq!(tasks[0].shot_number, "001");
    assert_eq!(tasks[2].shot_number, "002");
}

#[test]
fn screenshot_names_are_deterministic_and_sanitized() {
    let tasks =
        plan_capture_tasks(&promo_shots(), FrameRate::FPS_25, Path::new("shots")).unwrap();
    let names: Vec<String> = tasks
        .iter()
        .map(|t| t.output_path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "Shot001_In_TEST_CLIP.png",
            "Shot001_Out_TEST_CLIP.png",
            "Shot002_In_Beach_Sunset_mov.png",
            "Shot002_Out_Beach_Sunset_mov.png",
        ]
    );
}

#[test]
fn out_points_follow_the_boundary_rule() {
    let tasks =
        plan_capture_tasks(&promo_shots(), FrameRate::FPS_25, Path::new("shots")).unwrap();
    // 10:00:10:00 sits on a whole-second boundary at 25 fps
    assert_eq!(tasks[1].timecode.to_string(), "10:00:10:00");
    // 10:00:15:03 does not, so it pulls back one frame
    assert_eq!(tasks[3].timecode.to_string(), "10:00:15:02");
}

#[test]
fn ntsc_rates_adjust_with_nominal_frame_arithmetic() {
    let text = "\
001  AX  V  C  01:00:00:00 01:00:00:13 10:00:00:00 10:00:00:13
* FROM CLIP NAME: NTSC
";
    let list = parse_edl(text, &EntrySchema::default()).unwrap();
    let tasks =
        plan_capture_tasks(&list, FrameRate::FPS_23_976, Path::new("shots")).unwrap();
    assert_eq!(tasks[1].timecode.to_string(), "10:00:00:12");

    // the seek position keeps the true rational rate
    let position = tasks[1]
        .timecode
        .to_seconds(FrameRate::FPS_23_976)
        .unwrap();
    assert_eq!(position, RationalTime::new(36_000 * 2_000 + 1_001, 2_000));
}

#[test]
fn replanning_is_deterministic() {
    let list = promo_shots();
    let first = plan_capture_tasks(&list, FrameRate::FPS_25, Path::new("shots")).unwrap();
    let second = plan_capture_tasks(&list, FrameRate::FPS_25, Path::new("shots")).unwrap();
    assert_eq!(first, second);
}

// ── FFmpeg command assembly ──────────────────────────────────────────────

#[test]
fn a_planned_task_renders_the_full_ffmpeg_command() {
    let tasks =
        plan_capture_tasks(&promo_shots(), FrameRate::FPS_25, Path::new("shots")).unwrap();
    let position = tasks[0].timecode.to_seconds(FrameRate::FPS_25).unwrap();
    let job = CaptureJob::new("master.mov", position, &tasks[0].output_path);

    let args = job.ffmpeg_args();
    assert_eq!(args[0], "-y");
    assert_eq!(args[1], "-ss");
    assert_eq!(args[2], "36000");
    assert_eq!(args[3], "-i");
    assert_eq!(args[4], "master.mov");
    assert!(args.contains(&"scale=203:120".to_string()));
    assert!(args.last().unwrap().ends_with("Shot001_In_TEST_CLIP.png"));
}

// ── Run configuration ────────────────────────────────────────────────────

#[test]
fn config_validation_requires_both_inputs_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let edl = dir.path().join("cut.edl");
    let video = dir.path().join("master.mov");
    std::fs::write(&edl, PROMO_EDL).unwrap();
    std::fs::write(&video, "").unwrap();

    let config = RunConfig {
        edl_path: edl,
        video_path: video,
        output_dir: dir.path().join("out"),
        frame_rate: Some(FrameRate::FPS_25),
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.resolve_frame_rate().unwrap(), FrameRate::FPS_25);

    let broken = RunConfig {
        video_path: dir.path().join("missing.mov"),
        ..config
    };
    assert!(broken.validate().is_err());
}
