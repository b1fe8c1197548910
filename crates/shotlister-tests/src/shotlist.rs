//! End-to-end tests: EDL text in, shot list CSV out.

use shotlister_edl::{parse_edl, parse_edl_file, EntrySchema, ShotList, CSV_HEADER};

// ── Helpers ──────────────────────────────────────────────────────────────

const PROMO_EDL: &str = "\
TITLE: PROMO_CUT_V3
FCM: NON-DROP FRAME

001  AX       V     C        01:00:00:00 01:00:10:00 10:00:00:00 10:00:10:00
* FROM CLIP NAME: TEST_CLIP

002  AX       V     C        02:00:00:00 02:00:05:00 10:00:10:00 10:00:15:03
* FROM CLIP NAME: Beach Sunset.mov
";

fn parse(text: &str) -> ShotList {
    parse_edl(text, &EntrySchema::default()).unwrap()
}

// ── Parsing into records ─────────────────────────────────────────────────

#[test]
fn every_clip_name_marker_yields_one_record() {
    let list = parse(PROMO_EDL);
    assert_eq!(list.len(), 2);
    assert_eq!(list.records()[0].shot_number, "001");
    assert_eq!(list.records()[0].clip_name, "TEST_CLIP");
    assert_eq!(list.records()[1].shot_number, "002");
    assert_eq!(list.records()[1].clip_name, "Beach Sunset.mov");
}

#[test]
fn schema_window_fills_all_four_timecodes() {
    let list = parse(PROMO_EDL);
    let record = &list.records()[0];
    assert_eq!(record.source_in.to_string(), "01:00:00:00");
    assert_eq!(record.source_out.to_string(), "01:00:10:00");
    assert_eq!(record.program_in.to_string(), "10:00:00:00");
    assert_eq!(record.program_out.to_string(), "10:00:10:00");
}

#[test]
fn a_truncated_entry_aborts_the_whole_parse() {
    let text = "\
001  AX  V  C  01:00:00:00 01:00:10:00 10:00:00:00 10:00:10:00
* FROM CLIP NAME: GOOD
002  AX  V
* FROM CLIP NAME: TRUNCATED
";
    assert!(parse_edl(text, &EntrySchema::default()).is_err());
}

// ── CSV output ───────────────────────────────────────────────────────────

#[test]
fn two_records_serialize_to_three_csv_lines() {
    let csv = parse(PROMO_EDL).to_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(
        lines[1],
        "001,TEST_CLIP,01:00:00:00,01:00:10:00,10:00:00:00,10:00:10:00"
    );
    assert_eq!(
        lines[2],
        "002,Beach Sunset.mov,02:00:00:00,02:00:05:00,10:00:10:00,10:00:15:03"
    );
}

#[test]
fn csv_lands_under_the_shotlist_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    let edl_path = dir.path().join("promo_v3.edl");
    std::fs::write(&edl_path, PROMO_EDL).unwrap();

    let list = parse_edl_file(&edl_path, &EntrySchema::default()).unwrap();
    let csv_path = list.write_csv(&edl_path, dir.path()).unwrap();

    assert_eq!(
        csv_path,
        dir.path().join("shotlist").join("promo_v3_shotlist.csv")
    );
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(content, list.to_csv());
}

#[test]
fn rerunning_the_writer_overwrites_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let edl_path = dir.path().join("promo_v3.edl");
    std::fs::write(&edl_path, PROMO_EDL).unwrap();

    let list = parse_edl_file(&edl_path, &EntrySchema::default()).unwrap();
    let first = list.write_csv(&edl_path, dir.path()).unwrap();
    let second = list.write_csv(&edl_path, dir.path()).unwrap();
    assert_eq!(first, second);

    let shotlist_dir = dir.path().join("shotlist");
    let entries: Vec<_> = std::fs::read_dir(&shotlist_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn an_empty_edl_produces_a_header_only_csv() {
    let list = parse("TITLE: EMPTY\nFCM: NON-DROP FRAME\n");
    assert!(list.is_empty());
    assert_eq!(list.to_csv(), format!("{}\n", CSV_HEADER));
}
