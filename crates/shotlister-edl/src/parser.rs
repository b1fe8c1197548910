//! Line-oriented EDL parser.
//!
//! Tokens accumulate across physical lines until a clip-name comment
//! closes the entry, so events wrapped over several lines parse the
//! same as single-line events. Only the dialect subset described by
//! [`EntrySchema`] is recognized.

use crate::schema::EntrySchema;
use crate::shotlist::{ShotList, ShotRecord};
use shotlister_core::{Result, ShotlisterError, Timecode};
use std::path::Path;

const TITLE_MARKER: &str = "TITLE:";
const FRAME_CODE_MODE_MARKER: &str = "FCM:";
const CLIP_NAME_MARKER: &str = "* FROM CLIP NAME:";

/// Parse EDL text into a shot list, in order of appearance.
///
/// Blank lines and `TITLE:`/`FCM:` headers are skipped. A
/// `* FROM CLIP NAME:` line closes the current entry with the text
/// after its first colon as the clip name; every other non-empty line
/// contributes whitespace tokens to the current entry. A token run left
/// open at end of input is dropped.
pub fn parse_edl(text: &str, schema: &EntrySchema) -> Result<ShotList> {
    let mut records = Vec::new();
    let mut tokens: Vec<&str> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty()
            || line.starts_with(TITLE_MARKER)
            || line.starts_with(FRAME_CODE_MODE_MARKER)
        {
            continue;
        }
        if let Some(rest) = line.strip_prefix(CLIP_NAME_MARKER) {
            records.push(finalize_entry(&tokens, rest.trim(), schema, index + 1)?);
            tokens.clear();
        } else {
            tokens.extend(line.split_whitespace());
        }
    }

    Ok(ShotList::new(records))
}

/// Read and parse an EDL file.
pub fn parse_edl_file(path: &Path, schema: &EntrySchema) -> Result<ShotList> {
    let text = std::fs::read_to_string(path)?;
    parse_edl(&text, schema)
}

fn finalize_entry(
    tokens: &[&str],
    clip_name: &str,
    schema: &EntrySchema,
    line: usize,
) -> Result<ShotRecord> {
    if tokens.len() < schema.min_tokens() {
        return Err(ShotlisterError::MalformedEntry {
            line,
            reason: format!(
                "entry has {} tokens, at least {} required",
                tokens.len(),
                schema.min_tokens()
            ),
        });
    }
    Ok(ShotRecord {
        shot_number: tokens[schema.shot_number].to_string(),
        clip_name: clip_name.to_string(),
        source_in: entry_timecode(tokens[schema.source_in], "source-in", line)?,
        source_out: entry_timecode(tokens[schema.source_out], "source-out", line)?,
        program_in: entry_timecode(tokens[schema.program_in], "program-in", line)?,
        program_out: entry_timecode(tokens[schema.program_out], "program-out", line)?,
    })
}

fn entry_timecode(token: &str, field: &str, line: usize) -> Result<Timecode> {
    token.parse().map_err(|e| ShotlisterError::MalformedEntry {
        line,
        reason: format!("bad {} timecode: {}", field, e),
    })
}
