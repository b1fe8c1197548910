//! Shot records and the CSV shot list.

use serde::{Deserialize, Serialize};
use shotlister_core::{Result, Timecode};
use std::path::{Path, PathBuf};

/// Header row of the serialized shot list.
pub const CSV_HEADER: &str =
    "Shot Number,Clip Name,Source In,Source Out,Program In,Program Out";

/// Subdirectory of the output root that receives generated files.
pub const SHOTLIST_DIR: &str = "shotlist";

/// One parsed EDL event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Edit number as it appeared in the EDL; kept as text so padding
    /// and non-numeric identifiers survive.
    pub shot_number: String,
    /// Clip name from the closing comment line.
    pub clip_name: String,
    pub source_in: Timecode,
    pub source_out: Timecode,
    pub program_in: Timecode,
    pub program_out: Timecode,
}

/// Ordered collection of shot records, in EDL appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotList {
    records: Vec<ShotRecord>,
}

impl ShotList {
    pub fn new(records: Vec<ShotRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ShotRecord] {
        &self.records
    }

    /// Render the list as CSV: header row plus one row per record, in
    /// list order, with RFC 4180 quoting where a field needs it.
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(64 * (self.records.len() + 1));
        out.push_str(CSV_HEADER);
        out.push('\n');
        for record in &self.records {
            out.push_str(&csv_field(&record.shot_number));
            out.push(',');
            out.push_str(&csv_field(&record.clip_name));
            for tc in [
                record.source_in,
                record.source_out,
                record.program_in,
                record.program_out,
            ] {
                out.push(',');
                out.push_str(&tc.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Path the CSV lands at for a given EDL and output root:
    /// `<output_dir>/shotlist/<edl_basename>_shotlist.csv`.
    pub fn csv_path(edl_path: &Path, output_dir: &Path) -> PathBuf {
        let stem = edl_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "edl".to_string());
        output_dir
            .join(SHOTLIST_DIR)
            .join(format!("{}_shotlist.csv", stem))
    }

    /// Write the CSV under `<output_dir>/shotlist/`, creating the
    /// directory if absent. Returns the path written.
    pub fn write_csv(&self, edl_path: &Path, output_dir: &Path) -> Result<PathBuf> {
        let path = Self::csv_path(edl_path, output_dir);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.to_csv())?;
        Ok(path)
    }
}

impl From<Vec<ShotRecord>> for ShotList {
    fn from(records: Vec<ShotRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a ShotList {
    type Item = &'a ShotRecord;
    type IntoIter = std::slice::Iter<'a, ShotRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
