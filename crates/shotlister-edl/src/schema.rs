//! Token-position schema for the supported EDL dialect.
//!
//! The CMX 3600-style event lines this tool reads lay their fields out
//! positionally: `<edit #> <reel> <channels> <transition> <source in>
//! <source out> <record in> <record out>`. The positions live in an
//! explicit schema value rather than inline indexing so a dialect
//! variant can swap them without touching the parser.

use serde::{Deserialize, Serialize};

/// Token indices for the fields of one EDL event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySchema {
    /// Index of the shot (edit) number token.
    pub shot_number: usize,
    /// Index of the source-in timecode token.
    pub source_in: usize,
    /// Index of the source-out timecode token.
    pub source_out: usize,
    /// Index of the program-in timecode token.
    pub program_in: usize,
    /// Index of the program-out timecode token.
    pub program_out: usize,
}

impl EntrySchema {
    /// Layout of the CMX 3600-style events the supported authoring
    /// tools produce.
    pub const fn cmx_3600() -> Self {
        Self {
            shot_number: 0,
            source_in: 4,
            source_out: 5,
            program_in: 6,
            program_out: 7,
        }
    }

    /// Smallest token count that makes every field addressable.
    pub fn min_tokens(&self) -> usize {
        let highest = self
            .shot_number
            .max(self.source_in)
            .max(self.source_out)
            .max(self.program_in)
            .max(self.program_out);
        highest + 1
    }
}

impl Default for EntrySchema {
    fn default() -> Self {
        Self::cmx_3600()
    }
}
