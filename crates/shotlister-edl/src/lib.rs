//! Shotlister EDL - Parsing and shot list building
//!
//! This crate reads the CMX 3600-style EDL dialect produced by the
//! supported authoring tools and turns it into an ordered shot list:
//! - Schema-driven token extraction ([`EntrySchema`])
//! - The line-accumulating parser ([`parse_edl`], [`parse_edl_file`])
//! - [`ShotRecord`]/[`ShotList`] and CSV serialization

pub mod parser;
pub mod schema;
pub mod shotlist;

pub use parser::{parse_edl, parse_edl_file};
pub use schema::EntrySchema;
pub use shotlist::{ShotList, ShotRecord, CSV_HEADER, SHOTLIST_DIR};
