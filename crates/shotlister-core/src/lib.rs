//! Shotlister Core - Foundation types for shot list generation
//!
//! This crate provides the fundamental types used throughout shotlister:
//! - Non-drop-frame timecodes and their frame/second conversions
//! - Rational frame rates with NTSC-aware nominal fps
//! - Exact rational time values for frame-accurate seeking
//! - The shared error type

pub mod error;
pub mod time;

pub use error::{Result, ShotlisterError};
pub use time::{FrameRate, RationalTime, Timecode};
