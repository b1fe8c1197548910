//! Timecode and frame-rate arithmetic.
//!
//! Frame math runs on integer frame counts with the rate's nominal
//! (whole-number) fps as the divisor, so timecode/frame round-trips are
//! exact even at NTSC rates. Real-time seconds keep the true rational
//! rate and only become floating point at the subprocess boundary.

use crate::error::{Result, ShotlisterError};
use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Frame rate as a rational number (e.g., 24000/1001 for 23.976 fps).
///
/// Both parts must be nonzero; the fallible constructors enforce this,
/// `new` relies on the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    pub numerator: u32,
    pub denominator: u32,
}

impl FrameRate {
    /// 23.976 fps (24000/1001) - NTSC film.
    pub const FPS_23_976: Self = Self::new(24000, 1001);
    /// 24 fps - cinema.
    pub const FPS_24: Self = Self::new(24, 1);
    /// 25 fps - PAL.
    pub const FPS_25: Self = Self::new(25, 1);
    /// 29.97 fps (30000/1001) - NTSC video.
    pub const FPS_29_97: Self = Self::new(30000, 1001);
    /// 30 fps.
    pub const FPS_30: Self = Self::new(30, 1);
    /// 50 fps - PAL high frame rate.
    pub const FPS_50: Self = Self::new(50, 1);
    /// 59.94 fps (60000/1001) - NTSC high frame rate.
    pub const FPS_59_94: Self = Self::new(60000, 1001);
    /// 60 fps.
    pub const FPS_60: Self = Self::new(60, 1);

    /// The standard broadcast/cinema rates, used to snap fps overrides.
    pub const STANDARD: [Self; 8] = [
        Self::FPS_23_976,
        Self::FPS_24,
        Self::FPS_25,
        Self::FPS_29_97,
        Self::FPS_30,
        Self::FPS_50,
        Self::FPS_59_94,
        Self::FPS_60,
    ];

    /// Create a new frame rate.
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Interpret a user-supplied fps value as a standard rational rate.
    ///
    /// Values near an NTSC rate (within 0.01) snap to it, so 23.976,
    /// 23.98, and 29.97 all resolve exactly; otherwise the value must be
    /// a whole number.
    pub fn from_fps(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(ShotlisterError::InvalidFrameRate(format!(
                "{} must be a positive number",
                fps
            )));
        }
        for standard in Self::STANDARD {
            if (fps - standard.to_fps_f64()).abs() < 0.01 {
                return Ok(standard);
            }
        }
        let rounded = fps.round();
        if (fps - rounded).abs() < 0.001 {
            return Ok(Self::new(rounded as u32, 1));
        }
        Err(ShotlisterError::InvalidFrameRate(format!(
            "{} is not a whole-number or NTSC rate",
            fps
        )))
    }

    /// Frames per second as floating point.
    #[inline]
    pub fn to_fps_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// The rate rounded to the nearest whole number of frames per
    /// second: the divisor for all frame-field arithmetic (24 for
    /// 23.976, 30 for 29.97).
    #[inline]
    pub fn nominal_fps(self) -> u32 {
        self.to_fps_f64().round() as u32
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_24
    }
}

impl FromStr for FrameRate {
    type Err = ShotlisterError;

    /// Parse `N/D` (ffprobe's `r_frame_rate` form) or a bare integer.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let (num_text, den_text) = match text.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (text, "1"),
        };
        let numerator: u32 = num_text.parse().map_err(|_| {
            ShotlisterError::InvalidFrameRate(format!("bad numerator in {:?}", text))
        })?;
        let denominator: u32 = den_text.parse().map_err(|_| {
            ShotlisterError::InvalidFrameRate(format!("bad denominator in {:?}", text))
        })?;
        if numerator == 0 || denominator == 0 {
            return Err(ShotlisterError::InvalidFrameRate(format!(
                "{:?} must be positive",
                text
            )));
        }
        Ok(Self::new(numerator, denominator))
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = self.to_fps_f64();
        if (fps - fps.round()).abs() < 0.001 {
            write!(f, "{} fps", fps.round() as u32)
        } else {
            write!(f, "{:.3} fps", fps)
        }
    }
}

/// A non-drop-frame `HH:MM:SS:FF` timecode.
///
/// Hours are unbounded (no 24-hour wrap); minutes and seconds are below
/// 60; the frames field is below the rate's nominal fps, checked by the
/// rate-aware operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timecode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Timecode {
    /// 00:00:00:00.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a timecode from its four fields.
    #[inline]
    pub const fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Check every field against its bound at the given rate.
    pub fn validate(&self, rate: FrameRate) -> Result<()> {
        if rate.numerator == 0 || rate.denominator == 0 {
            return Err(ShotlisterError::InvalidFrameRate(format!(
                "{}/{}",
                rate.numerator, rate.denominator
            )));
        }
        if self.minutes > 59 {
            return Err(self.invalid("minutes out of range"));
        }
        if self.seconds > 59 {
            return Err(self.invalid("seconds out of range"));
        }
        let nominal = rate.nominal_fps();
        if self.frames >= nominal {
            return Err(self.invalid(&format!(
                "frames field must be below {} at {}",
                nominal, rate
            )));
        }
        Ok(())
    }

    /// Absolute frame count at the given rate.
    pub fn to_frames(&self, rate: FrameRate) -> Result<u64> {
        self.validate(rate)?;
        let total_seconds =
            self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64;
        Ok(total_seconds * rate.nominal_fps() as u64 + self.frames as u64)
    }

    /// Timecode for an absolute frame count at the given rate.
    ///
    /// Fails only when the total spans more hours than the `u32` hours
    /// field can hold; every count produced by `to_frames` converts back.
    pub fn from_frames(total_frames: u64, rate: FrameRate) -> Result<Self> {
        let fps = rate.nominal_fps() as u64;
        if fps == 0 {
            return Err(ShotlisterError::InvalidFrameRate(format!(
                "{}/{}",
                rate.numerator, rate.denominator
            )));
        }
        let hours = u32::try_from(total_frames / (fps * 3600)).map_err(|_| {
            ShotlisterError::FrameCountOutOfRange {
                frames: total_frames,
                rate: rate.to_string(),
            }
        })?;
        Ok(Self {
            hours,
            minutes: ((total_frames / (fps * 60)) % 60) as u32,
            seconds: ((total_frames / fps) % 60) as u32,
            frames: (total_frames % fps) as u32,
        })
    }

    /// Exact position in seconds at the given rate.
    ///
    /// Uses the true rational rate for the frames fraction, so NTSC
    /// positions stay exact until rendered as floating point.
    pub fn to_seconds(&self, rate: FrameRate) -> Result<RationalTime> {
        self.validate(rate)?;
        let whole =
            self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64;
        let frac = Rational64::new(
            self.frames as i64 * rate.denominator as i64,
            rate.numerator as i64,
        );
        Ok(RationalTime {
            value: Rational64::from_integer(whole) + frac,
        })
    }

    /// Pull an exclusive out-point back onto its last included frame.
    ///
    /// An EDL's program-out timecode is one frame past the final frame
    /// of the shot unless it falls exactly on a whole-second (rate)
    /// boundary, in which case it is already the frame to show.
    pub fn adjust_out_point(&self, rate: FrameRate) -> Result<Self> {
        let total = self.to_frames(rate)?;
        if total % rate.nominal_fps() as u64 != 0 {
            Self::from_frames(total - 1, rate)
        } else {
            Ok(*self)
        }
    }

    fn invalid(&self, reason: &str) -> ShotlisterError {
        ShotlisterError::InvalidTimecode {
            value: self.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl FromStr for Timecode {
    type Err = ShotlisterError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.contains(';') {
            return Err(ShotlisterError::InvalidTimecode {
                value: text.to_string(),
                reason: "drop-frame timecode is not supported".to_string(),
            });
        }
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 4 {
            return Err(ShotlisterError::InvalidTimecode {
                value: text.to_string(),
                reason: "expected HH:MM:SS:FF".to_string(),
            });
        }
        let tc = Self::new(
            parse_component(text, parts[0], "hours")?,
            parse_component(text, parts[1], "minutes")?,
            parse_component(text, parts[2], "seconds")?,
            parse_component(text, parts[3], "frames")?,
        );
        if tc.minutes > 59 {
            return Err(tc.invalid("minutes out of range"));
        }
        if tc.seconds > 59 {
            return Err(tc.invalid("seconds out of range"));
        }
        Ok(tc)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

fn parse_component(value: &str, part: &str, name: &str) -> Result<u32> {
    part.parse().map_err(|_| ShotlisterError::InvalidTimecode {
        value: value.to_string(),
        reason: format!("invalid {} field {:?}", name, part),
    })
}

/// An exact time value in seconds, backed by a 64-bit rational.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RationalTime {
    value: Rational64,
}

impl RationalTime {
    /// Zero seconds.
    pub const ZERO: Self = Self {
        value: Rational64::new_raw(0, 1),
    };

    /// Create a time value of `numerator / denominator` seconds.
    #[inline]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            value: Rational64::new(numerator, denominator),
        }
    }

    /// Convert to floating-point seconds (for subprocess arguments).
    #[inline]
    pub fn to_seconds_f64(self) -> f64 {
        *self.value.numer() as f64 / *self.value.denom() as f64
    }
}

impl Default for RationalTime {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RationalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.to_seconds_f64())
    }
}
