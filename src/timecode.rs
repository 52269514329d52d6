use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use once_cell::sync::Lazy;
use regex::Regex;
use crate::errors::TimecodeError;

// @module: Timecode value type and arithmetic

/// Frame rate used throughout this domain. Both the scene splitter and the
/// subtitle track are authored at 30 fps.
pub const DEFAULT_FRAME_RATE: u32 = 30;

// @const: HH:MM:SS:FF (frame-indexed) notation
static FRAME_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}):(\d{2})$").unwrap()
});

// @const: HH:MM:SS.mmm (millisecond-indexed) notation
static MILLIS_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})\.(\d{3})$").unwrap()
});

/// A point in time expressed as a frame count at a fixed frame rate.
///
/// Values are immutable: arithmetic produces new values. Two timecodes may only
/// be combined or compared when they share the same frame rate; this domain runs
/// at a single rate ([`DEFAULT_FRAME_RATE`]) so the operators assert the
/// precondition rather than returning a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timecode {
    frame_rate: u32,
    frame_count: i64,
}

impl Timecode {
    /// Zero point at the given frame rate (start of the video).
    pub fn zero(frame_rate: u32) -> Self {
        Timecode { frame_rate, frame_count: 0 }
    }

    /// Create a timecode directly from a frame count - used by tests and external consumers
    #[allow(dead_code)]
    pub fn from_frames(frame_rate: u32, frame_count: i64) -> Self {
        Timecode { frame_rate, frame_count }
    }

    /// Parse a timecode from either supported notation.
    ///
    /// `HH:MM:SS:FF` is frame-indexed; `HH:MM:SS.mmm` is millisecond-indexed and
    /// rounds to the nearest frame at the given rate.
    pub fn parse(text: &str, frame_rate: u32) -> Result<Self, TimecodeError> {
        if let Some(caps) = FRAME_NOTATION.captures(text) {
            let (hours, minutes, seconds, frames) = Self::capture_fields(&caps);
            if minutes >= 60 || seconds >= 60 || frames >= frame_rate as i64 {
                return Err(TimecodeError::Parse { text: text.to_string() });
            }
            let frame_count = (hours * 3600 + minutes * 60 + seconds) * frame_rate as i64 + frames;
            return Ok(Timecode { frame_rate, frame_count });
        }

        if let Some(caps) = MILLIS_NOTATION.captures(text) {
            let (hours, minutes, seconds, millis) = Self::capture_fields(&caps);
            if minutes >= 60 || seconds >= 60 {
                return Err(TimecodeError::Parse { text: text.to_string() });
            }
            let total_ms = (hours * 3600 + minutes * 60 + seconds) * 1000 + millis;
            // Round to the nearest frame
            let frame_count = (total_ms * frame_rate as i64 + 500) / 1000;
            return Ok(Timecode { frame_rate, frame_count });
        }

        Err(TimecodeError::Parse { text: text.to_string() })
    }

    /// Frame count since the zero point (negative if an offset pushed it before zero).
    #[allow(dead_code)]
    pub fn frames(&self) -> i64 {
        self.frame_count
    }

    /// Frame rate this timecode is expressed at.
    #[allow(dead_code)]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Reconstruct the millisecond notation (`HH:MM:SS.mmm`), rounding the frame
    /// count to the nearest millisecond.
    #[allow(dead_code)]
    pub fn format_millis(&self) -> String {
        let (sign, frames) = if self.frame_count < 0 {
            ("-", -self.frame_count)
        } else {
            ("", self.frame_count)
        };
        let rate = self.frame_rate as i64;
        let total_ms = (frames * 1000 + rate / 2) / rate;
        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let seconds = (total_ms % 60_000) / 1_000;
        let millis = total_ms % 1_000;
        format!("{}{:02}:{:02}:{:02}.{:03}", sign, hours, minutes, seconds, millis)
    }

    // @returns: The four numeric fields of a matched notation
    fn capture_fields(caps: &regex::Captures) -> (i64, i64, i64, i64) {
        // The patterns only admit digits, so the parses cannot fail
        let field = |idx: usize| -> i64 {
            caps.get(idx).map_or(0, |m| m.as_str().parse().unwrap_or(0))
        };
        (field(1), field(2), field(3), field(4))
    }
}

/// Reconstructs the frame notation (`HH:MM:SS:FF`).
impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (sign, frames) = if self.frame_count < 0 {
            ("-", -self.frame_count)
        } else {
            ("", self.frame_count)
        };
        let rate = self.frame_rate as i64;
        let total_seconds = frames / rate;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        let ff = frames % rate;
        write!(f, "{}{:02}:{:02}:{:02}:{:02}", sign, hours, minutes, seconds, ff)
    }
}

/// Total order by frame count. Meaningful only between timecodes at the same
/// rate; the rate is a tie-break to stay consistent with `Eq`.
impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.frame_count, self.frame_rate).cmp(&(other.frame_count, other.frame_rate))
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Timecode {
    type Output = Timecode;

    fn add(self, rhs: Timecode) -> Timecode {
        assert_eq!(self.frame_rate, rhs.frame_rate, "timecode frame rates must match");
        Timecode {
            frame_rate: self.frame_rate,
            frame_count: self.frame_count + rhs.frame_count,
        }
    }
}

impl Sub for Timecode {
    type Output = Timecode;

    fn sub(self, rhs: Timecode) -> Timecode {
        assert_eq!(self.frame_rate, rhs.frame_rate, "timecode frame rates must match");
        Timecode {
            frame_rate: self.frame_rate,
            frame_count: self.frame_count - rhs.frame_count,
        }
    }
}

impl Add<i64> for Timecode {
    type Output = Timecode;

    /// Shift forward by a number of frames.
    fn add(self, frames: i64) -> Timecode {
        Timecode {
            frame_rate: self.frame_rate,
            frame_count: self.frame_count + frames,
        }
    }
}

impl Sub<i64> for Timecode {
    type Output = Timecode;

    /// Shift backward by a number of frames.
    fn sub(self, frames: i64) -> Timecode {
        Timecode {
            frame_rate: self.frame_rate,
            frame_count: self.frame_count - frames,
        }
    }
}
