use std::fmt;
use std::path::Path;
use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::timecode::{Timecode, DEFAULT_FRAME_RATE};

// @module: Subtitle track parsing

// @const: Shape of one track line: timed paragraph with inline text payload
static TRACK_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r".*begin='(?P<begin>[0-9:.]+)'.*end='(?P<end>[0-9:.]+)'.*>(?P<text>[^<]+)(</span>)?</p>",
    )
    .unwrap()
});

// @struct: Single timestamped caption entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    // @field: Begin timecode
    pub begin: Timecode,

    // @field: End timecode
    pub end: Timecode,

    // @field: Caption text
    pub text: String,
}

impl Subtitle {
    /// Creates a new subtitle entry - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(begin: Timecode, end: Timecode, text: String) -> Self {
        Subtitle { begin, end, text }
    }

    // @creates: Subtitle from one physical track line
    // @validates: Line shape against the fixed track pattern
    pub fn parse_line(line: &str) -> Result<Self, SubtitleError> {
        let caps = TRACK_LINE_REGEX
            .captures(line)
            .ok_or_else(|| SubtitleError::Parse { line: line.to_string() })?;

        // The named groups are non-optional in the pattern
        let begin = Timecode::parse(&caps["begin"], DEFAULT_FRAME_RATE)?;
        let end = Timecode::parse(&caps["end"], DEFAULT_FRAME_RATE)?;
        Ok(Subtitle {
            begin,
            end,
            text: caps["text"].to_string(),
        })
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} --> {}] {}", self.begin, self.end, self.text)
    }
}

/// Load the subtitle track from a file, one entry per non-blank physical line.
///
/// File order is chronological order; this is a precondition of the track
/// format, not separately verified. Blank lines are skipped silently; any other
/// line that does not match the track pattern is a hard parse failure carrying
/// the raw line.
pub fn load_subtitles<P: AsRef<Path>>(path: P) -> Result<Vec<Subtitle>> {
    let content = FileManager::read_to_string(&path)
        .with_context(|| format!("Failed to read subtitle track: {:?}", path.as_ref()))?;
    Ok(parse_track(&content)?)
}

/// Parse subtitle track content into chronological entries.
pub fn parse_track(content: &str) -> Result<Vec<Subtitle>, SubtitleError> {
    let mut subtitles = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        subtitles.push(Subtitle::parse_line(line)?);
    }
    debug!("Loaded {} subtitle entries", subtitles.len());
    Ok(subtitles)
}
