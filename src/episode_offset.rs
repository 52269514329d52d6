use std::collections::HashMap;
use once_cell::sync::Lazy;
use crate::errors::OffsetError;
use crate::subtitle_source::Subtitle;
use crate::timecode::{Timecode, DEFAULT_FRAME_RATE};

/// Per-episode offset correction.
///
/// Subtitle authoring and scene splitting use independently-zeroed clocks, so
/// every subtitle timecode must be shifted by a fixed, hand-calibrated amount
/// before matching. The calibration is measured per episode and supplied here
/// as static configuration; an uncalibrated episode is a hard error, since a
/// guessed offset would silently corrupt the alignment.

/// Which way the calibrated shift is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Subtitle clock runs ahead of the splitter clock
    Subtract,
    /// Subtitle clock runs behind the splitter clock
    Add,
}

/// One calibrated correction entry.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeOffset {
    /// Shift direction
    pub direction: Direction,
    /// Shift magnitude
    pub magnitude: Timecode,
}

impl EpisodeOffset {
    /// Apply the shift identically to the begin and end timecodes, producing a
    /// new shifted subtitle.
    pub fn apply(&self, subtitle: &Subtitle) -> Subtitle {
        let (begin, end) = match self.direction {
            Direction::Subtract => (subtitle.begin - self.magnitude, subtitle.end - self.magnitude),
            Direction::Add => (subtitle.begin + self.magnitude, subtitle.end + self.magnitude),
        };
        Subtitle {
            begin,
            end,
            text: subtitle.text.clone(),
        }
    }
}

// Calibration table, measured against the real footage. The additive entries
// are the distance between a reference caption's authored begin time and the
// frame it is actually spoken on.
static EPISODE_TO_OFFSET: Lazy<HashMap<u32, EpisodeOffset>> = Lazy::new(|| {
    let tc = |text: &str| Timecode::parse(text, DEFAULT_FRAME_RATE).unwrap();
    HashMap::from([
        (1, EpisodeOffset { direction: Direction::Subtract, magnitude: tc("00:00:03.500") }),
        (2, EpisodeOffset { direction: Direction::Add, magnitude: tc("00:00:17.284") - tc("00:00:14:03") }),
        (3, EpisodeOffset { direction: Direction::Add, magnitude: tc("00:00:19.153") - tc("00:00:09:01") }),
        (4, EpisodeOffset { direction: Direction::Add, magnitude: tc("00:00:13.981") - tc("00:00:13:21") }),
        (5, EpisodeOffset { direction: Direction::Add, magnitude: tc("00:00:08.876") - tc("00:00:08:18") }),
        (6, EpisodeOffset { direction: Direction::Add, magnitude: tc("00:00:07.041") - tc("00:00:06:21") }),
    ])
});

/// Look up the calibrated offset for an episode.
pub fn offset_for(episode_number: u32) -> Result<&'static EpisodeOffset, OffsetError> {
    EPISODE_TO_OFFSET
        .get(&episode_number)
        .ok_or(OffsetError::UnknownEpisode(episode_number))
}
