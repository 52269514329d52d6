use std::path::Path;
use anyhow::{Context, Result};
use log::debug;
use crate::errors::SceneError;
use crate::file_utils::FileManager;
use crate::timecode::{Timecode, DEFAULT_FRAME_RATE};

/// Scene boundary source.
///
/// The video splitter emits a report whose first line carries everything this
/// system needs: a label followed by the comma-separated cut timecodes. A scene
/// is the `[begin, end)` span between two consecutive boundaries, one-indexed,
/// with a synthetic zero boundary prepended for the start of scene 1.

/// Label prefixing the timecode list on the first report line
const TIMECODE_LIST_LABEL: &str = "Timecode List:,";

/// A scene's `[begin, end)` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSpan {
    /// Timecode of the scene's first frame
    pub begin: Timecode,
    /// Timecode of the next scene's first frame (exclusive)
    pub end: Timecode,
}

/// Ordered list of scene-cut timecodes, starting with the synthetic zero.
#[derive(Debug, Clone)]
pub struct SceneBoundaries {
    boundaries: Vec<Timecode>,
}

impl SceneBoundaries {
    /// Load scene boundaries from a splitter report file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)
            .with_context(|| format!("Failed to read scene boundary file: {:?}", path.as_ref()))?;
        Ok(Self::parse(&content)?)
    }

    /// Parse the splitter report. Only the first line is consumed.
    pub fn parse(content: &str) -> Result<Self, SceneError> {
        let first_line = content
            .lines()
            .next()
            .ok_or_else(|| SceneError::Parse("boundary file is empty".to_string()))?;

        let timecodes = first_line.strip_prefix(TIMECODE_LIST_LABEL).ok_or_else(|| {
            SceneError::Parse(format!(
                "first line does not start with '{}': {}",
                TIMECODE_LIST_LABEL, first_line
            ))
        })?;

        // The splitter only reports the cuts; scene 1 starts at zero
        let mut boundaries = vec![Timecode::zero(DEFAULT_FRAME_RATE)];
        for text in timecodes.split(',') {
            boundaries.push(Timecode::parse(text, DEFAULT_FRAME_RATE)?);
        }

        debug!("Loaded {} scene boundaries ({} scenes)", boundaries.len(), boundaries.len() - 1);
        Ok(SceneBoundaries { boundaries })
    }

    /// Number of scenes the boundary list supports.
    pub fn last_valid_scene(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Derive the `[begin, end)` span of a one-indexed scene number.
    pub fn scene_span(&self, scene_number: usize) -> Result<SceneSpan, SceneError> {
        if scene_number < 1 {
            return Err(SceneError::InvalidSceneNumber(scene_number as i64));
        }
        if scene_number >= self.boundaries.len() {
            return Err(SceneError::OutOfRange {
                requested: scene_number,
                last_valid: self.last_valid_scene(),
            });
        }
        Ok(SceneSpan {
            begin: self.boundaries[scene_number - 1],
            end: self.boundaries[scene_number],
        })
    }
}
