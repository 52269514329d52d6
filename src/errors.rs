/*!
 * Error types for the scenesub application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when parsing or combining timecodes
#[derive(Error, Debug)]
pub enum TimecodeError {
    /// Error when a timecode string matches neither supported notation
    #[error("Could not parse timecode: '{text}' (expected HH:MM:SS:FF or HH:MM:SS.mmm)")]
    Parse {
        /// The offending raw timecode text
        text: String,
    },

    /// Error when combining two timecodes with different frame rates
    #[error("Incompatible frame rates: {left} vs {right}")]
    IncompatibleRate {
        /// Frame rate of the left operand
        left: u32,
        /// Frame rate of the right operand
        right: u32,
    },
}

/// Errors that can occur when reading scene boundaries or deriving spans
#[derive(Error, Debug)]
pub enum SceneError {
    /// Error when the boundary file does not have the expected shape
    #[error("Could not parse scene boundary list: {0}")]
    Parse(String),

    /// Error when a scene number is below the valid one-indexed range
    #[error("scenes are one-indexed, got {0}")]
    InvalidSceneNumber(i64),

    /// Error when a scene number is past the end of the boundary list
    #[error("scene {requested} is out of range, the last valid scene is {last_valid}")]
    OutOfRange {
        /// The scene number that was requested
        requested: usize,
        /// The highest scene number the boundary list supports
        last_valid: usize,
    },

    /// Error from a timecode embedded in the boundary list
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),
}

/// Errors that can occur during subtitle track processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error when a non-blank track line does not match the expected shape
    #[error("Could not parse line:\n{line}")]
    Parse {
        /// The offending raw line
        line: String,
    },

    /// Error from a timecode embedded in a subtitle line
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),
}

/// Errors that can occur during episode offset correction
#[derive(Error, Debug)]
pub enum OffsetError {
    /// Error when no calibration entry exists for the requested episode
    #[error("No calibrated offset for episode {0}")]
    UnknownEpisode(u32),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from timecode handling
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Error from scene boundary handling
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from offset correction
    #[error("Offset error: {0}")]
    Offset(#[from] OffsetError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
