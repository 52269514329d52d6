/*!
 * # scenesub - Scene Subtitle Extraction
 *
 * A Rust library for extracting the spoken-subtitle text that corresponds to a
 * visual scene of a video, given two independently-timed sources: a
 * scene-boundary timecode list (from a video splitter) and a subtitle track
 * with per-line begin/end timecodes.
 *
 * ## Features
 *
 * - Timecode value type with frame and millisecond notations at a fixed rate
 * - Scene span derivation from a splitter's boundary report
 * - Line-oriented subtitle track parsing
 * - Per-episode hand-calibrated offset correction
 * - Tolerance-windowed overlap matching with contiguous-line merging
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: Timecode value type, parsing and arithmetic
 * - `scene_boundaries`: Scene boundary source and span derivation
 * - `subtitle_source`: Subtitle track parsing
 * - `episode_offset`: Static per-episode offset table and correction
 * - `scene_matcher`: The scene matching engine
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod episode_offset;
pub mod errors;
pub mod file_utils;
pub mod scene_boundaries;
pub mod scene_matcher;
pub mod subtitle_source;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use episode_offset::{Direction, EpisodeOffset};
pub use errors::{AppError, OffsetError, SceneError, SubtitleError, TimecodeError};
pub use scene_boundaries::{SceneBoundaries, SceneSpan};
pub use subtitle_source::Subtitle;
pub use timecode::{Timecode, DEFAULT_FRAME_RATE};
