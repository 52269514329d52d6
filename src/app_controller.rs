use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::path::Path;
use crate::app_config::Config;
use crate::episode_offset;
use crate::file_utils::FileManager;
use crate::scene_boundaries::SceneBoundaries;
use crate::scene_matcher;
use crate::subtitle_source;

// @module: Application controller for scene subtitle lookup

/// Main application controller wiring the readers, the offset corrector and the
/// scene matcher together for one episode directory.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Derive the episode number from an episode directory.
    ///
    /// Episode directories follow the convention that the first character of
    /// the directory name is the episode number (e.g. `3_the_long_night/`).
    pub fn episode_number_for_dir<P: AsRef<Path>>(dir: P) -> Result<u32> {
        let dir = dir.as_ref();
        let name = dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| anyhow!("Cannot derive an episode number from {:?}", dir))?;

        let first = name
            .chars()
            .next()
            .ok_or_else(|| anyhow!("Episode directory has an empty name: {:?}", dir))?;

        first
            .to_digit(10)
            .ok_or_else(|| anyhow!(
                "Episode directory name must start with the episode number, got '{}'",
                name
            ))
    }

    /// Look up the subtitle text for a one-indexed scene of an episode.
    ///
    /// Reads the scene boundary report and subtitle track from the episode
    /// directory, applies the episode's calibrated offset to every subtitle,
    /// and runs the scene matcher over the derived span. A scene with no
    /// dialogue yields an empty string.
    pub fn get_subtitle_text_for_scene<P: AsRef<Path>>(
        &self,
        episode_dir: P,
        episode_number: u32,
        scene_number: usize,
    ) -> Result<String> {
        let episode_dir = episode_dir.as_ref();
        if !FileManager::dir_exists(episode_dir) {
            return Err(anyhow!("Episode directory does not exist: {:?}", episode_dir));
        }

        let boundaries = SceneBoundaries::from_file(episode_dir.join(&self.config.scenes_file))?;
        let span = boundaries.scene_span(scene_number)?;
        debug!("Scene {} spans [{}, {})", scene_number, span.begin, span.end);

        let offset = episode_offset::offset_for(episode_number)
            .with_context(|| format!("Cannot correct subtitle timing for episode {}", episode_number))?;

        let subtitles: Vec<_> = subtitle_source::load_subtitles(episode_dir.join(&self.config.subtitles_file))?
            .iter()
            .map(|subtitle| offset.apply(subtitle))
            .collect();

        info!(
            "Matching {} subtitle entries against scene {} of episode {}",
            subtitles.len(),
            scene_number,
            episode_number
        );
        Ok(scene_matcher::subtitle_text_for_scene(&subtitles, span))
    }
}
