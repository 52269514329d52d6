// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod episode_offset;
mod errors;
mod file_utils;
mod scene_boundaries;
mod scene_matcher;
mod subtitle_source;
mod timecode;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the subtitle text for a scene (default command)
    Extract(ExtractArgs),

    /// Generate shell completions for scenesub
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// One-indexed scene number to look up
    #[arg(value_name = "SCENE")]
    scene: usize,

    /// Episode directory (name starts with the episode number)
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Override the episode number derived from the directory name
    #[arg(short, long)]
    episode: Option<u32>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// scenesub - Scene Subtitle Extraction
///
/// Extracts the spoken-subtitle text that belongs to a visual scene of an
/// episode, aligning the splitter's scene-cut list with the subtitle track.
#[derive(Parser, Debug)]
#[command(name = "scenesub")]
#[command(version = "1.0.0")]
#[command(about = "Scene subtitle extraction tool")]
#[command(long_about = "scenesub matches a subtitle track against a video splitter's scene-cut list
and prints the dialogue belonging to a scene.

EXAMPLES:
    scenesub 7                          # Text for scene 7 of the episode in the current directory
    scenesub -d 3_the_long_night 12     # Scene 12 of episode 3
    scenesub -e 5 -d footage 2          # Override the derived episode number
    scenesub --log-level debug 7        # Trace the matching decisions
    scenesub completions bash           # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

EPISODE DIRECTORIES:
    An episode directory contains the splitter report (scenes.csv) and the
    subtitle track (subtitles.txt); its name starts with the episode number.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// One-indexed scene number to look up
    #[arg(value_name = "SCENE")]
    scene: Option<usize>,

    /// Episode directory (name starts with the episode number)
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Override the episode number derived from the directory name
    #[arg(short, long)]
    episode: Option<u32>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scenesub", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Extract(args)) => run_extract(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let scene = cli.scene.ok_or_else(|| {
                anyhow!("SCENE is required when no subcommand is specified")
            })?;

            let extract_args = ExtractArgs {
                scene,
                directory: cli.directory,
                episode: cli.episode,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_extract(extract_args)
        }
    }
}

fn run_extract(options: ExtractArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        // Apply command line log level to default config if specified
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        FileManager::write_to_file(config_path, &config_json)?;

        config
    };

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // The directory-naming convention supplies the episode number unless the
    // caller overrides it
    let episode_number = match options.episode {
        Some(episode) => episode,
        None => {
            let dir = options.directory.canonicalize().context(format!(
                "Failed to resolve episode directory: {:?}",
                options.directory
            ))?;
            Controller::episode_number_for_dir(&dir)?
        }
    };

    let controller = Controller::with_config(config)?;
    let text = controller.get_subtitle_text_for_scene(
        &options.directory,
        episode_number,
        options.scene,
    )?;

    println!("{}", text);
    Ok(())
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
