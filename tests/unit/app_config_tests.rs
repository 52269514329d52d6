/*!
 * Tests for application configuration
 */

use anyhow::Result;
use scenesub::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_withNoOverrides_shouldUseConventionalFileNames() {
    let config = Config::default();

    assert_eq!(config.scenes_file, "scenes.csv");
    assert_eq!(config.subtitles_file, "subtitles.txt");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test JSON round-trip
#[test]
fn test_serde_withFullConfig_shouldRoundTrip() -> Result<()> {
    let config = Config {
        scenes_file: "cuts.csv".to_string(),
        subtitles_file: "track.txt".to_string(),
        log_level: LogLevel::Debug,
    };

    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;

    assert_eq!(parsed.scenes_file, "cuts.csv");
    assert_eq!(parsed.subtitles_file, "track.txt");
    assert_eq!(parsed.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that missing fields fall back to defaults
#[test]
fn test_serde_withPartialJson_shouldFillDefaults() -> Result<()> {
    let parsed: Config = serde_json::from_str(r#"{ "log_level": "trace" }"#)?;

    assert_eq!(parsed.scenes_file, "scenes.csv");
    assert_eq!(parsed.subtitles_file, "subtitles.txt");
    assert_eq!(parsed.log_level, LogLevel::Trace);
    Ok(())
}

/// Test validation failures for blank file names
#[test]
fn test_validate_withEmptyFileName_shouldFail() {
    let mut config = Config::default();
    config.scenes_file = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.subtitles_file = String::new();
    assert!(config.validate().is_err());
}
