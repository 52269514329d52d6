/*!
 * Tests for subtitle track parsing
 */

use scenesub::errors::SubtitleError;
use scenesub::subtitle_source::{parse_track, Subtitle};
use crate::common::tc;

/// Test parsing a timed paragraph with a styled span
#[test]
fn test_parse_line_withStyledSpan_shouldExtractFields() {
    let line = "<p begin='00:00:05.500' end='00:00:07.500' region='r1'><span style='s1'>Welcome back.</span></p>";
    let subtitle = Subtitle::parse_line(line).unwrap();

    assert_eq!(subtitle.begin, tc("00:00:05.500"));
    assert_eq!(subtitle.end, tc("00:00:07.500"));
    assert_eq!(subtitle.text, "Welcome back.");
}

/// Test parsing a timed paragraph without a span
#[test]
fn test_parse_line_withBareParagraph_shouldExtractFields() {
    let line = "<p begin='00:00:15.500' end='00:00:17.500' region='r1'>Hi.</p>";
    let subtitle = Subtitle::parse_line(line).unwrap();

    assert_eq!(subtitle.begin, tc("00:00:15.500"));
    assert_eq!(subtitle.end, tc("00:00:17.500"));
    assert_eq!(subtitle.text, "Hi.");
}

/// Test parsing a line with frame-notation timecodes
#[test]
fn test_parse_line_withFrameNotation_shouldExtractFields() {
    let line = "<p begin='00:00:14:03' end='00:00:16:00'>So it begins.</p>";
    let subtitle = Subtitle::parse_line(line).unwrap();

    assert_eq!(subtitle.begin, tc("00:00:14:03"));
    assert_eq!(subtitle.end, tc("00:00:16:00"));
}

/// Test the hard failure for a line that does not match the track shape
#[test]
fn test_parse_line_withMalformedLine_shouldFailWithRawLine() {
    let line = "<p begin='00:00:05.500'>missing the end attribute</p>";
    let err = Subtitle::parse_line(line).unwrap_err();

    match &err {
        SubtitleError::Parse { line: raw } => assert_eq!(raw, line),
        other => panic!("Expected Parse, got {:?}", other),
    }
    assert!(err.to_string().contains("missing the end attribute"));
}

/// Test that blank lines are skipped and order is preserved
#[test]
fn test_parse_track_withBlankLines_shouldSkipThemSilently() {
    let content = concat!(
        "<p begin='00:00:01.000' end='00:00:02.000'>One</p>\n",
        "\n",
        "   \n",
        "<p begin='00:00:03.000' end='00:00:04.000'>Two</p>\n",
    );
    let subtitles = parse_track(content).unwrap();

    assert_eq!(subtitles.len(), 2);
    assert_eq!(subtitles[0].text, "One");
    assert_eq!(subtitles[1].text, "Two");
}

/// Test that one malformed line aborts the whole track parse
#[test]
fn test_parse_track_withOneBadLine_shouldFail() {
    let content = concat!(
        "<p begin='00:00:01.000' end='00:00:02.000'>One</p>\n",
        "not a subtitle line\n",
    );
    assert!(parse_track(content).is_err());
}

/// Test parsing an empty track
#[test]
fn test_parse_track_withOnlyBlankLines_shouldYieldNoEntries() {
    let subtitles = parse_track("\n\n   \n").unwrap();
    assert!(subtitles.is_empty());
}
