/*!
 * Tests for episode offset correction
 */

use scenesub::episode_offset::{offset_for, Direction};
use scenesub::errors::OffsetError;
use scenesub::subtitle_source::Subtitle;
use crate::common::tc;

/// Test the episode 1 calibration (subtract 3.5 seconds)
#[test]
fn test_apply_withEpisodeOne_shouldSubtractCalibratedOffset() {
    let offset = offset_for(1).unwrap();
    assert_eq!(offset.direction, Direction::Subtract);
    assert_eq!(offset.magnitude, tc("00:00:03.500"));

    let subtitle = Subtitle::new(tc("00:00:05.000"), tc("00:00:07.000"), "Hello.".to_string());
    let shifted = offset.apply(&subtitle);

    assert_eq!(shifted.begin, tc("00:00:01.500"));
    assert_eq!(shifted.end, tc("00:00:03.500"));
    assert_eq!(shifted.text, "Hello.");
}

/// Test an additive calibration derived from two notations
#[test]
fn test_apply_withEpisodeTwo_shouldAddCalibratedOffset() {
    let offset = offset_for(2).unwrap();
    assert_eq!(offset.direction, Direction::Add);
    // 00:00:17.284 is frame 519, 00:00:14:03 is frame 423
    assert_eq!(offset.magnitude.frames(), 519 - 423);

    let subtitle = Subtitle::new(tc("00:00:10:00"), tc("00:00:12:00"), "Hello.".to_string());
    let shifted = offset.apply(&subtitle);

    assert_eq!(shifted.begin.frames(), 300 + 96);
    assert_eq!(shifted.end.frames(), 360 + 96);
}

/// Test that the shift moves begin and end by the same amount
#[test]
fn test_apply_withAnyEpisode_shouldPreserveDuration() {
    let subtitle = Subtitle::new(tc("00:00:10.000"), tc("00:00:12.500"), "Hello.".to_string());
    let duration = subtitle.end - subtitle.begin;

    for episode in 1..=6 {
        let shifted = offset_for(episode).unwrap().apply(&subtitle);
        assert_eq!(shifted.end - shifted.begin, duration, "episode {}", episode);
    }
}

/// Test that the original subtitle is left untouched
#[test]
fn test_apply_withEpisodeOne_shouldReturnNewValue() {
    let subtitle = Subtitle::new(tc("00:00:05.000"), tc("00:00:07.000"), "Hello.".to_string());
    let _ = offset_for(1).unwrap().apply(&subtitle);

    assert_eq!(subtitle.begin, tc("00:00:05.000"));
    assert_eq!(subtitle.end, tc("00:00:07.000"));
}

/// Test the hard failure for an uncalibrated episode
#[test]
fn test_offset_for_withUnknownEpisode_shouldFail() {
    let err = offset_for(7).unwrap_err();
    assert!(matches!(err, OffsetError::UnknownEpisode(7)));
    assert!(err.to_string().contains("episode 7"));
}
