/*!
 * Tests for the scene boundary source
 */

use scenesub::errors::SceneError;
use scenesub::scene_boundaries::SceneBoundaries;
use crate::common::{sample_scenes_report, tc};

/// Test parsing a splitter report
#[test]
fn test_parse_withValidReport_shouldPrependZeroBoundary() {
    let boundaries = SceneBoundaries::parse(sample_scenes_report()).unwrap();

    assert_eq!(boundaries.last_valid_scene(), 3);

    let first = boundaries.scene_span(1).unwrap();
    assert_eq!(first.begin, tc("00:00:00:00"));
    assert_eq!(first.end, tc("00:00:10.000"));
}

/// Test that only the first report line is consumed
#[test]
fn test_parse_withTrailingLines_shouldIgnoreThem() {
    let single_line = SceneBoundaries::parse("Timecode List:,00:00:10.000").unwrap();
    let with_trailing = SceneBoundaries::parse(sample_scenes_report()).unwrap();

    assert_eq!(single_line.last_valid_scene(), 1);
    assert_eq!(with_trailing.last_valid_scene(), 3);
}

/// Test that consecutive spans tile without gap or overlap
#[test]
fn test_scene_span_withConsecutiveScenes_shouldTile() {
    let boundaries = SceneBoundaries::parse(sample_scenes_report()).unwrap();

    for n in 1..boundaries.last_valid_scene() {
        let current = boundaries.scene_span(n).unwrap();
        let next = boundaries.scene_span(n + 1).unwrap();
        assert!(current.begin < current.end);
        assert_eq!(current.end, next.begin);
    }
}

/// Test that scene zero is rejected
#[test]
fn test_scene_span_withSceneZero_shouldFail() {
    let boundaries = SceneBoundaries::parse(sample_scenes_report()).unwrap();

    let err = boundaries.scene_span(0).unwrap_err();
    assert!(matches!(err, SceneError::InvalidSceneNumber(0)));
}

/// Test that a scene past the boundary list reports the last valid scene
#[test]
fn test_scene_span_withScenePastEnd_shouldReportLastValid() {
    let boundaries = SceneBoundaries::parse(sample_scenes_report()).unwrap();

    let err = boundaries.scene_span(4).unwrap_err();
    match err {
        SceneError::OutOfRange { requested, last_valid } => {
            assert_eq!(requested, 4);
            assert_eq!(last_valid, 3);
        }
        other => panic!("Expected OutOfRange, got {:?}", other),
    }
    assert!(boundaries.scene_span(4).unwrap_err().to_string().contains("last valid scene is 3"));
}

/// Test that a missing label is a parse failure
#[test]
fn test_parse_withMissingLabel_shouldFail() {
    let err = SceneBoundaries::parse("Frame List:,300,600").unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)));

    let err = SceneBoundaries::parse("").unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)));
}

/// Test that a malformed timecode in the list is a parse failure
#[test]
fn test_parse_withMalformedTimecode_shouldFail() {
    let err = SceneBoundaries::parse("Timecode List:,00:00:10.000,oops").unwrap_err();
    assert!(matches!(err, SceneError::Timecode(_)));
}
