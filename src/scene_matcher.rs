use log::debug;
use crate::scene_boundaries::SceneSpan;
use crate::subtitle_source::Subtitle;

/// Scene matching engine.
///
/// Selects the subtitle lines belonging to a scene span. The two timing sources
/// never agree exactly, even after offset correction, so plain range containment
/// would drop lines that straddle a cut and double-count lines that graze one.
/// The inclusion rules below are heuristics tuned against real footage; the
/// guard constants and strict comparisons are load-bearing and must not be
/// simplified to interval overlap.

/// Slack applied to either side of the scene span, in frames (one second at 30 fps).
const TOLERANCE_FRAMES: i64 = 30;

/// Minimum interior overlap for a line straddling a scene boundary, in frames.
const STRADDLE_GUARD_FRAMES: i64 = 60;

/// Collect the text of the subtitle lines that belong to a scene span.
///
/// Lines are evaluated and emitted in source (chronological) order. When a
/// matched line shares its begin timecode with the previously matched line
/// (a multi-line caption split across physical lines), its text is appended to
/// the previous entry with a space rather than emitted separately. The entries
/// are joined with newlines; a scene with no dialogue yields an empty string,
/// which is a legitimate outcome rather than an error.
pub fn subtitle_text_for_scene(subtitles: &[Subtitle], span: SceneSpan) -> String {
    let begin_limit = span.begin - TOLERANCE_FRAMES;
    let end_limit = span.end + TOLERANCE_FRAMES;

    let mut matched_texts: Vec<String> = Vec::new();
    let mut prev_matched: Option<&Subtitle> = None;

    for subtitle in subtitles {
        // A line belongs to the scene if any of the three hold:
        //   (a) it started before the scene but finishes well inside it;
        //   (b) it sits fully inside the scene plus slack (the common case);
        //   (c) it started well inside the scene but bleeds past its end.
        // The guard bands in (a) and (c) keep lines that merely touch a cut
        // from double-counting across adjacent scenes.
        let matches = (subtitle.end > span.begin + STRADDLE_GUARD_FRAMES && subtitle.end < span.end)
            || (subtitle.begin > begin_limit && subtitle.end < end_limit)
            || (subtitle.begin < span.end - STRADDLE_GUARD_FRAMES && subtitle.end > span.end);

        if !matches {
            continue;
        }

        debug!("Matched {}", subtitle);
        match prev_matched {
            Some(prev) if prev.begin == subtitle.begin => {
                // Simultaneous caption split across physical lines; a previous
                // match implies an emitted entry to append to
                if let Some(last) = matched_texts.last_mut() {
                    last.push(' ');
                    last.push_str(&subtitle.text);
                }
            }
            _ => {
                matched_texts.push(subtitle.text.clone());
                prev_matched = Some(subtitle);
            }
        }
    }

    matched_texts.join("\n")
}
