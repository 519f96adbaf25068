//! Chart transposition.

use super::chord::{parse_chord, Chord};
use super::key::detect_chart_key;
use super::line::{is_chord_line, map_tokens};
use crate::error::Result;
use crate::theory::Note;

/// Shift root and bass by `interval` semitones. The suffix is left alone.
pub fn transpose_chord(chord: &Chord, interval: i32) -> Chord {
    Chord {
        root: chord.root.transpose(interval),
        suffix: chord.suffix.clone(),
        bass: chord.bass.map(|bass| bass.transpose(interval)),
    }
}

/// Transpose a single chord given as text, e.g. `"Bb/D"` up 2 gives `"C/E"`.
pub fn transpose_chord_str(text: &str, interval: i32) -> Result<String> {
    let chord = parse_chord(text)?;
    Ok(transpose_chord(&chord, interval).to_string())
}

/// Transpose every chord line into `target`.
///
/// When `original` is `None` the source key is detected from the chart. Other
/// lines pass through untouched and the line count never changes.
pub fn transpose_chart(lines: &[String], target: Note, original: Option<Note>) -> Vec<String> {
    let original = original.unwrap_or_else(|| detect_chart_key(lines));
    let interval = i32::from(original.interval_to(target));
    tracing::debug!("Transposing {original} -> {target} ({interval} semitones)");

    lines
        .iter()
        .map(|line| {
            if is_chord_line(line) {
                map_tokens(line, |token| {
                    transpose_chord_str(token, interval).unwrap_or_else(|_| token.to_string())
                })
            } else {
                line.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::Error;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_transpose_c_to_d() {
        let out = transpose_chart(&lines(&["C G Am F"]), Note::D, Some(Note::C));
        assert_eq!(out, lines(&["D A Bm G"]));
    }

    #[test]
    fn test_transpose_keeps_suffix_and_moves_bass() {
        assert_eq!(transpose_chord_str("Bbmaj7/D", 2).unwrap(), "Cmaj7/E");
        assert_eq!(transpose_chord_str("F#m7b5", -1).unwrap(), "Fm7b5");
    }

    #[test]
    fn test_transpose_chord_str_surfaces_parse_error() {
        assert!(matches!(transpose_chord_str("Xm7", 3), Err(Error::MalformedChord { .. })));
    }

    #[test]
    fn test_transpose_chart_preserves_lyrics_and_spacing() {
        let chart = lines(&[
            "[Verse]",
            "G        C/G      G",
            "Amazing grace how sweet the sound",
            "",
        ]);
        let out = transpose_chart(&chart, Note::A, Some(Note::G));
        assert_eq!(out.len(), chart.len());
        assert_eq!(out[0], "[Verse]");
        assert_eq!(out[1], "A        D/A      A");
        assert_eq!(out[2], chart[2]);
        assert_eq!(out[3], "");
    }

    #[test]
    fn test_transpose_chart_detects_original_key() {
        let chart = lines(&["G D G", "Em C G"]);
        let out = transpose_chart(&chart, Note::C, None);
        assert_eq!(out, lines(&["C G C", "Am F C"]));
    }

    #[test]
    fn test_transpose_mixed_line_untouched() {
        let chart = lines(&["C G Amazing F"]);
        assert_eq!(transpose_chart(&chart, Note::E, Some(Note::C)), chart);
    }
}
