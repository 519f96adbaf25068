//! Nashville number conversion.
//!
//! Roots and bass notes become major-scale degrees of the key. A chromatic
//! note with no degree becomes [`UNMAPPED_DEGREE`] instead of failing the line.

use super::chord::{parse_chord, Chord};
use super::line::{is_chord_line, map_tokens};
use crate::theory::{scale_degree, Note};

/// Marker emitted for a note that is not in the key's major scale.
pub const UNMAPPED_DEGREE: &str = "?";

/// Degree numeral of `note` in `key`, or the unmapped marker.
fn degree(key: Note, note: Note) -> String {
    scale_degree(key, note).map_or_else(|| UNMAPPED_DEGREE.to_string(), |d| d.to_string())
}

/// Rewrite one chord as a Nashville number relative to `key`.
///
/// A suffix starting with `m` but not `maj` marks a minor chord: the `m` moves
/// right after the numeral (`Am7` in C is `6m7`). That only happens when the
/// numeral is a bare digit; an unmapped root keeps its suffix as written.
pub fn chord_to_nashville(chord: &Chord, key: Note) -> String {
    let num = degree(key, chord.root);
    let is_digit = num.chars().all(|c| c.is_ascii_digit());

    let mut out = match chord.suffix.strip_prefix('m') {
        Some(rest) if is_digit && !chord.suffix.starts_with("maj") => format!("{num}m{rest}"),
        _ => format!("{num}{}", chord.suffix),
    };
    if let Some(bass) = chord.bass {
        out.push('/');
        out.push_str(&degree(key, bass));
    }
    out
}

/// Convert every chord line to Nashville numbers. Other lines pass through.
pub fn to_nashville(lines: &[String], key: Note) -> Vec<String> {
    tracing::debug!("Converting chart to Nashville numbers in {key}");
    lines
        .iter()
        .map(|line| {
            if is_chord_line(line) {
                map_tokens(line, |token| {
                    parse_chord(token)
                        .map_or_else(|_| token.to_string(), |chord| chord_to_nashville(&chord, key))
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

    fn nash(token: &str, key: Note) -> String {
        chord_to_nashville(&parse_chord(token).unwrap(), key)
    }

    #[test]
    fn test_basic_progression_in_c() {
        let out = to_nashville(&["C Am F G".to_string()], Note::C);
        assert_eq!(out, vec!["1 6m 4 5".to_string()]);
    }

    #[test]
    fn test_minor_marker_moves_after_numeral() {
        assert_eq!(nash("Am7", Note::C), "6m7");
        assert_eq!(nash("Em", Note::G), "6m");
        assert_eq!(nash("F#m7b5", Note::G), "7m7b5");
    }

    #[test]
    fn test_maj_is_not_minor() {
        assert_eq!(nash("Cmaj7", Note::C), "1maj7");
        assert_eq!(nash("Gsus4", Note::C), "5sus4");
        assert_eq!(nash("CM7", Note::C), "1M7");
    }

    #[test]
    fn test_unmapped_degree_keeps_suffix() {
        assert_eq!(nash("C#m7", Note::C), "?m7");
        assert_eq!(nash("Eb", Note::C), "?");
    }

    #[test]
    fn test_bass_uses_degree() {
        assert_eq!(nash("G/B", Note::G), "1/3");
        assert_eq!(nash("D/F#", Note::G), "5/7");
        assert_eq!(nash("C/Bb", Note::C), "1/?");
    }

    #[test]
    fn test_flat_key() {
        let out = to_nashville(&["Eb  Ab/C  Bb  Cm".to_string()], Note::Ds);
        assert_eq!(out, vec!["1  4/6  5  6m".to_string()]);
    }

    #[test]
    fn test_lyric_lines_pass_through() {
        let lines = vec!["[Chorus]".to_string(), "Amazing grace".to_string()];
        assert_eq!(to_nashville(&lines, Note::C), lines);
    }
}
