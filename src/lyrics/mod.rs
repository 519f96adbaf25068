//! Lyric-only chart filtering.
//!
//! Pure chord and Nashville lines are dropped. On mixed lines, whole tokens
//! that read as chords are removed and the surrounding spacing is kept, so a
//! lyric word such as `Amazing` is never cut in half.

use crate::chart::chord::is_chord_token;
use crate::chart::line::{is_chord_line, is_nashville_line, is_section_header, map_tokens};

/// Remove chord tokens from a mixed lyric line and trim trailing whitespace.
pub fn strip_inline_chords(line: &str) -> String {
    let stripped = map_tokens(line, |token| {
        if is_chord_token(token) {
            String::new()
        } else {
            token.to_string()
        }
    });
    stripped.trim_end().to_string()
}

/// Keep only the lyric content of a chart.
///
/// Headers pass through as written; every other surviving line has its inline
/// chords stripped.
pub fn lyrics_only(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !is_chord_line(line) && !is_nashville_line(line))
        .map(|line| {
            if is_section_header(line) {
                line.clone()
            } else {
                strip_inline_chords(line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_strip_inline_chords_keeps_words_whole() {
        assert_eq!(strip_inline_chords("G Amazing grace D/F#"), " Amazing grace");
        assert_eq!(strip_inline_chords("how sweet the sound"), "how sweet the sound");
    }

    #[test]
    fn test_lyrics_only_drops_chord_and_nashville_lines() {
        let chart = lines(&[
            "[Verse]",
            "G       C        G",
            "Amazing grace how sweet",
            "1  4  1",
            "",
            "that saved a wretch Em",
        ]);
        assert_eq!(
            lyrics_only(&chart),
            lines(&["[Verse]", "Amazing grace how sweet", "", "that saved a wretch"])
        );
    }

    #[test]
    fn test_headers_are_not_stripped() {
        assert_eq!(lyrics_only(&lines(&["[A]"])), lines(&["[A]"]));
    }
}
