//! Line classification.
//!
//! A chart line carries no stored tag. Every predicate here is a pure function
//! of the line text and is recomputed wherever it is needed.

use super::chord::{is_chord_token, parse_chord, Chord};

/// What a line is, derived from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Bracketed section title such as `[Chorus]`.
    Header,
    /// Every token is a chord.
    Chord,
    /// Every token is a Nashville number.
    Nashville,
    /// Lyrics, or anything else.
    Lyric,
}

/// Whether the line is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether the line opens a new section: starts with `[` and contains `]`.
pub fn is_section_header(line: &str) -> bool {
    line.starts_with('[') && line.contains(']')
}

/// Whether the line is non-blank and every whitespace-separated token is a chord.
///
/// One lyric word anywhere disqualifies the whole line.
pub fn is_chord_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(is_chord_token)
}

/// Whether a token reads as a Nashville number: a degree `1`-`7` or the `?`
/// marker, followed by any non-whitespace remainder.
pub fn is_nashville_token(token: &str) -> bool {
    token.starts_with(|c: char| ('1'..='7').contains(&c) || c == '?')
}

/// Whether the line is non-blank and every token is a Nashville number.
pub fn is_nashville_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(is_nashville_token)
}

/// Classify a line.
pub fn classify(line: &str) -> LineKind {
    if is_blank(line) {
        LineKind::Blank
    } else if is_section_header(line) {
        LineKind::Header
    } else if is_chord_line(line) {
        LineKind::Chord
    } else if is_nashville_line(line) {
        LineKind::Nashville
    } else {
        LineKind::Lyric
    }
}

/// Chords of a chord line, left to right. Any other line yields none.
pub fn chords_in_line(line: &str) -> Vec<Chord> {
    if !is_chord_line(line) {
        return Vec::new();
    }
    line.split_whitespace()
        .filter_map(|token| parse_chord(token).ok())
        .collect()
}

/// Rewrite every whitespace-separated token, keeping the whitespace between them.
pub(crate) fn map_tokens(line: &str, mut f: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(line.len());
    let mut token_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = token_start.take() {
                out.push_str(&f(&line[start..i]));
            }
            out.push(c);
        } else if token_start.is_none() {
            token_start = Some(i);
        }
    }
    if let Some(start) = token_start {
        out.push_str(&f(&line[start..]));
    }
    out
}
