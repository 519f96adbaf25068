//! Key detection.
//!
//! This is a frequency heuristic, not key-finding: the most common chord root
//! is taken as a major tonic. Minor and modal charts will come out as their
//! most-played chord.

use super::line::chords_in_line;
use crate::theory::Note;

/// Key assumed when a chart contains no chords at all.
pub const FALLBACK_KEY: Note = Note::C;

/// Most frequent root, earliest first seen on ties, or [`FALLBACK_KEY`] if empty.
pub fn detect_key(roots: impl IntoIterator<Item = Note>) -> Note {
    // (note, count) in first-seen order
    let mut counts: Vec<(Note, usize)> = Vec::new();
    for root in roots {
        match counts.iter_mut().find(|(note, _)| *note == root) {
            Some((_, count)) => *count += 1,
            None => counts.push((root, 1)),
        }
    }

    let mut best: Option<(Note, usize)> = None;
    for &(note, count) in &counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((note, count));
        }
    }
    best.map_or(FALLBACK_KEY, |(note, _)| note)
}

/// Detect the key of a chart from the roots of every chord on its chord lines.
pub fn detect_chart_key(lines: &[String]) -> Note {
    let key = detect_key(
        lines
            .iter()
            .flat_map(|line| chords_in_line(line))
            .map(|chord| chord.root),
    );
    tracing::debug!("Detected key {key}");
    key
}
