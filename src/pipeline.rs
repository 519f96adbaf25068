//! End-to-end chart pipeline.
//!
//! raw text -> lines -> transpose or Nashville -> sections -> compression ->
//! width -> optional lyric filter. Every stage takes and returns an owned line
//! sequence; all settings arrive through [`ChartOptions`].

use crate::chart::{
    compress_repeated_sections, detect_chart_key, enforce_max_width, split_sections, to_nashville,
    transpose_chart,
};
use crate::constants::chart::DEFAULT_MAX_WIDTH;
use crate::lyrics::lyrics_only;
use crate::theory::Note;

/// How chord lines are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Transpose every chord into the target key.
    Transpose {
        /// Key to transpose into.
        target: Note,
    },
    /// Replace chords with Nashville numbers relative to the chart key.
    Nashville,
    /// Leave chords as written.
    Original,
}

/// Settings threaded through every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Chord rewriting mode.
    pub mode: Mode,
    /// Key of the input chart. `None` detects it from the chords.
    pub input_key: Option<Note>,
    /// Lines longer than this many characters are truncated.
    pub max_width: usize,
    /// Drop chords and keep only lyrics and headers.
    pub lyrics_only: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Nashville,
            input_key: None,
            max_width: DEFAULT_MAX_WIDTH,
            lyrics_only: false,
        }
    }
}

/// Split raw chart text into lines. Accepts `\n` and `\r\n` endings.
pub fn parse_chart(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}

/// Run every stage over already-split lines.
pub fn process_lines(lines: &[String], options: &ChartOptions) -> Vec<String> {
    let rewritten = match options.mode {
        Mode::Transpose { target } => {
            tracing::info!("Transposing chart to {target}");
            transpose_chart(lines, target, options.input_key)
        }
        Mode::Nashville => {
            let key = options.input_key.unwrap_or_else(|| detect_chart_key(lines));
            tracing::info!("Nashville mode, key {key}");
            to_nashville(lines, key)
        }
        Mode::Original => lines.to_vec(),
    };

    let sections = split_sections(&rewritten);
    let compressed = compress_repeated_sections(&sections);
    let fitted = enforce_max_width(&compressed, options.max_width);

    if options.lyrics_only {
        lyrics_only(&fitted)
    } else {
        fitted
    }
}

/// Run the full pipeline over raw chart text.
pub fn process_chart(text: &str, options: &ChartOptions) -> Vec<String> {
    process_lines(&parse_chart(text), options)
}
