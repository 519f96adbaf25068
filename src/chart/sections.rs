//! Section segmentation, repeat compression and layout normalization.
//!
//! Repeats are detected by exact equality of a section's body lines. Titles do
//! not take part, so `[Chorus]` and `[Chorus 2]` with the same lines are one
//! section for compression purposes.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::line::{is_blank, is_section_header};
use crate::constants::chart::{BLANKS_BEFORE_HEADER, UNTITLED_SECTION};

/// Regex matching a trailing repeat counter such as ` x3`.
#[allow(clippy::expect_used)]
static RE_REPEAT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" x\d+$").expect("valid regex: RE_REPEAT_SUFFIX")
});

/// A block of chart lines, optionally opened by a bracketed header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Trimmed header line, e.g. `[Verse 1]`. `None` for lines before any header.
    pub title: Option<String>,
    /// Body lines following the header, up to the next header.
    pub lines: Vec<String>,
}

impl Section {
    /// Title used when this section is rendered as a repeat marker.
    pub fn marker_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_SECTION)
    }
}

/// Where a section's repeat marker lives in the output, and how often it occurred.
#[derive(Debug)]
struct Placeholder {
    /// Total occurrences so far, including the first.
    count: usize,
    /// Output index of the marker line, set on the first repeat.
    line: Option<usize>,
}

/// Split a chart into sections at every header line.
///
/// A chart without headers is a single untitled section. An empty leading
/// untitled section is dropped; empty titled sections are kept.
pub fn split_sections(lines: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::default();

    for line in lines {
        if is_section_header(line) {
            if current.title.is_some() || !current.lines.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            current.title = Some(line.trim().to_string());
        } else {
            current.lines.push(line.clone());
        }
    }
    if current.title.is_some() || !current.lines.is_empty() {
        sections.push(current);
    }
    sections
}

/// Remove a trailing ` xN` repeat counter from a title.
fn base_title(title: &str) -> &str {
    RE_REPEAT_SUFFIX
        .find(title)
        .map_or(title, |m| &title[..m.start()])
}

/// Emit each distinct section once and collapse later repeats into marker lines.
///
/// The second occurrence appends its title as a marker. Every further
/// occurrence rewrites that same marker to `title xN`, N counting all
/// occurrences. The result is passed through [`normalize_spacing`].
pub fn compress_repeated_sections(sections: &[Section]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut placeholders: HashMap<&[String], Placeholder> = HashMap::new();

    for section in sections {
        match placeholders.entry(section.lines.as_slice()) {
            Entry::Vacant(slot) => {
                if let Some(title) = &section.title {
                    out.push(title.clone());
                }
                out.extend(section.lines.iter().cloned());
                slot.insert(Placeholder { count: 1, line: None });
            }
            Entry::Occupied(mut slot) => {
                let placeholder = slot.get_mut();
                placeholder.count += 1;

                let base = base_title(section.marker_title());
                let marker = if placeholder.count > 2 {
                    format!("{base} x{}", placeholder.count)
                } else {
                    base.to_string()
                };

                match placeholder.line {
                    Some(idx) => out[idx] = marker,
                    None => {
                        placeholder.line = Some(out.len());
                        out.push(marker);
                    }
                }
            }
        }
    }

    let repeats = sections.len() - placeholders.len();
    tracing::debug!("Compressed {repeats} repeated sections");
    normalize_spacing(out)
}

/// Force two blank lines before every header and collapse longer blank runs to two.
///
/// Whitespace-only lines count as blank and come out empty.
pub fn normalize_spacing(lines: Vec<String>) -> Vec<String> {
    let mut spaced: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if is_section_header(&line) && !spaced.is_empty() {
            while spaced.last().is_some_and(|l| is_blank(l)) {
                spaced.pop();
            }
            spaced.extend(std::iter::repeat_n(String::new(), BLANKS_BEFORE_HEADER));
        }
        spaced.push(line);
    }

    let mut result = Vec::with_capacity(spaced.len());
    let mut blank_run = 0;
    for line in spaced {
        if is_blank(&line) {
            blank_run += 1;
            if blank_run <= BLANKS_BEFORE_HEADER {
                result.push(String::new());
            }
        } else {
            blank_run = 0;
            result.push(line);
        }
    }
    result
}

/// Hard-truncate every line to at most `width` characters.
///
/// No wrapping and no ellipsis; anything past the limit is dropped.
pub fn enforce_max_width(lines: &[String], width: usize) -> Vec<String> {
    let mut truncated = 0usize;
    let out: Vec<String> = lines
        .iter()
        .map(|line| {
            if line.chars().count() > width {
                truncated += 1;
                line.chars().take(width).collect()
            } else {
                line.clone()
            }
        })
        .collect();
    if truncated > 0 {
        tracing::debug!("Truncated {truncated} lines to {width} characters");
    }
    out
}
