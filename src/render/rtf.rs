//! RTF rendering for chord charts.
//!
//! One paragraph per chart line in a monospace font, so chord columns stay
//! aligned over the lyrics. Tokens on chord and Nashville lines are bold.

use std::fmt::Write;

use crate::chart::line::{is_chord_line, is_nashville_line};
use crate::constants::render::{FONT_SIZE, LINE_SPACING, MONO_FONT};

/// RTF generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtfOptions {
    /// Font name (default: Courier New)
    pub font_name: String,
    /// Font size in points (default: 10)
    pub font_size: u32,
    /// Line spacing in twips per 240 (default: 276, i.e. 1.15 lines)
    pub line_spacing: u32,
}

impl Default for RtfOptions {
    fn default() -> Self {
        Self {
            font_name: MONO_FONT.to_string(),
            font_size: FONT_SIZE,
            line_spacing: LINE_SPACING,
        }
    }
}

/// Append `text` with RTF specials and non-ASCII characters escaped.
#[allow(clippy::cast_possible_wrap)] // RTF \u takes signed 16-bit values
fn push_escaped(rtf: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\\' => rtf.push_str(r"\\"),
            '{' => rtf.push_str(r"\{"),
            '}' => rtf.push_str(r"\}"),
            '\t' => rtf.push_str(r"\tab "),
            // Handle common Unicode characters that need escaping for Windows-1252
            '\u{2019}' => rtf.push_str(r"\'92"),  // Right single quote (')
            '\u{2018}' => rtf.push_str(r"\'91"),  // Left single quote (')
            '\u{201C}' => rtf.push_str(r"\'93"),  // Left double quote (")
            '\u{201D}' => rtf.push_str(r"\'94"),  // Right double quote (")
            '\u{2013}' => rtf.push_str(r"\'96"),  // En dash
            '\u{2026}' => rtf.push_str(r"\'85"),  // Ellipsis
            // Any other non-ASCII: \uN? where N is the signed 16-bit code unit
            _ if c as u32 > 127 => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(rtf, r"\u{}?", i32::from(*unit as i16));
                }
            }
            _ => rtf.push(c),
        }
    }
}

/// Append one line, wrapping each whitespace-separated token in `{\b ...}`.
fn push_bold_tokens(rtf: &mut String, line: &str) {
    let mut rest = line;
    while !rest.is_empty() {
        let ws_end = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
        push_escaped(rtf, &rest[..ws_end]);
        rest = &rest[ws_end..];

        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if token_end > 0 {
            rtf.push_str(r"{\b ");
            push_escaped(rtf, &rest[..token_end]);
            rtf.push('}');
        }
        rest = &rest[token_end..];
    }
}

/// Render chart lines as an RTF document with bold chord runs.
pub fn lines_to_rtf(lines: &[String], options: &RtfOptions) -> String {
    let font_size_halfpoints = options.font_size * 2;
    let spacing = options.line_spacing;

    let mut rtf = String::new();

    // RTF header
    rtf.push_str(r"{\rtf1\ansi\ansicpg1252\deff0");
    rtf.push('\n');

    let font_name = &options.font_name;
    let _ = write!(rtf, r"{{\fonttbl{{\f0\fmodern\fcharset0 {font_name};}}}}");
    rtf.push('\n');

    let _ = write!(rtf, r"\f0\fs{font_size_halfpoints}");
    rtf.push('\n');

    for line in lines {
        // Zero space before/after; \slmult1 makes \sl a multiple of single spacing
        let _ = write!(rtf, r"\pard\sb0\sa0\sl{spacing}\slmult1 ");
        if is_chord_line(line) || is_nashville_line(line) {
            push_bold_tokens(&mut rtf, line);
        } else {
            push_escaped(&mut rtf, line);
        }
        rtf.push_str(r"\par");
        rtf.push('\n');
    }

    // Close RTF document
    rtf.push('}');
    rtf
}

/// Render chart lines to RTF bytes.
pub fn lines_to_rtf_bytes(lines: &[String], options: &RtfOptions) -> Vec<u8> {
    lines_to_rtf(lines, options).into_bytes()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn render(text: &[&str]) -> String {
        let lines: Vec<String> = text.iter().map(ToString::to_string).collect();
        lines_to_rtf(&lines, &RtfOptions::default())
    }

    #[test]
    fn test_document_header_and_font() {
        let rtf = render(&["hello"]);
        assert!(rtf.starts_with(r"{\rtf1"));
        assert!(rtf.contains("Courier New;"));
        assert!(rtf.contains(r"\fs20"));
        assert!(rtf.contains(r"\sl276\slmult1 hello\par"));
        assert!(rtf.ends_with('}'));
    }

    #[test]
    fn test_chord_tokens_are_bold() {
        let rtf = render(&["G   D/F#"]);
        assert!(rtf.contains(r"{\b G}   {\b D/F#}"));
    }

    #[test]
    fn test_nashville_tokens_are_bold() {
        let rtf = render(&[" 1 6m"]);
        assert!(rtf.contains(r" {\b 1} {\b 6m}\par"));
    }

    #[test]
    fn test_lyrics_not_bold_and_escaped() {
        let rtf = render(&["grace {and} \\ peace"]);
        assert!(rtf.contains(r"grace \{and\} \\ peace\par"));
        assert!(!rtf.contains(r"{\b grace"));
    }

    #[test]
    fn test_non_ascii_escaped() {
        let rtf = render(&["C° is dim", "don\u{2019}t"]);
        assert!(rtf.contains(r"C\u176?"));
        assert!(rtf.contains(r"don\'92t"));
    }

    #[test]
    fn test_one_paragraph_per_line() {
        let rtf = render(&["a", "", "b"]);
        assert_eq!(rtf.matches(r"\par").count() - rtf.matches(r"\pard").count(), 3);
    }
}
