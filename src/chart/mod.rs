//! Chord chart processing: tokenizing, key detection, transposition,
//! Nashville conversion and section compression.

pub mod chord;
pub mod key;
pub mod line;
pub mod nashville;
pub mod sections;
pub mod transpose;

pub use chord::{is_chord_token, parse_chord, Chord};
pub use key::{detect_chart_key, detect_key};
pub use line::{classify, is_chord_line, is_nashville_line, is_section_header, LineKind};
pub use nashville::{chord_to_nashville, to_nashville};
pub use sections::{compress_repeated_sections, enforce_max_width, split_sections, Section};
pub use transpose::{transpose_chart, transpose_chord, transpose_chord_str};
