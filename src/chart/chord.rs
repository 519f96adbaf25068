//! Chord token parsing.
//!
//! A chord token has the shape `Root[Suffix][/Bass]`. The suffix is carried as
//! opaque text; only its character set is inspected, to tell chords apart from
//! lyric words that happen to start with a pitch letter.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::theory::Note;

/// Regex matching a whole chord token with named root, suffix and bass groups.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<root>[A-G][#b]?)(?P<suffix>[^\s/]*)(?:/(?P<bass>[A-G][#b]?))?$")
        .expect("valid regex: RE_CHORD")
});

/// Characters that may appear in a chord suffix. Anything else marks lyrics.
const SUFFIX_CHARS: &[char] = &[
    'm', 'M', 'a', 'j', 'd', 'i', 'u', 'g', 's', 'b', '#', '+', '(', ')',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'º', 'ø', '°',
];

/// A parsed chord: root, free-text quality suffix and optional bass note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    /// Root note of the chord.
    pub root: Note,
    /// Everything between the root and the slash, e.g. `m7`, `sus4`, `maj7`.
    pub suffix: String,
    /// Slash bass note, if any.
    pub bass: Option<Note>,
}

impl Chord {
    /// Whether every suffix character belongs to the chord-quality alphabet.
    pub fn has_chord_suffix(&self) -> bool {
        self.suffix.chars().all(|c| SUFFIX_CHARS.contains(&c))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = self.bass {
            write!(f, "/{bass}")?;
        }
        Ok(())
    }
}

/// Parse a single token into a [`Chord`].
///
/// Fails with [`Error::MalformedChord`] when the token does not start with a
/// root letter, does not decompose as `Root[Suffix][/Bass]`, or spells a root
/// or bass outside the recognized note names (`E#`, `Cb`, ...).
pub fn parse_chord(text: &str) -> Result<Chord> {
    let caps = RE_CHORD.captures(text).ok_or_else(|| Error::malformed(text))?;

    let root = caps
        .name("root")
        .ok_or_else(|| Error::malformed(text))?
        .as_str()
        .parse::<Note>()
        .map_err(|_| Error::malformed(text))?;
    let suffix = caps.name("suffix").map_or("", |m| m.as_str()).to_string();
    let bass = caps
        .name("bass")
        .map(|m| m.as_str().parse::<Note>())
        .transpose()
        .map_err(|_| Error::malformed(text))?;

    Ok(Chord { root, suffix, bass })
}

/// Whether `token` is a chord rather than a lyric word. Never fails.
pub fn is_chord_token(token: &str) -> bool {
    parse_chord(token).is_ok_and(|chord| chord.has_chord_suffix())
}
