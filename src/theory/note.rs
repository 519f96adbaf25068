//! Pitch classes and semitone arithmetic.
//!
//! Notes are always stored in their sharp spelling. Flat spellings are accepted
//! on input and normalized on the way in, so every comparison and every index
//! computation works on one of twelve canonical values.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One of the twelve pitch classes, canonically spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Note {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
}

/// Semitone offsets of the major scale, indexed by degree minus one.
const MAJOR_SCALE: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

impl Note {
    /// All notes in chromatic order starting from C.
    pub const ALL: [Self; 12] = [
        Self::C, Self::Cs, Self::D, Self::Ds, Self::E, Self::F,
        Self::Fs, Self::G, Self::Gs, Self::A, Self::As, Self::B,
    ];

    /// Position of the note in the chromatic cycle (C = 0 .. B = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Note at the given chromatic position, taken modulo 12.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Shift the note by `interval` semitones. Negative and large intervals wrap.
    pub fn transpose(self, interval: i32) -> Self {
        let shifted = (i32::from(self.index()) + interval).rem_euclid(12);
        // rem_euclid(12) is always in 0..12
        Self::from_index(usize::try_from(shifted).unwrap_or_default())
    }

    /// Upward semitone distance from `self` to `other`, in `0..12`.
    pub const fn interval_to(self, other: Self) -> u8 {
        (other.index() + 12 - self.index()) % 12
    }

    /// Canonical sharp spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cs => "C#",
            Self::D => "D",
            Self::Ds => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::Fs => "F#",
            Self::G => "G",
            Self::Gs => "G#",
            Self::A => "A",
            Self::As => "A#",
            Self::B => "B",
        }
    }

    /// Parse a caller-supplied key. The root letter is case-insensitive.
    ///
    /// Accepts `eb`, `Eb`, `F#`, `bb` and so on. Anything outside the
    /// seventeen recognized spellings is an [`Error::UnknownKey`].
    pub fn parse_key(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return Err(Error::unknown_key(input));
        };
        let spelled = format!("{}{}", first.to_ascii_uppercase(), chars.as_str());
        spelled.parse().map_err(|_| Error::unknown_key(input))
    }
}

impl FromStr for Note {
    type Err = Error;

    /// Strict spelling lookup: uppercase root letter, optional `#` or `b`.
    fn from_str(s: &str) -> Result<Self> {
        let note = match s {
            "C" => Self::C,
            "C#" | "Db" => Self::Cs,
            "D" => Self::D,
            "D#" | "Eb" => Self::Ds,
            "E" => Self::E,
            "F" => Self::F,
            "F#" | "Gb" => Self::Fs,
            "G" => Self::G,
            "G#" | "Ab" => Self::Gs,
            "A" => Self::A,
            "A#" | "Bb" => Self::As,
            "B" => Self::B,
            _ => return Err(Error::malformed(s)),
        };
        Ok(note)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Major-scale degree (1..=7) of `note` relative to `key`.
///
/// Chromatic notes with no diatonic degree return `None`.
pub fn scale_degree(key: Note, note: Note) -> Option<u8> {
    let offset = key.interval_to(note);
    MAJOR_SCALE
        .iter()
        .position(|&step| step == offset)
        .and_then(|pos| u8::try_from(pos + 1).ok())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const SPELLINGS: [&str; 17] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        "Db", "Eb", "Gb", "Ab", "Bb",
    ];

    #[test]
    fn test_flats_normalize_to_sharps() {
        assert_eq!("Db".parse::<Note>().unwrap(), Note::Cs);
        assert_eq!("Bb".parse::<Note>().unwrap().to_string(), "A#");
        assert_eq!("Gb".parse::<Note>().unwrap().name(), "F#");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for spelling in SPELLINGS {
            let once: Note = spelling.parse().unwrap();
            let twice: Note = once.to_string().parse().unwrap();
            assert_eq!(once, twice, "{spelling}");
        }
    }

    #[test]
    fn test_index_covers_all_twelve() {
        for (i, note) in Note::ALL.iter().enumerate() {
            assert_eq!(usize::from(note.index()), i);
            assert_eq!(Note::from_index(i), *note);
        }
    }

    #[test]
    fn test_unrecognized_spellings_rejected() {
        for bad in ["H", "E#", "Cb", "c", "", "C##"] {
            assert!(bad.parse::<Note>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(Note::A.transpose(3), Note::C);
        assert_eq!(Note::C.transpose(-1), Note::B);
        assert_eq!(Note::D.transpose(26), Note::E);
        assert_eq!(Note::G.transpose(-19), Note::C);
    }

    #[test]
    fn test_transpose_round_trip() {
        for note in Note::ALL {
            for interval in -24..=24 {
                assert_eq!(note.transpose(interval).transpose(-interval), note);
            }
        }
    }

    #[test]
    fn test_interval_to() {
        assert_eq!(Note::C.interval_to(Note::D), 2);
        assert_eq!(Note::D.interval_to(Note::C), 10);
        assert_eq!(Note::F.interval_to(Note::F), 0);
    }

    #[test]
    fn test_scale_degree() {
        assert_eq!(scale_degree(Note::C, Note::C), Some(1));
        assert_eq!(scale_degree(Note::C, Note::A), Some(6));
        assert_eq!(scale_degree(Note::G, Note::Fs), Some(7));
        assert_eq!(scale_degree(Note::C, Note::Cs), None);
        assert_eq!(scale_degree(Note::D, Note::C), None);
    }

    #[test]
    fn test_parse_key_case_insensitive_root() {
        assert_eq!(Note::parse_key("eb").unwrap(), Note::Ds);
        assert_eq!(Note::parse_key("f#").unwrap(), Note::Fs);
        assert_eq!(Note::parse_key(" G ").unwrap(), Note::G);
        assert_eq!(Note::parse_key("bb").unwrap(), Note::As);
    }

    #[test]
    fn test_parse_key_unknown() {
        for bad in ["", "H", "E#", "Cm", "EB"] {
            match Note::parse_key(bad) {
                Err(Error::UnknownKey { input }) => assert_eq!(input, bad),
                other => panic!("Expected UnknownKey for {bad:?}, got {other:?}"),
            }
        }
    }
}
