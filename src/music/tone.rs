// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tone table: the 12 pitch classes, their enharmonic spellings,
//! and the closed set of valid scale roots.
//!
//! Spellings are looked up through maps built once on first use, keyed
//! by spelling and by (pitch class, letter).

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Result, ScaleError};

/// Semitone offset type
pub type Semitones = u8;

/// Number of pitch classes in 12-TET
pub const PITCH_CLASSES: u8 = 12;

/// One of the 12 equal-tempered semitone positions (0-11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, wrapping values of 12 and above
    pub fn new(value: u8) -> Self {
        PitchClass(value % PITCH_CLASSES)
    }

    /// Get the raw value (0-11)
    pub fn value(self) -> u8 {
        self.0
    }

    /// Move up by the given number of semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        PitchClass::new(self.0 + semitones % PITCH_CLASSES)
    }

    /// All pitch classes in chromatic order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASSES).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Note letters A-G
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// All letters in alphabetical order
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Parse a single letter character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    /// Letter of a note name (its first character)
    pub fn of(note: &str) -> Option<Self> {
        note.chars().next().and_then(Letter::from_char)
    }

    /// Position within A-G (A = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next letter, wrapping G back to A
    pub fn next(self) -> Self {
        Letter::ALL[(self.index() + 1) % Letter::ALL.len()]
    }

    /// The seven letters starting at this one (e.g. D -> D E F G A B C)
    pub fn rotation(self) -> [Letter; 7] {
        let mut letters = [self; 7];
        for i in 1..letters.len() {
            letters[i] = letters[i - 1].next();
        }
        letters
    }

    /// The letter as an uppercase character
    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Enharmonic spellings of each pitch class, indexed by pitch class
const SPELLINGS: [&[&str]; 12] = [
    &["B#", "C", "Dbb"],
    &["C#", "Db"],
    &["C##", "D", "Ebb"],
    &["D#", "Eb"],
    &["D##", "E", "Fb"],
    &["E#", "F", "Gbb"],
    &["E##", "F#", "Gb"],
    &["F##", "G", "Abb"],
    &["G#", "Ab"],
    &["G##", "A", "Bbb"],
    &["A#", "Bb", "Cbb"],
    &["A##", "B", "Cb"],
];

/// Valid scale roots in circle-of-fifths order, enharmonics adjacent
const CIRCLE_OF_FIFTHS: [&str; 21] = [
    "C", "B#", "G", "D", "A", "E", "Fb", "B", "Cb", "F#", "Gb", "C#", "Db", "Ab", "G#", "Eb",
    "D#", "Bb", "A#", "F", "E#",
];

struct ToneTable {
    by_name: HashMap<&'static str, PitchClass>,
    by_letter: HashMap<(PitchClass, Letter), &'static str>,
}

fn table() -> &'static ToneTable {
    static TABLE: OnceLock<ToneTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut by_name = HashMap::new();
        let mut by_letter = HashMap::new();
        for (pc, spellings) in PitchClass::all().zip(SPELLINGS.iter()) {
            for &name in spellings.iter() {
                by_name.insert(name, pc);
                if let Some(letter) = Letter::of(name) {
                    by_letter.insert((pc, letter), name);
                }
            }
        }
        ToneTable { by_name, by_letter }
    })
}

/// Pitch class of a note name, if the spelling is known
pub fn pitch_class_of(note: &str) -> Option<PitchClass> {
    table().by_name.get(note).copied()
}

/// All spellings of a pitch class
pub fn spellings_of(pc: PitchClass) -> &'static [&'static str] {
    SPELLINGS[pc.value() as usize]
}

/// The spelling of a pitch class that uses the given letter
pub fn spelling_for(pc: PitchClass, letter: Letter) -> Result<&'static str> {
    table()
        .by_letter
        .get(&(pc, letter))
        .copied()
        .ok_or(ScaleError::InternalSpellingGap {
            pitch_class: pc.value(),
            letter,
        })
}

/// The closed set of valid roots, in circle-of-fifths order
pub fn circle_of_fifths() -> &'static [&'static str] {
    &CIRCLE_OF_FIFTHS
}

/// Validate a root name, returning the table's copy of it
pub fn root(name: &str) -> Result<&'static str> {
    CIRCLE_OF_FIFTHS
        .iter()
        .find(|&&r| r == name)
        .copied()
        .ok_or_else(|| ScaleError::RootNotRecognized(name.to_string()))
}
