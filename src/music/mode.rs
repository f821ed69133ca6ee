// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Mode table: named seven-step interval patterns.
//!
//! The seven diatonic modes are rotations of the major step pattern.
//! Major and Minor are aliases of Ionian and Aeolian, and a few
//! non-diatonic scales are listed with fixed patterns.

use std::fmt;
use std::sync::OnceLock;

use super::tone::Semitones;
use crate::error::{Result, ScaleError};
use Step::{Half, Whole, WholeHalf};

/// A single interval step between adjacent scale degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Half,
    Whole,
    /// Augmented second
    WholeHalf,
}

impl Step {
    /// Size of this step in semitones
    pub fn semitones(self) -> Semitones {
        match self {
            Step::Half => 1,
            Step::Whole => 2,
            Step::WholeHalf => 3,
        }
    }
}

/// Diatonic modes in rotation order
const DIATONIC_MODES: [&str; 7] = [
    "Ionian",
    "Dorian",
    "Phrygian",
    "Lydian",
    "Mixolydian",
    "Aeolian",
    "Locrian",
];

/// Step pattern of the Ionian mode; every diatonic mode is a rotation of it
const DIATONIC_STEPS: [Step; 7] = [Whole, Whole, Half, Whole, Whole, Whole, Half];

/// A named interval pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    name: &'static str,
    steps: [Step; 7],
}

impl Mode {
    fn new(name: &'static str, steps: [Step; 7]) -> Self {
        Self { name, steps }
    }

    /// Diatonic mode starting on the given degree of the major pattern
    fn diatonic(name: &'static str, degree: usize) -> Self {
        let mut steps = DIATONIC_STEPS;
        steps.rotate_left(degree);
        Self::new(name, steps)
    }

    /// Same pattern under another name
    fn alias(name: &'static str, of: &Mode) -> Self {
        Self::new(name, of.steps)
    }

    /// Name as listed in the mode table (e.g. "Harmonic Minor")
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All seven steps, including the one back to the octave
    pub fn steps(&self) -> &[Step; 7] {
        &self.steps
    }

    /// Semitone deltas between the seven scale degrees.
    /// The final step back to the octave is left out.
    pub fn deltas(&self) -> [Semitones; 6] {
        let mut deltas = [0; 6];
        for (delta, step) in deltas.iter_mut().zip(self.steps.iter()) {
            *delta = step.semitones();
        }
        deltas
    }

    /// Semitone offsets of each degree from the root
    pub fn intervals(&self) -> [Semitones; 7] {
        let mut intervals = [0; 7];
        for (i, delta) in self.deltas().iter().enumerate() {
            intervals[i + 1] = intervals[i] + delta;
        }
        intervals
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn table() -> &'static [Mode] {
    static MODES: OnceLock<Vec<Mode>> = OnceLock::new();
    MODES.get_or_init(|| {
        let mut modes: Vec<Mode> = DIATONIC_MODES
            .iter()
            .enumerate()
            .map(|(degree, &name)| Mode::diatonic(name, degree))
            .collect();

        let major = Mode::alias("Major", &modes[0]);
        let minor = Mode::alias("Minor", &modes[5]);
        modes.push(major);
        modes.push(minor);

        modes.push(Mode::new(
            "Harmonic Minor",
            [Whole, Half, Whole, Whole, Half, WholeHalf, Half],
        ));
        modes.push(Mode::new(
            "Melodic Minor",
            [Whole, Half, Whole, Whole, Whole, Whole, Half],
        ));
        modes.push(Mode::new(
            "Phrygian Dominant",
            [Half, WholeHalf, Half, Whole, Half, Whole, Whole],
        ));
        modes
    })
}

/// All supported modes in table order
pub fn modes() -> &'static [Mode] {
    table()
}

/// Look up a mode by its exact name
pub fn lookup(name: &str) -> Result<&'static Mode> {
    table()
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| ScaleError::ModeNotSupported(name.to_string()))
}
