// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory tables and the scale builder.
//!
//! The tone table maps pitch classes to spellings, the mode table maps
//! mode names to step patterns, and the builder combines the two.

pub mod mode;
pub mod scale;
pub mod tone;

pub use mode::{modes, Mode, Step};
pub use scale::{article_for, Scale};
pub use tone::{circle_of_fifths, Letter, PitchClass};
