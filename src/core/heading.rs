//! # Headings
//!
//! Static proverb pools, one per locale, and the reroll rule: pick a new
//! index uniformly at random, never the one currently on screen.
//!
//! The pool is an explicit value (`HeadingPool`) owned by the caller. Nothing
//! here keeps state between calls, so a seeded RNG gives repeatable results.

use std::fmt;

use rand::Rng;

use crate::core::locale::Locale;

const EN_HEADINGS: &[&str] = &[
    "All that glitters is not gold.",
    "Better late than never.",
    "Clothes do not make the man.",
];

const PL_HEADINGS: &[&str] = &[
    "Nie wszystko złoto co się świeci.",
    "Lepiej późno niż wcale.",
    "Nie szata zdobi człowieka.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingError {
    /// Fewer than two phrases: no index can differ from the current one.
    PoolTooSmall { len: usize },
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for HeadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingError::PoolTooSmall { len } => {
                write!(f, "heading pool needs at least 2 phrases, has {len}")
            }
            HeadingError::IndexOutOfRange { index, len } => {
                write!(f, "heading index {index} out of range for pool of {len}")
            }
        }
    }
}

impl std::error::Error for HeadingError {}

/// The fixed phrase list for a locale.
pub fn pool_for(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => EN_HEADINGS,
        Locale::Pl => PL_HEADINGS,
    }
}

/// Picks a uniformly random index in `[0, pool.len())` that differs from
/// `current`. With no current index every phrase is a candidate.
///
/// Draws once from the `len - 1` remaining slots and shifts past `current`,
/// so there is no retry loop.
pub fn reroll<R: Rng>(
    pool: &[&str],
    current: Option<usize>,
    rng: &mut R,
) -> Result<usize, HeadingError> {
    let len = pool.len();
    if len < 2 {
        return Err(HeadingError::PoolTooSmall { len });
    }
    match current {
        None => Ok(rng.gen_range(0..len)),
        Some(index) if index >= len => Err(HeadingError::IndexOutOfRange { index, len }),
        Some(index) => {
            let pick = rng.gen_range(0..len - 1);
            Ok(if pick >= index { pick + 1 } else { pick })
        }
    }
}

pub fn lookup<'a>(pool: &[&'a str], index: usize) -> Option<&'a str> {
    pool.get(index).copied()
}

/// A locale's phrase list, carried by value through reroll commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingPool {
    locale: Locale,
    phrases: &'static [&'static str],
}

impl HeadingPool {
    pub fn for_locale(locale: Locale) -> Self {
        Self::new(locale, pool_for(locale))
    }

    fn new(locale: Locale, phrases: &'static [&'static str]) -> Self {
        Self { locale, phrases }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn reroll<R: Rng>(
        &self,
        current: Option<usize>,
        rng: &mut R,
    ) -> Result<usize, HeadingError> {
        reroll(self.phrases, current, rng)
    }

    pub fn lookup(&self, index: usize) -> Result<&'static str, HeadingError> {
        lookup(self.phrases, index).ok_or(HeadingError::IndexOutOfRange {
            index,
            len: self.phrases.len(),
        })
    }
}
