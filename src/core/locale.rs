//! # Locale
//!
//! The two languages Voltage speaks. Also carries the handful of UI strings
//! that change with the language, since there are too few to justify a
//! translation framework.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Pl,
}

impl Locale {
    /// Every supported locale, in the order the selector lists them.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pl];

    /// The code stored in the rc file.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Pl => "PL",
        }
    }

    /// Native name shown next to the code in the selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Pl => "Polski",
        }
    }

    pub fn reroll_hint(self) -> &'static str {
        match self {
            Locale::En => "space: another proverb  q: quit",
            Locale::Pl => "spacja: kolejne przysłowie  q: wyjście",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale {:?} (expected EN or PL)", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EN" => Ok(Locale::En),
            "PL" => Ok(Locale::Pl),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
