//! The rc file format: one `KEY=VALUE` pair per line.
//!
//! Parsing goes through the `dotenvy` line parser. Writing always quotes
//! values and escapes everything that parser would otherwise interpret,
//! so whatever `serialize` produces `parse` reads back unchanged.

use std::collections::HashMap;

use crate::core::locale::Locale;

use super::backend::StoreError;

pub const API_URL_KEY: &str = "VOLTAGE_API_URL";
pub const LOCALE_KEY: &str = "VOLTAGE_LOCALE";

/// The two settings Voltage keeps between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcConfig {
    /// Opaque, may be empty.
    pub api_url: String,
    /// `None` until the user picks a language.
    pub locale: Option<Locale>,
}

impl RcConfig {
    pub fn from_entries(entries: &HashMap<String, String>) -> Result<Self, StoreError> {
        let api_url = entries.get(API_URL_KEY).cloned().unwrap_or_default();
        let locale = match entries.get(LOCALE_KEY).map(|v| v.trim()) {
            None | Some("") => None,
            Some(value) => Some(
                value
                    .parse::<Locale>()
                    .map_err(|e| StoreError::Parse(format!("{LOCALE_KEY}: {e}")))?,
            ),
        };
        Ok(Self { api_url, locale })
    }
}

/// Parses rc text into raw key/value entries.
pub fn parse(content: &str) -> Result<HashMap<String, String>, StoreError> {
    let mut entries = HashMap::new();
    for line in dotenvy::from_read_iter(content.as_bytes()) {
        let (key, value) = line.map_err(|e| StoreError::Parse(e.to_string()))?;
        entries.insert(key, value);
    }
    Ok(entries)
}

pub fn parse_config(content: &str) -> Result<RcConfig, StoreError> {
    let entries = parse(content)?;
    let unknown: Vec<&str> = entries
        .keys()
        .map(String::as_str)
        .filter(|k| *k != API_URL_KEY && *k != LOCALE_KEY)
        .collect();
    if !unknown.is_empty() {
        log::debug!("Ignoring unknown rc keys: {:?}", unknown);
    }
    RcConfig::from_entries(&entries)
}

pub fn serialize(config: &RcConfig) -> String {
    let locale = config.locale.map(Locale::code).unwrap_or("");
    format!(
        "{API_URL_KEY}={}\n{LOCALE_KEY}={}\n",
        quote(&config.api_url),
        quote(locale)
    )
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
