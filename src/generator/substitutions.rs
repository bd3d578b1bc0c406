//! Ordered token replacement.

use anyhow::Result;

/// Mapping from placeholder token to replacement, applied in insertion order.
///
/// Later entries see the output of earlier ones, so a replacement value that
/// itself contains a token will be rewritten by any later matching entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a replacement. Re-adding a token updates its value in place.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    /// Adds a replacement. Re-adding a token updates its value in place.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == token) {
            entry.1 = value;
        } else {
            self.entries.push((token, value));
        }
    }

    /// Parses a `TOKEN=VALUE` pair as given on the command line.
    pub fn parse_pair(pair: &str) -> Result<(String, String)> {
        match pair.split_once('=') {
            Some((token, value)) if !token.is_empty() => Ok((token.to_string(), value.to_string())),
            _ => anyhow::bail!("Invalid substitution '{pair}': expected TOKEN=VALUE"),
        }
    }

    /// Applies every replacement to `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (token, value)| acc.replace(token, value))
    }
}
