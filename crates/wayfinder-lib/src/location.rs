use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Case-insensitive identifier for a location in the facility graph.
///
/// Identifiers are stored in canonical form: surrounding whitespace trimmed
/// and ASCII letters upper-cased, so `" pkg "` and `"PKG"` compare equal.
/// A well-formed identifier is non-empty and made of ASCII letters, digits,
/// `-` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    /// Normalize and validate a raw identifier.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let well_formed = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !well_formed {
            return Err(Error::MalformedLocation {
                raw: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Borrow<str> for LocationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for LocationId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        LocationId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_uppercases() {
        let id = LocationId::parse("  pkg\t").unwrap();
        assert_eq!(id.as_str(), "PKG");
        assert_eq!(id, LocationId::parse("PKG").unwrap());
    }

    #[test]
    fn parse_accepts_separators_and_digits() {
        assert_eq!(LocationId::parse("ward-2_b").unwrap().as_str(), "WARD-2_B");
    }

    #[test]
    fn parse_rejects_blank_and_illegal_input() {
        for raw in ["", "   ", "P K G", "ME;DROP", "caf\u{e9}"] {
            let error = LocationId::parse(raw).expect_err(raw);
            assert!(matches!(error, Error::MalformedLocation { .. }), "{raw}");
        }
    }

    #[test]
    fn deserialize_normalizes() {
        let id: LocationId = serde_json::from_str("\"lab\"").unwrap();
        assert_eq!(id.as_str(), "LAB");
        assert!(serde_json::from_str::<LocationId>("\"\"").is_err());
    }
}
