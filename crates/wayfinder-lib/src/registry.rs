use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::location::LocationId;

/// Icon used for locations without registered metadata.
pub const DEFAULT_ICON: &str = "📍";

/// Display metadata for a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMetadata {
    /// Short display name, e.g. "Main Entrance".
    pub name: String,
    /// Category glyph shown next to the name.
    pub icon: String,
    /// Long-form descriptive name.
    pub full_name: String,
}

impl LocationMetadata {
    /// Metadata derived from the identifier alone.
    pub fn fallback(id: &LocationId) -> Self {
        Self {
            name: id.to_string(),
            icon: DEFAULT_ICON.to_string(),
            full_name: id.to_string(),
        }
    }
}

/// Immutable lookup table from location identifier to display metadata.
///
/// Lookups never fail: a location without an entry is described by its
/// identifier and [`DEFAULT_ICON`].
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    entries: Arc<HashMap<LocationId, LocationMetadata>>,
}

impl LocationRegistry {
    pub fn from_entries(entries: impl IntoIterator<Item = (LocationId, LocationMetadata)>) -> Self {
        Self {
            entries: Arc::new(entries.into_iter().collect()),
        }
    }

    /// Registered metadata, if any.
    pub fn get(&self, id: &str) -> Option<&LocationMetadata> {
        self.entries.get(id)
    }

    /// Metadata for `id`, falling back to the identifier itself.
    pub fn describe(&self, id: &LocationId) -> LocationMetadata {
        self.get(id.as_str())
            .cloned()
            .unwrap_or_else(|| LocationMetadata::fallback(id))
    }

    pub fn display_name<'a>(&'a self, id: &'a LocationId) -> &'a str {
        self.get(id.as_str())
            .map(|meta| meta.name.as_str())
            .unwrap_or(id.as_str())
    }

    pub fn icon<'a>(&'a self, id: &LocationId) -> &'a str {
        self.get(id.as_str())
            .map(|meta| meta.icon.as_str())
            .unwrap_or(DEFAULT_ICON)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
