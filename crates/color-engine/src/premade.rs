use std::collections::HashMap;

use serde::Deserialize;

use crate::{Error, Result};

/// Curated palettes keyed by exact hex string, loaded from a read-only
/// JSON asset by the hosting application.
///
/// The engine only ever queries this by membership; it never writes to
/// it and generation proceeds without it when no catalog was supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PremadeCatalog {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl PremadeCatalog {
    pub fn from_json(data: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<Vec<String>>> =
            serde_json::from_str(data).map_err(|err| Error::AssetUnavailable(err.to_string()))?;

        // Lookups are by exact hex membership; normalize key casing once
        // so callers can query with the canonical uppercase form.
        let entries = raw
            .into_iter()
            .map(|(hex, palettes)| (hex.to_ascii_uppercase(), palettes))
            .collect();

        Ok(PremadeCatalog { entries })
    }

    /// The curated palettes recorded for this exact hex color, if any.
    pub fn matching(&self, hex: &str) -> Vec<Vec<String>> {
        self.entries
            .get(&hex.to_ascii_uppercase())
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
