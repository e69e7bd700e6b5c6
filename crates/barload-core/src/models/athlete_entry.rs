use serde::{Deserialize, Serialize};

/// An athlete entered in a session, as supplied by the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteEntry {
    /// Display name; also the key used to match history rows.
    pub name: String,
    /// Declared entry total in kg. 0 means no declared total.
    #[serde(default)]
    pub entry_total: u32,
}

impl AthleteEntry {
    pub fn new(name: impl Into<String>, entry_total: u32) -> Self {
        Self {
            name: name.into(),
            entry_total,
        }
    }

    /// Whether the athlete declared a usable entry total.
    pub fn has_entry_total(&self) -> bool {
        self.entry_total > 0
    }
}
