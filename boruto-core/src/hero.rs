use serde::{Deserialize, Serialize};

use crate::id::HeroId;

/// A single catalog record.
///
/// Only [`Hero::name`] takes part in search; every other field is carried
/// through to clients unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Catalog identifier.
    pub id: HeroId,
    /// Display name, e.g. `"Sasuke"`.
    pub name: String,
    /// Image path served under `/images`.
    pub image: String,
    /// Short biography.
    pub about: String,
    /// Fan rating out of 5.
    pub rating: f64,
    /// Power level out of 100.
    pub power: u32,
    /// Birth month.
    pub month: String,
    /// Birth day of month.
    pub day: String,
    /// Close relatives.
    pub family: Vec<String>,
    /// Signature techniques.
    pub abilities: Vec<String>,
    /// Chakra nature types.
    pub nature_types: Vec<String>,
}

impl Hero {
    /// Returns `true` if the name contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
