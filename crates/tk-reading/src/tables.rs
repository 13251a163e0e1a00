//! Outcome tables that map drawn cards to narrative results.
//!
//! The configuration document has this shape:
//!
//! ```text
//! {
//!   "artifactReadings": {
//!     "sunsword": { "possibleLocations": [ { "cardId", "locationId", "name", "description" } ] },
//!     "holySymbol": { "possibleLocations": [ ... ] },
//!     "tome": { "possibleLocations": [ ... ] }
//!   },
//!   "allyReading":  { "possibleAllies":    [ { "cardId", "allyId", "name", "description" } ] },
//!   "enemyReading": { "possibleLocations": [ ... ] },
//!   "fallbackDefaults": { "sunsword", "holySymbol", "tome", "ally", "enemy" }
//! }
//! ```
//!
//! Tables may mention cards the deck does not contain, and the deck may hold
//! cards no table mentions. Neither is an error. When a table lists the same
//! card twice, the first entry wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::{ArtifactKind, Category};
use crate::error::{LoadError, LoadResult};

/// A table row mapping a card to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    /// Card that selects this row.
    pub card_id: String,
    /// Location identifier.
    pub location_id: String,
    /// Location display name.
    pub name: String,
    /// Narrative description read to the players.
    #[serde(default)]
    pub description: String,
}

/// A table row mapping a card to an ally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllyEntry {
    /// Card that selects this row.
    pub card_id: String,
    /// Ally identifier.
    pub ally_id: String,
    /// Ally display name.
    pub name: String,
    /// Narrative description.
    #[serde(default)]
    pub description: String,
}

/// Default location used when a card has no row in its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackLocation {
    /// Location identifier.
    pub location_id: String,
    /// Display name; resolution substitutes a placeholder when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Narrative description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Default ally used when a card has no row in the ally table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackAlly {
    /// Ally identifier.
    pub ally_id: String,
    /// Display name; resolution substitutes a placeholder when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Narrative description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A list of candidate locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTable {
    /// Rows in definition order.
    #[serde(default)]
    pub possible_locations: Vec<LocationEntry>,
}

/// Location tables for the three artifacts.
///
/// A missing table makes that artifact key unknown to resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactReadings {
    /// Sunsword locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunsword: Option<LocationTable>,
    /// Holy Symbol locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holy_symbol: Option<LocationTable>,
    /// Tome locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tome: Option<LocationTable>,
}

/// The ally table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllyReading {
    /// Rows in definition order.
    #[serde(default)]
    pub possible_allies: Vec<AllyEntry>,
}

/// One default outcome per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackDefaults {
    /// Default Sunsword location.
    pub sunsword: FallbackLocation,
    /// Default Holy Symbol location.
    pub holy_symbol: FallbackLocation,
    /// Default Tome location.
    pub tome: FallbackLocation,
    /// Default ally.
    pub ally: FallbackAlly,
    /// Default final confrontation location.
    pub enemy: FallbackLocation,
}

impl FallbackDefaults {
    /// Default location for a location category (`None` for the ally).
    pub fn location(&self, category: Category) -> Option<&FallbackLocation> {
        match category {
            Category::Sunsword => Some(&self.sunsword),
            Category::HolySymbol => Some(&self.holy_symbol),
            Category::Tome => Some(&self.tome),
            Category::Enemy => Some(&self.enemy),
            Category::Ally => None,
        }
    }
}

/// The complete reading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingConfig {
    /// Artifact location tables.
    #[serde(default)]
    pub artifact_readings: ArtifactReadings,
    /// Ally table.
    #[serde(default)]
    pub ally_reading: AllyReading,
    /// Final confrontation table.
    #[serde(default)]
    pub enemy_reading: LocationTable,
    /// Per-category defaults.
    pub fallback_defaults: FallbackDefaults,
    #[serde(skip)]
    index: Option<CardIndex>,
}

/// `cardId -> row` per category, first definition wins.
#[derive(Debug, Clone, Default)]
struct CardIndex {
    rows: HashMap<Category, HashMap<String, usize>>,
}

impl CardIndex {
    fn insert_all<'a>(&mut self, category: Category, card_ids: impl Iterator<Item = &'a str>) {
        let rows = self.rows.entry(category).or_default();
        for (row, card_id) in card_ids.enumerate() {
            rows.entry(card_id.to_string()).or_insert(row);
        }
    }

    fn get(&self, category: Category, card_id: &str) -> Option<usize> {
        self.rows.get(&category)?.get(card_id).copied()
    }
}

impl ReadingConfig {
    /// Build a configuration from its parts. Call [`ReadingConfig::validate`]
    /// before use to check it and build the lookup index.
    pub fn new(
        artifact_readings: ArtifactReadings,
        ally_reading: AllyReading,
        enemy_reading: LocationTable,
        fallback_defaults: FallbackDefaults,
    ) -> Self {
        Self {
            artifact_readings,
            ally_reading,
            enemy_reading,
            fallback_defaults,
            index: None,
        }
    }

    /// Check structural invariants and precompute the card lookup index.
    pub fn validate(mut self) -> LoadResult<Self> {
        let fb = &self.fallback_defaults;
        for (category, id) in [
            (Category::Sunsword, &fb.sunsword.location_id),
            (Category::HolySymbol, &fb.holy_symbol.location_id),
            (Category::Tome, &fb.tome.location_id),
            (Category::Ally, &fb.ally.ally_id),
            (Category::Enemy, &fb.enemy.location_id),
        ] {
            if id.trim().is_empty() {
                return Err(LoadError::InvalidConfig(format!(
                    "fallback for {} has an empty id",
                    category.key()
                )));
            }
        }

        for category in Category::ALL {
            if let Some(rows) = self.location_table(category) {
                if let Some(row) = rows
                    .iter()
                    .position(|e| e.card_id.is_empty() || e.location_id.is_empty())
                {
                    return Err(LoadError::InvalidConfig(format!(
                        "{} entry {row} is missing cardId or locationId",
                        category.key()
                    )));
                }
            }
        }
        if let Some(row) = self
            .ally_reading
            .possible_allies
            .iter()
            .position(|e| e.card_id.is_empty() || e.ally_id.is_empty())
        {
            return Err(LoadError::InvalidConfig(format!(
                "ally entry {row} is missing cardId or allyId"
            )));
        }

        let mut index = CardIndex::default();
        for category in Category::ALL {
            if let Some(rows) = self.location_table(category) {
                index.insert_all(category, rows.iter().map(|e| e.card_id.as_str()));
            }
        }
        index.insert_all(
            Category::Ally,
            self.ally_reading
                .possible_allies
                .iter()
                .map(|e| e.card_id.as_str()),
        );
        self.index = Some(index);

        Ok(self)
    }

    /// Location rows for a category, or `None` if the category has no
    /// location table (the ally, or an artifact missing from the document).
    pub fn location_table(&self, category: Category) -> Option<&[LocationEntry]> {
        let table = match category {
            Category::Sunsword => self.artifact_readings.sunsword.as_ref(),
            Category::HolySymbol => self.artifact_readings.holy_symbol.as_ref(),
            Category::Tome => self.artifact_readings.tome.as_ref(),
            Category::Enemy => Some(&self.enemy_reading),
            Category::Ally => None,
        };
        table.map(|t| t.possible_locations.as_slice())
    }

    /// Location rows for an artifact, if the document defines that table.
    pub fn artifact_table(&self, artifact: ArtifactKind) -> Option<&[LocationEntry]> {
        self.location_table(artifact.category())
    }

    /// First location row for `card_id` in a category.
    pub fn find_location(&self, category: Category, card_id: &str) -> Option<&LocationEntry> {
        let rows = self.location_table(category)?;
        self.indexed_row(category, card_id, rows, |e| &e.card_id)
            .or_else(|| rows.iter().find(|e| e.card_id == card_id))
    }

    /// First ally row for `card_id`.
    pub fn find_ally(&self, card_id: &str) -> Option<&AllyEntry> {
        let rows = &self.ally_reading.possible_allies;
        self.indexed_row(Category::Ally, card_id, rows, |e| &e.card_id)
            .or_else(|| rows.iter().find(|e| e.card_id == card_id))
    }

    /// Index fast path. A row whose id no longer matches (tables edited after
    /// validation) is ignored and the caller falls back to a linear scan.
    fn indexed_row<'a, T>(
        &self,
        category: Category,
        card_id: &str,
        rows: &'a [T],
        id_of: impl Fn(&T) -> &String,
    ) -> Option<&'a T> {
        let row = self.index.as_ref()?.get(category, card_id)?;
        rows.get(row).filter(|e| id_of(e) == card_id)
    }

    /// Every card id referenced by any table, with its category. Grouped by
    /// category in draw order; rows keep table order within a category.
    pub fn referenced_cards(&self) -> Vec<(Category, &str)> {
        let mut out = Vec::new();
        for category in Category::ALL {
            if let Some(rows) = self.location_table(category) {
                out.extend(rows.iter().map(|e| (category, e.card_id.as_str())));
            }
        }
        out.extend(
            self.ally_reading
                .possible_allies
                .iter()
                .map(|e| (Category::Ally, e.card_id.as_str())),
        );
        out.sort_by_key(|(category, _)| *category);
        out
    }

    /// Total number of table rows across all categories.
    pub fn entry_count(&self) -> usize {
        self.referenced_cards().len()
    }
}
