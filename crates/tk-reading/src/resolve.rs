//! Map a drawn card to its narrative outcome.
//!
//! Resolution is total. A card with no row in its table resolves to the
//! category's fallback default (`isFallback: true`); an unknown category key
//! resolves to an outcome carrying an `error` field. Neither path returns
//! `Err` or panics, so one bad slot cannot abort a reading.

use serde::{Deserialize, Serialize};

use crate::category::{ArtifactKind, Category};
use crate::error::CategoryError;
use crate::tables::{AllyEntry, LocationEntry, ReadingConfig};

/// Label of every fallback location outcome.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
/// Label of every fallback ally outcome.
pub const UNKNOWN_ALLY: &str = "Unknown Ally";

/// A resolved location (artifact hiding place or final confrontation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOutcome {
    /// Location identifier (empty on error).
    pub location_id: String,
    /// Display name.
    pub name: String,
    /// Narrative description.
    pub description: String,
    /// Card that produced this outcome.
    pub card_id: String,
    /// Whether the category's fallback default was used.
    pub is_fallback: bool,
    /// Narrator guidance, present on fallback outcomes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
    /// Name configured on the fallback default, if any. The label stays
    /// [`UNKNOWN_LOCATION`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_name: Option<String>,
    /// Category error, present when the requested key was unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LocationOutcome {
    fn from_entry(entry: &LocationEntry) -> Self {
        Self {
            location_id: entry.location_id.clone(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            card_id: entry.card_id.clone(),
            is_fallback: false,
            guidance: None,
            default_name: None,
            error: None,
        }
    }

    /// Error-shaped outcome for an unknown category key.
    pub fn category_error(card_id: &str, error: &CategoryError) -> Self {
        Self {
            location_id: String::new(),
            name: String::new(),
            description: String::new(),
            card_id: card_id.to_string(),
            is_fallback: false,
            guidance: None,
            default_name: None,
            error: Some(error.to_string()),
        }
    }
}

/// A resolved ally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllyOutcome {
    /// Ally identifier.
    pub ally_id: String,
    /// Display name.
    pub name: String,
    /// Narrative description.
    pub description: String,
    /// Card that produced this outcome.
    pub card_id: String,
    /// Whether the fallback default was used.
    pub is_fallback: bool,
    /// Narrator guidance, present on fallback outcomes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
    /// Name configured on the fallback default, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_name: Option<String>,
    /// Category error; never set by [`resolve_ally`], kept for shape parity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AllyOutcome {
    fn from_entry(entry: &AllyEntry) -> Self {
        Self {
            ally_id: entry.ally_id.clone(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            card_id: entry.card_id.clone(),
            is_fallback: false,
            guidance: None,
            default_name: None,
            error: None,
        }
    }
}

/// Outcome of any category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Sunsword, Holy Symbol, Tome or Enemy outcome, or a category error.
    Location(LocationOutcome),
    /// Ally outcome.
    Ally(AllyOutcome),
}

impl Outcome {
    /// Location or ally id.
    pub fn id(&self) -> &str {
        match self {
            Self::Location(o) => &o.location_id,
            Self::Ally(o) => &o.ally_id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Location(o) => &o.name,
            Self::Ally(o) => &o.name,
        }
    }

    /// Narrative description.
    pub fn description(&self) -> &str {
        match self {
            Self::Location(o) => &o.description,
            Self::Ally(o) => &o.description,
        }
    }

    /// Card that produced the outcome.
    pub fn card_id(&self) -> &str {
        match self {
            Self::Location(o) => &o.card_id,
            Self::Ally(o) => &o.card_id,
        }
    }

    /// Whether the fallback default was used.
    pub fn is_fallback(&self) -> bool {
        match self {
            Self::Location(o) => o.is_fallback,
            Self::Ally(o) => o.is_fallback,
        }
    }

    /// Fallback guidance, if any.
    pub fn guidance(&self) -> Option<&str> {
        match self {
            Self::Location(o) => o.guidance.as_deref(),
            Self::Ally(o) => o.guidance.as_deref(),
        }
    }

    /// Name configured on the fallback default, if any.
    pub fn default_name(&self) -> Option<&str> {
        match self {
            Self::Location(o) => o.default_name.as_deref(),
            Self::Ally(o) => o.default_name.as_deref(),
        }
    }

    /// Category error, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Location(o) => o.error.as_deref(),
            Self::Ally(o) => o.error.as_deref(),
        }
    }
}

fn guidance(card_id: &str, category: Category) -> String {
    format!("No specific mapping for card {card_id}; using the default {category} outcome.")
}

/// Resolve a location category. `None` when the category has no location
/// table (the ally, or an artifact the configuration does not define).
fn resolve_location(
    card_id: &str,
    category: Category,
    config: &ReadingConfig,
) -> Option<LocationOutcome> {
    config.location_table(category)?;

    if let Some(entry) = config.find_location(category, card_id) {
        return Some(LocationOutcome::from_entry(entry));
    }

    let fallback = config.fallback_defaults.location(category)?;
    Some(LocationOutcome {
        location_id: fallback.location_id.clone(),
        name: UNKNOWN_LOCATION.to_string(),
        description: fallback.description.clone().unwrap_or_default(),
        card_id: card_id.to_string(),
        is_fallback: true,
        guidance: Some(guidance(card_id, category)),
        default_name: fallback.name.clone(),
        error: None,
    })
}

/// Resolve an artifact by key (`sunsword`, `holySymbol`, `tome`).
///
/// An unknown key, or a key whose table is missing from the configuration,
/// yields an outcome with `error` set.
pub fn resolve_artifact_location(
    card_id: &str,
    artifact_key: &str,
    config: &ReadingConfig,
) -> LocationOutcome {
    match artifact_key.parse::<ArtifactKind>() {
        Ok(artifact) => resolve_artifact(card_id, artifact, config),
        Err(e) => LocationOutcome::category_error(card_id, &e),
    }
}

/// Resolve an artifact location.
pub fn resolve_artifact(
    card_id: &str,
    artifact: ArtifactKind,
    config: &ReadingConfig,
) -> LocationOutcome {
    resolve_location(card_id, artifact.category(), config).unwrap_or_else(|| {
        LocationOutcome::category_error(
            card_id,
            &CategoryError::UnknownArtifact(artifact.key().to_string()),
        )
    })
}

/// Resolve the final confrontation location.
pub fn resolve_enemy_location(card_id: &str, config: &ReadingConfig) -> LocationOutcome {
    resolve_location(card_id, Category::Enemy, config).unwrap_or_else(|| {
        LocationOutcome::category_error(
            card_id,
            &CategoryError::UnknownCategory(Category::Enemy.key().to_string()),
        )
    })
}

/// Resolve the ally.
pub fn resolve_ally(card_id: &str, config: &ReadingConfig) -> AllyOutcome {
    if let Some(entry) = config.find_ally(card_id) {
        return AllyOutcome::from_entry(entry);
    }

    let fallback = &config.fallback_defaults.ally;
    AllyOutcome {
        ally_id: fallback.ally_id.clone(),
        name: UNKNOWN_ALLY.to_string(),
        description: fallback.description.clone().unwrap_or_default(),
        card_id: card_id.to_string(),
        is_fallback: true,
        guidance: Some(guidance(card_id, Category::Ally)),
        default_name: fallback.name.clone(),
        error: None,
    }
}

/// Resolve any category.
pub fn resolve(card_id: &str, category: Category, config: &ReadingConfig) -> Outcome {
    match category {
        Category::Sunsword => resolve_artifact(card_id, ArtifactKind::Sunsword, config).into(),
        Category::HolySymbol => resolve_artifact(card_id, ArtifactKind::HolySymbol, config).into(),
        Category::Tome => resolve_artifact(card_id, ArtifactKind::Tome, config).into(),
        Category::Ally => resolve_ally(card_id, config).into(),
        Category::Enemy => resolve_enemy_location(card_id, config).into(),
    }
}

/// Resolve a category given by an untrusted key.
pub fn resolve_key(card_id: &str, key: &str, config: &ReadingConfig) -> Outcome {
    match key.parse::<Category>() {
        Ok(category) => resolve(card_id, category, config),
        Err(e) => LocationOutcome::category_error(card_id, &e).into(),
    }
}

impl From<LocationOutcome> for Outcome {
    fn from(outcome: LocationOutcome) -> Self {
        Self::Location(outcome)
    }
}

impl From<AllyOutcome> for Outcome {
    fn from(outcome: AllyOutcome) -> Self {
        Self::Ally(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::tests::{location, sample_config};

    #[test]
    fn mapped_card_resolves_to_entry() {
        let config = sample_config();
        let outcome = resolve_artifact_location("high_deck_1", "sunsword", &config);
        assert_eq!(outcome.location_id, "castle_ravenloft");
        assert_eq!(outcome.card_id, "high_deck_1");
        assert!(!outcome.is_fallback);
        assert!(outcome.guidance.is_none());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn unmapped_card_uses_fallback() {
        let config = sample_config();
        let outcome = resolve_artifact_location("stars_7", "sunsword", &config);
        assert!(outcome.is_fallback);
        assert_eq!(outcome.location_id, "tsolenka_pass");
        assert_eq!(outcome.name, UNKNOWN_LOCATION);
        assert_eq!(outcome.card_id, "stars_7");
        assert!(outcome.guidance.unwrap().contains("stars_7"));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn fallback_label_is_placeholder_even_when_named() {
        let mut config = sample_config();
        config.fallback_defaults.tome.name = Some("Argynvostholt".to_string());
        config.fallback_defaults.tome.description = Some("A ruined mansion".to_string());
        let outcome = resolve_artifact("nope", ArtifactKind::Tome, &config);
        assert!(outcome.is_fallback);
        assert_eq!(outcome.name, UNKNOWN_LOCATION);
        assert_eq!(outcome.default_name.as_deref(), Some("Argynvostholt"));
        assert_eq!(outcome.description, "A ruined mansion");
    }

    #[test]
    fn named_ally_fallback_uses_placeholder() {
        let mut config = sample_config();
        config.fallback_defaults.ally.name = Some("Madam Eva".to_string());
        let ally = resolve_ally("no_such_card", &config);
        assert!(ally.is_fallback);
        assert_eq!(ally.name, UNKNOWN_ALLY);
        assert_eq!(ally.default_name.as_deref(), Some("Madam Eva"));

        let json = serde_json::to_value(&ally).unwrap();
        assert_eq!(json["name"], UNKNOWN_ALLY);
        assert_eq!(json["defaultName"], "Madam Eva");
    }

    #[test]
    fn mapped_outcome_has_no_default_name() {
        let config = sample_config();
        assert!(resolve_ally("high_deck_2", &config).default_name.is_none());
        let json = serde_json::to_value(resolve_key("high_deck_1", "sunsword", &config)).unwrap();
        assert!(json.get("defaultName").is_none());
    }

    #[test]
    fn unknown_artifact_key_is_error_shaped() {
        let config = sample_config();
        let outcome = resolve_artifact_location("high_deck_1", "wand_of_orcus", &config);
        assert_eq!(outcome.error.as_deref(), Some("unknown artifact: wand_of_orcus"));
        assert!(!outcome.is_fallback);
        assert!(outcome.location_id.is_empty());

        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("error").is_some());
    }

    #[test]
    fn artifact_key_must_match_exactly() {
        let config = sample_config();
        let outcome = resolve_artifact_location("swords_1", "HOLY-symbol", &config);
        assert_eq!(outcome.error.as_deref(), Some("unknown artifact: HOLY-symbol"));
        assert!(outcome.location_id.is_empty());

        let alias = resolve_artifact_location("swords_1", "holy-symbol", &config);
        assert!(alias.error.is_none());
        assert_eq!(alias.location_id, "abbey");
    }

    #[test]
    fn missing_artifact_table_is_error_shaped() {
        let mut config = sample_config();
        config.artifact_readings.holy_symbol = None;
        let outcome = resolve_artifact("swords_1", ArtifactKind::HolySymbol, &config);
        assert_eq!(outcome.error.as_deref(), Some("unknown artifact: holySymbol"));
    }

    #[test]
    fn artifact_key_is_not_an_ally() {
        let config = sample_config();
        let outcome = resolve_artifact_location("high_deck_2", "ally", &config);
        assert!(outcome.error.is_some());
    }

    #[test]
    fn ally_mapped_and_fallback() {
        let config = sample_config();
        let mapped = resolve_ally("high_deck_2", &config);
        assert_eq!(mapped.ally_id, "ireena");
        assert!(!mapped.is_fallback);

        let fallback = resolve_ally("coins_4", &config);
        assert!(fallback.is_fallback);
        assert_eq!(fallback.ally_id, "madam_eva");
        assert_eq!(fallback.name, UNKNOWN_ALLY);
    }

    #[test]
    fn enemy_mapped_and_fallback() {
        let config = sample_config();
        assert_eq!(resolve_enemy_location("high_deck_3", &config).location_id, "crypt");
        let fallback = resolve_enemy_location("high_deck_1", &config);
        assert!(fallback.is_fallback);
        assert_eq!(fallback.location_id, "throne_room");
    }

    #[test]
    fn first_match_wins() {
        let mut config = sample_config();
        config.artifact_readings.tome.as_mut().unwrap().possible_locations = vec![
            location("coins_2", "first"),
            location("coins_2", "second"),
        ];
        let config = config.validate().unwrap();
        let outcome = resolve_artifact("coins_2", ArtifactKind::Tome, &config);
        assert_eq!(outcome.location_id, "first");
    }

    #[test]
    fn typed_and_keyed_artifact_resolution_agree() {
        let mut config = sample_config();
        config.artifact_readings.tome = None;
        for artifact in [ArtifactKind::Sunsword, ArtifactKind::HolySymbol, ArtifactKind::Tome] {
            for card_id in ["high_deck_1", "swords_1", "coins_1", "stars_9"] {
                let typed = resolve(card_id, artifact.category(), &config);
                let keyed = resolve_artifact_location(card_id, artifact.key(), &config);
                assert_eq!(typed, Outcome::Location(keyed));
            }
        }
        let tome = resolve("coins_1", Category::Tome, &config);
        assert_eq!(tome.error(), Some("unknown artifact: tome"));
    }

    #[test]
    fn resolve_dispatches_by_category() {
        let config = sample_config();
        assert!(matches!(resolve("high_deck_2", Category::Ally, &config), Outcome::Ally(_)));
        let enemy = resolve("high_deck_3", Category::Enemy, &config);
        assert_eq!(enemy.id(), "crypt");
        assert_eq!(enemy.card_id(), "high_deck_3");
    }

    #[test]
    fn resolve_key_handles_untrusted_input() {
        let config = sample_config();
        let ok = resolve_key("swords_1", "holy_symbol", &config);
        assert_eq!(ok.id(), "abbey");

        let bad = resolve_key("swords_1", "villain", &config);
        assert_eq!(bad.error(), Some("unknown category: villain"));
        assert!(!bad.is_fallback());
    }

    #[test]
    fn outcome_json_shape() {
        let config = sample_config();
        let json = serde_json::to_value(resolve_key("x", "sunsword", &config)).unwrap();
        assert_eq!(json["isFallback"], true);
        assert_eq!(json["locationId"], "tsolenka_pass");
        assert_eq!(json["cardId"], "x");
        assert!(json.get("error").is_none());

        let back: Outcome = serde_json::from_value(json).unwrap();
        assert!(matches!(back, Outcome::Location(_)));
        let ally_json = serde_json::to_value(resolve_ally("x", &config)).unwrap();
        let ally: Outcome = serde_json::from_value(ally_json).unwrap();
        assert!(matches!(ally, Outcome::Ally(_)));
    }
}
