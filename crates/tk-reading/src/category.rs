//! Reading categories.
//!
//! The five slots of a reading form a closed set. Keys arriving from outside
//! (CLI arguments, saved documents) are parsed with [`str::parse`]; a key that
//! is not one of the configuration keys (or a documented alias) becomes a
//! [`CategoryError`] rather than a panic.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CategoryError;

/// One of the five reading slots, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Where the Sunsword lies.
    Sunsword,
    /// Where the Holy Symbol of Ravenkind lies.
    HolySymbol,
    /// Where the Tome of Strahd lies.
    Tome,
    /// Who will aid the party.
    Ally,
    /// Where the final confrontation takes place.
    Enemy,
}

impl Category {
    /// All categories in draw order: position `i` of the shuffled deck
    /// resolves `ALL[i]`.
    pub const ALL: [Category; 5] = [
        Category::Sunsword,
        Category::HolySymbol,
        Category::Tome,
        Category::Ally,
        Category::Enemy,
    ];

    /// Configuration key (`sunsword`, `holySymbol`, `tome`, `ally`, `enemy`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Sunsword => "sunsword",
            Self::HolySymbol => "holySymbol",
            Self::Tome => "tome",
            Self::Ally => "ally",
            Self::Enemy => "enemy",
        }
    }

    /// Deck position this category is drawn from.
    pub fn position(self) -> usize {
        match self {
            Self::Sunsword => 0,
            Self::HolySymbol => 1,
            Self::Tome => 2,
            Self::Ally => 3,
            Self::Enemy => 4,
        }
    }

    /// The artifact this category locates, if any.
    pub fn artifact(self) -> Option<ArtifactKind> {
        match self {
            Self::Sunsword => Some(ArtifactKind::Sunsword),
            Self::HolySymbol => Some(ArtifactKind::HolySymbol),
            Self::Tome => Some(ArtifactKind::Tome),
            Self::Ally | Self::Enemy => None,
        }
    }

    /// Whether this category resolves to a location (everything but the ally).
    pub fn is_location(self) -> bool {
        self != Self::Ally
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sunsword => write!(f, "Sunsword"),
            Self::HolySymbol => write!(f, "Holy Symbol"),
            Self::Tome => write!(f, "Tome"),
            Self::Ally => write!(f, "Ally"),
            Self::Enemy => write!(f, "Enemy"),
        }
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Accepts the configuration keys, plus `holy_symbol` and `holy-symbol`.
    /// Matching is exact; any other spelling is an unknown category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunsword" => Ok(Self::Sunsword),
            "holySymbol" | "holy_symbol" | "holy-symbol" => Ok(Self::HolySymbol),
            "tome" => Ok(Self::Tome),
            "ally" => Ok(Self::Ally),
            "enemy" => Ok(Self::Enemy),
            _ => Err(CategoryError::UnknownCategory(s.to_string())),
        }
    }
}

/// The three artifacts whose locations a reading reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactKind {
    /// The Sunsword.
    Sunsword,
    /// The Holy Symbol of Ravenkind.
    HolySymbol,
    /// The Tome of Strahd.
    Tome,
}

impl ArtifactKind {
    /// The reading category for this artifact.
    pub fn category(self) -> Category {
        match self {
            Self::Sunsword => Category::Sunsword,
            Self::HolySymbol => Category::HolySymbol,
            Self::Tome => Category::Tome,
        }
    }

    /// Configuration key.
    pub fn key(self) -> &'static str {
        self.category().key()
    }
}

impl FromStr for ArtifactKind {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Category>()
            .ok()
            .and_then(Category::artifact)
            .ok_or_else(|| CategoryError::UnknownArtifact(s.to_string()))
    }
}
