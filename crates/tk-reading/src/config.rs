//! Configuration for a reader.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which card's description the tome slot's snapshot carries.
///
/// Readings have always shown the holy-symbol card's description on the tome
/// slot. Existing content may rely on that, so it stays the default until
/// the tome card's own description is confirmed as the intended text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TomeDescription {
    /// Reuse the description of the card drawn for the holy symbol.
    #[default]
    HolySymbolCard,
    /// Use the tome card's own description.
    TomeCard,
}

impl FromStr for TomeDescription {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "holy-symbol" | "holy_symbol" | "holysymbol" => Ok(Self::HolySymbolCard),
            "tome" => Ok(Self::TomeCard),
            other => Err(format!(
                "invalid tome description source: {other} (expected holy-symbol or tome)"
            )),
        }
    }
}

/// Options for a [`TarokkaReader`](crate::TarokkaReader).
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Description source for the tome slot.
    pub tome_description: TomeDescription,
}

impl ReaderConfig {
    /// Set the description source for the tome slot.
    pub fn with_tome_description(mut self, source: TomeDescription) -> Self {
        self.tome_description = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.tome_description, TomeDescription::HolySymbolCard);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReaderConfig::default().with_tome_description(TomeDescription::TomeCard);
        assert_eq!(cfg.tome_description, TomeDescription::TomeCard);
    }

    #[test]
    fn parse_tome_description() {
        assert_eq!("tome".parse(), Ok(TomeDescription::TomeCard));
        assert_eq!("Holy-Symbol".parse(), Ok(TomeDescription::HolySymbolCard));
        assert!("ally".parse::<TomeDescription>().is_err());
    }
}
