//! UnitTypeKey enum identifying the five catalog entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CatalogError;

/// Key of a catalog entry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitTypeKey {
    #[default]
    #[serde(rename = "garage_studio")]
    GarageStudio,
    #[serde(rename = "detached_studio")]
    DetachedStudio,
    #[serde(rename = "detached_1br")]
    Detached1Br,
    #[serde(rename = "detached_2br")]
    Detached2Br,
    #[serde(rename = "detached_3br")]
    Detached3Br,
}

impl UnitTypeKey {
    /// Returns all keys in display order.
    pub fn all() -> &'static [UnitTypeKey] {
        &[
            UnitTypeKey::GarageStudio,
            UnitTypeKey::DetachedStudio,
            UnitTypeKey::Detached1Br,
            UnitTypeKey::Detached2Br,
            UnitTypeKey::Detached3Br,
        ]
    }

    /// Returns the 0-based position of this key in display order.
    pub fn order_index(&self) -> usize {
        match self {
            UnitTypeKey::GarageStudio => 0,
            UnitTypeKey::DetachedStudio => 1,
            UnitTypeKey::Detached1Br => 2,
            UnitTypeKey::Detached2Br => 3,
            UnitTypeKey::Detached3Br => 4,
        }
    }

    /// Returns the key used on the wire and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitTypeKey::GarageStudio => "garage_studio",
            UnitTypeKey::DetachedStudio => "detached_studio",
            UnitTypeKey::Detached1Br => "detached_1br",
            UnitTypeKey::Detached2Br => "detached_2br",
            UnitTypeKey::Detached3Br => "detached_3br",
        }
    }
}

impl fmt::Display for UnitTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitTypeKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        UnitTypeKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| CatalogError::UnknownType {
                key: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_five_keys_in_display_order() {
        let all = UnitTypeKey::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], UnitTypeKey::GarageStudio);
        assert_eq!(all[1], UnitTypeKey::DetachedStudio);
        assert_eq!(all[2], UnitTypeKey::Detached1Br);
        assert_eq!(all[3], UnitTypeKey::Detached2Br);
        assert_eq!(all[4], UnitTypeKey::Detached3Br);
    }

    #[test]
    fn order_index_matches_position_in_all() {
        for (i, key) in UnitTypeKey::all().iter().enumerate() {
            assert_eq!(key.order_index(), i);
        }
    }

    #[test]
    fn parses_every_wire_key() {
        for key in UnitTypeKey::all() {
            assert_eq!(key.as_str().parse::<UnitTypeKey>().unwrap(), *key);
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            " detached_2br\n".parse::<UnitTypeKey>().unwrap(),
            UnitTypeKey::Detached2Br
        );
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = "detached_4br".parse::<UnitTypeKey>().unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownType {
                key: "detached_4br".to_string()
            }
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Garage_Studio".parse::<UnitTypeKey>().is_err());
    }

    #[test]
    fn default_is_garage_studio() {
        assert_eq!(UnitTypeKey::default(), UnitTypeKey::GarageStudio);
    }

    #[test]
    fn serializes_to_wire_key() {
        assert_eq!(
            serde_json::to_string(&UnitTypeKey::Detached1Br).unwrap(),
            "\"detached_1br\""
        );
        let key: UnitTypeKey = serde_json::from_str("\"detached_3br\"").unwrap();
        assert_eq!(key, UnitTypeKey::Detached3Br);
    }
}
