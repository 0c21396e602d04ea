//! Food item status enumeration.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a food item.
///
/// The status reflects the *current* state of the item; whether an item was
/// ever shared is recorded separately in the availability ledger, and the
/// two deliberately diverge once an item is claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "food_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    /// Default state: the item sits in its owner's fridge.
    Normal,
    /// The owner has opted to share the item publicly.
    Disponibil,
    /// Another user has a claim on the item.
    Claimed,
}

impl FoodStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Disponibil => "disponibil",
            Self::Claimed => "claimed",
        }
    }
}

impl Default for FoodStatus {
    fn default() -> Self {
        Self::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_domain_strings() {
        assert_eq!(
            serde_json::to_string(&FoodStatus::Disponibil).unwrap(),
            "\"disponibil\""
        );
        let parsed: FoodStatus = serde_json::from_str("\"claimed\"").unwrap();
        assert_eq!(parsed, FoodStatus::Claimed);
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(FoodStatus::default(), FoodStatus::Normal);
    }
}
