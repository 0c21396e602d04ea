//! Persisted alert eligibility.
//!
//! The sync routine walks all food items and creates a durable
//! `ExpirationAlert` for each item that needs one and does not have one
//! yet. Unlike the display list it excludes claimed items and uses the
//! tighter 3-day window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pantryshare_entity::food_item::{FoodItem, FoodStatus};

use super::display::days_until_expiration;

/// Outcome of one sync run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SyncReport {
    /// Alerts created this run.
    pub created: u32,
    /// Eligible items skipped because an alert already existed.
    pub skipped: u32,
}

/// Whether an item is eligible for a persisted alert.
///
/// Claimed items never get one; otherwise the item must expire within
/// `[0, window_days]` days.
pub fn needs_persisted_alert(item: &FoodItem, today: NaiveDate, window_days: i64) -> bool {
    if item.status == FoodStatus::Claimed {
        return false;
    }
    let days = days_until_expiration(item.expiration_date, today);
    (0..=window_days).contains(&days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn item(days_out: i64, status: FoodStatus) -> FoodItem {
        FoodItem {
            id: 1,
            name: "milk".to_string(),
            quantity: 1,
            expiration_date: today() + chrono::Duration::days(days_out),
            status,
            user_id: 1,
            category_id: 1,
        }
    }

    #[test]
    fn test_scenario_a_normal_item_two_days_out_is_eligible() {
        assert!(needs_persisted_alert(
            &item(2, FoodStatus::Normal),
            today(),
            3
        ));
    }

    #[test]
    fn test_scenario_b_claimed_item_is_never_eligible() {
        assert!(!needs_persisted_alert(
            &item(1, FoodStatus::Claimed),
            today(),
            3
        ));
    }

    #[test]
    fn test_window_is_inclusive_zero_to_three() {
        assert!(needs_persisted_alert(&item(0, FoodStatus::Normal), today(), 3));
        assert!(needs_persisted_alert(&item(3, FoodStatus::Normal), today(), 3));
        assert!(!needs_persisted_alert(&item(4, FoodStatus::Normal), today(), 3));
        assert!(!needs_persisted_alert(&item(-1, FoodStatus::Normal), today(), 3));
    }

    #[test]
    fn test_shared_items_are_eligible() {
        assert!(needs_persisted_alert(
            &item(1, FoodStatus::Disponibil),
            today(),
            3
        ));
    }
}
