//! Display-time alert computation.
//!
//! Ephemeral: derived from food items on every read, never touching the
//! persisted alert records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pantryshare_entity::food_item::FoodItem;

/// An ephemeral expiration warning shown to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayAlert {
    /// The item the warning refers to.
    pub food_item_id: i32,
    /// Item name.
    pub item_name: String,
    /// Expiration date.
    pub expiration_date: NaiveDate,
    /// Whole days until expiration (0 = expires today).
    pub days_until_expiration: i64,
    /// Human-readable warning text.
    pub message: String,
}

/// Whole days from `today` until `expiration`, both taken at midnight.
pub fn days_until_expiration(expiration: NaiveDate, today: NaiveDate) -> i64 {
    (expiration - today).num_days()
}

/// Compute the display alert list for one user.
///
/// Selects the user's items expiring within `[0, window_days]` — regardless
/// of status, so claimed and shared items still warn — sorts ascending by
/// days remaining, then deduplicates by case-insensitive trimmed name,
/// keeping only the soonest-expiring entry per name.
pub fn compute_display_alerts(
    items: &[FoodItem],
    user_id: i32,
    today: NaiveDate,
    window_days: i64,
) -> Vec<DisplayAlert> {
    let mut alerts: Vec<DisplayAlert> = items
        .iter()
        .filter(|item| item.user_id == user_id)
        .filter_map(|item| {
            let days = days_until_expiration(item.expiration_date, today);
            if (0..=window_days).contains(&days) {
                Some(DisplayAlert {
                    food_item_id: item.id,
                    item_name: item.name.clone(),
                    expiration_date: item.expiration_date,
                    days_until_expiration: days,
                    message: expiry_message(days),
                })
            } else {
                None
            }
        })
        .collect();

    alerts.sort_by_key(|a| a.days_until_expiration);

    let mut seen_names = std::collections::HashSet::new();
    alerts.retain(|alert| seen_names.insert(alert.item_name.trim().to_lowercase()));
    alerts
}

fn expiry_message(days: i64) -> String {
    let plural = if days == 1 { "" } else { "s" };
    format!("This item will expire in {days} day{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantryshare_entity::food_item::FoodStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn item(id: i32, name: &str, user_id: i32, days_out: i64, status: FoodStatus) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            quantity: 1,
            expiration_date: today() + chrono::Duration::days(days_out),
            status,
            user_id,
            category_id: 1,
        }
    }

    #[test]
    fn test_days_until_expiration_boundaries() {
        let t = today();
        assert_eq!(days_until_expiration(t, t), 0);
        assert_eq!(days_until_expiration(t + chrono::Duration::days(7), t), 7);
        assert_eq!(days_until_expiration(t - chrono::Duration::days(1), t), -1);
    }

    #[test]
    fn test_window_is_inclusive_zero_to_seven() {
        let items = vec![
            item(1, "milk", 1, -1, FoodStatus::Normal),
            item(2, "eggs", 1, 0, FoodStatus::Normal),
            item(3, "bread", 1, 7, FoodStatus::Normal),
            item(4, "rice", 1, 8, FoodStatus::Normal),
        ];
        let alerts = compute_display_alerts(&items, 1, today(), 7);
        let ids: Vec<i32> = alerts.iter().map(|a| a.food_item_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_status_is_ignored_for_display() {
        // Scenario B, display half: a claimed item still warns.
        let items = vec![
            item(1, "milk", 1, 1, FoodStatus::Claimed),
            item(2, "eggs", 1, 2, FoodStatus::Disponibil),
            item(3, "bread", 1, 3, FoodStatus::Normal),
        ];
        let alerts = compute_display_alerts(&items, 1, today(), 7);
        assert_eq!(alerts.len(), 3);
    }

    #[test]
    fn test_only_viewing_users_items_warn() {
        let items = vec![
            item(1, "milk", 1, 1, FoodStatus::Normal),
            item(2, "eggs", 2, 1, FoodStatus::Normal),
        ];
        let alerts = compute_display_alerts(&items, 1, today(), 7);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].food_item_id, 1);
    }

    #[test]
    fn test_sorted_by_urgency() {
        let items = vec![
            item(1, "bread", 1, 5, FoodStatus::Normal),
            item(2, "milk", 1, 0, FoodStatus::Normal),
            item(3, "eggs", 1, 3, FoodStatus::Normal),
        ];
        let alerts = compute_display_alerts(&items, 1, today(), 7);
        let days: Vec<i64> = alerts.iter().map(|a| a.days_until_expiration).collect();
        assert_eq!(days, vec![0, 3, 5]);
    }

    #[test]
    fn test_dedup_keeps_soonest_per_name() {
        let items = vec![
            item(1, "Milk", 1, 5, FoodStatus::Normal),
            item(2, "  milk ", 1, 2, FoodStatus::Normal),
            item(3, "MILK", 1, 6, FoodStatus::Normal),
        ];
        let alerts = compute_display_alerts(&items, 1, today(), 7);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].food_item_id, 2);
        assert_eq!(alerts[0].days_until_expiration, 2);
    }

    #[test]
    fn test_message_pluralization() {
        let items = vec![
            item(1, "milk", 1, 1, FoodStatus::Normal),
            item(2, "eggs", 1, 2, FoodStatus::Normal),
        ];
        let alerts = compute_display_alerts(&items, 1, today(), 7);
        assert_eq!(alerts[0].message, "This item will expire in 1 day");
        assert_eq!(alerts[1].message, "This item will expire in 2 days");
    }
}
