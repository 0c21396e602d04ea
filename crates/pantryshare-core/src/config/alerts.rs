//! Expiration alert window configuration.

use serde::{Deserialize, Serialize};

/// Windows (in days from today) driving the two alert derivations.
///
/// The display list and the persisted sync use different windows on
/// purpose; see the alert service for the exact semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Items expiring within this many days appear in the display list.
    #[serde(default = "default_display_window")]
    pub display_window_days: i64,
    /// Items expiring within this many days get a persisted alert record.
    #[serde(default = "default_sync_window")]
    pub sync_window_days: i64,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            display_window_days: default_display_window(),
            sync_window_days: default_sync_window(),
        }
    }
}

fn default_display_window() -> i64 {
    7
}

fn default_sync_window() -> i64 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_windows() {
        let cfg = AlertsConfig::default();
        assert_eq!(cfg.display_window_days, 7);
        assert_eq!(cfg.sync_window_days, 3);
    }
}
