//! Alert service: display derivation, persisted sync, and window queries.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};

use pantryshare_core::config::alerts::AlertsConfig;
use pantryshare_core::error::AppError;
use pantryshare_core::result::AppResult;
use pantryshare_database::repositories::alert::AlertRepository;
use pantryshare_database::repositories::food_item::FoodItemRepository;
use pantryshare_entity::alert::{AlertStatus, CreateExpirationAlert, ExpirationAlert};
use pantryshare_entity::food_item::FoodItem;

use super::display::{DisplayAlert, compute_display_alerts};
use super::sync::{SyncReport, needs_persisted_alert};

/// Derives expiration alerts, both ephemeral and persisted.
#[derive(Debug, Clone)]
pub struct AlertService {
    /// Persisted alert repository.
    alert_repo: Arc<AlertRepository>,
    /// Food item repository.
    item_repo: Arc<FoodItemRepository>,
    /// Window configuration.
    config: AlertsConfig,
}

impl AlertService {
    /// Creates a new alert service.
    pub fn new(
        alert_repo: Arc<AlertRepository>,
        item_repo: Arc<FoodItemRepository>,
        config: AlertsConfig,
    ) -> Self {
        Self {
            alert_repo,
            item_repo,
            config,
        }
    }

    /// Compute the ephemeral display list for a user.
    ///
    /// Reads food items only; persisted alert records play no part in what
    /// the user sees.
    pub async fn display_alerts(&self, user_id: i32) -> AppResult<Vec<DisplayAlert>> {
        let items = self.item_repo.list_by_user(user_id).await?;
        let today = Utc::now().date_naive();
        Ok(compute_display_alerts(
            &items,
            user_id,
            today,
            self.config.display_window_days,
        ))
    }

    /// Create persisted alerts for every eligible item that lacks one.
    ///
    /// Best-effort: a failed create is logged and counted as neither created
    /// nor skipped, and the run continues. Callers that trigger this from a
    /// display read must not await it on the request path.
    pub async fn sync(&self) -> AppResult<SyncReport> {
        let (items, existing) = tokio::try_join!(self.item_repo.list(), self.alert_repo.list())?;

        let alerted: HashSet<i32> = existing.iter().map(|a| a.food_item_id).collect();
        let today = Utc::now().date_naive();

        let mut report = SyncReport::default();
        for item in &items {
            if !needs_persisted_alert(item, today, self.config.sync_window_days) {
                continue;
            }
            if alerted.contains(&item.id) {
                report.skipped += 1;
                continue;
            }
            match self.create_alert_for(item).await {
                Ok(_) => report.created += 1,
                Err(e) => {
                    warn!(food_item_id = item.id, error = %e, "Failed to create expiration alert");
                }
            }
        }

        info!(
            created = report.created,
            skipped = report.skipped,
            "Expiration alert sync complete"
        );
        Ok(report)
    }

    /// List persisted alerts.
    pub async fn list_persisted(&self) -> AppResult<Vec<ExpirationAlert>> {
        self.alert_repo.list().await
    }

    /// Create a persisted alert directly (the manual endpoint).
    pub async fn create_persisted(
        &self,
        data: CreateExpirationAlert,
    ) -> AppResult<ExpirationAlert> {
        self.alert_repo.create(&data).await
    }

    /// List items expiring within the next `days` days.
    pub async fn expiring_within(&self, days: i64) -> AppResult<Vec<FoodItem>> {
        if days < 0 {
            return Err(AppError::validation("Day window must not be negative"));
        }
        let today = Utc::now().date_naive();
        self.item_repo
            .list_expiring_between(today, today + Duration::days(days))
            .await
    }

    async fn create_alert_for(&self, item: &FoodItem) -> AppResult<ExpirationAlert> {
        self.alert_repo
            .create(&CreateExpirationAlert {
                food_item_id: item.id,
                alert_date: item.expiration_date,
                status: AlertStatus::Active,
            })
            .await
    }
}
