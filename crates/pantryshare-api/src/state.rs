//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use pantryshare_core::config::AppConfig;

use pantryshare_database::repositories::alert::AlertRepository;
use pantryshare_database::repositories::availability::AvailabilityRepository;
use pantryshare_database::repositories::category::CategoryRepository;
use pantryshare_database::repositories::claim::ClaimRepository;
use pantryshare_database::repositories::food_item::FoodItemRepository;
use pantryshare_database::repositories::friend_group::FriendGroupRepository;
use pantryshare_database::repositories::group_member::GroupMemberRepository;
use pantryshare_database::repositories::social_post::SocialPostRepository;
use pantryshare_database::repositories::user::UserRepository;

use pantryshare_service::alert::AlertService;
use pantryshare_service::availability::AvailabilityService;
use pantryshare_service::claim::ClaimService;
use pantryshare_service::food_item::FoodItemService;
use pantryshare_service::group::GroupService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Category repository
    pub category_repo: Arc<CategoryRepository>,
    /// Food item repository
    pub food_item_repo: Arc<FoodItemRepository>,
    /// Availability ledger repository
    pub availability_repo: Arc<AvailabilityRepository>,
    /// Persisted alert repository
    pub alert_repo: Arc<AlertRepository>,
    /// Claim repository
    pub claim_repo: Arc<ClaimRepository>,
    /// Friend group repository
    pub friend_group_repo: Arc<FriendGroupRepository>,
    /// Group member repository
    pub group_member_repo: Arc<GroupMemberRepository>,
    /// Social post repository
    pub social_post_repo: Arc<SocialPostRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Food item service
    pub food_item_service: Arc<FoodItemService>,
    /// Availability ledger service
    pub availability_service: Arc<AvailabilityService>,
    /// Alert derivation service
    pub alert_service: Arc<AlertService>,
    /// Claim workflow service
    pub claim_service: Arc<ClaimService>,
    /// Group membership service
    pub group_service: Arc<GroupService>,
}
