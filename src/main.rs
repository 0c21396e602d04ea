//! PantryShare Server — food-sharing REST backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use pantryshare_core::config::AppConfig;
use pantryshare_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("PANTRYSHARE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting PantryShare v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = pantryshare_database::connection::DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    tracing::info!("Running database migrations...");
    pantryshare_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(pantryshare_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let category_repo = Arc::new(
        pantryshare_database::repositories::category::CategoryRepository::new(db_pool.clone()),
    );
    let food_item_repo = Arc::new(
        pantryshare_database::repositories::food_item::FoodItemRepository::new(db_pool.clone()),
    );
    let availability_repo = Arc::new(
        pantryshare_database::repositories::availability::AvailabilityRepository::new(
            db_pool.clone(),
        ),
    );
    let alert_repo = Arc::new(
        pantryshare_database::repositories::alert::AlertRepository::new(db_pool.clone()),
    );
    let claim_repo = Arc::new(
        pantryshare_database::repositories::claim::ClaimRepository::new(db_pool.clone()),
    );
    let friend_group_repo = Arc::new(
        pantryshare_database::repositories::friend_group::FriendGroupRepository::new(
            db_pool.clone(),
        ),
    );
    let group_member_repo = Arc::new(
        pantryshare_database::repositories::group_member::GroupMemberRepository::new(
            db_pool.clone(),
        ),
    );
    let social_post_repo = Arc::new(
        pantryshare_database::repositories::social_post::SocialPostRepository::new(db_pool.clone()),
    );

    // ── Step 3: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let food_item_service = Arc::new(pantryshare_service::food_item::FoodItemService::new(
        Arc::clone(&food_item_repo),
    ));
    let availability_service = Arc::new(pantryshare_service::availability::AvailabilityService::new(
        Arc::clone(&availability_repo),
    ));
    let alert_service = Arc::new(pantryshare_service::alert::AlertService::new(
        Arc::clone(&alert_repo),
        Arc::clone(&food_item_repo),
        config.alerts.clone(),
    ));
    let claim_service = Arc::new(pantryshare_service::claim::ClaimService::new(
        Arc::clone(&claim_repo),
        Arc::clone(&food_item_repo),
    ));
    let group_service = Arc::new(pantryshare_service::group::GroupService::new(
        Arc::clone(&friend_group_repo),
        Arc::clone(&group_member_repo),
        Arc::clone(&user_repo),
        Arc::clone(&food_item_repo),
    ));
    tracing::info!("Services initialized");

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = pantryshare_api::state::AppState {
        config: Arc::new(config.clone()),

        db_pool: db_pool.clone(),

        user_repo,
        category_repo,
        food_item_repo,
        availability_repo,
        alert_repo,
        claim_repo,
        friend_group_repo,
        group_member_repo,
        social_post_repo,

        food_item_service,
        availability_service,
        alert_service,
        claim_service,
        group_service,
    };

    let app = pantryshare_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("PantryShare server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("PantryShare server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
