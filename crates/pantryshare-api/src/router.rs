//! Route definitions for the PantryShare HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(category_routes())
        .merge(food_item_routes())
        .merge(availability_routes())
        .merge(alert_routes())
        .merge(claim_routes())
        .merge(group_routes())
        .merge(group_member_routes())
        .merge(social_post_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// User CRUD
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Category reference data
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route("/categories", post(handlers::category::create_category))
        .route("/categories/{id}", get(handlers::category::get_category))
        .route(
            "/categories/{id}",
            delete(handlers::category::delete_category),
        )
}

/// Food item CRUD and the mark-available workflow
fn food_item_routes() -> Router<AppState> {
    Router::new()
        .route("/fooditems", get(handlers::food_item::list_food_items))
        .route("/fooditems", post(handlers::food_item::create_food_item))
        .route("/fooditems/{id}", get(handlers::food_item::get_food_item))
        .route(
            "/fooditems/{id}",
            put(handlers::food_item::update_food_item),
        )
        .route(
            "/fooditems/{id}",
            delete(handlers::food_item::delete_food_item),
        )
        .route(
            "/fooditems/{id}/available",
            post(handlers::food_item::mark_available),
        )
}

/// Availability ledger
fn availability_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/availability",
            get(handlers::availability::list_availability),
        )
        .route(
            "/availability",
            post(handlers::availability::create_availability),
        )
        .route(
            "/availability/{id}",
            get(handlers::availability::get_availability),
        )
        .route(
            "/availability/{id}",
            delete(handlers::availability::delete_availability),
        )
}

/// Expiration alerts: persisted records, the display derivation, sync, and
/// the expiring-window query
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/expirationalerts", get(handlers::alert::list_alerts))
        .route("/expirationalerts", post(handlers::alert::create_alert))
        .route(
            "/expirationalerts/display/{user_id}",
            get(handlers::alert::display_alerts),
        )
        .route("/expirationalerts/sync", post(handlers::alert::sync_alerts))
        .route(
            "/expirationalerts/expiring/{days}",
            get(handlers::alert::expiring_items),
        )
}

/// Claim workflow
fn claim_routes() -> Router<AppState> {
    Router::new()
        .route("/claims", get(handlers::claim::list_claims))
        .route("/claims", post(handlers::claim::create_claim))
        .route("/claims/{id}", get(handlers::claim::get_claim))
        .route("/claims/{id}", put(handlers::claim::update_claim))
        .route("/claims/{id}/accept", post(handlers::claim::accept_claim))
        .route("/claims/{id}/decline", post(handlers::claim::decline_claim))
}

/// Friend groups (list/create plus derived views)
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/friendgroups", get(handlers::group::list_groups))
        .route("/friendgroups", post(handlers::group::create_group))
        .route(
            "/friendgroups/overview/{user_id}",
            get(handlers::group::group_overview),
        )
        .route(
            "/friendgroups/{id}/details",
            get(handlers::group::group_details),
        )
}

/// Group membership rows and the invitation response
fn group_member_routes() -> Router<AppState> {
    Router::new()
        .route("/groupmembers", get(handlers::group_member::list_members))
        .route("/groupmembers", post(handlers::group_member::create_member))
        .route(
            "/groupmembers/byGroup/{group_id}",
            get(handlers::group_member::members_by_group),
        )
        .route(
            "/groupmembers/byUser/{user_id}",
            get(handlers::group_member::members_by_user),
        )
        .route(
            "/groupmembers/{id}",
            get(handlers::group_member::get_member),
        )
        .route(
            "/groupmembers/{id}",
            put(handlers::group_member::update_member),
        )
        .route(
            "/groupmembers/{id}",
            delete(handlers::group_member::delete_member),
        )
}

/// Social feed
fn social_post_routes() -> Router<AppState> {
    Router::new()
        .route("/socialposts", get(handlers::social_post::list_posts))
        .route("/socialposts", post(handlers::social_post::create_post))
        .route(
            "/socialposts/byFoodItem/{food_item_id}",
            get(handlers::social_post::posts_by_food_item),
        )
        .route("/socialposts/{id}", get(handlers::social_post::get_post))
        .route(
            "/socialposts/{id}",
            delete(handlers::social_post::delete_post),
        )
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
