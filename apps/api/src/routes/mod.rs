pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::market::handlers as market;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/analyze-profile",
            post(recommendation::handle_analyze_profile),
        )
        .route("/api/chat", post(recommendation::handle_chat))
        // Market data API
        .route("/api/trending-skills", get(market::handle_trending_skills))
        .route("/api/market-data/:role", get(market::handle_market_data))
        .with_state(state)
}
