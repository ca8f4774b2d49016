use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::market::{JobMarketData, DEFAULT_INDUSTRY};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IndustryQuery {
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrendingSkillsResponse {
    pub industry: String,
    pub trending_skills: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct MarketDataResponse {
    pub role: String,
    pub market_data: JobMarketData,
    pub timestamp: String,
}

/// GET /api/trending-skills?industry=
pub async fn handle_trending_skills(
    State(state): State<AppState>,
    Query(params): Query<IndustryQuery>,
) -> Json<TrendingSkillsResponse> {
    let industry = params
        .industry
        .unwrap_or_else(|| DEFAULT_INDUSTRY.to_string());
    let trending_skills = state.market.trending_skills(&industry);

    Json(TrendingSkillsResponse {
        industry,
        trending_skills,
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// GET /api/market-data/:role
pub async fn handle_market_data(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<MarketDataResponse> {
    let market_data = state.market.job_market_data(&role);

    Json(MarketDataResponse {
        role,
        market_data,
        timestamp: Utc::now().to_rfc3339(),
    })
}
