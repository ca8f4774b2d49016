//! Axum route handlers for the Recommendation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::recommendation::models::{CareerRecommendation, UserProfile};
use crate::state::AppState;

const GREETING_WITHOUT_PROFILE: &str = "Hello! I'm your AI Career Guidance Assistant. \
    To provide personalized career recommendations, please share your profile including \
    your interests, skills, and career goals.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub recommendations: Option<Vec<CareerRecommendation>>,
    pub timestamp: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-profile
///
/// Returns up to three recommendations for the profile. Never fails once the body
/// is valid: AI errors fall back to rule-based output.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<Vec<CareerRecommendation>>, AppError> {
    let Json(profile) = payload?;

    let set = state.resolver.resolve(&profile).await;
    info!(
        "Resolved {} recommendations ({:?}) via analyze-profile",
        set.recommendations.len(),
        set.source
    );

    Ok(Json(set.recommendations))
}

/// POST /api/chat
///
/// With a profile: resolves recommendations and greets the user by name.
/// Without one: asks the user to share a profile.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    debug!("Chat message received ({} chars)", request.message.len());

    let (message, recommendations) = match request.profile {
        Some(profile) => {
            let set = state.resolver.resolve(&profile).await;
            info!(
                "Resolved {} recommendations ({:?}) via chat",
                set.recommendations.len(),
                set.source
            );
            (
                format!(
                    "Hi {}! Based on your profile and current market trends, I've identified {} \
                    career paths that match your interests and skills. Let me walk you through each one.",
                    profile.name,
                    set.recommendations.len()
                ),
                Some(set.recommendations),
            )
        }
        None => (GREETING_WITHOUT_PROFILE.to_string(), None),
    };

    Ok(Json(ChatResponse {
        message,
        recommendations,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
