//! Recommendation resolver: decides between the AI path and the rule-based fallback.
//!
//! Flow: credential? → trending skills → build prompt → model call (bounded) →
//!       parse + validate → RecommendationSet.
//!
//! `resolve` never fails. Every error class is logged and answered with
//! `generate_fallback(profile)`. The typed `RecommendationError` is kept so callers of
//! `recommend_with_ai` can tell failure classes apart.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, LLM_TIMEOUT};
use crate::llm_client::{ChatModel, LlmClient, LlmError};
use crate::market::{MarketDataProvider, DEFAULT_INDUSTRY};
use crate::recommendation::fallback::generate_fallback;
use crate::recommendation::models::{
    CareerRecommendation, RecommendationSet, RecommendationSource, UserProfile,
};
use crate::recommendation::parser::{parse_recommendations, ParseError};
use crate::recommendation::prompts::build_analysis_prompt;

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("no model credential configured")]
    CredentialMissing,

    #[error("model call failed: {0}")]
    Transport(#[source] LlmError),

    #[error("model call exceeded {0:?}")]
    TimedOut(Duration),

    #[error("model returned an unusable response: {0}")]
    Protocol(#[source] LlmError),

    #[error("could not parse recommendations: {0}")]
    Parse(#[from] ParseError),
}

impl From<LlmError> for RecommendationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(_) => RecommendationError::Transport(err),
            LlmError::Api { .. } | LlmError::Parse(_) | LlmError::EmptyContent => {
                RecommendationError::Protocol(err)
            }
        }
    }
}

impl RecommendationError {
    /// Network-level failures: the ones a future retry policy would target.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RecommendationError::Transport(_) | RecommendationError::TimedOut(_)
        )
    }
}

/// Shared, immutable resolver. One instance serves all requests concurrently.
pub struct RecommendationResolver {
    /// `None` when no credential is configured: always-fallback mode.
    model: Option<Arc<dyn ChatModel>>,
    market: Arc<dyn MarketDataProvider>,
    call_timeout: Duration,
}

impl RecommendationResolver {
    pub fn new(model: Option<Arc<dyn ChatModel>>, market: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            model,
            market,
            call_timeout: LLM_TIMEOUT,
        }
    }

    /// Builds the resolver from startup configuration. A missing credential is not an
    /// error; it selects fallback-only mode.
    pub fn from_config(
        config: &Config,
        market: Arc<dyn MarketDataProvider>,
    ) -> Result<Self, LlmError> {
        let model = match config.llm() {
            Some(llm_config) => {
                let client = LlmClient::new(llm_config)?;
                info!("LLM client initialized (model: {})", client.model());
                Some(Arc::new(client) as Arc<dyn ChatModel>)
            }
            None => {
                info!("OPENROUTER_API_KEY not set; serving rule-based recommendations only");
                None
            }
        };
        Ok(Self::new(model, market))
    }

    /// Resolves recommendations for a profile. Always returns 1..=3 entries.
    pub async fn resolve(&self, profile: &UserProfile) -> RecommendationSet {
        match self.recommend_with_ai(profile).await {
            Ok(recommendations) => {
                info!("AI produced {} recommendations", recommendations.len());
                return RecommendationSet::new(recommendations, RecommendationSource::Ai);
            }
            Err(RecommendationError::CredentialMissing) => {
                debug!("No model configured; using rule-based recommendations");
            }
            Err(e) if e.is_transport() => warn!("Model unreachable, using fallback: {e}"),
            Err(e) => warn!("Model response unusable, using fallback: {e}"),
        }

        RecommendationSet::new(generate_fallback(profile), RecommendationSource::Fallback)
    }

    /// The AI path on its own, with every failure class surfaced.
    pub async fn recommend_with_ai(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<CareerRecommendation>, RecommendationError> {
        let model = self
            .model
            .as_ref()
            .ok_or(RecommendationError::CredentialMissing)?;

        let trending_skills = self.market.trending_skills(DEFAULT_INDUSTRY);
        let prompt = build_analysis_prompt(profile, &trending_skills);

        let text = tokio::time::timeout(self.call_timeout, model.complete(&prompt))
            .await
            .map_err(|_| RecommendationError::TimedOut(self.call_timeout))??;

        Ok(parse_recommendations(&text)?)
    }
}
