use std::sync::Arc;

use crate::market::MarketDataProvider;
use crate::recommendation::resolver::RecommendationResolver;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RecommendationResolver>,
    /// Static trend tables today; swap for a live feed behind the same trait.
    pub market: Arc<dyn MarketDataProvider>,
}
