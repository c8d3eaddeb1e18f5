use async_trait::async_trait;

use super::errors::DispatchError;
use crate::models::RecommendationResponse;

#[async_trait]
pub trait Recommender: Send + Sync {
    /// Sends one recommendation request for `content`.
    ///
    /// Blank content must fail with `DispatchError::EmptyInput` without any I/O.
    async fn recommend(&self, content: &str) -> Result<RecommendationResponse, DispatchError>;
}
