use crate::model::ExtractError;

/// Maps a free-text query to keyword tags.
/// Blank queries yield an empty sequence rather than an error.
#[async_trait::async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract(&self, query: &str) -> Result<Vec<String>, ExtractError>;
}
