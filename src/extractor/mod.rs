// Extractor module: free-text query to keyword tags.

pub mod remote;
pub mod traits;
pub mod vocabulary;

pub use remote::RemoteExtractor;
pub use traits::KeywordExtractor;
pub use vocabulary::VocabularyExtractor;

use crate::catalog::Catalog;
use crate::config::ExtractorConfig;
use crate::model::ExtractError;
use std::time::Duration;
use tracing::info;

/// Builds the configured extractor. The vocabulary variant reads `catalog` once.
pub fn build_extractor(
    config: &ExtractorConfig,
    catalog: &Catalog,
) -> Result<Box<dyn KeywordExtractor>, ExtractError> {
    match config {
        ExtractorConfig::Remote {
            endpoint,
            api_token,
            timeout_seconds,
        } => {
            info!("Using remote keyword model at {}", endpoint);
            let extractor = RemoteExtractor::new(
                endpoint.clone(),
                api_token.clone(),
                Duration::from_secs(*timeout_seconds),
            )?;
            Ok(Box::new(extractor))
        }
        ExtractorConfig::Vocabulary => {
            let extractor = VocabularyExtractor::from_catalog(catalog);
            info!("Using catalog vocabulary extractor ({} words)", extractor.words());
            Ok(Box::new(extractor))
        }
    }
}
