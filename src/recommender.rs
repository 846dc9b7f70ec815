// Query pipeline: extract keywords, then filter the catalog
use crate::catalog::Catalog;
use crate::extractor::KeywordExtractor;
use crate::filter::CatalogFilter;
use crate::model::{ExtractError, Recommendation};
use std::sync::Arc;
use tracing::info;

/// Canned queries offered next to the free-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Summer,
    Winter,
    Casual,
    Formal,
}

impl Shortcut {
    pub const ALL: [Shortcut; 4] = [
        Shortcut::Summer,
        Shortcut::Winter,
        Shortcut::Casual,
        Shortcut::Formal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shortcut::Summer => "summer",
            Shortcut::Winter => "winter",
            Shortcut::Casual => "casual",
            Shortcut::Formal => "formal",
        }
    }

    pub fn query(self) -> &'static str {
        match self {
            Shortcut::Summer => "Show me summer clothes",
            Shortcut::Winter => "Find me a winter jacket",
            Shortcut::Casual => "Suggest a casual outfit",
            Shortcut::Formal => "Recommend some formal wear",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

pub struct Recommender {
    catalog: Arc<Catalog>,
    extractor: Box<dyn KeywordExtractor>,
    filter: Box<dyn CatalogFilter>,
}

impl Recommender {
    pub fn new(
        catalog: Arc<Catalog>,
        extractor: Box<dyn KeywordExtractor>,
        filter: Box<dyn CatalogFilter>,
    ) -> Self {
        Self {
            catalog,
            extractor,
            filter,
        }
    }

    /// Runs the full pipeline for one query. Only extraction can fail.
    pub async fn recommend(&self, query: &str) -> Result<Recommendation<'_>, ExtractError> {
        let keywords = self.extractor.extract(query).await?;
        info!("Extracted keywords for '{}': {:?}", query.trim(), keywords);

        let products = self.filter.filter(&self.catalog, &keywords);
        info!("Matched {} of {} products", products.len(), self.catalog.len());

        Ok(Recommendation {
            query: query.to_string(),
            keywords,
            products,
        })
    }

    pub async fn recommend_shortcut(&self, shortcut: Shortcut) -> Result<Recommendation<'_>, ExtractError> {
        self.recommend(shortcut.query()).await
    }
}
