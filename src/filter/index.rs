use crate::catalog::Catalog;
use crate::filter::{CatalogFilter, ScanFilter};
use crate::model::Attribute;
use crate::normalizer::fold;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Case-folded inverted index over the seven attributes.
///
/// Categorical columns have few distinct values, so a sub-token is answered by
/// scanning the distinct folded values and merging their postings.
///
/// The index belongs to the catalog it was built from. Any other catalog is
/// answered by a plain scan.
pub struct IndexFilter {
    source: Arc<Catalog>,
    values: Vec<String>,
    postings: Vec<Vec<usize>>, // value slot -> ascending rows
}

impl IndexFilter {
    pub fn build(catalog: &Arc<Catalog>) -> Self {
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut values = Vec::new();
        let mut postings: Vec<Vec<usize>> = Vec::new();

        for (row, product) in catalog.products().iter().enumerate() {
            for attr in Attribute::ALL {
                let Some(value) = product.attribute(attr) else {
                    continue;
                };
                let folded = fold(value);
                let slot = *slots.entry(folded.clone()).or_insert_with(|| {
                    values.push(folded);
                    postings.push(Vec::new());
                    values.len() - 1
                });
                let list = &mut postings[slot];
                // rows arrive in ascending order, so only the tail can repeat
                if list.last() != Some(&row) {
                    list.push(row);
                }
            }
        }

        let index = Self {
            source: Arc::clone(catalog),
            values,
            postings,
        };
        info!(
            "Built attribute index: {} rows, {} distinct values",
            catalog.len(),
            index.distinct_values()
        );
        index
    }

    pub fn distinct_values(&self) -> usize {
        self.values.len()
    }

    fn indexes(&self, catalog: &Catalog) -> bool {
        std::ptr::eq(catalog, Arc::as_ptr(&self.source))
    }
}

impl CatalogFilter for IndexFilter {
    fn matching_rows(&self, catalog: &Catalog, tokens: &[String]) -> Vec<usize> {
        if !self.indexes(catalog) {
            warn!(
                "Index was built for another catalog ({} rows, given {}), scanning instead",
                self.source.len(),
                catalog.len()
            );
            return ScanFilter.matching_rows(catalog, tokens);
        }

        let mut rows: Vec<usize> = Vec::new();
        for (value, list) in self.values.iter().zip(&self.postings) {
            if tokens.iter().any(|t| value.contains(t.as_str())) {
                rows.extend_from_slice(list);
            }
        }
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}
