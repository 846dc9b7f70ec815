use crate::catalog::Catalog;
use crate::filter::CatalogFilter;
use crate::model::{Attribute, Product};
use crate::normalizer::fold;

/// Linear pass over every row. Enough for catalogs of a few thousand products.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanFilter;

impl ScanFilter {
    fn matches(product: &Product, tokens: &[String]) -> bool {
        Attribute::ALL.iter().any(|&attr| {
            product
                .attribute(attr)
                .map(fold)
                .is_some_and(|value| tokens.iter().any(|t| value.contains(t.as_str())))
        })
    }
}

impl CatalogFilter for ScanFilter {
    fn matching_rows(&self, catalog: &Catalog, tokens: &[String]) -> Vec<usize> {
        catalog
            .products()
            .iter()
            .enumerate()
            .filter(|(_, product)| Self::matches(product, tokens))
            .map(|(row, _)| row)
            .collect()
    }
}
