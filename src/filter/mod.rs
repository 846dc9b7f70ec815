// Filter module: keyword matching over the catalog's categorical attributes.

pub mod index;
pub mod scan;

pub use index::IndexFilter;
pub use scan::ScanFilter;

use crate::catalog::Catalog;
use crate::config::FilterKind;
use crate::model::Product;
use crate::normalizer::sub_tokens;
use std::sync::Arc;

/// A record matches when any folded sub-token is a substring of any of its
/// seven attributes. Missing attributes never match.
pub trait CatalogFilter: Send + Sync {
    /// Matching row indices in ascending order, without duplicates.
    /// `tokens` are already folded and non-empty.
    fn matching_rows(&self, catalog: &Catalog, tokens: &[String]) -> Vec<usize>;

    fn filter<'a>(&self, catalog: &'a Catalog, keywords: &[String]) -> Vec<&'a Product> {
        let tokens = sub_tokens(keywords);
        if tokens.is_empty() {
            return Vec::new();
        }
        self.matching_rows(catalog, &tokens)
            .into_iter()
            .filter_map(|row| catalog.get(row))
            .collect()
    }
}

/// Builds the configured strategy. The index is built eagerly from `catalog`
/// and keeps a handle to it.
pub fn build_filter(kind: FilterKind, catalog: &Arc<Catalog>) -> Box<dyn CatalogFilter> {
    match kind {
        FilterKind::Scan => Box::new(ScanFilter),
        FilterKind::Index => Box::new(IndexFilter::build(catalog)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, article: &str, season: &str, gender: &str) -> Product {
        Product {
            id: id.into(),
            article_type: Some(article.into()),
            season: Some(season.into()),
            gender: Some(gender.into()),
            ..Default::default()
        }
    }

    fn jacket_and_shorts() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![
            product("1", "Jacket", "Winter", "Men"),
            product("2", "Shorts", "Summer", "Women"),
        ]))
    }

    fn strategies(catalog: &Arc<Catalog>) -> Vec<Box<dyn CatalogFilter>> {
        vec![
            build_filter(FilterKind::Scan, catalog),
            build_filter(FilterKind::Index, catalog),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn jacket_and_shorts_scenario() {
        let catalog = jacket_and_shorts();
        for f in strategies(&catalog) {
            assert_eq!(ids(&f.filter(&catalog, &kw(&["winter jacket"]))), vec!["1"]);
            assert_eq!(ids(&f.filter(&catalog, &kw(&["summer"]))), vec!["2"]);
            assert!(f.filter(&catalog, &kw(&["red"])).is_empty());
        }
    }

    #[test]
    fn empty_keywords_match_nothing() {
        let catalog = jacket_and_shorts();
        for f in strategies(&catalog) {
            assert!(f.filter(&catalog, &[]).is_empty());
            assert!(f.filter(&catalog, &kw(&["", "   "])).is_empty());
        }
    }

    #[test]
    fn matching_ignores_case() {
        let catalog = Arc::new(Catalog::new(vec![Product {
            id: "5".into(),
            base_colour: Some("Red".into()),
            ..Default::default()
        }]));
        for f in strategies(&catalog) {
            let upper = f.filter(&catalog, &kw(&["RED"]));
            let lower = f.filter(&catalog, &kw(&["red"]));
            assert_eq!(ids(&upper), vec!["5"]);
            assert_eq!(ids(&upper), ids(&lower));
        }
    }

    #[test]
    fn matching_is_substring() {
        let catalog = jacket_and_shorts();
        for f in strategies(&catalog) {
            assert_eq!(ids(&f.filter(&catalog, &kw(&["win"]))), vec!["1"]);
            // "men" is inside both "Men" and "Women"
            assert_eq!(ids(&f.filter(&catalog, &kw(&["men"]))), vec!["1", "2"]);
        }
    }

    #[test]
    fn sub_tokens_are_or_not_and() {
        let catalog = jacket_and_shorts();
        for f in strategies(&catalog) {
            let hits = f.filter(&catalog, &kw(&["winter shorts"]));
            assert_eq!(ids(&hits), vec!["1", "2"]);
        }
    }

    #[test]
    fn repeated_matches_do_not_duplicate_rows() {
        let catalog = jacket_and_shorts();
        for f in strategies(&catalog) {
            let hits = f.filter(&catalog, &kw(&["winter", "jacket", "men", "Winter Jacket"]));
            assert_eq!(ids(&hits), vec!["1", "2"]);
        }
    }

    #[test]
    fn order_follows_catalog_not_keywords() {
        let catalog = jacket_and_shorts();
        for f in strategies(&catalog) {
            let hits = f.filter(&catalog, &kw(&["shorts", "jacket"]));
            assert_eq!(ids(&hits), vec!["1", "2"]);
        }
    }

    #[test]
    fn rerun_is_identical() {
        let catalog = jacket_and_shorts();
        for f in strategies(&catalog) {
            let keywords = kw(&["summer", "jack"]);
            let first = f.filter(&catalog, &keywords);
            let second = f.filter(&catalog, &keywords);
            assert_eq!(ids(&first), ids(&second));
        }
    }

    #[test]
    fn results_are_catalog_rows() {
        let catalog = jacket_and_shorts();
        for f in strategies(&catalog) {
            for hit in f.filter(&catalog, &kw(&["e"])) {
                assert!(catalog.products().iter().any(|p| std::ptr::eq(p, hit)));
            }
        }
    }

    #[test]
    fn null_attribute_never_matches_but_others_can() {
        let catalog = Arc::new(Catalog::new(vec![
            Product {
                id: "10".into(),
                base_colour: None,
                article_type: Some("Tshirts".into()),
                ..Default::default()
            },
            Product {
                id: "11".into(),
                base_colour: None,
                sub_category: Some("Blue Label".into()),
                ..Default::default()
            },
        ]));
        for f in strategies(&catalog) {
            assert_eq!(ids(&f.filter(&catalog, &kw(&["blue"]))), vec!["11"]);
        }
    }

    #[test]
    fn record_without_attributes_never_matches() {
        let catalog = Arc::new(Catalog::new(vec![Product {
            id: "12".into(),
            display_name: Some("Winter Jacket".into()),
            ..Default::default()
        }]));
        for f in strategies(&catalog) {
            assert!(f.filter(&catalog, &kw(&["winter"])).is_empty());
        }
    }
}
