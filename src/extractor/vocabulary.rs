use crate::catalog::Catalog;
use crate::extractor::KeywordExtractor;
use crate::model::{Attribute, ExtractError};
use crate::normalizer::fold;
use std::collections::BTreeSet;

const MIN_WORD_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "and", "any", "are", "but", "can", "for", "find", "from", "get", "give", "like", "looking",
    "need", "please", "recommend", "show", "some", "something", "suggest", "that", "the", "this",
    "want", "what", "with", "you", "your",
];

/// Offline extractor: keeps query words that occur inside the catalog's own
/// attribute vocabulary.
pub struct VocabularyExtractor {
    vocabulary: BTreeSet<String>,
}

impl VocabularyExtractor {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let vocabulary = catalog
            .products()
            .iter()
            .flat_map(|p| Attribute::ALL.into_iter().filter_map(move |a| p.attribute(a)))
            .flat_map(|value| fold(value).split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .collect();
        Self { vocabulary }
    }

    pub fn words(&self) -> usize {
        self.vocabulary.len()
    }

    fn known(&self, word: &str) -> bool {
        self.vocabulary.iter().any(|v| v.contains(word))
    }

    pub fn keywords(&self, query: &str) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for word in query.split(|c: char| !c.is_alphanumeric()) {
            let word = fold(word);
            if word.chars().count() < MIN_WORD_LEN || STOP_WORDS.contains(&word.as_str()) {
                continue;
            }
            if self.known(&word) && !keywords.contains(&word) {
                keywords.push(word);
            }
        }
        keywords
    }
}

#[async_trait::async_trait]
impl KeywordExtractor for VocabularyExtractor {
    async fn extract(&self, query: &str) -> Result<Vec<String>, ExtractError> {
        Ok(self.keywords(query))
    }
}
