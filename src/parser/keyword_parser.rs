// Parsing of keyword-model responses
use crate::model::ExtractError;
use serde::Deserialize;

/// Shapes a text-to-text inference endpoint answers with.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<Generated>),
    Single(Generated),
    Failure { error: String },
}

#[derive(Debug, Deserialize)]
struct Generated {
    generated_text: String,
}

pub struct KeywordParser;

impl KeywordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a raw response body into the model's keywords.
    pub fn parse_response(&self, body: &str) -> Result<Vec<String>, ExtractError> {
        let response: InferenceResponse = serde_json::from_str(body)
            .map_err(|e| ExtractError::MalformedOutput(e.to_string()))?;

        let generated = match response {
            InferenceResponse::Batch(items) => items
                .into_iter()
                .next()
                .ok_or_else(|| ExtractError::MalformedOutput("empty generation list".into()))?,
            InferenceResponse::Single(item) => item,
            InferenceResponse::Failure { error } => return Err(ExtractError::MalformedOutput(error)),
        };

        Ok(self.parse_generated(&generated.generated_text))
    }

    /// Splits generated text such as `"winter, jacket, men"` into keywords.
    pub fn parse_generated(&self, text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for KeywordParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_generated_text() {
        let parser = KeywordParser::new();
        assert_eq!(
            parser.parse_generated("winter jacket, Men,  casual ,"),
            vec!["winter jacket", "Men", "casual"]
        );
        assert!(parser.parse_generated("  ").is_empty());
    }

    #[test]
    fn parses_batch_response() {
        let parser = KeywordParser::new();
        let body = r#"[{"generated_text": "summer, clothes"}]"#;
        assert_eq!(parser.parse_response(body).unwrap(), vec!["summer", "clothes"]);
    }

    #[test]
    fn parses_single_response() {
        let parser = KeywordParser::new();
        let body = r#"{"generated_text": "formal wear"}"#;
        assert_eq!(parser.parse_response(body).unwrap(), vec!["formal wear"]);
    }

    #[test]
    fn error_payload_is_malformed_output() {
        let parser = KeywordParser::new();
        let body = r#"{"error": "Model is currently loading", "estimated_time": 20.0}"#;
        match parser.parse_response(body) {
            Err(ExtractError::MalformedOutput(msg)) => assert!(msg.contains("loading")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_batch_and_garbage_are_rejected() {
        let parser = KeywordParser::new();
        assert!(matches!(parser.parse_response("[]"), Err(ExtractError::MalformedOutput(_))));
        assert!(matches!(parser.parse_response("<html>"), Err(ExtractError::MalformedOutput(_))));
    }
}
