use crate::extractor::KeywordExtractor;
use crate::model::ExtractError;
use crate::parser::KeywordParser;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Keyword extraction through a hosted text-to-text model.
pub struct RemoteExtractor {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    parser: KeywordParser,
}

impl RemoteExtractor {
    pub fn new(
        endpoint: String,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .user_agent(concat!("VastrAi/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_token: api_token.filter(|t| !t.trim().is_empty()),
            parser: KeywordParser::new(),
        })
    }
}

#[async_trait::async_trait]
impl KeywordExtractor for RemoteExtractor {
    async fn extract(&self, query: &str) -> Result<Vec<String>, ExtractError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Requesting keywords from {}", self.endpoint);
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: query });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Keyword model responded [{}]: {}", status, body);
            return Err(ExtractError::InvalidResponse {
                status: status.as_u16(),
                body,
            });
        }

        self.parser.parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;

    #[tokio::test]
    async fn blank_query_skips_the_model() {
        let extractor =
            RemoteExtractor::new("http://127.0.0.1:9/unused".into(), None, Duration::from_secs(1)).unwrap();
        assert!(extractor.extract("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn parses_generated_keywords() {
        let (base, server) = serve_once("200 OK", r#"[{"generated_text":"winter, jacket"}]"#).await;
        let extractor = RemoteExtractor::new(
            format!("{base}/models/keywords"),
            Some("hf_secret".into()),
            Duration::from_secs(5),
        )
        .unwrap();

        let keywords = extractor.extract("Find me a winter jacket").await.unwrap();
        assert_eq!(keywords, vec!["winter", "jacket"]);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /models/keywords"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer hf_secret"));
        assert!(request.contains(r#"{"inputs":"Find me a winter jacket"}"#));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (base, server) = serve_once("503 Service Unavailable", r#"{"error":"loading"}"#).await;
        let extractor = RemoteExtractor::new(format!("{base}/models/keywords"), None, Duration::from_secs(5)).unwrap();

        match extractor.extract("summer").await {
            Err(ExtractError::InvalidResponse { status, body }) => {
                assert_eq!(status, 503);
                assert!(body.contains("loading"));
            }
            other => panic!("unexpected {:?}", other),
        }
        server.await.unwrap();
    }
}
