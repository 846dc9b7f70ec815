use crate::model::ConfigError;
use crate::presenter::Layout;
use serde::Deserialize;
use std::fs;

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/ilsilfverskiold/tech-keywords-extractor";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    #[default]
    Scan,
    Index,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractorConfig {
    Remote {
        #[serde(default = "default_endpoint")]
        endpoint: String,
        #[serde(default)]
        api_token: Option<String>,
        #[serde(default = "default_timeout")]
        timeout_seconds: u64,
    },
    Vocabulary,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig::Remote {
            endpoint: default_endpoint(),
            api_token: None,
            timeout_seconds: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: i64,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_poll_seconds")]
    pub poll_interval_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_path: String,
    pub image_dir: String,
    pub image_extensions: Vec<String>,
    pub filter: FilterKind,
    pub layout: Layout,
    pub extractor: ExtractorConfig,
    pub telegram: Option<TelegramConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: "styles.csv".into(),
            image_dir: "images".into(),
            image_extensions: vec!["jpg".into()],
            filter: FilterKind::default(),
            layout: Layout::default(),
            extractor: ExtractorConfig::default(),
            telegram: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_seconds() -> u64 {
    1
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match self.layout {
            Layout::Grid { columns: 0, .. } => {
                return Err(ConfigError::Invalid("grid columns must be at least 1".into()));
            }
            Layout::Grid { max_rows: 0, .. } => {
                return Err(ConfigError::Invalid("grid max_rows must be at least 1".into()));
            }
            Layout::Top { limit: 0 } => {
                return Err(ConfigError::Invalid("top limit must be at least 1".into()));
            }
            _ => {}
        }
        if self.image_extensions.iter().any(|ext| ext.trim().is_empty()) {
            return Err(ConfigError::Invalid("image extensions must not be blank".into()));
        }
        Ok(())
    }
}
