// Core structs: Product, Attribute, Recommendation, errors
use thiserror::Error;

/// Categorical columns a keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    MasterCategory,
    SubCategory,
    ArticleType,
    BaseColour,
    Season,
    Usage,
    Gender,
}

impl Attribute {
    pub const ALL: [Attribute; 7] = [
        Attribute::MasterCategory,
        Attribute::SubCategory,
        Attribute::ArticleType,
        Attribute::BaseColour,
        Attribute::Season,
        Attribute::Usage,
        Attribute::Gender,
    ];

    /// Column name in the catalog CSV header.
    pub fn column(self) -> &'static str {
        match self {
            Attribute::MasterCategory => "masterCategory",
            Attribute::SubCategory => "subCategory",
            Attribute::ArticleType => "articleType",
            Attribute::BaseColour => "baseColour",
            Attribute::Season => "season",
            Attribute::Usage => "usage",
            Attribute::Gender => "gender",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub id: String,
    pub display_name: Option<String>,
    pub master_category: Option<String>,
    pub sub_category: Option<String>,
    pub article_type: Option<String>,
    pub base_colour: Option<String>,
    pub season: Option<String>,
    pub usage: Option<String>,
    pub gender: Option<String>,
    pub price: Option<f64>,
}

impl Product {
    pub fn attribute(&self, attr: Attribute) -> Option<&str> {
        let value = match attr {
            Attribute::MasterCategory => &self.master_category,
            Attribute::SubCategory => &self.sub_category,
            Attribute::ArticleType => &self.article_type,
            Attribute::BaseColour => &self.base_colour,
            Attribute::Season => &self.season,
            Attribute::Usage => &self.usage,
            Attribute::Gender => &self.gender,
        };
        value.as_deref()
    }

    /// Display name, blank when the catalog has none.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }
}

/// Outcome of one pass through the pipeline.
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub query: String,
    pub keywords: Vec<String>,
    pub products: Vec<&'a Product>,
}

impl Recommendation<'_> {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot open catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("keyword model request failed: {0}")]
    HttpError(String),
    #[error("keyword model timed out")]
    Timeout,
    #[error("keyword model responded with status {status}: {body}")]
    InvalidResponse { status: u16, body: String },
    #[error("keyword model returned malformed output: {0}")]
    MalformedOutput(String),
}

impl From<reqwest::Error> for ExtractError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ExtractError::Timeout
        } else {
            ExtractError::HttpError(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram api error: {0}")]
    ApiError(String),
    #[error("telegram unreachable: {0}")]
    Unreachable(String),
    #[error("telegram api responded with status {status}: {body}")]
    InvalidResponse { status: u16, body: String },
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            NotifyError::Unreachable(e.to_string())
        } else {
            NotifyError::ApiError(e.to_string())
        }
    }
}
