pub mod command_handler;
pub mod listener;
pub mod sender;

use crate::catalog::ImageStore;
use crate::config::TelegramConfig;
use crate::model::NotifyError;
use crate::presenter::{Layout, Presentation};
use crate::recommender::{Recommender, Shortcut};
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::time::{Duration, Instant};

/// Chat front end: queries arrive as messages, results go back as rows of cards.
pub struct TelegramBot {
    pub bot_token: String,
    pub chat_id: i64,
    pub api_base: String,
    pub client: Client,
    pub offset: AtomicI64,
    pub poll_interval: Duration,
    pub recommender: Arc<Recommender>,
    pub images: ImageStore,
    pub layout: Layout,
    pub start_time: Instant,
}

impl TelegramBot {
    pub fn new(
        config: &TelegramConfig,
        recommender: Arc<Recommender>,
        images: ImageStore,
        layout: Layout,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| NotifyError::ApiError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
            offset: AtomicI64::new(0),
            poll_interval: Duration::from_secs(config.poll_interval_seconds.max(1)),
            recommender,
            images,
            layout,
            start_time: Instant::now(),
        })
    }

    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.bot_token, method)
    }

    pub async fn notify_text(&self, text: &str) -> Result<(), NotifyError> {
        sender::send_text(self, text).await
    }

    pub async fn notify_presentation(&self, presentation: &Presentation) -> Result<(), NotifyError> {
        sender::send_presentation(self, presentation).await
    }

    pub async fn listen_for_commands(&self) {
        listener::listen_for_commands(self).await;
    }

    /// Registers the command menu shown by Telegram clients.
    pub async fn set_my_commands(&self) -> Result<(), NotifyError> {
        let mut commands = vec![
            serde_json::json!({ "command": "recommend", "description": "Recommend products for a query" }),
            serde_json::json!({ "command": "shortcuts", "description": "List canned queries" }),
            serde_json::json!({ "command": "help", "description": "Command list" }),
            serde_json::json!({ "command": "ping", "description": "Check connection" }),
            serde_json::json!({ "command": "uptime", "description": "Service uptime" }),
        ];
        for shortcut in Shortcut::ALL {
            commands.push(serde_json::json!({
                "command": shortcut.name(),
                "description": shortcut.query(),
            }));
        }

        let response = self
            .client
            .post(self.method_url("setMyCommands"))
            .json(&serde_json::json!({ "commands": commands }))
            .send()
            .await?;
        sender::check_status(response, "setMyCommands").await
    }
}
