// presenter/telegram/sender.rs

use crate::model::NotifyError;
use crate::presenter::telegram::TelegramBot;
use crate::presenter::{Card, NO_RESULTS, Presentation};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{info, warn};

/// Sends a plain text message to the configured chat.
pub async fn send_text(bot: &TelegramBot, text: &str) -> Result<(), NotifyError> {
    let params = [
        ("chat_id", bot.chat_id.to_string()),
        ("text", text.to_string()),
    ];
    let response = bot
        .client
        .post(bot.method_url("sendMessage"))
        .form(&params)
        .send()
        .await
        .map_err(|e| {
            warn!("❌ Telegram send() failed: {:?}", e);
            NotifyError::from(e)
        })?;
    check_status(response, "sendMessage").await
}

/// Turns a non-2xx Bot API reply into `NotifyError::InvalidResponse`.
pub(crate) async fn check_status(response: reqwest::Response, method: &str) -> Result<(), NotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_else(|_| "unknown".into());
    warn!("❌ Telegram {} responded [{}]: {}", method, status, body);
    Err(NotifyError::InvalidResponse {
        status: status.as_u16(),
        body,
    })
}

/// Uploads a product image with the product name as caption.
pub async fn send_photo(bot: &TelegramBot, path: &Path, caption: &str) -> Result<(), NotifyError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| NotifyError::ApiError(format!("Cannot read {}: {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image.jpg".into());
    let form = Form::new()
        .text("chat_id", bot.chat_id.to_string())
        .text("caption", caption.to_string())
        .part("photo", Part::bytes(bytes).file_name(file_name));

    let response = bot
        .client
        .post(bot.method_url("sendPhoto"))
        .multipart(form)
        .send()
        .await?;
    check_status(response, "sendPhoto").await
}

/// One message per row of cards, followed by that row's images.
pub async fn send_presentation(bot: &TelegramBot, presentation: &Presentation) -> Result<(), NotifyError> {
    let rows = match presentation {
        Presentation::NoResults => return send_text(bot, &format!("📭 {}", NO_RESULTS)).await,
        Presentation::Rows { rows, .. } => rows,
    };

    info!("📤 Sending {} result rows", rows.len());
    for row in rows {
        send_text(bot, &format_row(row)).await?;
        for card in row {
            let Some(image) = &card.image else {
                continue;
            };
            // an image that fails to upload must not hide the remaining results
            if let Err(e) = send_photo(bot, image, &card.name).await {
                warn!("Image for product {} not sent: {:?}", card.id, e);
            }
        }
    }
    if let Some(note) = presentation.truncation_note() {
        send_text(bot, &format!("ℹ️ {}", note)).await?;
    }
    Ok(())
}

pub fn format_row(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                "🆔 {}\n👗 {}\n🎨 {}\n💰 {}",
                card.id, card.name, card.base_colour, card.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
