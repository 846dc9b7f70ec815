// presenter/telegram/listener.rs

use crate::presenter::telegram::TelegramBot;
use crate::presenter::telegram::command_handler::handle_command;
use serde::Deserialize;
use std::sync::atomic::Ordering;
use tokio::time::sleep;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct TelegramApiResponse {
    ok: bool,
    #[serde(default)]
    result: Vec<TelegramUpdate>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TelegramUpdate {
    update_id: i64,
    message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
struct TelegramMessage {
    chat: TelegramChat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TelegramChat {
    id: i64,
}

/// Updates from a `getUpdates` body, or why there are none.
fn parse_updates(body: &str) -> Result<Vec<TelegramUpdate>, String> {
    let response: TelegramApiResponse =
        serde_json::from_str(body).map_err(|e| format!("malformed body: {}", e))?;
    if !response.ok {
        return Err(response
            .description
            .unwrap_or_else(|| "request rejected".into()));
    }
    Ok(response.result)
}

/// Polls for updates and answers them one at a time.
pub async fn listen_for_commands(bot: &TelegramBot) {
    let url = bot.method_url("getUpdates");
    loop {
        let offset = bot.offset.load(Ordering::SeqCst);
        let response = bot
            .client
            .get(&url)
            .query(&[("offset", offset.to_string())])
            .send()
            .await;
        let updates = match response {
            Ok(resp) => match resp.text().await {
                Ok(body) => parse_updates(&body),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => {
                warn!("getUpdates failed: {:?}", e);
                Ok(Vec::new())
            }
        };
        match updates {
            Ok(updates) => {
                for update in updates {
                    bot.offset.store(update.update_id + 1, Ordering::SeqCst);
                    let Some(message) = update.message else {
                        continue;
                    };
                    if message.chat.id != bot.chat_id {
                        warn!("Ignoring message from chat {}", message.chat.id);
                        continue;
                    }
                    if let Some(text) = message.text.as_deref() {
                        handle_command(text, bot).await;
                    }
                }
            }
            Err(e) => warn!("getUpdates returned no updates: {}", e),
        }
        sleep(bot.poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_are_read_in_order() {
        let body = r#"{"ok":true,"result":[
            {"update_id":7,"message":{"chat":{"id":42},"text":"/help"}},
            {"update_id":8}
        ]}"#;
        let updates = parse_updates(body).unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].update_id, 7);
        let message = updates[0].message.as_ref().unwrap();
        assert_eq!(message.chat.id, 42);
        assert_eq!(message.text.as_deref(), Some("/help"));
        assert!(updates[1].message.is_none());
    }

    #[test]
    fn rejected_poll_surfaces_the_description() {
        let body = r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#;
        assert_eq!(parse_updates(body).unwrap_err(), "Unauthorized");
    }

    #[test]
    fn garbage_body_is_an_error() {
        let err = parse_updates("<html>bad gateway</html>").unwrap_err();
        assert!(err.starts_with("malformed body"));
    }
}
