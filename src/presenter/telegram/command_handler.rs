// presenter/telegram/command_handler.rs

use crate::presenter::present;
use crate::presenter::telegram::TelegramBot;
use crate::recommender::Shortcut;
use tracing::{info, warn};

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Ping,
    Uptime,
    Shortcuts,
    Recommend(&'a str),
    Shortcut(Shortcut),
    Unknown(&'a str),
}

/// Slash commands are matched by name (an `@botname` suffix is ignored);
/// any other text is treated as a query.
pub fn parse_command(text: &str) -> Command<'_> {
    let text = text.trim();
    let Some(rest) = text.strip_prefix('/') else {
        return Command::Recommend(text);
    };

    let (head, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let name = head.split('@').next().unwrap_or(head);

    match name {
        "start" | "help" => Command::Help,
        "ping" => Command::Ping,
        "uptime" => Command::Uptime,
        "shortcuts" => Command::Shortcuts,
        "recommend" => Command::Recommend(args.trim()),
        other => Shortcut::from_name(other)
            .map(Command::Shortcut)
            .unwrap_or(Command::Unknown(head)),
    }
}

pub fn help_text() -> String {
    let mut msg = String::from(
        "👗 VastrAi recommends fashion items from your description.\n\n\
         Send any text, or use:\n\
         /recommend <query> — recommend products\n\
         /shortcuts — canned queries\n\
         /ping — check connection\n\
         /uptime — service uptime\n",
    );
    for shortcut in Shortcut::ALL {
        msg.push_str(&format!("/{} — {}\n", shortcut.name(), shortcut.query()));
    }
    msg
}

/// Handles an incoming message and replies in the configured chat.
pub async fn handle_command(text: &str, bot: &TelegramBot) {
    info!("Handling message: {}", text);
    let reply = match parse_command(text) {
        Command::Help => help_text(),
        Command::Ping => "✅ I am online!".to_string(),
        Command::Uptime => {
            let uptime = bot.start_time.elapsed();
            format!(
                "⏱ Uptime: {:02}:{:02}:{:02}",
                uptime.as_secs() / 3600,
                (uptime.as_secs() % 3600) / 60,
                uptime.as_secs() % 60
            )
        }
        Command::Shortcuts => {
            let mut msg = String::from("⚡ Shortcuts:\n");
            for shortcut in Shortcut::ALL {
                msg.push_str(&format!("/{} — {}\n", shortcut.name(), shortcut.query()));
            }
            msg
        }
        Command::Recommend("") => "✍️ Usage: /recommend <your fashion query>".to_string(),
        Command::Recommend(query) => return run_query(query, bot).await,
        Command::Shortcut(shortcut) => return run_query(shortcut.query(), bot).await,
        Command::Unknown(name) => {
            format!("🤖 Unknown command /{}. Type /help for a list of commands.", name)
        }
    };

    if let Err(e) = bot.notify_text(&reply).await {
        warn!("Reply failed: {:?}", e);
    }
}

async fn run_query(query: &str, bot: &TelegramBot) {
    match bot.recommender.recommend(query).await {
        Ok(recommendation) => {
            let presentation = present(&recommendation.products, bot.layout, &bot.images);
            if let Err(e) = bot.notify_presentation(&presentation).await {
                warn!("Sending results failed: {:?}", e);
            }
        }
        Err(e) => {
            warn!("Keyword extraction failed for '{}': {}", query, e);
            let notice = format!("⚠️ Could not process the query right now ({}). Please try again.", e);
            if let Err(e) = bot.notify_text(&notice).await {
                warn!("Failure notice not sent: {:?}", e);
            }
        }
    }
}
