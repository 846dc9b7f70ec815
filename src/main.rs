mod catalog;
mod config;
mod extractor;
mod filter;
mod model;
mod normalizer;
mod parser;
mod presenter;
mod recommender;
#[cfg(test)]
mod test_support;

use catalog::{ImageStore, load_catalog};
use clap::{Parser, Subcommand};
use config::{AppConfig, load_config};
use extractor::build_extractor;
use filter::build_filter;
use model::{ExtractError, Recommendation};
use presenter::telegram::TelegramBot;
use presenter::{Layout, present, terminal};
use recommender::{Recommender, Shortcut};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config.json";

#[derive(Parser)]
#[command(name = "vastrai", version, about = "Recommends fashion items based on a free-text query")]
struct Cli {
    /// Path to the JSON config (defaults to ./config.json when present)
    #[arg(long, short)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Recommend products for a query
    Recommend {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Run one of the canned queries (summer, winter, casual, formal)
    Shortcut { name: String },
    /// List the canned queries
    Shortcuts,
    /// Interactive prompt; `/name` runs a shortcut, `:q` quits
    Repl,
    /// Serve queries over the Telegram Bot API
    Bot,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    let cli = Cli::parse();

    if let Cmd::Shortcuts = cli.cmd {
        for shortcut in Shortcut::ALL {
            println!("{:<8} {}", shortcut.name(), shortcut.query());
        }
        return ExitCode::SUCCESS;
    }

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // The catalog is required for every query; failing here is fatal.
    let catalog = match load_catalog(&config.catalog_path) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!("Failed to load catalog {}: {}", config.catalog_path, e);
            return ExitCode::FAILURE;
        }
    };

    let extractor = match build_extractor(&config.extractor, &catalog) {
        Ok(ex) => ex,
        Err(e) => {
            error!("Failed to initialize keyword extractor: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let filter = build_filter(config.filter, &catalog);
    let recommender = Arc::new(Recommender::new(catalog, extractor, filter));
    let images = ImageStore::new(&config.image_dir, config.image_extensions.clone());

    match cli.cmd {
        Cmd::Recommend { query } => {
            let query = query.join(" ");
            report(recommender.recommend(&query).await, config.layout, &images)
        }
        Cmd::Shortcut { name } => match Shortcut::from_name(&name) {
            Some(shortcut) => report(
                recommender.recommend_shortcut(shortcut).await,
                config.layout,
                &images,
            ),
            None => {
                error!("Unknown shortcut '{}'", name);
                ExitCode::FAILURE
            }
        },
        Cmd::Repl => {
            run_repl(&recommender, config.layout, &images).await;
            ExitCode::SUCCESS
        }
        Cmd::Bot => run_bot(&config, recommender, images).await,
        Cmd::Shortcuts => ExitCode::SUCCESS,
    }
}

/// An explicit path must exist; the default path falls back to built-in defaults.
fn resolve_config(path: Option<&str>) -> Result<AppConfig, model::ConfigError> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG).exists() => load_config(DEFAULT_CONFIG),
        None => {
            info!("No {} found, using defaults", DEFAULT_CONFIG);
            Ok(AppConfig::default())
        }
    }
}

/// Prints one pipeline outcome. Extraction failure is reported but not fatal.
fn show(result: Result<Recommendation<'_>, ExtractError>, layout: Layout, images: &ImageStore) -> bool {
    match result {
        Ok(recommendation) => {
            let presentation = present(&recommendation.products, layout, images);
            print!("{}", terminal::render(&presentation));
            true
        }
        Err(e) => {
            warn!("Keyword extraction failed: {}", e);
            println!("⚠️ Could not process the query right now ({}). Please try again.", e);
            false
        }
    }
}

fn report(result: Result<Recommendation<'_>, ExtractError>, layout: Layout, images: &ImageStore) -> ExitCode {
    if show(result, layout, images) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run_repl(recommender: &Recommender, layout: Layout, images: &ImageStore) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        if stdout.write_all(b"query> ").await.is_err() || stdout.flush().await.is_err() {
            break;
        }
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };
        let input = line.trim();
        if input == ":q" || input == ":quit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        if input.starts_with('/') {
            match Shortcut::from_name(input) {
                Some(shortcut) => {
                    show(recommender.recommend_shortcut(shortcut).await, layout, images);
                }
                None => println!("Unknown shortcut {}", input),
            }
        } else {
            show(recommender.recommend(input).await, layout, images);
        }
    }
}

async fn run_bot(config: &AppConfig, recommender: Arc<Recommender>, images: ImageStore) -> ExitCode {
    let Some(telegram) = &config.telegram else {
        error!("The bot needs a \"telegram\" section in the config");
        return ExitCode::FAILURE;
    };

    let bot = match TelegramBot::new(telegram, recommender, images, config.layout) {
        Ok(bot) => bot,
        Err(e) => {
            error!("Failed to initialize Telegram bot: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = bot.set_my_commands().await {
        warn!("Registering bot commands failed: {:?}", e);
    }
    info!("Sending startup message...");
    if let Err(e) = bot.notify_text("🚀 VastrAi started! Type /help to begin.").await {
        warn!("Startup notification failed: {:?}", e);
    }

    tokio::select! {
        _ = bot.listen_for_commands() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down bot.");
        }
    }
    ExitCode::SUCCESS
}
