use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cvlens::analysis::AnalysisClient;
use cvlens::bot;
use cvlens::config::Config;
use cvlens::localization::init_localization;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting CvLens Telegram Bot");

    // Startup fails hard when a required variable is missing
    let config = Arc::new(Config::from_env()?);

    // Load the Arabic message bundle before any handler runs
    init_localization()?;

    let analysis = Arc::new(AnalysisClient::new(&config.hf_token, &config.model_name));

    // Initialize the bot
    let bot = Bot::new(config.telegram_token.clone());

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with the shared configuration and client
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let analysis = Arc::clone(&analysis);
            move |bot: Bot, msg: Message| {
                let analysis = Arc::clone(&analysis);
                async move { bot::message_handler(bot, msg, analysis).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let config = Arc::clone(&config);
            move |bot: Bot, q: CallbackQuery| {
                let config = Arc::clone(&config);
                async move { bot::callback_handler(bot, q, config).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
