//! Raydium Swap Parser Bot for Telegram - Main executable
//!
//! Entry point for the Telegram bot that decodes Raydium swap transactions
//! into structured trade records and reports wallet SOL balances.
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use solana_swap_bot::{create_solana_client, ServiceContainer, State, SwapConfig, TelegramRouter};
use std::env;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::{dptree, Bot};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting Raydium Swap Parser Bot v{}",
        solana_swap_bot::VERSION
    );

    let bot_token = env::var("TELEGRAM_BOT_TOKEN")
        .context("TELEGRAM_BOT_TOKEN must be set in environment variables")?;

    let solana_rpc_url = env::var("SOLANA_RPC_URL")
        .context("SOLANA_RPC_URL must be set in environment variables")?;

    // Create Telegram bot instance
    let bot = Bot::new(bot_token);

    // Initialize Solana client
    info!("Connecting to Solana network...");
    let solana_client =
        create_solana_client(&solana_rpc_url).context("Failed to create Solana client")?;

    // Assemble application services with the protocol configuration
    let swap_config = SwapConfig::from_env();
    let services = Arc::new(ServiceContainer::new(solana_client, swap_config));

    let router = TelegramRouter::new(services);
    let handler = router.setup_handlers();

    // Build dispatcher with dialogue storage and control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<State>::new()])
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    Ok(())
}
