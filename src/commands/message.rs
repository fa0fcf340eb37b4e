use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::error;
use teloxide::prelude::*;

use super::MyDialogue;
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::solana::balance::get_sol_balance_and_usd;
use crate::solana::swap::decode_swap_transaction;
use crate::utils::validate_transaction_signature;

/// Handles free-form text according to the action selected from the menu.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let text = match msg.text() {
        Some(text) => text.trim(),
        None => return Ok(()),
    };

    match dialogue.get().await?.unwrap_or_default() {
        State::AwaitingSignature => {
            if !validate_transaction_signature(text) {
                bot.send_message(msg.chat.id, "Invalid transaction signature")
                    .await?;
                return Ok(());
            }

            match parse_swap(text, &services).await {
                Ok(report) => {
                    bot.send_message(msg.chat.id, report).await?;
                }
                Err(err) => {
                    error!("Failed to decode swap {}: {}", text, err);
                    bot.send_message(msg.chat.id, err.to_string()).await?;
                }
            }
        }
        State::AwaitingWalletAddress => {
            let reply = match get_sol_balance_and_usd(
                services.solana_client(),
                services.price_service(),
                text,
            )
            .await
            {
                Ok(balance) => balance,
                Err(err) => {
                    error!("Failed to fetch balance for {}: {}", text, err);
                    "Error: Invalid public key input or fetching error".to_string()
                }
            };

            bot.send_message(msg.chat.id, reply).await?;
        }
        State::Start => {
            bot.send_message(msg.chat.id, "Send /start to see and select actions.")
                .await?;
        }
    }

    Ok(())
}

async fn parse_swap(signature: &str, services: &ServiceContainer) -> Result<String> {
    let transaction = services
        .transaction_source()
        .get_parsed_transaction(signature)
        .await?
        .ok_or_else(|| anyhow!("Transaction not found for the provided signature."))?;

    let swap = decode_swap_transaction(&transaction, services.swap_config())?;

    Ok(serde_json::to_string_pretty(&swap)?)
}
