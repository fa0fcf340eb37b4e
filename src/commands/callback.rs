use anyhow::Result;
use log::info;
use teloxide::prelude::*;

use super::{MyDialogue, ACTION_GET_BALANCE, ACTION_PARSE_TX};
use crate::entity::State;

// Main callback handler function
pub async fn handle_callback(bot: Bot, q: CallbackQuery, dialogue: MyDialogue) -> Result<()> {
    // Extract the callback data
    let callback_data = match q.data.clone() {
        Some(data) => data,
        None => return Ok(()),
    };

    // Get the chat ID
    let chat_id = match q.message {
        Some(ref msg) => msg.chat().id,
        None => return Ok(()),
    };

    info!("Received callback: {} from user {}", callback_data, q.from.id);

    // Acknowledge the callback query to stop loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        info!("Failed to answer callback query: {}", err);
    }

    match callback_data.as_str() {
        ACTION_PARSE_TX => {
            dialogue.update(State::AwaitingSignature).await?;
            bot.send_message(chat_id, "Please input the transaction signature.")
                .await?;
        }
        ACTION_GET_BALANCE => {
            dialogue.update(State::AwaitingWalletAddress).await?;
            bot.send_message(chat_id, "Please input the wallet address.")
                .await?;
        }
        _ => {}
    }

    Ok(())
}
