use anyhow::Result;
use log::info;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup},
};

use super::{MyDialogue, ACTION_GET_BALANCE, ACTION_PARSE_TX};
use crate::entity::State;

/// Inline keyboard listing the actions the bot can run.
pub fn action_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("Parse Swap Tx", ACTION_PARSE_TX)],
        vec![InlineKeyboardButton::callback(
            "Get Wallet Balance",
            ACTION_GET_BALANCE,
        )],
    ])
}

pub async fn handle_start(bot: Bot, msg: Message, dialogue: MyDialogue) -> Result<()> {
    info!("Start command received in chat {}", msg.chat.id);

    dialogue.update(State::Start).await?;

    bot.send_message(msg.chat.id, "What do you want to do?")
        .reply_markup(action_keyboard())
        .await?;

    Ok(())
}
