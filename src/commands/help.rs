use anyhow::Result;
use teloxide::prelude::*;

pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, "Send /start to see and select actions.")
        .await?;

    Ok(())
}
