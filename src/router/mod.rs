use std::sync::Arc;

use teloxide::{
    dispatching::{
        dialogue::{self, InMemStorage},
        UpdateFilterExt, UpdateHandler,
    },
    prelude::*,
};

use crate::commands::{self, BotCommands, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;

/// Wires bot updates to their handlers.
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }

    pub fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;

        let services = self.services.clone();

        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(case![BotCommands::Start].endpoint(
                |bot: Bot, msg: Message, dialogue: MyDialogue| async move {
                    commands::start::handle_start(bot, msg, dialogue).await
                },
            ))
            .branch(
                case![BotCommands::Help].endpoint(|bot: Bot, msg: Message| async move {
                    commands::help::handle_help(bot, msg).await
                }),
            );

        let message_handler = Update::filter_message()
            .branch(command_handler)
            .branch(dptree::endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services = services.clone();
                    async move {
                        commands::message::handle_message(bot, msg, dialogue, services).await
                    }
                },
            ));

        let callback_handler = Update::filter_callback_query().endpoint(
            |bot: Bot, q: CallbackQuery, dialogue: MyDialogue| async move {
                commands::callback::handle_callback(bot, q, dialogue).await
            },
        );

        dialogue::enter::<Update, InMemStorage<State>, State, _>()
            .branch(message_handler)
            .branch(callback_handler)
    }
}
