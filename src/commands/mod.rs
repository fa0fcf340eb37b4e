use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::entity::State;

pub mod callback;
pub mod help;
pub mod message;
pub mod start;

pub type MyDialogue = Dialogue<State, InMemStorage<State>>;

// Callback payloads of the action menu buttons
pub const ACTION_PARSE_TX: &str = "parse_tx";
pub const ACTION_GET_BALANCE: &str = "get_balance";

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "start the bot and show the action menu")]
    Start,
    #[command(description = "display this help message")]
    Help,
}
