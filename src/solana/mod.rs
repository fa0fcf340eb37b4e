pub mod balance;
pub mod client;
pub mod price;
pub mod swap;

// Re-export commonly used items
pub use balance::{get_sol_balance, get_sol_balance_and_usd};
pub use client::create_solana_client;
pub use price::{CoinGeckoPriceService, PriceService};
pub use swap::config::SwapConfig;
pub use swap::decode_swap_transaction;
