use std::str::FromStr;

use anyhow::{anyhow, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use crate::solana::price::PriceService;

// Constant for conversion
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Convert lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Get SOL balance of a wallet
pub async fn get_sol_balance(client: &RpcClient, address: &str) -> Result<f64> {
    let pubkey =
        Pubkey::from_str(address).map_err(|_| anyhow!("Invalid Solana address format"))?;

    let balance = client
        .get_balance(&pubkey)
        .await
        .map_err(|e| anyhow!("Failed to get balance: {}", e))?;

    Ok(lamports_to_sol(balance))
}

/// Get SOL balance of a wallet together with its USD value, formatted for
/// the chat reply.
pub async fn get_sol_balance_and_usd(
    client: &RpcClient,
    price_service: &dyn PriceService,
    address: &str,
) -> Result<String> {
    let balance_sol = get_sol_balance(client, address).await?;
    let sol_price_usd = price_service.get_sol_price().await?;
    let balance_usd = balance_sol * sol_price_usd;

    Ok(format!("{} SOL / {:.2} USD", balance_sol, balance_usd))
}
