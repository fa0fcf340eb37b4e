use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a decoded trade, relative to wrapped SOL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwapType {
    /// SOL was spent to acquire the token.
    Buy,
    /// The token was spent to acquire SOL.
    Sell,
}

/// Canonical record of one Raydium swap reconstructed from a confirmed
/// transaction. Amounts are in human units, already scaled by the token's
/// decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swap {
    pub signature: String,
    pub timestamp: i64,
    pub token_mint: String,
    pub token_decimals: u8,
    #[serde(rename = "type")]
    pub swap_type: SwapType,
    pub amount_in: Decimal,
    pub amount_out: Decimal,
    pub pool_id: String,
    pub signer: String,
}

/// Mint and decimals of the non-SOL side of an AMM trade, resolved from the
/// pre-trade token balances before the swap record is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAccountInfo {
    pub mint: String,
    pub decimals: u8,
}
