use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const COINGECKO_PRICE_API: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=solana&vs_currencies=usd";

#[derive(Deserialize)]
struct CoinGeckoPriceResponse {
    solana: UsdQuote,
}

#[derive(Deserialize)]
struct UsdQuote {
    usd: f64,
}

/// Spot-price lookup for the native token.
#[async_trait]
pub trait PriceService: Send + Sync {
    /// Current SOL price in USD.
    async fn get_sol_price(&self) -> Result<f64>;
}

/// Price service backed by the CoinGecko simple-price endpoint.
pub struct CoinGeckoPriceService {
    http_client: Client,
    price_api_url: String,
}

impl CoinGeckoPriceService {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            price_api_url: COINGECKO_PRICE_API.to_string(),
        }
    }
}

impl Default for CoinGeckoPriceService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceService for CoinGeckoPriceService {
    async fn get_sol_price(&self) -> Result<f64> {
        let response = self
            .http_client
            .get(&self.price_api_url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to request SOL price: {}", e))?;

        let price: CoinGeckoPriceResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse price response: {}", e))?;

        Ok(price.solana.usd)
    }
}
