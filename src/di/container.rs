use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;

use crate::solana::price::{CoinGeckoPriceService, PriceService};
use crate::solana::swap::config::SwapConfig;
use crate::solana::swap::fetch::{RpcTransactionSource, TransactionSource};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    solana_client: Arc<RpcClient>,
    transaction_source: Arc<dyn TransactionSource>,
    price_service: Arc<dyn PriceService>,
    swap_config: SwapConfig,
}

impl ServiceContainer {
    /// Create a new service container with essential dependencies
    pub fn new(solana_client: Arc<RpcClient>, swap_config: SwapConfig) -> Self {
        let transaction_source =
            Arc::new(RpcTransactionSource::new(solana_client.clone())) as Arc<dyn TransactionSource>;

        let price_service = Arc::new(CoinGeckoPriceService::new()) as Arc<dyn PriceService>;

        Self {
            solana_client,
            transaction_source,
            price_service,
            swap_config,
        }
    }

    pub fn solana_client(&self) -> &RpcClient {
        &self.solana_client
    }

    pub fn transaction_source(&self) -> &dyn TransactionSource {
        self.transaction_source.as_ref()
    }

    pub fn price_service(&self) -> &dyn PriceService {
        self.price_service.as_ref()
    }

    pub fn swap_config(&self) -> &SwapConfig {
        &self.swap_config
    }
}
