use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_client::client_error::ClientErrorKind;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta, UiTransactionEncoding,
};

/// Source of parsed transaction snapshots, keyed by signature.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetches a fully parsed transaction, or `None` when the ledger has no
    /// record of the signature yet.
    async fn get_parsed_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<EncodedConfirmedTransactionWithStatusMeta>>;
}

/// Fetches transactions from a Solana RPC node with jsonParsed encoding and
/// confirmed commitment.
pub struct RpcTransactionSource {
    client: Arc<RpcClient>,
}

impl RpcTransactionSource {
    pub fn new(client: Arc<RpcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransactionSource for RpcTransactionSource {
    async fn get_parsed_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<EncodedConfirmedTransactionWithStatusMeta>> {
        let signature = Signature::from_str(signature)
            .map_err(|_| anyhow!("Invalid transaction signature format"))?;

        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::JsonParsed),
            commitment: Some(CommitmentConfig::confirmed()),
            max_supported_transaction_version: Some(0),
        };

        match self
            .client
            .get_transaction_with_config(&signature, config)
            .await
        {
            Ok(transaction) => Ok(Some(transaction)),
            // The node reports an unknown or not yet processed signature as
            // an RPC-level error rather than an empty payload.
            Err(err) if matches!(err.kind(), ClientErrorKind::RpcError(_)) => Ok(None),
            Err(err) => Err(anyhow!("Failed to fetch transaction: {}", err)),
        }
    }
}
