use alloy::network::{ReceiptResponse, TransactionBuilder};
use alloy::primitives::TxHash;
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use tracing::{debug, info};

use super::RpcContract;
use crate::error::{DashboardError, Result};
use crate::facade::TxOutcome;

impl RpcContract {
    /// Submit a contract call through the provider's signer and wait until it
    /// is mined.
    pub(super) async fn send_and_confirm(
        &self,
        operation: &'static str,
        tx: TransactionRequest,
    ) -> Result<TxOutcome> {
        let from = self.account().await?;
        let pending = self.provider.send_transaction(tx.with_from(from)).await?;
        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, operation, "transaction submitted");

        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !ReceiptResponse::status(&receipt) {
            return Err(DashboardError::Network(format!(
                "Transaction reverted (hash: {tx_hash})"
            )));
        }
        info!(%tx_hash, block = ?receipt.block_number, "transaction confirmed");
        Ok(TxOutcome {
            tx_hash: receipt.transaction_hash.to_string(),
        })
    }

    /// Poll for a receipt until one appears or the poll budget runs out.
    pub async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt> {
        for attempt in 1..=self.polling.max_polls {
            if let Some(receipt) = self.provider.get_transaction_receipt(tx_hash).await? {
                return Ok(receipt);
            }
            debug!(%tx_hash, attempt, "receipt pending");
            tokio::time::sleep(self.polling.interval).await;
        }
        Err(DashboardError::Network(format!(
            "Transaction {tx_hash} not confirmed after {} polls",
            self.polling.max_polls
        )))
    }
}
