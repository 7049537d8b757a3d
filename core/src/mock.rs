//! In-memory contract facade for demos and tests.
//!
//! Reads return fixed values, writes are validated, logged, and recorded, and
//! every call resolves with a synthetic transaction hash. Tests can inject
//! failures per operation and delay reads to observe concurrency.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use alloy::primitives::Address;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::amount::U256;
use crate::error::{DashboardError, Result};
use crate::facade::{ContractFacade, TxOutcome};
use crate::validate::{require_amount, require_recipient, require_token_id};

/// Owner reported for token ids nobody has transferred yet.
pub const DEFAULT_OWNER: &str = "0x1234000000000000000000000000000000005678";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ReadBalance,
    ReadTotalSupply,
    ReadSymbol,
    ReadName,
    ReadDecimals,
    Transfer,
    Approve,
    DepositTokens,
    WithdrawTokens,
    Erc721TransferFrom,
    OwnerOf,
    Erc721BalanceOf,
    GetApproved,
    TokenUri,
}

/// A facade call exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    ReadBalance,
    ReadTotalSupply,
    ReadSymbol,
    ReadName,
    ReadDecimals,
    Transfer { to: String, amount: String },
    Approve { spender: String, amount: String },
    DepositTokens { id: String, amount: String },
    WithdrawTokens { amount: String },
    Erc721TransferFrom { from: String, to: String, token_id: String },
    OwnerOf { token_id: String },
    Erc721BalanceOf { owner: String },
    GetApproved { token_id: String },
    TokenUri { token_id: String },
}

impl ContractCall {
    pub fn operation(&self) -> Operation {
        match self {
            Self::ReadBalance => Operation::ReadBalance,
            Self::ReadTotalSupply => Operation::ReadTotalSupply,
            Self::ReadSymbol => Operation::ReadSymbol,
            Self::ReadName => Operation::ReadName,
            Self::ReadDecimals => Operation::ReadDecimals,
            Self::Transfer { .. } => Operation::Transfer,
            Self::Approve { .. } => Operation::Approve,
            Self::DepositTokens { .. } => Operation::DepositTokens,
            Self::WithdrawTokens { .. } => Operation::WithdrawTokens,
            Self::Erc721TransferFrom { .. } => Operation::Erc721TransferFrom,
            Self::OwnerOf { .. } => Operation::OwnerOf,
            Self::Erc721BalanceOf { .. } => Operation::Erc721BalanceOf,
            Self::GetApproved { .. } => Operation::GetApproved,
            Self::TokenUri { .. } => Operation::TokenUri,
        }
    }
}

#[derive(Default)]
struct MockState {
    calls: Vec<ContractCall>,
    failing: HashSet<Operation>,
    /// token id -> owner, for ids that changed hands.
    owners: HashMap<String, String>,
    /// token id -> approved address.
    approvals: HashMap<String, String>,
    tx_count: u64,
}

pub struct MockContract {
    balance: U256,
    total_supply: U256,
    symbol: String,
    name: String,
    decimals: u8,
    read_delay: Option<Duration>,
    state: Mutex<MockState>,
}

impl Default for MockContract {
    fn default() -> Self {
        Self::new()
    }
}

impl MockContract {
    pub fn new() -> Self {
        Self {
            balance: U256::from(1000u64),
            total_supply: U256::from(1_000_000u64),
            symbol: "TKN".into(),
            name: "Mock Token".into(),
            decimals: 0,
            read_delay: None,
            state: Mutex::new(MockState::default()),
        }
    }

    pub fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_total_supply(mut self, total_supply: U256) -> Self {
        self.total_supply = total_supply;
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Make every read sleep before answering.
    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = Some(delay);
        self
    }

    /// Make every future call of `op` fail with a network error.
    pub async fn fail(&self, op: Operation) {
        self.state.lock().await.failing.insert(op);
    }

    pub async fn recover(&self, op: Operation) {
        self.state.lock().await.failing.remove(&op);
    }

    /// All calls received so far, in order.
    pub async fn calls(&self) -> Vec<ContractCall> {
        self.state.lock().await.calls.clone()
    }

    pub async fn clear_calls(&self) {
        self.state.lock().await.calls.clear();
    }

    /// Record the call and apply any injected failure.
    async fn enter(&self, call: ContractCall) -> Result<()> {
        debug!(?call, "mock contract call");
        let op = call.operation();
        let mut state = self.state.lock().await;
        state.calls.push(call);
        if state.failing.contains(&op) {
            return Err(DashboardError::Network(format!(
                "Mock provider unavailable ({op:?})"
            )));
        }
        Ok(())
    }

    async fn read<T>(&self, call: ContractCall, value: T) -> Result<T> {
        self.enter(call).await?;
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(value)
    }

    async fn confirm(&self) -> TxOutcome {
        let mut state = self.state.lock().await;
        state.tx_count += 1;
        TxOutcome {
            tx_hash: format!("0x{:064x}", state.tx_count),
        }
    }
}

#[async_trait]
impl ContractFacade for MockContract {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    async fn read_balance(&self) -> Result<U256> {
        self.read(ContractCall::ReadBalance, self.balance).await
    }

    async fn read_total_supply(&self) -> Result<U256> {
        self.read(ContractCall::ReadTotalSupply, self.total_supply).await
    }

    async fn read_symbol(&self) -> Result<String> {
        self.read(ContractCall::ReadSymbol, self.symbol.clone()).await
    }

    async fn read_name(&self) -> Result<String> {
        self.read(ContractCall::ReadName, self.name.clone()).await
    }

    async fn read_decimals(&self) -> Result<u8> {
        self.read(ContractCall::ReadDecimals, self.decimals).await
    }

    async fn transfer(&self, to: &str, amount: &str) -> Result<TxOutcome> {
        self.enter(ContractCall::Transfer {
            to: to.to_string(),
            amount: amount.to_string(),
        })
        .await?;
        let to = require_recipient(to, "Recipient")?;
        require_amount(amount, self.decimals)?;
        info!("Transfer {amount} to {to}");
        Ok(self.confirm().await)
    }

    async fn approve(&self, spender: &str, amount: &str) -> Result<TxOutcome> {
        self.enter(ContractCall::Approve {
            spender: spender.to_string(),
            amount: amount.to_string(),
        })
        .await?;
        let spender = require_recipient(spender, "Spender")?;
        require_amount(amount, self.decimals)?;
        info!("Approve {spender} to spend {amount}");
        Ok(self.confirm().await)
    }

    async fn deposit_tokens(&self, id: &str, amount: &str) -> Result<TxOutcome> {
        self.enter(ContractCall::DepositTokens {
            id: id.to_string(),
            amount: amount.to_string(),
        })
        .await?;
        info!("Deposit {amount} tokens with ID {id}");
        Ok(self.confirm().await)
    }

    async fn withdraw_tokens(&self, amount: &str) -> Result<TxOutcome> {
        self.enter(ContractCall::WithdrawTokens {
            amount: amount.to_string(),
        })
        .await?;
        info!("Withdraw {amount} tokens");
        Ok(self.confirm().await)
    }

    async fn erc721_transfer_from(
        &self,
        from: &str,
        to: &str,
        token_id: &str,
    ) -> Result<TxOutcome> {
        self.enter(ContractCall::Erc721TransferFrom {
            from: from.to_string(),
            to: to.to_string(),
            token_id: token_id.to_string(),
        })
        .await?;
        let from = require_recipient(from, "Sender")?;
        let to = require_recipient(to, "Recipient")?;
        let id = require_token_id(token_id)?.to_string();
        info!("Transfer NFT {id} from {from} to {to}");
        {
            let mut state = self.state.lock().await;
            state.approvals.remove(&id);
            state.owners.insert(id, to.to_string());
        }
        Ok(self.confirm().await)
    }

    async fn owner_of(&self, token_id: &str) -> Result<String> {
        self.enter(ContractCall::OwnerOf {
            token_id: token_id.to_string(),
        })
        .await?;
        let id = require_token_id(token_id)?.to_string();
        let state = self.state.lock().await;
        Ok(state
            .owners
            .get(&id)
            .cloned()
            .unwrap_or_else(|| DEFAULT_OWNER.to_string()))
    }

    async fn erc721_balance_of(&self, owner: &str) -> Result<U256> {
        self.enter(ContractCall::Erc721BalanceOf {
            owner: owner.to_string(),
        })
        .await?;
        let owner = require_recipient(owner, "Owner")?.to_lowercase();
        let state = self.state.lock().await;
        let held = state
            .owners
            .values()
            .filter(|o| o.to_lowercase() == owner)
            .count();
        Ok(U256::from(held as u64))
    }

    async fn get_approved(&self, token_id: &str) -> Result<String> {
        self.enter(ContractCall::GetApproved {
            token_id: token_id.to_string(),
        })
        .await?;
        let id = require_token_id(token_id)?.to_string();
        let state = self.state.lock().await;
        Ok(state
            .approvals
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Address::ZERO.to_string()))
    }

    async fn token_uri(&self, token_id: &str) -> Result<String> {
        self.enter(ContractCall::TokenUri {
            token_id: token_id.to_string(),
        })
        .await?;
        let id = require_token_id(token_id)?;
        Ok(format!("ipfs://mock/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TO: &str = "0x1111111111111111111111111111111111111111";

    #[tokio::test]
    async fn reads_return_defaults() {
        let mock = MockContract::new();
        assert_eq!(mock.read_balance().await.unwrap(), U256::from(1000u64));
        assert_eq!(mock.read_total_supply().await.unwrap(), U256::from(1_000_000u64));
        assert_eq!(mock.read_symbol().await.unwrap(), "TKN");
        assert_eq!(mock.read_name().await.unwrap(), "Mock Token");
        assert_eq!(mock.read_decimals().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn transfer_validates_in_order() {
        let mock = MockContract::new();
        assert!(matches!(
            mock.transfer("", "5").await,
            Err(DashboardError::InvalidRecipient(_))
        ));
        assert!(matches!(
            mock.transfer("0xabc", "0").await,
            Err(DashboardError::InvalidAmount(_))
        ));
        // Both fields bad: recipient wins
        assert!(matches!(
            mock.transfer("", "0").await,
            Err(DashboardError::InvalidRecipient(_))
        ));
    }

    #[tokio::test]
    async fn transfer_accepts_any_well_formed_input() {
        let mock = MockContract::new();
        for (to, amount) in [(TO, "10"), ("0xabc", "1"), ("alice", "999999999999")] {
            let outcome = mock.transfer(to, amount).await.unwrap();
            assert!(outcome.tx_hash.starts_with("0x"));
            assert_eq!(outcome.tx_hash.len(), 66);
        }
    }

    #[tokio::test]
    async fn tx_hashes_are_distinct() {
        let mock = MockContract::new();
        let a = mock.withdraw_tokens("1").await.unwrap();
        let b = mock.deposit_tokens("7", "1").await.unwrap();
        assert_ne!(a.tx_hash, b.tx_hash);
    }

    #[tokio::test]
    async fn deposit_and_withdraw_leave_validation_to_contract() {
        let mock = MockContract::new();
        assert!(mock.deposit_tokens("", "").await.is_ok());
        assert!(mock.withdraw_tokens("").await.is_ok());
    }

    #[tokio::test]
    async fn owner_of_validates_and_defaults() {
        let mock = MockContract::new();
        assert!(matches!(
            mock.owner_of("").await,
            Err(DashboardError::InvalidTokenId(_))
        ));
        let owner = mock.owner_of("42").await.unwrap();
        assert!(!owner.is_empty());
        assert_eq!(owner, DEFAULT_OWNER);
    }

    #[tokio::test]
    async fn nft_transfer_moves_ownership() {
        let mock = MockContract::new();
        mock.erc721_transfer_from(DEFAULT_OWNER, TO, "42").await.unwrap();
        assert_eq!(mock.owner_of("42").await.unwrap(), TO);
        assert_eq!(mock.owner_of("43").await.unwrap(), DEFAULT_OWNER);
        assert_eq!(mock.erc721_balance_of(TO).await.unwrap(), U256::from(1u64));
        assert_eq!(
            mock.get_approved("42").await.unwrap(),
            Address::ZERO.to_string()
        );
    }

    #[tokio::test]
    async fn nft_transfer_requires_fields() {
        let mock = MockContract::new();
        assert!(matches!(
            mock.erc721_transfer_from("", TO, "1").await,
            Err(DashboardError::InvalidRecipient(_))
        ));
        assert!(matches!(
            mock.erc721_transfer_from(DEFAULT_OWNER, "", "1").await,
            Err(DashboardError::InvalidRecipient(_))
        ));
        assert!(matches!(
            mock.erc721_transfer_from(DEFAULT_OWNER, TO, "").await,
            Err(DashboardError::InvalidTokenId(_))
        ));
    }

    #[tokio::test]
    async fn token_uri_and_approve() {
        let mock = MockContract::new();
        assert_eq!(mock.token_uri("7").await.unwrap(), "ipfs://mock/7");
        assert!(mock.approve(TO, "5").await.is_ok());
        assert!(matches!(
            mock.approve("", "5").await,
            Err(DashboardError::InvalidRecipient(_))
        ));
    }

    #[tokio::test]
    async fn injected_failure_is_network_error() {
        let mock = MockContract::new();
        mock.fail(Operation::ReadSymbol).await;
        assert!(matches!(
            mock.read_symbol().await,
            Err(DashboardError::Network(_))
        ));
        mock.recover(Operation::ReadSymbol).await;
        assert!(mock.read_symbol().await.is_ok());
    }

    #[tokio::test]
    async fn records_exact_arguments() {
        let mock = MockContract::new();
        mock.transfer(TO, "10").await.unwrap();
        mock.withdraw_tokens("3").await.unwrap();
        assert_eq!(
            mock.calls().await,
            vec![
                ContractCall::Transfer {
                    to: TO.into(),
                    amount: "10".into()
                },
                ContractCall::WithdrawTokens { amount: "3".into() },
            ]
        );
        mock.clear_calls().await;
        assert!(mock.calls().await.is_empty());
    }
}
