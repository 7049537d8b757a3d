//! The capability boundary between the dashboard and the token contract.

use async_trait::async_trait;

use crate::amount::U256;
use crate::error::Result;

/// A confirmed mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutcome {
    pub tx_hash: String,
}

/// Token contract operations the dashboard needs.
///
/// Arguments arrive as the raw strings the user typed. Implementations run
/// the checks in [`crate::validate`] before doing any I/O, so both the mock
/// and the RPC binding fail the same way on the same input. Mutating calls
/// resolve only once the transaction is confirmed.
#[async_trait]
pub trait ContractFacade: Send + Sync {
    /// Token decimals used to scale amounts.
    fn decimals(&self) -> u8;

    /// Token balance of the connected account, in base units.
    async fn read_balance(&self) -> Result<U256>;
    async fn read_total_supply(&self) -> Result<U256>;
    async fn read_symbol(&self) -> Result<String>;
    async fn read_name(&self) -> Result<String>;
    /// Decimals as reported by the contract itself.
    async fn read_decimals(&self) -> Result<u8>;

    /// Fails with `InvalidRecipient` if `to` is empty, then `InvalidAmount`
    /// if `amount` is not greater than zero.
    async fn transfer(&self, to: &str, amount: &str) -> Result<TxOutcome>;
    async fn approve(&self, spender: &str, amount: &str) -> Result<TxOutcome>;
    async fn deposit_tokens(&self, id: &str, amount: &str) -> Result<TxOutcome>;
    async fn withdraw_tokens(&self, amount: &str) -> Result<TxOutcome>;

    /// Fails with `InvalidRecipient` on an empty `from`/`to` and
    /// `InvalidTokenId` on an empty `token_id`.
    async fn erc721_transfer_from(&self, from: &str, to: &str, token_id: &str)
        -> Result<TxOutcome>;
    /// Current owner of an NFT. Fails with `InvalidTokenId` if empty.
    async fn owner_of(&self, token_id: &str) -> Result<String>;
    async fn erc721_balance_of(&self, owner: &str) -> Result<U256>;
    async fn get_approved(&self, token_id: &str) -> Result<String>;
    async fn token_uri(&self, token_id: &str) -> Result<String>;
}
