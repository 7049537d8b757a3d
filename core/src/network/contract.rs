use async_trait::async_trait;

use super::RpcContract;
use crate::address::parse_address;
use crate::amount::U256;
use crate::error::Result;
use crate::facade::{ContractFacade, TxOutcome};
use crate::validate::{require_amount, require_recipient, require_token_id};

#[async_trait]
impl ContractFacade for RpcContract {
    fn decimals(&self) -> u8 {
        self.contracts.decimals
    }

    // -- ERC-20 reads --

    async fn read_balance(&self) -> Result<U256> {
        let owner = self.account().await?;
        Ok(self.token().balanceOf(owner).call().await?)
    }

    async fn read_total_supply(&self) -> Result<U256> {
        Ok(self.token().totalSupply().call().await?)
    }

    async fn read_symbol(&self) -> Result<String> {
        Ok(self.token().symbol().call().await?)
    }

    async fn read_name(&self) -> Result<String> {
        Ok(self.token().name().call().await?)
    }

    async fn read_decimals(&self) -> Result<u8> {
        Ok(self.token().decimals().call().await?)
    }

    // -- ERC-20 writes --

    async fn transfer(&self, to: &str, amount: &str) -> Result<TxOutcome> {
        let to = require_recipient(to, "Recipient")?;
        let amount = require_amount(amount, self.decimals())?;
        let to = parse_address(to)?;
        let tx = self.token().transfer(to, amount).into_transaction_request();
        self.send_and_confirm("transfer", tx).await
    }

    async fn approve(&self, spender: &str, amount: &str) -> Result<TxOutcome> {
        let spender = require_recipient(spender, "Spender")?;
        let amount = require_amount(amount, self.decimals())?;
        let spender = parse_address(spender)?;
        let tx = self.token().approve(spender, amount).into_transaction_request();
        self.send_and_confirm("approve", tx).await
    }

    async fn deposit_tokens(&self, id: &str, amount: &str) -> Result<TxOutcome> {
        let id = require_token_id(id)?;
        let amount = require_amount(amount, self.decimals())?;
        let tx = self.token().depositTokens(id, amount).into_transaction_request();
        self.send_and_confirm("depositTokens", tx).await
    }

    async fn withdraw_tokens(&self, amount: &str) -> Result<TxOutcome> {
        let amount = require_amount(amount, self.decimals())?;
        let tx = self.token().withdrawTokens(amount).into_transaction_request();
        self.send_and_confirm("withdrawTokens", tx).await
    }

    // -- ERC-721 --

    async fn erc721_transfer_from(
        &self,
        from: &str,
        to: &str,
        token_id: &str,
    ) -> Result<TxOutcome> {
        let from = require_recipient(from, "Sender")?;
        let to = require_recipient(to, "Recipient")?;
        let token_id = require_token_id(token_id)?;
        let from = parse_address(from)?;
        let to = parse_address(to)?;
        let tx = self
            .nft()
            .transferFrom(from, to, token_id)
            .into_transaction_request();
        self.send_and_confirm("transferFrom", tx).await
    }

    async fn owner_of(&self, token_id: &str) -> Result<String> {
        let token_id = require_token_id(token_id)?;
        let owner = self.nft().ownerOf(token_id).call().await?;
        Ok(owner.to_string())
    }

    async fn erc721_balance_of(&self, owner: &str) -> Result<U256> {
        let owner = parse_address(require_recipient(owner, "Owner")?)?;
        Ok(self.nft().balanceOf(owner).call().await?)
    }

    async fn get_approved(&self, token_id: &str) -> Result<String> {
        let token_id = require_token_id(token_id)?;
        let approved = self.nft().getApproved(token_id).call().await?;
        Ok(approved.to_string())
    }

    async fn token_uri(&self, token_id: &str) -> Result<String> {
        let token_id = require_token_id(token_id)?;
        Ok(self.nft().tokenURI(token_id).call().await?)
    }
}
