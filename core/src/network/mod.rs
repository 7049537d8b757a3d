//! JSON-RPC binding of the contract facade, over an alloy provider.

mod contract;
mod transfer;

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::sol;
use tokio::sync::OnceCell;
use url::Url;

use crate::config::{validate_rpc_url, ContractConfig, ReceiptPolling};
use crate::error::{DashboardError, Result};

sol! {
    /// ERC-20 token that also escrows deposits against an id.
    #[sol(rpc)]
    contract ERC20 {
        function name() public view returns (string memory);
        function symbol() public view returns (string memory);
        function decimals() public view returns (uint8);
        function totalSupply() public view returns (uint256);
        function balanceOf(address account) public view returns (uint256);
        function transfer(address to, uint256 amount) public returns (bool);
        function approve(address spender, uint256 amount) public returns (bool);
        function depositTokens(uint256 id, uint256 amount) public;
        function withdrawTokens(uint256 amount) public;
    }

    #[sol(rpc)]
    contract ERC721 {
        function balanceOf(address owner) public view returns (uint256);
        function ownerOf(uint256 tokenId) public view returns (address);
        function getApproved(uint256 tokenId) public view returns (address);
        function tokenURI(uint256 tokenId) public view returns (string memory);
        function transferFrom(address from, address to, uint256 tokenId) public;
    }
}

/// Contract facade backed by an Ethereum JSON-RPC provider. The provider
/// holds the key: writes go through `eth_sendTransaction`.
pub struct RpcContract {
    provider: DynProvider,
    url: Url,
    contracts: ContractConfig,
    polling: ReceiptPolling,
    account: OnceCell<Address>,
}

impl RpcContract {
    pub fn new(
        url: &str,
        allow_insecure: bool,
        contracts: ContractConfig,
    ) -> anyhow::Result<Self> {
        let url = validate_rpc_url(url, allow_insecure)?;
        // The node signs and fills gas and nonce itself
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url.clone())
            .erased();
        let account = match contracts.account {
            Some(a) => OnceCell::new_with(Some(a)),
            None => OnceCell::new(),
        };
        Ok(Self {
            provider,
            url,
            contracts,
            polling: ReceiptPolling::default(),
            account,
        })
    }

    pub fn with_polling(mut self, polling: ReceiptPolling) -> Self {
        self.polling = polling;
        self
    }

    pub fn rpc_url(&self) -> &Url {
        &self.url
    }

    /// The signing account: configured, or the provider's first account.
    pub async fn account(&self) -> Result<Address> {
        self.account
            .get_or_try_init(|| async {
                let accounts = self.provider.get_accounts().await?;
                accounts.first().copied().ok_or_else(|| {
                    DashboardError::NotConnected(
                        "Provider exposes no accounts. Unlock an account or pass --account."
                            .into(),
                    )
                })
            })
            .await
            .copied()
    }

    fn token(&self) -> ERC20::ERC20Instance<&DynProvider> {
        ERC20::new(self.contracts.token, &self.provider)
    }

    fn nft(&self) -> ERC721::ERC721Instance<&DynProvider> {
        ERC721::new(self.contracts.nft_contract(), &self.provider)
    }
}
