pub mod address;
pub mod amount;
pub mod config;
pub mod controller;
pub mod error;
pub mod facade;
pub mod mock;
pub mod network;
pub mod snapshot;
pub mod validate;

pub use address::{parse_address, short_address};
pub use alloy::primitives::Address;
pub use amount::U256;
pub use config::{ContractConfig, Network, NetworkConfig, ReceiptPolling};
pub use controller::{Dashboard, Event, LoadState, Request, TokenAction};
pub use error::DashboardError;
pub use facade::{ContractFacade, TxOutcome};
pub use mock::MockContract;
pub use network::RpcContract;
pub use snapshot::{load_snapshot, TokenSnapshot};

/// Build the JSON-RPC facade for `network` and `contracts`.
pub fn connect(
    network: &NetworkConfig,
    contracts: ContractConfig,
    allow_insecure: bool,
) -> anyhow::Result<RpcContract> {
    let url = network.rpc_url()?;
    tracing::info!(
        network = %network.network,
        %url,
        token = %contracts.token,
        "connecting to provider"
    );
    RpcContract::new(&url, allow_insecure, contracts)
}
