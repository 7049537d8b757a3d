use std::fmt;

use token_dashboard_core::{short_address, Address, Network};

// -- Screens --

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Screen {
    Overview,
    Transact,
    Nfts,
}

// -- Provider connection --

#[derive(Debug, Clone)]
pub(crate) enum Connection {
    Mock,
    Rpc {
        network: Network,
        url: String,
        token: Address,
    },
    /// Provider setup failed; every request completes with NotConnected.
    Failed(String),
}

impl Connection {
    /// Short badge text for the header.
    pub(crate) fn label(&self) -> String {
        match self {
            Connection::Mock => "mock".into(),
            Connection::Rpc { network, .. } => network.to_string(),
            Connection::Failed(_) => "disconnected".into(),
        }
    }

    pub(crate) fn not_connected_reason(&self) -> String {
        match self {
            Connection::Failed(reason) => format!("Not connected: {reason}"),
            _ => "Not connected to a wallet provider".into(),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connection::Mock => write!(f, "In-memory mock contract"),
            Connection::Rpc { url, token, .. } => {
                write!(f, "{url}\nToken {}", short_address(token))
            }
            Connection::Failed(reason) => write!(f, "No provider: {reason}"),
        }
    }
}
