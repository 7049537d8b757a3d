//! Domain error type for contract and dashboard operations.

use alloy::transports::TransportError;
use thiserror::Error;

/// Typed error enum for facade operations, allowing the controller to match on
/// specific failure modes instead of inspecting opaque `anyhow::Error` messages.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Missing or malformed recipient/sender address.
    #[error("{0}")]
    InvalidRecipient(String),

    /// Missing, malformed, or non-positive amount.
    #[error("{0}")]
    InvalidAmount(String),

    /// Missing or malformed NFT token id.
    #[error("{0}")]
    InvalidTokenId(String),

    /// Wallet provider or RPC communication failure.
    #[error("{0}")]
    Network(String),

    /// No provider or signing account available.
    #[error("{0}")]
    NotConnected(String),

    /// Unexpected error from internal subsystems.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DashboardError {
    /// Short machine-friendly label, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRecipient(_) => "invalid_recipient",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::InvalidTokenId(_) => "invalid_token_id",
            Self::Network(_) => "network",
            Self::NotConnected(_) => "not_connected",
            Self::Other(_) => "other",
        }
    }
}

impl From<TransportError> for DashboardError {
    fn from(e: TransportError) -> Self {
        Self::Network(format!("RPC request failed: {e}"))
    }
}

impl From<alloy::contract::Error> for DashboardError {
    fn from(e: alloy::contract::Error) -> Self {
        match e {
            alloy::contract::Error::TransportError(e) => e.into(),
            other => Self::Network(format!("Contract call failed: {other}")),
        }
    }
}

/// Alias for `std::result::Result<T, DashboardError>`.
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_message() {
        let err = DashboardError::InvalidAmount("Amount must be greater than 0".into());
        assert_eq!(err.to_string(), "Amount must be greater than 0");
        assert_eq!(err.kind(), "invalid_amount");
    }

    #[test]
    fn anyhow_converts_to_other() {
        let err: DashboardError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, DashboardError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn transport_errors_are_network() {
        let err: DashboardError = TransportError::NullResp.into();
        assert_eq!(err.kind(), "network");

        let err: DashboardError =
            alloy::contract::Error::TransportError(TransportError::NullResp).into();
        assert!(err.to_string().starts_with("RPC request failed"), "got: {err}");
    }
}
