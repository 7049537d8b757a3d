//! Argument checks shared by every `ContractFacade` implementation.
//!
//! The check order is part of the facade contract: recipient presence first,
//! then amount, then token id. Address *format* is checked later, by
//! implementations that need to encode it.

use crate::amount::{parse_token_amount, U256};
use crate::error::{DashboardError, Result};

/// Reject an empty recipient/sender field.
pub fn require_recipient<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DashboardError::InvalidRecipient(format!(
            "{field} address is required"
        )));
    }
    Ok(value)
}

/// Parse an amount in token units and require it to be greater than zero.
pub fn require_amount(value: &str, decimals: u8) -> Result<U256> {
    let amount = parse_token_amount(value, decimals).map_err(DashboardError::InvalidAmount)?;
    if amount.is_zero() {
        return Err(DashboardError::InvalidAmount(
            "Amount must be greater than 0".into(),
        ));
    }
    Ok(amount)
}

/// Parse a decimal `uint256` token id.
pub fn require_token_id(value: &str) -> Result<U256> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DashboardError::InvalidTokenId("Token ID is required".into()));
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DashboardError::InvalidTokenId(format!(
            "Invalid token ID '{value}'. Expected a decimal number."
        )));
    }
    U256::from_str_radix(value, 10)
        .map_err(|_| DashboardError::InvalidTokenId(format!("Token ID '{value}' is too large")))
}
