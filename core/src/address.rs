//! User-facing address input and display helpers over alloy's `Address`.

use std::str::FromStr;

use alloy::primitives::Address;

use crate::error::DashboardError;

/// Parse user input as a `0x`-prefixed, 40-digit hex address.
/// Checksum casing is accepted but not verified.
pub fn parse_address(input: &str) -> Result<Address, DashboardError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DashboardError::InvalidRecipient(
            "Address cannot be empty.".into(),
        ));
    }
    let Some(hex_part) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    else {
        return Err(DashboardError::InvalidRecipient(format!(
            "Invalid address '{input}'. Expected a 0x address."
        )));
    };
    if hex_part.len() != 40 {
        return Err(DashboardError::InvalidRecipient(format!(
            "Invalid address '{input}': expected 40 hex digits, got {}.",
            hex_part.len()
        )));
    }
    Address::from_str(hex_part)
        .map_err(|e| DashboardError::InvalidRecipient(format!("Invalid address '{input}': {e}")))
}

/// Shortened form for narrow UI cells: `0x1234aB...cDef12`.
pub fn short_address(address: &Address) -> String {
    let full = address.to_string();
    format!("{}...{}", &full[..8], &full[full.len() - 6..])
}
