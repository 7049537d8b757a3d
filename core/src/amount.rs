//! Token amount arithmetic: decimal-string parsing and display formatting.
//!
//! On-chain values are 256-bit base units. Users type amounts in token units
//! ("1.5"), which are scaled by the token's `decimals`.
pub use alloy::primitives::U256;

/// 10^exp, or `None` if it does not fit in 256 bits.
fn pow10(exp: u8) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(exp))
}

fn parse_digits(digits: &str, what: &str) -> Result<U256, String> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid {what}: '{digits}'"));
    }
    U256::from_str_radix(digits, 10).map_err(|_| "Amount too large".to_string())
}

/// Parse a human-readable token amount into base units.
/// Accepts: "1.5" (decimals 6) -> 1_500_000, "10" (decimals 0) -> 10.
/// Zero is a valid parse; callers that need a positive amount check it.
#[must_use = "parsing result should be checked"]
pub fn parse_token_amount(input: &str, decimals: u8) -> Result<U256, String> {
    let input = input.trim();

    if input.is_empty() {
        return Err("Amount cannot be empty".to_string());
    }

    if input.starts_with('-') {
        return Err("Amount must be positive".to_string());
    }

    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() > 2 {
        return Err("Invalid amount format. Use token units like '1.5' or '10'.".to_string());
    }

    let whole = parse_digits(parts[0], "whole part")?;

    // Trailing zeros carry no value, so "10.0" is fine for a 0-decimal token.
    let frac_str = parts.get(1).map(|f| f.trim_end_matches('0')).unwrap_or("");
    let frac = if frac_str.is_empty() {
        U256::ZERO
    } else if frac_str.len() > decimals as usize {
        return Err(format!(
            "Too many decimal places. This token supports up to {decimals}."
        ));
    } else {
        let padded = format!("{:0<width$}", frac_str, width = decimals as usize);
        parse_digits(&padded, "fractional part")?
    };

    pow10(decimals)
        .and_then(|scale| whole.checked_mul(scale))
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| "Amount too large".to_string())
}

/// Format base units as a decimal token string, trimming trailing zeros.
/// Examples: (1_500_000, 6) -> "1.5", (1000, 0) -> "1000", (0, 18) -> "0"
#[must_use]
pub fn format_units(value: U256, decimals: u8) -> String {
    let Some(scale) = pow10(decimals) else {
        return value.to_string();
    };
    if decimals == 0 {
        return value.to_string();
    }
    let whole = value / scale;
    let frac = value % scale;
    if frac.is_zero() {
        return whole.to_string();
    }
    let frac_str = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    format!("{whole}.{}", frac_str.trim_end_matches('0'))
}

/// Format a numeric string with its symbol, e.g. "1000 TKN".
#[must_use]
pub fn format_with_symbol(amount: &str, symbol: &str) -> String {
    if symbol.is_empty() {
        amount.to_string()
    } else {
        format!("{amount} {symbol}")
    }
}
