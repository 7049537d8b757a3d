use tracing::debug;

use crate::amount::format_units;
use crate::error::Result;
use crate::facade::ContractFacade;

/// Token metadata shown on the overview. Values are display strings, already
/// scaled by the token decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSnapshot {
    pub balance: String,
    pub total_supply: String,
    pub symbol: String,
}

/// Run the three snapshot reads concurrently. Any failure fails the batch;
/// partial results are discarded.
pub async fn load_snapshot(facade: &dyn ContractFacade) -> Result<TokenSnapshot> {
    let decimals = facade.decimals();
    let (balance, total_supply, symbol) = futures::try_join!(
        facade.read_balance(),
        facade.read_total_supply(),
        facade.read_symbol(),
    )?;
    debug!(%balance, %total_supply, %symbol, "snapshot loaded");
    Ok(TokenSnapshot {
        balance: format_units(balance, decimals),
        total_supply: format_units(total_supply, decimals),
        symbol,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::U256;
    use crate::error::DashboardError;
    use crate::mock::{ContractCall, MockContract, Operation};

    #[tokio::test]
    async fn loads_mock_defaults() {
        let mock = MockContract::new();
        let snapshot = load_snapshot(&mock).await.unwrap();
        assert_eq!(
            snapshot,
            TokenSnapshot {
                balance: "1000".into(),
                total_supply: "1000000".into(),
                symbol: "TKN".into(),
            }
        );
    }

    #[tokio::test]
    async fn scales_by_decimals() {
        let mock = MockContract::new()
            .with_decimals(2)
            .with_balance(U256::from(12345u64))
            .with_total_supply(U256::from(100u64));
        let snapshot = load_snapshot(&mock).await.unwrap();
        assert_eq!(snapshot.balance, "123.45");
        assert_eq!(snapshot.total_supply, "1");
    }

    #[tokio::test]
    async fn one_failed_read_fails_the_batch() {
        let mock = MockContract::new();
        mock.fail(Operation::ReadTotalSupply).await;
        let err = load_snapshot(&mock).await.unwrap_err();
        assert!(matches!(err, DashboardError::Network(_)));
    }

    #[tokio::test]
    async fn issues_exactly_three_reads() {
        let mock = MockContract::new();
        load_snapshot(&mock).await.unwrap();
        let calls = mock.calls().await;
        assert_eq!(calls.len(), 3);
        assert!(calls.contains(&ContractCall::ReadBalance));
        assert!(calls.contains(&ContractCall::ReadTotalSupply));
        assert!(calls.contains(&ContractCall::ReadSymbol));
    }
}
