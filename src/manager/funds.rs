//! Balance snapshots and withdrawal history.

use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::auth::timestamp_ms;
use crate::error::GeminiError;
use crate::rest::GeminiClient;
use crate::rest::private::{CurrencyBalance, WithdrawRequest, Withdrawal};
use crate::types::Currency;

#[derive(Debug, Default)]
struct FundState {
    balances: Option<Vec<CurrencyBalance>>,
    last_update_ms: Option<u64>,
    withdrawals: Vec<Withdrawal>,
}

/// Keeps the latest balance snapshot and every withdrawal made through it.
pub struct FundManager<C> {
    client: C,
    state: Mutex<FundState>,
}

impl<C: GeminiClient> FundManager<C> {
    /// Create a manager with no snapshot.
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(FundState::default()),
        }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch balances and store them as the current snapshot.
    ///
    /// The snapshot time is taken when the request is sent. On failure the
    /// previous snapshot is kept. A response to a request older than the
    /// stored snapshot is returned but not stored.
    pub async fn refresh_balances(&self) -> Result<Vec<CurrencyBalance>, GeminiError> {
        let requested_at = timestamp_ms();
        let balances = self.client.get_balances().await?;

        let mut state = self.state.lock().await;
        if state.last_update_ms.is_none_or(|last| requested_at >= last) {
            state.balances = Some(balances.clone());
            state.last_update_ms = Some(requested_at);
        }
        Ok(balances)
    }

    /// Withdraw to an approved address and log the result.
    pub async fn withdraw(
        &self,
        currency: Currency,
        address: impl Into<String>,
        amount: Decimal,
    ) -> Result<Withdrawal, GeminiError> {
        let request = WithdrawRequest::new(address, amount);
        let withdrawal = self.client.withdraw(currency, &request).await?;
        tracing::info!(%currency, %amount, tx_hash = ?withdrawal.tx_hash, "withdrawal accepted");

        self.state.lock().await.withdrawals.push(withdrawal.clone());
        Ok(withdrawal)
    }

    /// Last balance snapshot, if any.
    pub async fn balances(&self) -> Option<Vec<CurrencyBalance>> {
        self.state.lock().await.balances.clone()
    }

    /// Snapshot entry for one currency.
    pub async fn balance(&self, currency: Currency) -> Option<CurrencyBalance> {
        let state = self.state.lock().await;
        state
            .balances
            .as_ref()?
            .iter()
            .find(|b| b.currency.eq_ignore_ascii_case(currency.as_str()))
            .cloned()
    }

    /// When the snapshot was requested, in milliseconds since the epoch.
    pub async fn last_update_ms(&self) -> Option<u64> {
        self.state.lock().await.last_update_ms
    }

    /// Withdrawals made through this manager, oldest first.
    pub async fn withdrawals(&self) -> Vec<Withdrawal> {
        self.state.lock().await.withdrawals.clone()
    }
}

impl<C> std::fmt::Debug for FundManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FundManager").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::mock::MockClient;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_refresh_balances_stores_snapshot() {
        let manager = FundManager::new(MockClient::new());
        assert!(manager.balances().await.is_none());
        assert!(manager.last_update_ms().await.is_none());

        let before = timestamp_ms();
        let balances = manager.refresh_balances().await.unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(manager.balances().await.unwrap(), balances);
        assert!(manager.last_update_ms().await.unwrap() >= before);

        let btc = manager.balance(Currency::Btc).await.unwrap();
        assert_eq!(btc.available, Decimal::from_str("2.0").unwrap());
        assert!(manager.balance(Currency::Eth).await.is_none());
    }

    #[tokio::test]
    async fn test_stale_refresh_keeps_newer_snapshot() {
        let manager = FundManager::new(MockClient::new());
        let newer = timestamp_ms() + 60_000;
        {
            let mut state = manager.state.lock().await;
            state.balances = Some(Vec::new());
            state.last_update_ms = Some(newer);
        }

        let balances = manager.refresh_balances().await.unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(manager.balances().await, Some(Vec::new()));
        assert_eq!(manager.last_update_ms().await, Some(newer));
    }

    #[tokio::test]
    async fn test_withdrawals_are_logged_in_order() {
        let manager = FundManager::new(MockClient::new());
        manager
            .withdraw(Currency::Btc, "addr-1", Decimal::ONE)
            .await
            .unwrap();
        manager
            .withdraw(Currency::Btc, "addr-2", Decimal::TWO)
            .await
            .unwrap();

        let log = manager.withdrawals().await;
        let addresses: Vec<_> = log.iter().filter_map(|w| w.address.as_deref()).collect();
        assert_eq!(addresses, vec!["addr-1", "addr-2"]);
    }

    #[tokio::test]
    async fn test_failed_withdrawal_not_logged() {
        let manager = FundManager::new(MockClient::new());
        let err = manager
            .withdraw(Currency::Eth, "addr", Decimal::ZERO)
            .await
            .unwrap_err();
        assert!(err.exchange_error().is_some());
        assert!(manager.withdrawals().await.is_empty());
    }
}
