//! HTTP client for the aggregation relay.
//!
//! The relay is a thin forwarding service in front of the third-party
//! aggregation API. It exposes the two data endpoints this client consumes:
//! `GET /accounts` and `GET /transactions`.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use hearth_core::aggregation::{RemoteAccountBalance, RemoteTransaction};
use hearth_shared::config::AggregationConfig;

use super::error::AggregationError;

/// Fetches balances and transactions for the linked accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountAggregator: Send + Sync {
    /// Fetches current balances for all linked accounts.
    async fn fetch_balances(&self) -> Result<Vec<RemoteAccountBalance>, AggregationError>;

    /// Fetches recent transactions for all linked accounts, in the relay's
    /// outflow-positive sign convention.
    async fn fetch_recent_transactions(&self) -> Result<Vec<RemoteTransaction>, AggregationError>;
}

#[derive(Debug, Deserialize)]
struct AccountsResponse {
    #[serde(default)]
    accounts: Vec<WireAccount>,
}

#[derive(Debug, Deserialize)]
struct WireAccount {
    account_id: String,
    balances: WireBalances,
}

#[derive(Debug, Deserialize)]
struct WireBalances {
    current: Option<Decimal>,
    available: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct TransactionsResponse {
    #[serde(default)]
    transactions: Vec<RemoteTransaction>,
}

/// Relay-backed aggregator.
pub struct HttpAggregator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAggregator {
    /// Builds the client from configuration.
    ///
    /// # Errors
    ///
    /// Returns the client construction failure.
    pub fn from_config(config: &AggregationConfig) -> Result<Self, AggregationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, AggregationError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AggregationError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl AccountAggregator for HttpAggregator {
    async fn fetch_balances(&self) -> Result<Vec<RemoteAccountBalance>, AggregationError> {
        let response: AccountsResponse = self.get_json("/accounts").await?;
        Ok(response
            .accounts
            .into_iter()
            .map(|account| RemoteAccountBalance {
                account_id: account.account_id,
                current: account.balances.current,
                available: account.balances.available,
            })
            .collect())
    }

    async fn fetch_recent_transactions(&self) -> Result<Vec<RemoteTransaction>, AggregationError> {
        let response: TransactionsResponse = self.get_json("/transactions").await?;
        Ok(response.transactions)
    }
}

/// No-op aggregator used when account aggregation is disabled.
pub struct NullAggregator;

#[async_trait]
impl AccountAggregator for NullAggregator {
    async fn fetch_balances(&self) -> Result<Vec<RemoteAccountBalance>, AggregationError> {
        Ok(Vec::new())
    }

    async fn fetch_recent_transactions(&self) -> Result<Vec<RemoteTransaction>, AggregationError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_aggregator_returns_empty_data() {
        let aggregator = NullAggregator;
        assert!(aggregator.fetch_balances().await.unwrap().is_empty());
        assert!(
            aggregator
                .fetch_recent_transactions()
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_http_aggregator_strips_trailing_slash() {
        let config = AggregationConfig {
            base_url: "http://localhost:3001/".to_string(),
            enabled: true,
            timeout_secs: 5,
        };
        let aggregator = HttpAggregator::from_config(&config).unwrap();
        assert_eq!(aggregator.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_wire_account_parses_relay_shape() {
        let json = r#"{
            "accounts": [
                { "account_id": "acc-1", "balances": { "current": 8500, "available": 8200 } },
                { "account_id": "acc-2", "balances": { "current": null, "available": null } }
            ]
        }"#;

        let parsed: AccountsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.accounts.len(), 2);
        assert_eq!(parsed.accounts[0].account_id, "acc-1");
        assert!(parsed.accounts[1].balances.current.is_none());
    }
}
