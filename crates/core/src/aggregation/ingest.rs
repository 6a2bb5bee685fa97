//! Conversion of relay wire shapes into record types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::records::{AccountBalance, Transaction};

use super::types::{RemoteAccountBalance, RemoteTransaction};

/// Converts relay responses into the core's record shapes.
pub struct AggregationIngest;

impl AggregationIngest {
    /// Builds the balance map from a relay response, stamping every entry
    /// with the fetch time.
    #[must_use]
    pub fn balance_snapshot(
        accounts: Vec<RemoteAccountBalance>,
        fetched_at: DateTime<Utc>,
    ) -> HashMap<String, AccountBalance> {
        accounts
            .into_iter()
            .map(|account| {
                (
                    account.account_id,
                    AccountBalance {
                        current: account.current,
                        available: account.available,
                        last_updated: fetched_at,
                    },
                )
            })
            .collect()
    }

    /// Converts relay transactions, negating the outflow-positive amounts
    /// and keeping the primary category.
    #[must_use]
    pub fn transactions(remote: Vec<RemoteTransaction>) -> Vec<Transaction> {
        remote
            .into_iter()
            .map(|tx| Transaction {
                id: tx.transaction_id,
                account_id: tx.account_id,
                amount: -tx.amount,
                date: tx.date,
                name: tx.name,
                category: tx.category.into_iter().next(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balance_snapshot_keys_by_account_id() {
        let fetched_at = Utc::now();
        let snapshot = AggregationIngest::balance_snapshot(
            vec![
                RemoteAccountBalance {
                    account_id: "acc-1".to_string(),
                    current: Some(dec!(8500)),
                    available: Some(dec!(8200)),
                },
                RemoteAccountBalance {
                    account_id: "acc-2".to_string(),
                    current: None,
                    available: None,
                },
            ],
            fetched_at,
        );

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["acc-1"].current, Some(dec!(8500)));
        assert_eq!(snapshot["acc-2"].current, None);
        assert_eq!(snapshot["acc-1"].last_updated, fetched_at);
    }

    #[test]
    fn test_transactions_negate_outflow_positive_amounts() {
        let converted = AggregationIngest::transactions(vec![RemoteTransaction {
            transaction_id: "tx-1".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(42.50),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            name: "Grocery Store".to_string(),
            category: vec!["Food".to_string(), "Groceries".to_string()],
        }]);

        assert_eq!(converted.len(), 1);
        // An outflow of 42.50 becomes a -42.50 record.
        assert_eq!(converted[0].amount, dec!(-42.50));
        assert_eq!(converted[0].category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_transactions_negate_refunds_to_inflows() {
        let converted = AggregationIngest::transactions(vec![RemoteTransaction {
            transaction_id: "tx-2".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(-120),
            date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
            name: "Refund".to_string(),
            category: vec![],
        }]);

        assert_eq!(converted[0].amount, dec!(120));
        assert_eq!(converted[0].category, None);
    }
}
