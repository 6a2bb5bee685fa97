//! Snapshot format migration.
//!
//! Version 0 is the unversioned document written by the browser-based
//! predecessor: camelCase field names, no version tag, no job-exit
//! settings. Only the four record collections survive migration; linked
//! account data is re-synced from the relay after restore.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::records::{Debt, Expense, IncomeStream, Investment, seed};

use super::error::SnapshotError;
use super::types::{SNAPSHOT_VERSION, SnapshotDocument};

/// Legacy debt shape (camelCase field names).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyDebt {
    name: String,
    balance: Decimal,
    payment: Decimal,
    interest_rate: Decimal,
    #[serde(default)]
    min_payment: Option<Decimal>,
}

/// Legacy unversioned document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySnapshot {
    #[serde(default)]
    income_streams: Vec<IncomeStream>,
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    investments: Vec<Investment>,
    #[serde(default)]
    debts: Vec<LegacyDebt>,
}

/// Parses a raw snapshot document, lifting the legacy shape to the current
/// version.
///
/// # Errors
///
/// - `Malformed` when the document does not parse as either shape.
/// - `UnsupportedVersion` for a version tag from a newer build.
pub fn migrate(value: Value, now: DateTime<Utc>) -> Result<SnapshotDocument, SnapshotError> {
    let version = value.get("version").and_then(Value::as_u64);
    match version {
        None if value.get("version").is_none() => lift_legacy(value, now),
        Some(v) if v == u64::from(SNAPSHOT_VERSION) => Ok(serde_json::from_value(value)?),
        Some(v) => Err(SnapshotError::UnsupportedVersion(v)),
        // A version tag that is not an integer falls through to the strict
        // parser, which reports it as malformed.
        None => Ok(serde_json::from_value(value)?),
    }
}

fn lift_legacy(value: Value, now: DateTime<Utc>) -> Result<SnapshotDocument, SnapshotError> {
    let legacy: LegacySnapshot = serde_json::from_value(value)?;

    let debts = legacy
        .debts
        .into_iter()
        .map(|debt| Debt {
            min_payment: debt.min_payment.unwrap_or(debt.payment),
            name: debt.name,
            balance: debt.balance,
            payment: debt.payment,
            interest_rate: debt.interest_rate,
        })
        .collect();

    Ok(SnapshotDocument {
        version: SNAPSHOT_VERSION,
        saved_at: now,
        income_streams: legacy.income_streams,
        expenses: legacy.expenses,
        investments: legacy.investments,
        debts,
        connected_accounts: Vec::new(),
        account_balances: std::collections::HashMap::new(),
        transactions: Vec::new(),
        job_exit: seed::default_job_exit_settings(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_migrate_current_version_parses_directly() {
        let document = SnapshotDocument::seeded(Utc::now());
        let value = serde_json::to_value(&document).unwrap();

        let migrated = migrate(value, Utc::now()).unwrap();
        assert_eq!(migrated.version, SNAPSHOT_VERSION);
        assert_eq!(migrated.expenses.len(), 15);
    }

    #[test]
    fn test_migrate_lifts_legacy_camel_case_document() {
        let value = json!({
            "incomeStreams": [
                { "name": "Salary", "amount": "14302.76", "frequency": "monthly", "date": "10th & 26th" }
            ],
            "expenses": [
                { "category": "Internet", "amount": "110", "priority": 1 }
            ],
            "investments": [],
            "debts": [
                { "name": "RV Loan", "balance": "18000", "payment": "274", "interestRate": "6.5" }
            ]
        });

        let migrated = migrate(value, Utc::now()).unwrap();

        assert_eq!(migrated.version, SNAPSHOT_VERSION);
        assert_eq!(migrated.income_streams.len(), 1);
        assert_eq!(migrated.debts[0].interest_rate, dec!(6.5));
        // A missing minimum payment defaults to the current payment.
        assert_eq!(migrated.debts[0].min_payment, dec!(274));
        // Linked-account data does not survive migration.
        assert!(migrated.connected_accounts.is_empty());
        assert_eq!(migrated.job_exit.target_emergency_fund_months, 6);
    }

    #[test]
    fn test_migrate_rejects_newer_version() {
        let value = json!({ "version": 2 });
        assert!(matches!(
            migrate(value, Utc::now()),
            Err(SnapshotError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn test_migrate_rejects_garbage() {
        let value = json!({ "incomeStreams": "not-a-list" });
        assert!(matches!(
            migrate(value, Utc::now()),
            Err(SnapshotError::Malformed(_))
        ));
    }
}
