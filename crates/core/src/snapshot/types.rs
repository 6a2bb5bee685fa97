//! Snapshot document types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{
    AccountBalance, ConnectedAccount, Debt, Expense, IncomeStream, Investment, JobExitSettings,
    RecordStore, Transaction, seed,
};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The persisted record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Snapshot format version.
    pub version: u32,
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
    /// Income streams.
    pub income_streams: Vec<IncomeStream>,
    /// Expenses.
    pub expenses: Vec<Expense>,
    /// Investments.
    pub investments: Vec<Investment>,
    /// Debts.
    pub debts: Vec<Debt>,
    /// Bank-account connections (credentials included; the snapshot never
    /// leaves the local store).
    #[serde(default)]
    pub connected_accounts: Vec<ConnectedAccount>,
    /// Balance snapshots keyed by external account id.
    #[serde(default)]
    pub account_balances: HashMap<String, AccountBalance>,
    /// Ingested transactions.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Job-exit settings.
    pub job_exit: JobExitSettings,
}

impl SnapshotDocument {
    /// Captures the current record set.
    #[must_use]
    pub fn capture(store: &RecordStore, saved_at: DateTime<Utc>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at,
            income_streams: store.income_streams().to_vec(),
            expenses: store.expenses().to_vec(),
            investments: store.investments().to_vec(),
            debts: store.debts().to_vec(),
            connected_accounts: store.connected_accounts().to_vec(),
            account_balances: store.account_balances().clone(),
            transactions: store.transactions().to_vec(),
            job_exit: store.job_exit(),
        }
    }

    /// Captures the seed defaults.
    #[must_use]
    pub fn seeded(saved_at: DateTime<Utc>) -> Self {
        Self::capture(&seed::seeded_store(), saved_at)
    }

    /// Rebuilds a record store from this document.
    ///
    /// Debts that fail validation (a hand-edited document) are dropped
    /// rather than failing the whole restore.
    #[must_use]
    pub fn into_store(self) -> RecordStore {
        let mut store = RecordStore::new();
        store.set_income_streams(self.income_streams);
        store.set_expenses(self.expenses);
        store.set_investments(self.investments);

        let valid_debts: Vec<Debt> = self
            .debts
            .into_iter()
            .filter(|debt| debt.validate().is_ok())
            .collect();
        let _ = store.set_debts(valid_debts);

        store.set_connected_accounts(self.connected_accounts);
        store.set_account_balances(self.account_balances);
        store.set_transactions(self.transactions);
        store.set_job_exit(self.job_exit);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_capture_and_restore_round_trip() {
        let original = seed::seeded_store();
        let document = SnapshotDocument::capture(&original, Utc::now());
        let restored = document.into_store();

        assert_eq!(restored.income_streams(), original.income_streams());
        assert_eq!(restored.expenses(), original.expenses());
        assert_eq!(restored.investments(), original.investments());
        assert_eq!(restored.debts(), original.debts());
        assert_eq!(restored.job_exit(), original.job_exit());
    }

    #[test]
    fn test_restore_drops_tampered_debts() {
        let mut document = SnapshotDocument::seeded(Utc::now());
        document.debts[0].balance = dec!(-1);

        let restored = document.into_store();
        assert_eq!(restored.debts().len(), 3);
    }

    #[test]
    fn test_seeded_document_carries_current_version() {
        let document = SnapshotDocument::seeded(Utc::now());
        assert_eq!(document.version, SNAPSHOT_VERSION);
        assert_eq!(document.expenses.len(), 15);
    }
}
