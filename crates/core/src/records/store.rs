//! The record store.
//!
//! Sole owner of the canonical record collections. Computation modules
//! receive read-only snapshots and never mutate the store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::error::RecordError;
use super::types::{
    AccountBalance, ConnectedAccount, Debt, Expense, IncomeStream, Investment, JobExitSettings,
    LinkedSubAccount, Transaction,
};

/// Input for registering a new bank-account connection.
#[derive(Debug, Clone)]
pub struct ConnectAccountInput {
    /// Institution display name.
    pub institution_name: String,
    /// Institution identifier from the aggregation service.
    pub institution_id: String,
    /// Sub-accounts reported at link time.
    pub accounts: Vec<LinkedSubAccount>,
    /// Opaque bank-link credential.
    pub link_credential: String,
    /// Connection timestamp.
    pub connected_at: DateTime<Utc>,
}

/// In-memory store of all household records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    income_streams: Vec<IncomeStream>,
    expenses: Vec<Expense>,
    investments: Vec<Investment>,
    debts: Vec<Debt>,
    connected_accounts: Vec<ConnectedAccount>,
    account_balances: HashMap<String, AccountBalance>,
    transactions: Vec<Transaction>,
    job_exit: Option<JobExitSettings>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the income streams.
    #[must_use]
    pub fn income_streams(&self) -> &[IncomeStream] {
        &self.income_streams
    }

    /// Replaces the income streams.
    pub fn set_income_streams(&mut self, streams: Vec<IncomeStream>) {
        self.income_streams = streams;
    }

    /// Returns the expenses.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Replaces the expenses.
    pub fn set_expenses(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
    }

    /// Returns the investments.
    #[must_use]
    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    /// Replaces the investments.
    pub fn set_investments(&mut self, investments: Vec<Investment>) {
        self.investments = investments;
    }

    /// Returns the debts.
    #[must_use]
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    /// Replaces the debts after validating each one.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; the store is left unchanged.
    pub fn set_debts(&mut self, debts: Vec<Debt>) -> Result<(), RecordError> {
        for debt in &debts {
            debt.validate()?;
        }
        self.debts = debts;
        Ok(())
    }

    /// Appends an expense.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Removes an expense by index.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::IndexOutOfBounds` for an invalid index.
    pub fn remove_expense(&mut self, index: usize) -> Result<Expense, RecordError> {
        if index >= self.expenses.len() {
            return Err(RecordError::IndexOutOfBounds {
                collection: "expenses",
                index,
            });
        }
        Ok(self.expenses.remove(index))
    }

    /// Appends an investment.
    pub fn add_investment(&mut self, investment: Investment) {
        self.investments.push(investment);
    }

    /// Removes an investment by index.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::IndexOutOfBounds` for an invalid index.
    pub fn remove_investment(&mut self, index: usize) -> Result<Investment, RecordError> {
        if index >= self.investments.len() {
            return Err(RecordError::IndexOutOfBounds {
                collection: "investments",
                index,
            });
        }
        Ok(self.investments.remove(index))
    }

    /// Appends a debt after validating it.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the store is left unchanged.
    pub fn add_debt(&mut self, debt: Debt) -> Result<(), RecordError> {
        debt.validate()?;
        self.debts.push(debt);
        Ok(())
    }

    /// Removes a debt by index.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::IndexOutOfBounds` for an invalid index.
    pub fn remove_debt(&mut self, index: usize) -> Result<Debt, RecordError> {
        if index >= self.debts.len() {
            return Err(RecordError::IndexOutOfBounds {
                collection: "debts",
                index,
            });
        }
        Ok(self.debts.remove(index))
    }

    /// Returns the connected accounts.
    #[must_use]
    pub fn connected_accounts(&self) -> &[ConnectedAccount] {
        &self.connected_accounts
    }

    /// Restores connected accounts from a persisted snapshot.
    pub fn set_connected_accounts(&mut self, accounts: Vec<ConnectedAccount>) {
        self.connected_accounts = accounts;
    }

    /// Registers a new bank-account connection and returns its generated id.
    pub fn connect_account(&mut self, input: ConnectAccountInput) -> String {
        let id = Uuid::now_v7().to_string();
        self.connected_accounts.push(ConnectedAccount {
            id: id.clone(),
            institution_name: input.institution_name,
            institution_id: input.institution_id,
            accounts: input.accounts,
            connected_at: input.connected_at,
            link_credential: input.link_credential,
        });
        id
    }

    /// Removes a connection along with the balances and transactions of its
    /// sub-accounts.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::UnknownAccount` when no connection has the id.
    pub fn disconnect_account(&mut self, id: &str) -> Result<ConnectedAccount, RecordError> {
        let position = self
            .connected_accounts
            .iter()
            .position(|account| account.id == id)
            .ok_or_else(|| RecordError::UnknownAccount(id.to_string()))?;

        let removed = self.connected_accounts.remove(position);
        for sub_account in &removed.accounts {
            self.account_balances.remove(&sub_account.account_id);
        }
        self.transactions.retain(|tx| {
            !removed
                .accounts
                .iter()
                .any(|sub_account| sub_account.account_id == tx.account_id)
        });
        Ok(removed)
    }

    /// Returns the balance snapshots keyed by external account id.
    #[must_use]
    pub fn account_balances(&self) -> &HashMap<String, AccountBalance> {
        &self.account_balances
    }

    /// Restores balances from a persisted snapshot.
    pub fn set_account_balances(&mut self, balances: HashMap<String, AccountBalance>) {
        self.account_balances = balances;
    }

    /// Merges freshly fetched balances into the store, keeping last-known
    /// values for accounts absent from the update.
    pub fn apply_balances(&mut self, balances: HashMap<String, AccountBalance>) {
        self.account_balances.extend(balances);
    }

    /// Returns the ingested transactions.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Restores transactions from a persisted snapshot.
    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Appends freshly fetched transactions, skipping ids already present.
    pub fn ingest_transactions(&mut self, transactions: Vec<Transaction>) {
        for transaction in transactions {
            if !self.transactions.iter().any(|tx| tx.id == transaction.id) {
                self.transactions.push(transaction);
            }
        }
    }

    /// Returns the job-exit settings, defaulting when none are stored.
    #[must_use]
    pub fn job_exit(&self) -> JobExitSettings {
        self.job_exit
            .clone()
            .unwrap_or_else(super::seed::default_job_exit_settings)
    }

    /// Replaces the job-exit settings.
    pub fn set_job_exit(&mut self, settings: JobExitSettings) {
        self.job_exit = Some(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn linked(account_id: &str) -> LinkedSubAccount {
        LinkedSubAccount {
            account_id: account_id.to_string(),
            name: "Checking".to_string(),
            subtype: "checking".to_string(),
        }
    }

    fn connect_input(account_ids: &[&str]) -> ConnectAccountInput {
        ConnectAccountInput {
            institution_name: "First Bank".to_string(),
            institution_id: "ins_1".to_string(),
            accounts: account_ids.iter().copied().map(linked).collect(),
            link_credential: "public-sandbox-token".to_string(),
            connected_at: Utc::now(),
        }
    }

    fn balance(amount: Decimal) -> AccountBalance {
        AccountBalance {
            current: Some(amount),
            available: Some(amount),
            last_updated: Utc::now(),
        }
    }

    fn transaction(id: &str, account_id: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: account_id.to_string(),
            amount: dec!(-42.50),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            name: "Grocery Store".to_string(),
            category: Some("Food".to_string()),
        }
    }

    #[test]
    fn test_set_debts_rejects_invalid_debt_and_keeps_store() {
        let mut store = RecordStore::new();
        store
            .set_debts(vec![Debt {
                name: "Car".to_string(),
                balance: dec!(1000),
                payment: dec!(100),
                interest_rate: dec!(4),
                min_payment: dec!(100),
            }])
            .unwrap();

        let result = store.set_debts(vec![Debt {
            name: "Bad".to_string(),
            balance: dec!(-1),
            payment: dec!(100),
            interest_rate: dec!(4),
            min_payment: dec!(100),
        }]);

        assert!(result.is_err());
        assert_eq!(store.debts().len(), 1);
        assert_eq!(store.debts()[0].name, "Car");
    }

    #[test]
    fn test_remove_by_index_bounds() {
        let mut store = RecordStore::new();
        store.add_expense(Expense {
            category: "Internet".to_string(),
            amount: dec!(110),
            priority: 1,
        });

        assert!(store.remove_expense(1).is_err());
        let removed = store.remove_expense(0).unwrap();
        assert_eq!(removed.category, "Internet");
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_connect_generates_distinct_ids() {
        let mut store = RecordStore::new();
        let first = store.connect_account(connect_input(&["acc-1"]));
        let second = store.connect_account(connect_input(&["acc-2"]));

        assert_ne!(first, second);
        assert_eq!(store.connected_accounts().len(), 2);
    }

    #[test]
    fn test_disconnect_cascades_balances_and_transactions() {
        let mut store = RecordStore::new();
        let id = store.connect_account(connect_input(&["acc-1", "acc-2"]));
        store.connect_account(connect_input(&["acc-3"]));

        store.apply_balances(HashMap::from([
            ("acc-1".to_string(), balance(dec!(100))),
            ("acc-2".to_string(), balance(dec!(200))),
            ("acc-3".to_string(), balance(dec!(300))),
        ]));
        store.ingest_transactions(vec![
            transaction("tx-1", "acc-1"),
            transaction("tx-2", "acc-3"),
        ]);

        store.disconnect_account(&id).unwrap();

        assert_eq!(store.connected_accounts().len(), 1);
        assert!(!store.account_balances().contains_key("acc-1"));
        assert!(!store.account_balances().contains_key("acc-2"));
        assert!(store.account_balances().contains_key("acc-3"));
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].id, "tx-2");
    }

    #[test]
    fn test_disconnect_unknown_account() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.disconnect_account("missing"),
            Err(RecordError::UnknownAccount(_))
        ));
    }

    #[test]
    fn test_apply_balances_keeps_last_known_values() {
        let mut store = RecordStore::new();
        store.apply_balances(HashMap::from([("acc-1".to_string(), balance(dec!(100)))]));

        // A later fetch that omits acc-1 must not erase it.
        store.apply_balances(HashMap::from([("acc-2".to_string(), balance(dec!(50)))]));

        assert_eq!(store.account_balances().len(), 2);
    }

    #[test]
    fn test_ingest_transactions_deduplicates_by_id() {
        let mut store = RecordStore::new();
        store.ingest_transactions(vec![transaction("tx-1", "acc-1")]);
        store.ingest_transactions(vec![
            transaction("tx-1", "acc-1"),
            transaction("tx-2", "acc-1"),
        ]);

        assert_eq!(store.transactions().len(), 2);
    }
}
