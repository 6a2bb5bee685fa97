//! Household financial records and the record store.

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::RecordError;
pub use store::{ConnectAccountInput, RecordStore};
pub use types::{
    AccountBalance, CREDENTIAL_PLACEHOLDER, ConnectedAccount, Debt, Expense, IncomeStream,
    Investment, JobExitSettings, LinkedSubAccount, RiskTolerance, Transaction,
};
