//! Export document types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{ConnectedAccount, Debt, Expense, IncomeStream, Investment};

/// Current export format version.
pub const EXPORT_VERSION: u32 = 1;

/// One-way JSON dump of the record collections.
///
/// Lossless for the four record collections; connected-account credentials
/// are intentionally replaced by a fixed placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Export format version.
    pub version: u32,
    /// When the export was produced.
    pub export_date: DateTime<Utc>,
    /// Income streams.
    pub income_streams: Vec<IncomeStream>,
    /// Expenses.
    pub expenses: Vec<Expense>,
    /// Investments.
    pub investments: Vec<Investment>,
    /// Debts.
    pub debts: Vec<Debt>,
    /// Connected-account metadata with credentials redacted.
    pub connected_accounts: Vec<ConnectedAccount>,
}

/// The record collections recovered from an export document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedRecords {
    /// Income streams.
    pub income_streams: Vec<IncomeStream>,
    /// Expenses.
    pub expenses: Vec<Expense>,
    /// Investments.
    pub investments: Vec<Investment>,
    /// Debts.
    pub debts: Vec<Debt>,
}
