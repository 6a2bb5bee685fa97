//! Household record types.
//!
//! All monetary fields use `Decimal`; records are plain values with no
//! identity beyond their position in a collection, except connected accounts
//! which carry an opaque id generated at connect time.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// A recurring income stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStream {
    /// Stream name (e.g., "Salary").
    pub name: String,
    /// Monthly amount. Negative values are accepted but semantically invalid.
    pub amount: Decimal,
    /// Frequency label (informational, not used in computation).
    pub frequency: String,
    /// Free-text pay-date label (e.g., "10th & 26th").
    pub date: String,
}

/// A recurring expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense category.
    pub category: String,
    /// Monthly amount.
    pub amount: Decimal,
    /// Stored priority. Not consumed by any calculation; retained for
    /// compatibility with persisted data.
    pub priority: i32,
}

/// A recurring investment contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    /// Investment name.
    pub name: String,
    /// Monthly contribution amount.
    pub amount: Decimal,
}

/// An outstanding debt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    /// Debt name.
    pub name: String,
    /// Outstanding principal. Must be non-negative.
    pub balance: Decimal,
    /// Monthly payment currently made. Must be non-negative.
    pub payment: Decimal,
    /// Nominal annual interest rate in percent (6.5 means 6.5%).
    pub interest_rate: Decimal,
    /// Informational payment floor. Not enforced by any calculation.
    pub min_payment: Decimal,
}

impl Debt {
    /// Validates the numeric fields of this debt.
    ///
    /// # Errors
    ///
    /// Returns a `RecordError` when balance, payment, or interest rate is
    /// negative.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.balance.is_sign_negative() && !self.balance.is_zero() {
            return Err(RecordError::NegativeBalance {
                name: self.name.clone(),
            });
        }
        if self.payment.is_sign_negative() && !self.payment.is_zero() {
            return Err(RecordError::NegativePayment {
                name: self.name.clone(),
            });
        }
        if self.interest_rate.is_sign_negative() && !self.interest_rate.is_zero() {
            return Err(RecordError::NegativeInterestRate {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A sub-account reported by the aggregation relay at link time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedSubAccount {
    /// External account id.
    pub account_id: String,
    /// Account display name.
    pub name: String,
    /// Account subtype (e.g., "checking", "savings").
    pub subtype: String,
}

/// A linked bank-account connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedAccount {
    /// Opaque id generated at connect time.
    pub id: String,
    /// Institution display name.
    pub institution_name: String,
    /// Institution identifier from the aggregation service.
    pub institution_id: String,
    /// Sub-accounts under this connection.
    pub accounts: Vec<LinkedSubAccount>,
    /// When the connection was established.
    pub connected_at: DateTime<Utc>,
    /// Opaque bank-link credential. Never used in computation and never
    /// exported unredacted.
    pub link_credential: String,
}

/// Fixed placeholder written in place of the link credential on export.
pub const CREDENTIAL_PLACEHOLDER: &str = "[HIDDEN]";

impl ConnectedAccount {
    /// Returns a copy with the link credential replaced by the fixed
    /// placeholder.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            link_credential: CREDENTIAL_PLACEHOLDER.to_string(),
            ..self.clone()
        }
    }
}

/// Balance snapshot for one external account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Current balance. Missing values count as zero in totals.
    pub current: Option<Decimal>,
    /// Available balance.
    pub available: Option<Decimal>,
    /// When the balance was last refreshed.
    pub last_updated: DateTime<Utc>,
}

/// A bank transaction after ingestion.
///
/// Sign convention: positive = inflow. The aggregation relay reports
/// outflow-positive amounts; they are negated at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id from the aggregation service.
    pub id: String,
    /// External account id the transaction belongs to.
    pub account_id: String,
    /// Amount, positive for inflows.
    pub amount: Decimal,
    /// Transaction date.
    pub date: NaiveDate,
    /// Merchant or transaction name.
    pub name: String,
    /// Primary category, when reported.
    pub category: Option<String>,
}

/// Risk tolerance for the job-exit plan. Informational only; consumed by no
/// formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    /// Conservative.
    Low,
    /// Balanced.
    Medium,
    /// Aggressive.
    High,
}

/// Settings for the job-exit readiness calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobExitSettings {
    /// Emergency fund target, in months of expenses.
    pub target_emergency_fund_months: u32,
    /// Monthly side-income target.
    pub target_side_income: Decimal,
    /// Current monthly side income.
    pub current_side_income: Decimal,
    /// Target total account balance.
    pub target_account_balance: Decimal,
    /// Risk tolerance (informational).
    pub risk_tolerance: RiskTolerance,
}
