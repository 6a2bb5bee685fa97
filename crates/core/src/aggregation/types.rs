//! Wire shapes reported by the aggregation relay.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance for one external account as reported by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAccountBalance {
    /// External account id.
    pub account_id: String,
    /// Current balance, when reported.
    pub current: Option<Decimal>,
    /// Available balance, when reported.
    pub available: Option<Decimal>,
}

/// Transaction as reported by the relay.
///
/// The relay uses the aggregation API's outflow-positive sign convention;
/// amounts are negated at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTransaction {
    /// Transaction id.
    pub transaction_id: String,
    /// External account id.
    pub account_id: String,
    /// Amount, positive for outflows.
    pub amount: Decimal,
    /// Transaction date.
    pub date: NaiveDate,
    /// Merchant or transaction name.
    pub name: String,
    /// Category hierarchy, most general first.
    #[serde(default)]
    pub category: Vec<String>,
}
