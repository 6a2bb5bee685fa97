//! Default seed records.
//!
//! Used to initialize a fresh installation and to recover when a persisted
//! snapshot is missing or corrupt.

use rust_decimal::Decimal;

use super::store::RecordStore;
use super::types::{Debt, Expense, IncomeStream, Investment, JobExitSettings, RiskTolerance};

/// Default income streams.
#[must_use]
pub fn default_income_streams() -> Vec<IncomeStream> {
    vec![
        IncomeStream {
            name: "Salary".to_string(),
            amount: Decimal::new(14_302_76, 2),
            frequency: "monthly".to_string(),
            date: "10th & 26th".to_string(),
        },
        IncomeStream {
            name: "VA Disability".to_string(),
            amount: Decimal::new(2_820_96, 2),
            frequency: "monthly".to_string(),
            date: "1st".to_string(),
        },
    ]
}

/// Default expense categories.
#[must_use]
pub fn default_expenses() -> Vec<Expense> {
    let categories: [(&str, Decimal); 15] = [
        ("Tithe", Decimal::new(700, 0)),
        ("Mortgage/Rent", Decimal::new(4_817_68, 2)),
        ("Suburban Payment", Decimal::new(1_365_59, 2)),
        ("Tesla Payment", Decimal::new(1_199_96, 2)),
        ("Cell Phone", Decimal::new(312_26, 2)),
        ("Internet", Decimal::new(110, 0)),
        ("Utilities", Decimal::new(350, 0)),
        ("Groceries", Decimal::new(600, 0)),
        ("Transportation", Decimal::new(60, 0)),
        ("Krystle Turnbull", Decimal::new(1_200, 0)),
        ("Ondra Turnbull", Decimal::new(221, 0)),
        ("Student Loans", Decimal::new(408, 0)),
        ("Car Insurance", Decimal::new(330, 0)),
        ("Solar", Decimal::new(662_19, 2)),
        ("RV Payment", Decimal::new(274, 0)),
    ];

    categories
        .into_iter()
        .map(|(category, amount)| Expense {
            category: category.to_string(),
            amount,
            priority: 1,
        })
        .collect()
}

/// Default investments.
#[must_use]
pub fn default_investments() -> Vec<Investment> {
    vec![Investment {
        name: "Monthly Investment".to_string(),
        amount: Decimal::new(500, 0),
    }]
}

/// Default debts.
#[must_use]
pub fn default_debts() -> Vec<Debt> {
    vec![
        Debt {
            name: "RV Loan".to_string(),
            balance: Decimal::new(18_000, 0),
            payment: Decimal::new(274, 0),
            interest_rate: Decimal::new(65, 1),
            min_payment: Decimal::new(274, 0),
        },
        Debt {
            name: "Suburban Loan".to_string(),
            balance: Decimal::new(35_000, 0),
            payment: Decimal::new(1_365_59, 2),
            interest_rate: Decimal::new(42, 1),
            min_payment: Decimal::new(1_365_59, 2),
        },
        Debt {
            name: "Tesla Loan".to_string(),
            balance: Decimal::new(42_000, 0),
            payment: Decimal::new(1_199_96, 2),
            interest_rate: Decimal::new(38, 1),
            min_payment: Decimal::new(1_199_96, 2),
        },
        Debt {
            name: "Student Loans".to_string(),
            balance: Decimal::new(25_000, 0),
            payment: Decimal::new(408, 0),
            interest_rate: Decimal::new(55, 1),
            min_payment: Decimal::new(408, 0),
        },
    ]
}

/// Default job-exit settings.
#[must_use]
pub fn default_job_exit_settings() -> JobExitSettings {
    JobExitSettings {
        target_emergency_fund_months: 6,
        target_side_income: Decimal::new(8_000, 0),
        current_side_income: Decimal::ZERO,
        target_account_balance: Decimal::new(50_000, 0),
        risk_tolerance: RiskTolerance::Medium,
    }
}

/// Builds a store populated with the default seed records.
#[must_use]
pub fn seeded_store() -> RecordStore {
    let mut store = RecordStore::new();
    store.set_income_streams(default_income_streams());
    store.set_expenses(default_expenses());
    store.set_investments(default_investments());
    // Seed debts are valid by construction.
    store
        .set_debts(default_debts())
        .expect("seed debts must validate");
    store.set_job_exit(default_job_exit_settings());
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_seed_collection_sizes() {
        assert_eq!(default_income_streams().len(), 2);
        assert_eq!(default_expenses().len(), 15);
        assert_eq!(default_investments().len(), 1);
        assert_eq!(default_debts().len(), 4);
    }

    #[test]
    fn test_seed_income_total() {
        let total: Decimal = default_income_streams().iter().map(|s| s.amount).sum();
        assert_eq!(total, dec!(17123.72));
    }

    #[test]
    fn test_seed_debts_validate() {
        for debt in default_debts() {
            assert!(debt.validate().is_ok());
        }
    }

    #[test]
    fn test_seeded_store_is_populated() {
        let store = seeded_store();
        assert_eq!(store.income_streams().len(), 2);
        assert_eq!(store.debts().len(), 4);
        assert!(store.connected_accounts().is_empty());
        assert!(store.transactions().is_empty());
        assert_eq!(store.job_exit().target_emergency_fund_months, 6);
    }
}
