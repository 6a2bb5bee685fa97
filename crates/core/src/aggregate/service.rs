//! Aggregate calculations over the record collections.

use rust_decimal::Decimal;

use crate::records::{Expense, RecordStore};

use super::types::{BudgetAllocation, BudgetBreakdown, CashFlowSummary, SurplusSplit};

/// Expense categories that mirror a debt payment. Kept out of the essential
/// bills subtotal so debt payments are not counted twice in the breakdown.
const DEBT_PAYMENT_CATEGORIES: [&str; 4] = [
    "Student Loans",
    "RV Payment",
    "Suburban Payment",
    "Tesla Payment",
];

/// Minimum assumed emergency fund.
const EMERGENCY_FUND_FLOOR: Decimal = Decimal::from_parts(5_000, 0, 0, false, 0);

/// Aggregate calculator. All functions are pure; empty collections sum to
/// zero and no input is ever mutated.
pub struct AggregateService;

impl AggregateService {
    /// Computes the monthly cash-flow totals from the current records.
    #[must_use]
    pub fn summarize(store: &RecordStore) -> CashFlowSummary {
        let total_income: Decimal = store.income_streams().iter().map(|s| s.amount).sum();
        let total_expenses: Decimal = store.expenses().iter().map(|e| e.amount).sum();
        let total_investments: Decimal = store.investments().iter().map(|i| i.amount).sum();
        let total_debt_payments: Decimal = store.debts().iter().map(|d| d.payment).sum();
        let total_debt_balance: Decimal = store.debts().iter().map(|d| d.balance).sum();
        let total_account_balance: Decimal = store
            .account_balances()
            .values()
            .map(|b| b.current.unwrap_or_default())
            .sum();

        CashFlowSummary {
            total_income,
            total_expenses,
            total_investments,
            total_debt_payments,
            available_for_spending: total_income - total_expenses - total_investments,
            total_account_balance,
            net_worth: total_account_balance - total_debt_balance,
        }
    }

    /// Computes a ratio, treating a zero denominator as zero.
    #[must_use]
    pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
        if denominator.is_zero() {
            Decimal::ZERO
        } else {
            numerator / denominator
        }
    }

    /// Computes income-share percentages per bucket, rounded to one decimal
    /// place.
    #[must_use]
    pub fn allocation(summary: &CashFlowSummary) -> BudgetAllocation {
        let percent = |amount: Decimal| {
            (Self::ratio(amount, summary.total_income) * Decimal::ONE_HUNDRED).round_dp(1)
        };

        BudgetAllocation {
            expenses_percent: percent(summary.total_expenses),
            investments_percent: percent(summary.total_investments),
            flexible_percent: percent(summary.available_for_spending),
        }
    }

    /// Suggests a 30/40/30 split of the monthly surplus across emergency
    /// fund, extra debt payment, and discretionary spending.
    #[must_use]
    pub fn surplus_split(available_for_spending: Decimal) -> SurplusSplit {
        let thirty = Decimal::new(3, 1);
        let forty = Decimal::new(4, 1);

        SurplusSplit {
            emergency_fund: (available_for_spending * thirty).round_dp(2),
            extra_debt_payment: (available_for_spending * forty).round_dp(2),
            flexible: (available_for_spending * thirty).round_dp(2),
        }
    }

    /// Sums expenses whose category is not a debt-payment mirror.
    #[must_use]
    pub fn essential_expenses(expenses: &[Expense]) -> Decimal {
        expenses
            .iter()
            .filter(|e| !DEBT_PAYMENT_CATEGORIES.contains(&e.category.as_str()))
            .map(|e| e.amount)
            .sum()
    }

    /// Computes the budget breakdown by spending bucket.
    #[must_use]
    pub fn breakdown(store: &RecordStore) -> BudgetBreakdown {
        let summary = Self::summarize(store);
        BudgetBreakdown {
            essential_expenses: Self::essential_expenses(store.expenses()),
            debt_payments: summary.total_debt_payments,
            investments: summary.total_investments,
            flexible: summary.available_for_spending,
        }
    }

    /// Estimates the current emergency fund from linked balances:
    /// 30% of the total balance, floored at 5000.
    #[must_use]
    pub fn estimated_emergency_fund(total_account_balance: Decimal) -> Decimal {
        let estimate = total_account_balance * Decimal::new(3, 1);
        estimate.max(EMERGENCY_FUND_FLOOR)
    }
}
