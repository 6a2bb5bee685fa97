//! Property-based tests for the amortization module.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::AmortizationEngine;
use super::error::AmortizationError;
use crate::records::Debt;
use crate::records::seed::default_debts;

fn debt(balance: Decimal, payment: Decimal, rate: Decimal) -> Debt {
    Debt {
        name: "Loan".to_string(),
        balance,
        payment,
        interest_rate: rate,
        min_payment: payment,
    }
}

/// Monthly interest accrued on a balance at an annual percentage rate.
fn monthly_interest(balance: Decimal, rate: Decimal) -> Decimal {
    balance * (rate / dec!(100) / dec!(12))
}

proptest! {
    /// With a zero rate the payoff time is exactly ceil(balance / payment).
    #[test]
    fn test_zero_rate_is_simple_division(
        balance_cents in 1i64..10_000_000,
        payment_cents in 1i64..1_000_000,
    ) {
        let balance = Decimal::new(balance_cents, 2);
        let payment = Decimal::new(payment_cents, 2);

        let months = AmortizationEngine::payoff_months(balance, payment, Decimal::ZERO).unwrap();
        let expected = (balance / payment).ceil();

        prop_assert_eq!(Decimal::from(months), expected);
    }

    /// Whenever the payment covers accruing interest, the payoff time is a
    /// finite month count and the interest identity holds exactly:
    /// total_interest + balance = payment * months.
    #[test]
    fn test_interest_identity(
        balance_cents in 10_000i64..10_000_000,
        payment_cents in 10_000i64..1_000_000,
        rate_bps in 1i64..3_000,
    ) {
        let balance = Decimal::new(balance_cents, 2);
        let payment = Decimal::new(payment_cents, 2);
        let rate = Decimal::new(rate_bps, 2);
        prop_assume!(monthly_interest(balance, rate) < payment);

        let months = AmortizationEngine::payoff_months(balance, payment, rate).unwrap();
        let interest = AmortizationEngine::total_interest(balance, payment, rate).unwrap();

        prop_assert!(months >= 1 || balance.is_zero());
        prop_assert_eq!(interest + balance, payment * Decimal::from(months));
    }

    /// Holding balance and payment fixed, a higher rate never shortens the
    /// payoff time.
    #[test]
    fn test_monotonic_in_rate(
        balance_cents in 10_000i64..10_000_000,
        payment_cents in 10_000i64..1_000_000,
        low_bps in 0i64..1_500,
        delta_bps in 1i64..1_500,
    ) {
        let balance = Decimal::new(balance_cents, 2);
        let payment = Decimal::new(payment_cents, 2);
        let low = Decimal::new(low_bps, 2);
        let high = Decimal::new(low_bps + delta_bps, 2);
        prop_assume!(monthly_interest(balance, high) < payment);

        let slow = AmortizationEngine::payoff_months(balance, payment, high).unwrap();
        let fast = AmortizationEngine::payoff_months(balance, payment, low).unwrap();

        prop_assert!(fast <= slow);
    }

    /// Holding balance and rate fixed, a higher payment never lengthens the
    /// payoff time.
    #[test]
    fn test_monotonic_in_payment(
        balance_cents in 10_000i64..10_000_000,
        payment_cents in 10_000i64..1_000_000,
        extra_cents in 1i64..1_000_000,
        rate_bps in 0i64..3_000,
    ) {
        let balance = Decimal::new(balance_cents, 2);
        let payment = Decimal::new(payment_cents, 2);
        let higher = payment + Decimal::new(extra_cents, 2);
        let rate = Decimal::new(rate_bps, 2);
        prop_assume!(monthly_interest(balance, rate) < payment);

        let slow = AmortizationEngine::payoff_months(balance, payment, rate).unwrap();
        let fast = AmortizationEngine::payoff_months(balance, higher, rate).unwrap();

        prop_assert!(fast <= slow);
    }

    /// Adding an extra pooled payment never lengthens the pooled payoff.
    #[test]
    fn test_pooled_extra_payment_never_hurts(
        extra_cents in 0i64..500_000,
    ) {
        let debts = default_debts();
        let extra = Decimal::new(extra_cents, 2);

        let base = AmortizationEngine::pooled_payoff_months(&debts, Decimal::ZERO).unwrap();
        let accelerated = AmortizationEngine::pooled_payoff_months(&debts, extra).unwrap();

        prop_assert!(accelerated <= base);
    }
}

mod unit_tests {
    use super::*;

    #[rstest]
    #[case(dec!(18000), dec!(274), dec!(6.5), 82)]
    #[case(dec!(35000), dec!(1365.59), dec!(4.2), 27)]
    #[case(dec!(42000), dec!(1199.96), dec!(3.8), 38)]
    #[case(dec!(25000), dec!(408), dec!(5.5), 73)]
    fn test_payoff_months_known_loans(
        #[case] balance: Decimal,
        #[case] payment: Decimal,
        #[case] rate: Decimal,
        #[case] expected: u32,
    ) {
        assert_eq!(
            AmortizationEngine::payoff_months(balance, payment, rate).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case(dec!(18000), dec!(274), dec!(6.5), dec!(4468))]
    #[case(dec!(35000), dec!(1365.59), dec!(4.2), dec!(1870.93))]
    #[case(dec!(42000), dec!(1199.96), dec!(3.8), dec!(3598.48))]
    #[case(dec!(25000), dec!(408), dec!(5.5), dec!(4784))]
    fn test_total_interest_known_loans(
        #[case] balance: Decimal,
        #[case] payment: Decimal,
        #[case] rate: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(
            AmortizationEngine::total_interest(balance, payment, rate).unwrap(),
            expected
        );
    }

    #[test]
    fn test_zero_balance_pays_off_immediately() {
        assert_eq!(
            AmortizationEngine::payoff_months(Decimal::ZERO, dec!(100), dec!(5)).unwrap(),
            0
        );
        assert_eq!(
            AmortizationEngine::payoff_months(Decimal::ZERO, dec!(100), Decimal::ZERO).unwrap(),
            0
        );
    }

    #[test]
    fn test_zero_payment_is_indeterminate() {
        assert_eq!(
            AmortizationEngine::payoff_months(dec!(1000), Decimal::ZERO, Decimal::ZERO),
            Err(AmortizationError::IndeterminatePayoff)
        );
        assert_eq!(
            AmortizationEngine::payoff_months(dec!(1000), dec!(-10), dec!(5)),
            Err(AmortizationError::IndeterminatePayoff)
        );
    }

    #[test]
    fn test_payment_below_accruing_interest_never_pays_off() {
        // 10000 at 50% APR accrues ~416.67 per month; a 10 payment loses ground.
        let result = AmortizationEngine::payoff_months(dec!(10000), dec!(10), dec!(50));
        assert!(matches!(
            result,
            Err(AmortizationError::PaymentTooLow { .. })
        ));
    }

    #[test]
    fn test_payment_equal_to_accruing_interest_never_pays_off() {
        // Exactly covering interest leaves the principal untouched forever.
        let balance = dec!(12000);
        let rate = dec!(10);
        let payment = monthly_interest(balance, rate);

        let result = AmortizationEngine::payoff_months(balance, payment, rate);
        assert!(matches!(
            result,
            Err(AmortizationError::PaymentTooLow { .. })
        ));
    }

    #[test]
    fn test_pooled_payoff_empty_is_debt_free() {
        assert_eq!(
            AmortizationEngine::pooled_payoff_months(&[], Decimal::ZERO).unwrap(),
            0
        );
    }

    #[test]
    fn test_pooled_payoff_blends_balances_and_rates() {
        let debts = default_debts();

        // 120000 pooled balance, 3247.55 pooled payment, ~4.68% blended rate.
        assert_eq!(
            AmortizationEngine::pooled_payoff_months(&debts, Decimal::ZERO).unwrap(),
            40
        );
        assert_eq!(
            AmortizationEngine::pooled_payoff_months(&debts, dec!(1000)).unwrap(),
            30
        );
    }

    #[test]
    fn test_pooled_payoff_single_debt_matches_direct() {
        let single = vec![debt(dec!(18000), dec!(274), dec!(6.5))];
        assert_eq!(
            AmortizationEngine::pooled_payoff_months(&single, Decimal::ZERO).unwrap(),
            AmortizationEngine::payoff_months(dec!(18000), dec!(274), dec!(6.5)).unwrap()
        );
    }

    #[test]
    fn test_debt_summaries() {
        let summaries = AmortizationEngine::debt_summaries(&default_debts()).unwrap();

        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[0].name, "RV Loan");
        assert_eq!(summaries[0].payoff_months, 82);
        assert_eq!(summaries[0].total_interest, dec!(4468));
    }

    #[test]
    fn test_compare_strategies_seed_debts() {
        let comparison =
            AmortizationEngine::compare_strategies(&default_debts(), dec!(1000)).unwrap();

        assert_eq!(comparison.current.months, 40);
        assert_eq!(comparison.current.monthly_payment, dec!(3247.55));
        assert_eq!(comparison.current.total_interest, dec!(14721.41));

        assert_eq!(comparison.accelerated.months, 30);
        assert_eq!(comparison.accelerated.monthly_payment, dec!(4247.55));
        assert_eq!(comparison.accelerated.total_interest, dec!(10179.33));

        assert_eq!(comparison.interest_saved, dec!(4542.08));
    }

    #[test]
    fn test_compare_strategies_zero_extra_saves_nothing() {
        let comparison =
            AmortizationEngine::compare_strategies(&default_debts(), Decimal::ZERO).unwrap();
        assert_eq!(comparison.interest_saved, Decimal::ZERO);
    }

    #[test]
    fn test_compare_strategies_empty_debts() {
        let comparison =
            AmortizationEngine::compare_strategies(&[], dec!(500)).unwrap();

        assert_eq!(comparison.current.months, 0);
        assert_eq!(comparison.accelerated.months, 0);
        assert_eq!(comparison.interest_saved, Decimal::ZERO);
    }
}
