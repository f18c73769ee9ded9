//! Comprehensive tests for domain_split
//!
//! Cross-module scenarios: expenses through the balance calculator into
//! the settlement planner, and the invariants that hold across the whole
//! pipeline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_split::{
    BalanceCalculator, BalanceStatus, Expense, Participant, SettlementPlanner, ShareType,
};

fn equal_expense(amount: Decimal, paid_by: &str, names: &[&str]) -> Expense {
    Expense::new(
        amount,
        "test expense",
        paid_by,
        names.iter().map(|name| Participant::equal(*name)).collect(),
    )
}

mod balance_to_settlement_flow {
    use super::*;

    #[test]
    fn test_single_expense_settles_back_to_payer() {
        let expenses = vec![equal_expense(dec!(90), "A", &["A", "B", "C"])];

        let balances = BalanceCalculator::compute(&expenses);
        let settlements = SettlementPlanner::plan(&balances);

        assert_eq!(settlements.len(), 2);
        assert_eq!(settlements[0].from, "B");
        assert_eq!(settlements[0].to, "A");
        assert_eq!(settlements[0].amount, dec!(30.00));
        assert_eq!(settlements[1].from, "C");
        assert_eq!(settlements[1].amount, dec!(30.00));
    }

    #[test]
    fn test_mixed_share_types_in_one_expense() {
        let expenses = vec![Expense::new(
            dec!(100),
            "groceries",
            "A",
            vec![
                Participant::percentage("B", dec!(25)),
                Participant::exact("C", dec!(40)),
                Participant {
                    name: "A".to_string(),
                    share: dec!(35),
                    share_type: ShareType::Exact,
                },
            ],
        )];

        let balances = BalanceCalculator::compute(&expenses);

        // A paid 100, owes 35 -> +65; B owes 25; C owes 40.
        assert_eq!(balances[0].balance, dec!(65.00));
        assert_eq!(balances[1].balance, dec!(-25.00));
        assert_eq!(balances[2].balance, dec!(-40.00));

        let settlements = SettlementPlanner::plan(&balances);
        assert_eq!(settlements.len(), 2);
        assert_eq!(settlements[0].from, "B");
        assert_eq!(settlements[0].amount, dec!(25.00));
        assert_eq!(settlements[1].from, "C");
        assert_eq!(settlements[1].amount, dec!(40.00));
    }

    #[test]
    fn test_applying_a_settlement_drives_balances_to_zero() {
        let mut expenses = vec![equal_expense(dec!(60), "A", &["A", "B"])];

        let balances = BalanceCalculator::compute(&expenses);
        let settlements = SettlementPlanner::plan(&balances);
        assert_eq!(settlements.len(), 1);

        // Record the suggested payment as a settlement expense: the
        // debtor pays, the creditor is the sole participant.
        let payment = &settlements[0];
        expenses.push(
            Expense::new(
                payment.amount,
                "settlement",
                &payment.from,
                vec![Participant::equal(payment.to.as_str())],
            )
            .as_settlement(),
        );

        let after = BalanceCalculator::compute(&expenses);
        for balance in &after {
            assert_eq!(balance.balance, dec!(0.00));
            assert_eq!(balance.status, BalanceStatus::Settled);
        }
        assert!(SettlementPlanner::plan(&after).is_empty());
    }

    #[test]
    fn test_rounding_residue_produces_no_settlement_churn() {
        // 100 / 3 leaves a one-cent residue on the payer after rounding;
        // the planner must not bounce it back and forth.
        let mut expenses = vec![equal_expense(dec!(100), "A", &["A", "B", "C"])];

        let balances = BalanceCalculator::compute(&expenses);
        let settlements = SettlementPlanner::plan(&balances);
        assert_eq!(settlements.len(), 2);

        for payment in &settlements {
            expenses.push(
                Expense::new(
                    payment.amount,
                    "settlement",
                    &payment.from,
                    vec![Participant::equal(payment.to.as_str())],
                )
                .as_settlement(),
            );
        }

        let after = BalanceCalculator::compute(&expenses);
        assert!(SettlementPlanner::plan(&after).is_empty());
    }
}

mod invariants {
    use super::*;
    use proptest::prelude::*;

    fn person_name() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["Alice", "Bob", "Carol", "Dave", "Eve"])
            .prop_map(str::to_string)
    }

    prop_compose! {
        fn arb_equal_expense()(
            cents in 1i64..500_000i64,
            payer in person_name(),
            participants in prop::collection::vec(person_name(), 0..5),
        ) -> Expense {
            Expense::new(
                Decimal::new(cents, 2),
                "generated",
                payer,
                participants.into_iter().map(Participant::equal).collect(),
            )
        }
    }

    proptest! {
        /// Balances always sum to zero, within one rounding step per person.
        #[test]
        fn zero_sum_invariant(expenses in prop::collection::vec(arb_equal_expense(), 0..20)) {
            let balances = BalanceCalculator::compute(&expenses);
            let total: Decimal = balances.iter().map(|b| b.balance).sum();
            let tolerance = Decimal::new(balances.len() as i64, 2);
            prop_assert!(total.abs() <= tolerance, "total {total} exceeds tolerance {tolerance}");
        }

        /// The calculator is a pure function of its input.
        #[test]
        fn compute_is_idempotent(expenses in prop::collection::vec(arb_equal_expense(), 0..10)) {
            prop_assert_eq!(
                BalanceCalculator::compute(&expenses),
                BalanceCalculator::compute(&expenses)
            );
        }

        /// Every planned settlement moves a positive, cent-rounded amount
        /// between two distinct people known to the balance sheet.
        #[test]
        fn settlements_are_well_formed(expenses in prop::collection::vec(arb_equal_expense(), 0..20)) {
            let balances = BalanceCalculator::compute(&expenses);
            let names: Vec<&str> = balances.iter().map(|b| b.name.as_str()).collect();

            for settlement in SettlementPlanner::plan(&balances) {
                prop_assert!(settlement.amount > Decimal::ZERO);
                prop_assert!(settlement.amount.scale() <= 2);
                prop_assert_ne!(&settlement.from, &settlement.to);
                prop_assert!(names.contains(&settlement.from.as_str()));
                prop_assert!(names.contains(&settlement.to.as_str()));
            }
        }

        /// Recording a computed settlement as an expense moves both
        /// involved parties strictly toward zero.
        #[test]
        fn applied_settlement_shrinks_both_balances(
            expenses in prop::collection::vec(arb_equal_expense(), 1..15)
        ) {
            let mut expenses = expenses;
            let before = BalanceCalculator::compute(&expenses);
            let plan = SettlementPlanner::plan(&before);
            prop_assume!(!plan.is_empty());

            let payment = plan[0].clone();
            let debt_before = before.iter().find(|b| b.name == payment.from).map(|b| b.balance.abs());
            let credit_before = before.iter().find(|b| b.name == payment.to).map(|b| b.balance.abs());

            expenses.push(
                Expense::new(
                    payment.amount,
                    "settlement",
                    payment.from.clone(),
                    vec![Participant::equal(payment.to.clone())],
                )
                .as_settlement(),
            );

            let after = BalanceCalculator::compute(&expenses);
            let debt_after = after.iter().find(|b| b.name == payment.from).map(|b| b.balance.abs());
            let credit_after = after.iter().find(|b| b.name == payment.to).map(|b| b.balance.abs());

            prop_assert!(debt_after < debt_before);
            prop_assert!(credit_after < credit_before);
        }
    }
}
