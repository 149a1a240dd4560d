// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Property-based tests for accounts and withdrawal policies.
//!
//! These tests verify invariants that should hold for any sequence of
//! deposits and withdrawals.

use bank_demo_rs::{
    Account, AccountNumber, BankError, Cpf, Transaction, TransactionKind, WithdrawalPolicy,
    check_withdrawal,
};
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Arbitrary Strategies
// =============================================================================

/// Generate a positive amount (0.01 to 1000 with 2 decimal places).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate a zero or negative amount.
fn arb_non_positive() -> impl Strategy<Value = Decimal> {
    (-100_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate a deposit or withdrawal of a positive amount.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    prop_oneof![
        arb_amount().prop_map(Transaction::deposit),
        arb_amount().prop_map(Transaction::withdrawal),
    ]
}

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn plain_account() -> Account {
    Account::new(AccountNumber(1), Cpf::parse("12345678901").unwrap())
}

fn checking_account() -> Account {
    Account::checking(
        AccountNumber(1),
        Cpf::parse("12345678901").unwrap(),
        WithdrawalPolicy::default(),
    )
}

// =============================================================================
// Account Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Non-positive deposits never change the balance.
    #[test]
    fn non_positive_deposit_is_rejected(
        seed in arb_amount(),
        amount in arb_non_positive(),
    ) {
        let mut account = plain_account();
        Transaction::deposit(seed).apply_at(&mut account, at()).unwrap();

        let result = Transaction::deposit(amount).apply_at(&mut account, at());
        prop_assert_eq!(result, Err(BankError::InvalidAmount));
        prop_assert_eq!(account.balance(), seed);
        prop_assert_eq!(account.history().len(), 1);
    }

    /// Withdrawing more than the balance never changes it.
    #[test]
    fn cannot_overdraw(
        deposit in arb_amount(),
        excess in arb_amount(),
    ) {
        let mut account = plain_account();
        Transaction::deposit(deposit).apply_at(&mut account, at()).unwrap();

        let result = Transaction::withdrawal(deposit + excess).apply_at(&mut account, at());
        prop_assert_eq!(result, Err(BankError::InsufficientBalance));
        prop_assert_eq!(account.balance(), deposit);
    }

    /// Balance is never negative and history grows only on success.
    #[test]
    fn history_counts_successes_only(
        transactions in prop::collection::vec(arb_transaction(), 0..40),
    ) {
        let mut account = checking_account();
        let mut successes = 0usize;
        let mut expected = Decimal::ZERO;

        for transaction in transactions {
            let before = account.history().len();
            match transaction.apply_at(&mut account, at()) {
                Ok(()) => {
                    successes += 1;
                    match transaction.kind() {
                        TransactionKind::Deposit => expected += transaction.amount(),
                        TransactionKind::Withdrawal => expected -= transaction.amount(),
                    }
                }
                Err(_) => {
                    prop_assert_eq!(account.history().len(), before);
                }
            }
            prop_assert!(account.balance() >= Decimal::ZERO);
        }

        prop_assert_eq!(account.history().len(), successes);
        prop_assert_eq!(account.balance(), expected);
    }

    /// Depositing then withdrawing the same amount is a no-op on the balance.
    #[test]
    fn deposit_withdraw_round_trip(
        start in arb_amount(),
        amount in (1i64..=50_000i64).prop_map(|cents| Decimal::new(cents, 2)),
    ) {
        let mut account = checking_account();
        Transaction::deposit(start).apply_at(&mut account, at()).unwrap();
        let len = account.history().len();

        Transaction::deposit(amount).apply_at(&mut account, at()).unwrap();
        Transaction::withdrawal(amount).apply_at(&mut account, at()).unwrap();

        prop_assert_eq!(account.balance(), start);
        prop_assert_eq!(account.history().len(), len + 2);
    }
}

// =============================================================================
// Withdrawal Policy Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Above the limit always fails with LimitExceeded, whatever the balance
    /// and withdrawal count.
    #[test]
    fn over_limit_always_rejected(
        limit in arb_amount(),
        excess in arb_amount(),
        balance in (0i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        prior in 0usize..10,
        max in 0usize..10,
    ) {
        let policy = WithdrawalPolicy::new(limit, max);
        prop_assert_eq!(
            check_withdrawal(limit + excess, balance, Some(&policy), prior),
            Err(BankError::LimitExceeded)
        );
    }

    /// Reaching the count cap blocks withdrawals the limit and balance allow.
    #[test]
    fn count_cap_always_rejected(
        amount in arb_amount(),
        max in 0usize..10,
        extra in 0usize..5,
    ) {
        let policy = WithdrawalPolicy::new(amount, max);
        prop_assert_eq!(
            check_withdrawal(amount, amount, Some(&policy), max + extra),
            Err(BankError::WithdrawalCountExceeded)
        );
    }

    /// Within limit, under the cap and covered by the balance always passes.
    #[test]
    fn allowed_withdrawal_passes(
        amount in arb_amount(),
        headroom in arb_amount(),
        max in 1usize..10,
    ) {
        let policy = WithdrawalPolicy::new(amount + headroom, max);
        prop_assert_eq!(
            check_withdrawal(amount, amount + headroom, Some(&policy), max - 1),
            Ok(())
        );
    }

    /// The policy never relaxes the plain-account rules.
    #[test]
    fn policy_only_adds_rejections(
        amount in (-100_000i64..=100_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        balance in (0i64..=100_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        prior in 0usize..5,
    ) {
        let policy = WithdrawalPolicy::new(dec!(500), 3);
        if check_withdrawal(amount, balance, None, prior).is_err() {
            prop_assert!(check_withdrawal(amount, balance, Some(&policy), prior).is_err());
        }
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After the maximum number of withdrawals in a day, the next one fails
    /// even though limit and balance would allow it.
    #[test]
    fn daily_withdrawal_cap_enforced(
        amounts in prop::collection::vec(
            (1i64..=10_000i64).prop_map(|cents| Decimal::new(cents, 2)),
            3,
        ),
    ) {
        let mut account = checking_account();
        Transaction::deposit(dec!(1000)).apply_at(&mut account, at()).unwrap();
        for amount in &amounts {
            Transaction::withdrawal(*amount).apply_at(&mut account, at()).unwrap();
        }

        prop_assert_eq!(
            Transaction::withdrawal(dec!(1)).apply_at(&mut account, at()),
            Err(BankError::WithdrawalCountExceeded)
        );
        prop_assert_eq!(account.history().len(), 4);
    }
}
