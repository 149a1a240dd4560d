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

//! Transactions and the records they leave behind.
//!
//! A [`Transaction`] is built for one operator request, applied once and
//! dropped. Only a successful application leaves a trace: a
//! [`TransactionRecord`] appended to the account [`History`](crate::History).

use crate::BankError;
use crate::account::Account;
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => f.write_str("Deposit"),
            Self::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Applies the transaction to `account` using the local wall clock.
    pub fn apply(&self, account: &mut Account) -> Result<(), BankError> {
        self.apply_at(account, Local::now().naive_local())
    }

    /// Applies the transaction as if it happened at `at`.
    ///
    /// The amount is not validated here; the account mutation performs the
    /// authoritative checks. The history only grows when the mutation succeeds.
    ///
    /// # Errors
    ///
    /// Whatever [`Account::deposit`] or [`Account::withdraw_on`] reports.
    pub fn apply_at(&self, account: &mut Account, at: NaiveDateTime) -> Result<(), BankError> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw_on(self.amount, at.date())?,
        }

        account
            .history_mut()
            .record(TransactionRecord::new(self.kind, self.amount, at));
        Ok(())
    }
}

/// Immutable trace of an applied transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: NaiveDateTime,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Decimal, timestamp: NaiveDateTime) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == TransactionKind::Withdrawal
    }

    /// Exact calendar-day match against the record's local timestamp.
    pub fn is_on(&self, day: chrono::NaiveDate) -> bool {
        self.timestamp.date() == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{AccountNumber, Cpf};
    use crate::policy::WithdrawalPolicy;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn account() -> Account {
        Account::new(AccountNumber(1), Cpf::parse("12345678901").unwrap())
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(TransactionKind::Deposit.to_string(), "Deposit");
        assert_eq!(TransactionKind::Withdrawal.to_string(), "Withdrawal");
    }

    #[test]
    fn successful_apply_records_timestamp() {
        let mut account = account();
        Transaction::deposit(dec!(25)).apply_at(&mut account, at(3, 9)).unwrap();

        let entries = account.history().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind(), TransactionKind::Deposit);
        assert_eq!(entries[0].amount(), dec!(25));
        assert_eq!(entries[0].timestamp(), at(3, 9));
    }

    #[test]
    fn failed_apply_records_nothing() {
        let mut account = account();
        let result = Transaction::withdrawal(dec!(1)).apply_at(&mut account, at(3, 9));
        assert_eq!(result, Err(BankError::InsufficientBalance));
        assert!(account.history().is_empty());
    }

    #[test]
    fn withdrawal_count_uses_the_transaction_day() {
        let policy = WithdrawalPolicy::new(dec!(100), 1);
        let mut account = Account::checking(
            AccountNumber(1),
            Cpf::parse("12345678901").unwrap(),
            policy,
        );
        Transaction::deposit(dec!(300)).apply_at(&mut account, at(3, 9)).unwrap();
        Transaction::withdrawal(dec!(50)).apply_at(&mut account, at(3, 10)).unwrap();

        assert_eq!(
            Transaction::withdrawal(dec!(50)).apply_at(&mut account, at(3, 11)),
            Err(BankError::WithdrawalCountExceeded)
        );
        assert!(Transaction::withdrawal(dec!(50)).apply_at(&mut account, at(4, 8)).is_ok());
    }

    #[test]
    fn record_day_match_is_exact() {
        let record = TransactionRecord::new(TransactionKind::Deposit, dec!(1), at(13, 23));
        assert!(record.is_on(at(13, 0).date()));
        assert!(!record.is_on(at(1, 0).date()));
        assert!(!record.is_on(at(3, 0).date()));
    }
}
