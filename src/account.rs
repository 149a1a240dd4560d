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

//! Account management.
//!
//! [`Account::deposit`] and [`Account::withdraw`] only move the balance. Going
//! through a [`Transaction`](crate::Transaction) is what also appends to the
//! history.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use bank_demo_rs::{Account, AccountNumber, Cpf};
//!
//! let account = Account::new(AccountNumber(1), Cpf::parse("12345678901").unwrap());
//! assert_eq!(account.balance(), dec!(0.00));
//! assert_eq!(account.branch(), "0001");
//! ```

use crate::BankError;
use crate::base::{AccountNumber, Cpf};
use crate::history::History;
use crate::policy::{WithdrawalPolicy, WithdrawalWindow, check_withdrawal};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

/// Bank account.
///
/// A checking account is an account with a [`WithdrawalPolicy`].
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    /// Identifier of the owning client; the client owns the account, not
    /// the other way round.
    owner: Cpf,
    balance: Decimal,
    history: History,
    policy: Option<WithdrawalPolicy>,
}

impl Account {
    pub const BRANCH: &'static str = "0001";

    pub fn new(number: AccountNumber, owner: Cpf) -> Self {
        Self {
            number,
            owner,
            balance: Decimal::ZERO,
            history: History::new(),
            policy: None,
        }
    }

    pub fn checking(number: AccountNumber, owner: Cpf, policy: WithdrawalPolicy) -> Self {
        Self {
            policy: Some(policy),
            ..Self::new(number, owner)
        }
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: balance went negative: {}",
            self.balance
        );
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        Self::BRANCH
    }

    pub fn owner(&self) -> &Cpf {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn policy(&self) -> Option<&WithdrawalPolicy> {
        self.policy.as_ref()
    }

    /// Increases the balance.
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidAmount`] unless `amount > 0`.
    /// - [`BankError::AmountTooLarge`] if the new balance would not fit in a
    ///   [`Decimal`]. The balance is untouched.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::AmountTooLarge)?;
        self.assert_invariants();
        Ok(())
    }

    /// Decreases the balance, counting today's withdrawals by the local clock.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.withdraw_on(amount, Local::now().date_naive())
    }

    /// Decreases the balance as of `day`.
    ///
    /// `day` only matters for a policy with [`WithdrawalWindow::Day`].
    ///
    /// # Errors
    ///
    /// See [`check_withdrawal`] for the error kinds and their order. On error
    /// the balance is untouched.
    pub fn withdraw_on(&mut self, amount: Decimal, day: NaiveDate) -> Result<(), BankError> {
        let prior_withdrawals = match self.policy.map(|policy| policy.window()) {
            Some(WithdrawalWindow::Day) => self.history.withdrawals_on(day),
            Some(WithdrawalWindow::Lifetime) => self.history.withdrawals(),
            None => 0,
        };
        check_withdrawal(amount, self.balance, self.policy.as_ref(), prior_withdrawals)?;

        self.balance -= amount;
        self.assert_invariants();
        Ok(())
    }
}
