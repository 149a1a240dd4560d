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

//! Withdrawal validation.
//!
//! A checking account carries a [`WithdrawalPolicy`]; a plain account carries
//! none. [`check_withdrawal`] decides whether a withdrawal may go ahead from
//! nothing but the amount, the balance, the policy and how many withdrawals
//! already count against the policy.
//!
//! Checks run in this order, first failure wins:
//!
//! 1. policy limit ([`BankError::LimitExceeded`])
//! 2. policy withdrawal count ([`BankError::WithdrawalCountExceeded`])
//! 3. balance ([`BankError::InsufficientBalance`])
//! 4. amount sign ([`BankError::InvalidAmount`])

use crate::BankError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Which prior withdrawals count against [`WithdrawalPolicy::max_withdrawals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WithdrawalWindow {
    /// Only withdrawals recorded on the current calendar day.
    #[default]
    Day,
    /// Every withdrawal the account ever made.
    Lifetime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalPolicy {
    per_withdrawal_limit: Decimal,
    max_withdrawals: usize,
    window: WithdrawalWindow,
}

impl WithdrawalPolicy {
    pub const DEFAULT_LIMIT: Decimal = dec!(500);
    pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

    pub fn new(per_withdrawal_limit: Decimal, max_withdrawals: usize) -> Self {
        Self {
            per_withdrawal_limit,
            max_withdrawals,
            window: WithdrawalWindow::Day,
        }
    }

    pub fn with_window(mut self, window: WithdrawalWindow) -> Self {
        self.window = window;
        self
    }

    pub fn per_withdrawal_limit(&self) -> Decimal {
        self.per_withdrawal_limit
    }

    pub fn max_withdrawals(&self) -> usize {
        self.max_withdrawals
    }

    pub fn window(&self) -> WithdrawalWindow {
        self.window
    }
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, Self::DEFAULT_MAX_WITHDRAWALS)
    }
}

/// Decides whether withdrawing `amount` from `balance` is allowed.
///
/// `prior_withdrawals` is the number of withdrawals already in the window
/// selected by the policy; it is ignored when there is no policy.
pub fn check_withdrawal(
    amount: Decimal,
    balance: Decimal,
    policy: Option<&WithdrawalPolicy>,
    prior_withdrawals: usize,
) -> Result<(), BankError> {
    if let Some(policy) = policy {
        if amount > policy.per_withdrawal_limit {
            return Err(BankError::LimitExceeded);
        }
        if prior_withdrawals >= policy.max_withdrawals {
            return Err(BankError::WithdrawalCountExceeded);
        }
    }
    if amount > balance {
        return Err(BankError::InsufficientBalance);
    }
    if amount <= Decimal::ZERO {
        return Err(BankError::InvalidAmount);
    }
    Ok(())
}
