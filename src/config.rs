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

//! Session-wide limits.

use crate::policy::WithdrawalPolicy;

/// Limits applied to every client and account a [`Bank`](crate::Bank) creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankConfig {
    /// Policy given to every new checking account.
    pub withdrawal_policy: WithdrawalPolicy,
    /// Maximum transactions per account per calendar day; `None` disables it.
    pub daily_transaction_limit: Option<usize>,
}

impl BankConfig {
    pub const DEFAULT_DAILY_TRANSACTION_LIMIT: usize = 10;

    /// No daily cap, default checking policy.
    pub fn unlimited() -> Self {
        Self {
            daily_transaction_limit: None,
            ..Self::default()
        }
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            withdrawal_policy: WithdrawalPolicy::default(),
            daily_transaction_limit: Some(Self::DEFAULT_DAILY_TRANSACTION_LIMIT),
        }
    }
}
