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

//! Clients and the accounts they own.

use crate::BankError;
use crate::account::Account;
use crate::base::{AccountNumber, BirthDate, Cpf};
use crate::transaction::Transaction;
use chrono::{Local, NaiveDateTime};
use tracing::debug;

/// Individual client.
///
/// Owns its accounts exclusively. Every transaction on those accounts goes
/// through [`Client::perform`], which is where the daily cap is enforced.
#[derive(Debug, Clone)]
pub struct Client {
    cpf: Cpf,
    name: String,
    birth_date: BirthDate,
    address: String,
    accounts: Vec<Account>,
    daily_transaction_limit: Option<usize>,
}

impl Client {
    pub fn new(cpf: Cpf, name: String, birth_date: BirthDate, address: String) -> Self {
        Self {
            cpf,
            name,
            birth_date,
            address,
            accounts: Vec::new(),
            daily_transaction_limit: None,
        }
    }

    /// Caps the transactions applied to any one account per calendar day.
    pub fn with_daily_transaction_limit(mut self, limit: Option<usize>) -> Self {
        self.daily_transaction_limit = limit;
        self
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn daily_transaction_limit(&self) -> Option<usize> {
        self.daily_transaction_limit
    }

    pub(crate) fn add_account(&mut self, account: Account) {
        debug_assert_eq!(account.owner(), &self.cpf);
        self.accounts.push(account);
    }

    /// Picks the account an operation targets.
    ///
    /// A client with a single account always gets that account and the
    /// selector is ignored. With several accounts the selector is mandatory.
    ///
    /// # Errors
    ///
    /// - [`BankError::NoAccounts`] - The client owns no account.
    /// - [`BankError::AccountSelectionRequired`] - Several accounts, no selector.
    /// - [`BankError::AccountNotFound`] - No owned account has that number.
    pub fn resolve_account(&self, selector: Option<AccountNumber>) -> Result<&Account, BankError> {
        let index = self.resolve_index(selector)?;
        Ok(&self.accounts[index])
    }

    fn resolve_index(&self, selector: Option<AccountNumber>) -> Result<usize, BankError> {
        match (self.accounts.len(), selector) {
            (0, _) => Err(BankError::NoAccounts),
            (1, _) => Ok(0),
            (_, None) => Err(BankError::AccountSelectionRequired),
            (_, Some(number)) => self
                .accounts
                .iter()
                .position(|account| account.number() == number)
                .ok_or(BankError::AccountNotFound),
        }
    }

    /// Applies `transaction` to the selected account now.
    pub fn perform(
        &mut self,
        selector: Option<AccountNumber>,
        transaction: Transaction,
    ) -> Result<(), BankError> {
        self.perform_at(selector, transaction, Local::now().naive_local())
    }

    /// Applies `transaction` to the selected account as of `at`.
    ///
    /// # Errors
    ///
    /// - Any error of [`Client::resolve_account`].
    /// - [`BankError::DailyTransactionLimitExceeded`] - The account already
    ///   recorded the maximum number of transactions on `at`'s day.
    /// - Any error of [`Transaction::apply_at`].
    pub fn perform_at(
        &mut self,
        selector: Option<AccountNumber>,
        transaction: Transaction,
        at: NaiveDateTime,
    ) -> Result<(), BankError> {
        let index = self.resolve_index(selector)?;
        let account = &mut self.accounts[index];

        if let Some(limit) = self.daily_transaction_limit {
            let today = account.history().count_on(at.date());
            if today >= limit {
                debug!(
                    account = %account.number(),
                    today,
                    limit,
                    "daily transaction limit reached"
                );
                return Err(BankError::DailyTransactionLimitExceeded);
            }
        }

        transaction.apply_at(account, at)
    }
}
