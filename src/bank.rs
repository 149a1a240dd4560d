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

//! Banking session.
//!
//! The [`Bank`] is the single piece of session state: it owns every client
//! (and through them every account) for the lifetime of the process. It is
//! created once and handed to whatever drives it.
//!
//! # Operations
//!
//! - **Client registration**: one client per CPF.
//! - **Account opening**: checking account numbered `accounts so far + 1`.
//! - **Deposits / withdrawals**: routed through [`Client::perform_at`].
//! - **Statements and listings**: read-only views for display.
//!
//! Lookups are linear scans; the session is sized for a console demo.

use crate::BankError;
use crate::account::Account;
use crate::base::{AccountNumber, BirthDate, Cpf};
use crate::client::Client;
use crate::config::BankConfig;
use crate::statement::{AccountListing, Statement};
use crate::transaction::Transaction;
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, info};

type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// In-memory registry of clients and accounts.
///
/// # Invariants
///
/// - CPFs are unique across clients.
/// - Account numbers are unique across all accounts and never reused.
/// - Every account is owned by exactly one client.
pub struct Bank {
    config: BankConfig,
    /// Clients in registration order.
    clients: Vec<Client>,
    accounts_opened: u32,
    clock: Clock,
}

impl Bank {
    /// Creates an empty bank timestamping transactions with the local clock.
    pub fn new(config: BankConfig) -> Self {
        Self::with_clock(config, || Local::now().naive_local())
    }

    /// Creates an empty bank that asks `clock` for the time of each transaction.
    pub fn with_clock<C>(config: BankConfig, clock: C) -> Self
    where
        C: Fn() -> NaiveDateTime + 'static,
    {
        Self {
            config,
            clients: Vec::new(),
            accounts_opened: 0,
            clock: Box::new(clock),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Registers a new client.
    ///
    /// # Errors
    ///
    /// [`BankError::DuplicateIdentifier`] if the CPF is already registered.
    pub fn register_client(
        &mut self,
        cpf: Cpf,
        name: String,
        birth_date: BirthDate,
        address: String,
    ) -> Result<&Client, BankError> {
        if self.find_client(&cpf).is_some() {
            return Err(BankError::DuplicateIdentifier);
        }

        info!(%cpf, "client registered");
        let client = Client::new(cpf, name, birth_date, address)
            .with_daily_transaction_limit(self.config.daily_transaction_limit);
        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }

    /// Opens a checking account for an existing client.
    ///
    /// # Errors
    ///
    /// [`BankError::ClientNotFound`] if no client has this CPF.
    pub fn open_account(&mut self, cpf: &Cpf) -> Result<AccountNumber, BankError> {
        let number = AccountNumber(self.accounts_opened + 1);
        let policy = self.config.withdrawal_policy;

        let client = self.find_client_mut(cpf).ok_or(BankError::ClientNotFound)?;
        client.add_account(Account::checking(number, cpf.clone(), policy));
        self.accounts_opened += 1;

        info!(%cpf, account = %number, "account opened");
        Ok(number)
    }

    pub fn find_client(&self, cpf: &Cpf) -> Option<&Client> {
        self.clients.iter().find(|client| client.cpf() == cpf)
    }

    fn find_client_mut(&mut self, cpf: &Cpf) -> Option<&mut Client> {
        self.clients.iter_mut().find(|client| client.cpf() == cpf)
    }

    /// Looks up a client, failing with [`BankError::ClientNotFound`].
    pub fn client(&self, cpf: &Cpf) -> Result<&Client, BankError> {
        self.find_client(cpf).ok_or(BankError::ClientNotFound)
    }

    /// Finds the account numbered `number` among those owned by `cpf`.
    pub fn find_account_owned_by(
        &self,
        cpf: &Cpf,
        number: AccountNumber,
    ) -> Result<&Account, BankError> {
        self.client(cpf)?
            .accounts()
            .iter()
            .find(|account| account.number() == number)
            .ok_or(BankError::AccountNotFound)
    }

    pub fn deposit(
        &mut self,
        cpf: &Cpf,
        selector: Option<AccountNumber>,
        amount: Decimal,
    ) -> Result<(), BankError> {
        self.perform(cpf, selector, Transaction::deposit(amount))
    }

    pub fn withdraw(
        &mut self,
        cpf: &Cpf,
        selector: Option<AccountNumber>,
        amount: Decimal,
    ) -> Result<(), BankError> {
        self.perform(cpf, selector, Transaction::withdrawal(amount))
    }

    /// Applies `transaction` on behalf of the client identified by `cpf`.
    ///
    /// # Errors
    ///
    /// - [`BankError::ClientNotFound`] - Unknown CPF.
    /// - Any error of [`Client::perform_at`].
    pub fn perform(
        &mut self,
        cpf: &Cpf,
        selector: Option<AccountNumber>,
        transaction: Transaction,
    ) -> Result<(), BankError> {
        let at = (self.clock)();
        let client = self.find_client_mut(cpf).ok_or(BankError::ClientNotFound)?;

        match client.perform_at(selector, transaction, at) {
            Ok(()) => {
                debug!(
                    %cpf,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    "transaction applied"
                );
                Ok(())
            }
            Err(e) => {
                debug!(
                    %cpf,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    error = %e,
                    "transaction rejected"
                );
                Err(e)
            }
        }
    }

    /// Statement of the selected account of `cpf`.
    pub fn statement(
        &self,
        cpf: &Cpf,
        selector: Option<AccountNumber>,
    ) -> Result<Statement<'_>, BankError> {
        let account = self.client(cpf)?.resolve_account(selector)?;
        Ok(Statement::new(account))
    }

    /// Every account with its owner, ordered by account number.
    pub fn accounts(&self) -> Vec<AccountListing<'_>> {
        let mut listings: Vec<_> = self
            .clients
            .iter()
            .flat_map(|client| {
                client
                    .accounts()
                    .iter()
                    .map(move |account| AccountListing::new(account, client))
            })
            .collect();
        listings.sort_by_key(|listing| listing.account().number());
        listings
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn account_count(&self) -> u32 {
        self.accounts_opened
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}
