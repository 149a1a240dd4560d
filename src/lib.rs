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

//! # Bank Demo
//!
//! This library models a small in-memory bank: clients identified by CPF own
//! checking accounts, and every deposit or withdrawal leaves a record in the
//! account history.
//!
//! ## Core Components
//!
//! - [`Bank`]: Session context holding every client and account
//! - [`Client`]: Account owner; applies transactions and enforces the daily cap
//! - [`Account`]: Balance plus history, with an optional [`WithdrawalPolicy`]
//! - [`History`]: Append-only log of [`TransactionRecord`]s
//! - [`Transaction`]: One-shot deposit or withdrawal request
//! - [`BankError`]: Error types for rejected operations
//!
//! The console front end lives in [`menu`], and [`audit`] provides the
//! optional operation log it writes to.
//!
//! ## Example
//!
//! ```
//! use bank_demo_rs::{Bank, BankConfig, BankError, BirthDate, Cpf};
//! use rust_decimal_macros::dec;
//!
//! let mut bank = Bank::new(BankConfig::default());
//! let cpf = Cpf::parse("12345678901").unwrap();
//! bank.register_client(
//!     cpf.clone(),
//!     "Ana Souza".to_owned(),
//!     BirthDate::parse("01/02/1990").unwrap(),
//!     "Rua A, 1 - Centro - Recife/PE".to_owned(),
//! )
//! .unwrap();
//! bank.open_account(&cpf).unwrap();
//!
//! bank.deposit(&cpf, None, dec!(1000)).unwrap();
//! assert_eq!(bank.withdraw(&cpf, None, dec!(600)), Err(BankError::LimitExceeded));
//! bank.withdraw(&cpf, None, dec!(500)).unwrap();
//!
//! let account = bank.client(&cpf).unwrap().resolve_account(None).unwrap();
//! assert_eq!(account.balance(), dec!(500));
//! assert_eq!(account.history().len(), 2);
//! ```
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous. A [`Bank`] is owned by the
//! driver and passed by `&mut` to each operation.

pub mod account;
pub mod audit;
mod bank;
mod base;
mod client;
mod config;
pub mod error;
mod history;
pub mod menu;
pub mod policy;
mod statement;
mod transaction;

pub use account::Account;
pub use audit::AuditLog;
pub use bank::Bank;
pub use base::{AccountNumber, BirthDate, Cpf};
pub use client::Client;
pub use config::BankConfig;
pub use error::BankError;
pub use history::History;
pub use menu::Menu;
pub use policy::{WithdrawalPolicy, WithdrawalWindow, check_withdrawal};
pub use statement::{AccountListing, ClientListing, Statement, TIMESTAMP_FORMAT};
pub use transaction::{Transaction, TransactionKind, TransactionRecord};
