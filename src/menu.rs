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

//! Console menu driver.
//!
//! Reads one option per line and runs the matching operation against the
//! [`Bank`]. Operator input is validated here, before the bank is touched;
//! every [`BankError`] is printed and the loop carries on. Only I/O failures
//! on the console end the session early. End of input is treated as quit.
//!
//! | Option | Operation |
//! |--------|-----------|
//! | `0` | deposit |
//! | `1` | withdraw |
//! | `2` | statement |
//! | `3` | new client |
//! | `4` | new account |
//! | `5` | list accounts |
//! | `6` | list clients |
//! | `q` | quit |

use crate::audit::{AuditLog, OperationArgs};
use crate::base::{AccountNumber, BirthDate, Cpf};
use crate::statement::ClientListing;
use crate::{Bank, BankError};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

const MENU: &str = "\n\
=============== MENU ================\n\
[0]\tDeposit\n\
[1]\tWithdraw\n\
[2]\tStatement\n\
[3]\tNew Client\n\
[4]\tNew Account\n\
[5]\tList Accounts\n\
[6]\tList Clients\n\
[q]\tQuit\n\
=> ";

const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Deposit,
    Withdraw,
    Statement,
    NewClient,
    NewAccount,
    ListAccounts,
    ListClients,
    Quit,
}

impl Choice {
    fn parse(option: &str) -> Option<Self> {
        match option {
            "0" => Some(Self::Deposit),
            "1" => Some(Self::Withdraw),
            "2" => Some(Self::Statement),
            "3" => Some(Self::NewClient),
            "4" => Some(Self::NewAccount),
            "5" => Some(Self::ListAccounts),
            "6" => Some(Self::ListClients),
            "q" | "Q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Name written to the audit log.
    fn operation_name(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::Statement => "show_statement",
            Self::NewClient => "create_client",
            Self::NewAccount => "create_account",
            Self::ListAccounts => "list_accounts",
            Self::ListClients => "list_clients",
            Self::Quit => "quit",
        }
    }
}

#[derive(Debug, Error)]
enum OperationError {
    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("end of input")]
    EndOfInput,
}

/// Parses an operator-entered amount.
///
/// # Errors
///
/// [`BankError::MalformedNumericInput`] if `raw` is not a decimal number.
/// Sign is not checked here; the account rejects non-positive amounts.
pub fn parse_amount(raw: &str) -> Result<Decimal, BankError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| BankError::MalformedNumericInput)
}

/// Interactive session over any line-oriented input and output.
pub struct Menu<'a, R, W> {
    bank: &'a mut Bank,
    audit: Option<&'a AuditLog>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(bank: &'a mut Bank, input: R, output: W) -> Self {
        Self {
            bank,
            audit: None,
            input,
            output,
        }
    }

    /// Records every dispatched operation in `audit`.
    pub fn with_audit_log(mut self, audit: &'a AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Runs until the operator quits or input ends.
    ///
    /// # Errors
    ///
    /// Only console I/O errors. Audit log failures are reported through
    /// `tracing` and do not stop the session.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(option) = self.read_line()? else {
                break;
            };
            let Some(choice) = Choice::parse(option.trim()) else {
                writeln!(
                    self.output,
                    "\nInvalid operation, please select the desired operation again."
                )?;
                continue;
            };
            if choice == Choice::Quit {
                break;
            }

            let mut args = OperationArgs::default();
            let result = self.dispatch(choice, &mut args);
            self.record_audit(choice, &args);

            match result {
                Ok(()) => {}
                Err(OperationError::Bank(e)) => {
                    debug!(operation = choice.operation_name(), error = %e, "operation rejected");
                    writeln!(self.output, "\nOperation failed! {e}.")?;
                }
                Err(OperationError::Io(e)) => return Err(e),
                Err(OperationError::EndOfInput) => break,
            }
        }

        Ok(())
    }

    fn record_audit(&self, choice: Choice, args: &OperationArgs) {
        let Some(audit) = self.audit else {
            return;
        };
        if let Err(e) = audit.record(choice.operation_name(), args) {
            warn!(
                path = %audit.path().display(),
                error = %e,
                "failed to write audit log"
            );
        }
    }

    fn dispatch(&mut self, choice: Choice, args: &mut OperationArgs) -> Result<(), OperationError> {
        match choice {
            Choice::Deposit => self.deposit(args),
            Choice::Withdraw => self.withdraw(args),
            Choice::Statement => self.show_statement(args),
            Choice::NewClient => self.create_client(args),
            Choice::NewAccount => self.create_account(args),
            Choice::ListAccounts => self.list_accounts(),
            Choice::ListClients => self.list_clients(),
            Choice::Quit => Ok(()),
        }
    }

    fn deposit(&mut self, args: &mut OperationArgs) -> Result<(), OperationError> {
        let cpf = self.prompt_cpf("Enter the client's cpf: ", args)?;
        self.bank.client(&cpf)?;

        let amount = self.prompt("Enter the deposit amount: ")?;
        args.amount = Some(amount.clone());
        let amount = parse_amount(&amount)?;

        let selector = self.select_account(&cpf, args)?;
        self.bank.deposit(&cpf, selector, amount)?;
        writeln!(self.output, "\nDeposit successful!")?;
        Ok(())
    }

    fn withdraw(&mut self, args: &mut OperationArgs) -> Result<(), OperationError> {
        let cpf = self.prompt_cpf("Enter the client's cpf: ", args)?;
        self.bank.client(&cpf)?;

        let amount = self.prompt("Enter the withdrawal amount: ")?;
        args.amount = Some(amount.clone());
        let amount = parse_amount(&amount)?;

        let selector = self.select_account(&cpf, args)?;
        self.bank.withdraw(&cpf, selector, amount)?;
        writeln!(self.output, "\nWithdrawal successful!")?;
        Ok(())
    }

    fn show_statement(&mut self, args: &mut OperationArgs) -> Result<(), OperationError> {
        let cpf = self.prompt_cpf("Enter the client's cpf: ", args)?;
        self.bank.client(&cpf)?;

        let selector = self.select_account(&cpf, args)?;
        let statement = self.bank.statement(&cpf, selector)?;
        writeln!(self.output, "\n{statement}")?;
        Ok(())
    }

    fn create_client(&mut self, args: &mut OperationArgs) -> Result<(), OperationError> {
        let cpf = self.prompt_cpf("Enter the cpf (numbers only): ", args)?;
        if self.bank.find_client(&cpf).is_some() {
            return Err(BankError::DuplicateIdentifier.into());
        }

        let name = self.prompt("Enter the full name: ")?;
        args.name = Some(name.clone());

        let birth_date = self.prompt("Enter the birth date (dd/mm/yyyy): ")?;
        args.birth_date = Some(birth_date.clone());
        let birth_date = BirthDate::parse(&birth_date)?;

        let address =
            self.prompt("Enter the address (street, number - neighborhood - city/state): ")?;
        args.address = Some(address.clone());

        self.bank.register_client(cpf, name, birth_date, address)?;
        writeln!(self.output, "\nClient created successfully!")?;
        Ok(())
    }

    fn create_account(&mut self, args: &mut OperationArgs) -> Result<(), OperationError> {
        let cpf = self.prompt_cpf("Enter the client's cpf: ", args)?;
        let number = self.bank.open_account(&cpf)?;
        writeln!(self.output, "\nAccount {number} created successfully!")?;
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<(), OperationError> {
        let listings = self.bank.accounts();
        if listings.is_empty() {
            writeln!(self.output, "\nNo accounts to show!")?;
            return Ok(());
        }

        for listing in listings {
            writeln!(self.output, "{}", "=".repeat(SEPARATOR_WIDTH))?;
            writeln!(self.output, "{listing}")?;
        }
        Ok(())
    }

    fn list_clients(&mut self) -> Result<(), OperationError> {
        let clients = self.bank.clients();
        if clients.is_empty() {
            writeln!(self.output, "\nNo clients to show!")?;
            return Ok(());
        }

        for client in clients {
            writeln!(self.output, "{}", "=".repeat(SEPARATOR_WIDTH))?;
            writeln!(self.output, "{}", ClientListing::new(client))?;
        }
        Ok(())
    }

    /// Asks for an account number only when the client owns several accounts.
    fn select_account(
        &mut self,
        cpf: &Cpf,
        args: &mut OperationArgs,
    ) -> Result<Option<AccountNumber>, OperationError> {
        match self.bank.client(cpf)?.accounts().len() {
            0 => Err(BankError::NoAccounts.into()),
            1 => Ok(None),
            _ => {
                let number = self.prompt("Enter the account number: ")?;
                args.account = Some(number.clone());
                Ok(Some(number.parse::<AccountNumber>()?))
            }
        }
    }

    fn prompt_cpf(&mut self, label: &str, args: &mut OperationArgs) -> Result<Cpf, OperationError> {
        let raw = self.prompt(label)?;
        args.cpf = Some(raw.clone());
        Ok(Cpf::parse(&raw)?)
    }

    fn prompt(&mut self, label: &str) -> Result<String, OperationError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()?
            .map(|line| line.trim().to_owned())
            .ok_or(OperationError::EndOfInput)
    }

    /// Bytes that are not UTF-8 are replaced, so they fail validation like
    /// any other bad input instead of ending the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
