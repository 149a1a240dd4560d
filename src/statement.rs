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

//! Read-only text views of accounts.

use crate::account::Account;
use crate::client::Client;
use std::fmt;

/// Amounts are shown with two decimal places.
const DISPLAY_PRECISION: u32 = 2;

/// Timestamp layout used in statements and the audit log.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

const RULE_WIDTH: usize = 50;

/// Account statement: every recorded transaction followed by the balance.
///
/// ```text
/// =================== Statement ====================
///
/// Deposit:	$ 1000.00	Date:	18-10-2026 09:00:00
/// Withdrawal:	$ 500.00	Date:	18-10-2026 09:05:00
///
/// Balance:	$ 500.00
/// ==================================================
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    account: &'a Account,
}

impl<'a> Statement<'a> {
    pub fn new(account: &'a Account) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &'a Account {
        self.account
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:=^width$}", " Statement ", width = RULE_WIDTH)?;

        let entries = self.account.history().entries();
        if entries.is_empty() {
            writeln!(f, "No transactions have been made.")?;
        } else {
            for record in entries {
                writeln!(
                    f,
                    "\n{}:\t$ {:.prec$}\tDate:\t{}",
                    record.kind(),
                    record.amount().round_dp(DISPLAY_PRECISION),
                    record.timestamp().format(TIMESTAMP_FORMAT),
                    prec = DISPLAY_PRECISION as usize,
                )?;
            }
        }

        writeln!(
            f,
            "\nBalance:\t$ {:.prec$}",
            self.account.balance().round_dp(DISPLAY_PRECISION),
            prec = DISPLAY_PRECISION as usize,
        )?;
        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

/// One line-group of the account listing.
#[derive(Debug, Clone, Copy)]
pub struct AccountListing<'a> {
    account: &'a Account,
    owner: &'a Client,
}

impl<'a> AccountListing<'a> {
    pub fn new(account: &'a Account, owner: &'a Client) -> Self {
        Self { account, owner }
    }

    pub fn account(&self) -> &'a Account {
        self.account
    }

    pub fn owner(&self) -> &'a Client {
        self.owner
    }
}

impl fmt::Display for AccountListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Agency:\t{}", self.account.branch())?;
        writeln!(f, "Account:\t{}", self.account.number())?;
        write!(f, "Owner:\t{}", self.owner.name())
    }
}

/// One line-group of the client listing.
#[derive(Debug, Clone, Copy)]
pub struct ClientListing<'a> {
    client: &'a Client,
}

impl<'a> ClientListing<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a Client {
        self.client
    }
}

impl fmt::Display for ClientListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:\t{}", self.client.name())?;
        writeln!(f, "CPF:\t{}", self.client.cpf())?;
        writeln!(f, "Birth date:\t{}", self.client.birth_date())?;
        writeln!(f, "Address:\t{}", self.client.address())?;
        write!(f, "Accounts:\t{}", self.client.accounts().len())
    }
}
