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

use anyhow::Context;
use bank_demo_rs::{AuditLog, Bank, BankConfig, Menu, WithdrawalPolicy, WithdrawalWindow};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Bank Demo - Interactive banking session
///
/// Runs a console menu for registering clients, opening checking accounts,
/// and making deposits and withdrawals. All data lives in memory and is
/// lost on exit.
#[derive(Parser, Debug)]
#[command(name = "bank-demo-rs")]
#[command(about = "An interactive in-memory banking session", long_about = None)]
struct Args {
    /// Largest amount a checking account may withdraw at once
    #[arg(long, value_name = "AMOUNT", default_value_t = WithdrawalPolicy::DEFAULT_LIMIT)]
    withdrawal_limit: Decimal,

    /// Withdrawals allowed per checking account within the window
    #[arg(long, value_name = "N", default_value_t = WithdrawalPolicy::DEFAULT_MAX_WITHDRAWALS)]
    max_withdrawals: usize,

    /// Which past withdrawals count toward --max-withdrawals
    #[arg(long, value_enum, default_value_t = Window::Day)]
    withdrawal_window: Window,

    /// Transactions allowed per account per day (0 disables the cap)
    #[arg(long, value_name = "N", default_value_t = BankConfig::DEFAULT_DAILY_TRANSACTION_LIMIT)]
    daily_transaction_limit: usize,

    /// Append a line per menu operation to this file
    #[arg(long, value_name = "FILE")]
    audit_log: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Window {
    /// Count today's withdrawals only
    Day,
    /// Count every withdrawal ever made
    Lifetime,
}

impl From<Window> for WithdrawalWindow {
    fn from(window: Window) -> Self {
        match window {
            Window::Day => WithdrawalWindow::Day,
            Window::Lifetime => WithdrawalWindow::Lifetime,
        }
    }
}

impl Args {
    fn config(&self) -> BankConfig {
        let withdrawal_policy = WithdrawalPolicy::new(self.withdrawal_limit, self.max_withdrawals)
            .with_window(self.withdrawal_window.into());
        let daily_transaction_limit =
            (self.daily_transaction_limit > 0).then_some(self.daily_transaction_limit);

        BankConfig {
            withdrawal_policy,
            daily_transaction_limit,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut bank = Bank::new(args.config());
    let audit = args.audit_log.as_ref().map(AuditLog::new);

    let stdin = io::stdin();
    let mut menu = Menu::new(&mut bank, stdin.lock(), io::stdout().lock());
    if let Some(audit) = &audit {
        menu = menu.with_audit_log(audit);
    }

    menu.run().context("console session failed")?;
    Ok(())
}

/// Diagnostics go to stderr so they never interleave with menu prompts on
/// stdout. `RUST_LOG` wins over `--verbose` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_checking_account_policy() {
        let args = Args::try_parse_from(["bank-demo-rs"]).unwrap();
        let config = args.config();

        assert_eq!(config.withdrawal_policy, WithdrawalPolicy::default());
        assert_eq!(config.daily_transaction_limit, Some(10));
        assert!(args.audit_log.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn flags_override_limits() {
        let args = Args::try_parse_from([
            "bank-demo-rs",
            "--withdrawal-limit",
            "250.50",
            "--max-withdrawals",
            "5",
            "--withdrawal-window",
            "lifetime",
            "--daily-transaction-limit",
            "20",
            "--audit-log",
            "audit.log",
        ])
        .unwrap();
        let config = args.config();

        assert_eq!(config.withdrawal_policy.per_withdrawal_limit(), dec!(250.50));
        assert_eq!(config.withdrawal_policy.max_withdrawals(), 5);
        assert_eq!(config.withdrawal_policy.window(), WithdrawalWindow::Lifetime);
        assert_eq!(config.daily_transaction_limit, Some(20));
        assert_eq!(args.audit_log, Some(PathBuf::from("audit.log")));
    }

    #[test]
    fn zero_daily_limit_disables_cap() {
        let args = Args::try_parse_from(["bank-demo-rs", "--daily-transaction-limit", "0"]).unwrap();
        assert_eq!(args.config().daily_transaction_limit, None);
    }

    #[test]
    fn malformed_limit_is_rejected() {
        assert!(Args::try_parse_from(["bank-demo-rs", "--withdrawal-limit", "lots"]).is_err());
        assert!(Args::try_parse_from(["bank-demo-rs", "--withdrawal-window", "week"]).is_err());
    }
}
