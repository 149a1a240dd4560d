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

//! Error types for banking operations.

use thiserror::Error;

/// Banking operation errors.
///
/// Every variant describes a rejected request; none of them leaves an account,
/// client, or history partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Amount is zero or negative
    #[error("the amount entered is invalid")]
    InvalidAmount,

    /// Amount would push the balance past the largest representable value
    #[error("the amount entered is too large")]
    AmountTooLarge,

    /// Withdrawal would exceed the balance
    #[error("you do not have enough balance")]
    InsufficientBalance,

    /// Withdrawal exceeds the per-withdrawal limit
    #[error("the withdrawal amount exceeds the limit")]
    LimitExceeded,

    /// Withdrawal count cap reached
    #[error("maximum number of withdrawals exceeded")]
    WithdrawalCountExceeded,

    /// Per-day transaction cap reached for the account
    #[error("maximum number of transactions on a day exceeded")]
    DailyTransactionLimitExceeded,

    /// No client registered under the identifier
    #[error("client not found")]
    ClientNotFound,

    /// No account with the requested number belongs to the client
    #[error("account not found")]
    AccountNotFound,

    /// Client exists but owns no account yet
    #[error("client does not have an account")]
    NoAccounts,

    /// Client owns several accounts and none was selected
    #[error("client has several accounts, an account number is required")]
    AccountSelectionRequired,

    /// A client with this identifier already exists
    #[error("a client with this cpf already exists")]
    DuplicateIdentifier,

    /// Identifier is not exactly 11 digits
    #[error("invalid CPF (expected 11 digits)")]
    InvalidIdentifierFormat,

    /// Date does not match day/month/year or is not a real date
    #[error("invalid date (expected dd/mm/yyyy)")]
    InvalidDateFormat,

    /// Console input could not be read as a number
    #[error("invalid number")]
    MalformedNumericInput,
}

#[cfg(test)]
mod tests {
    use super::BankError;

    #[test]
    fn error_display_messages() {
        assert_eq!(BankError::InvalidAmount.to_string(), "the amount entered is invalid");
        assert_eq!(BankError::AmountTooLarge.to_string(), "the amount entered is too large");
        assert_eq!(
            BankError::InsufficientBalance.to_string(),
            "you do not have enough balance"
        );
        assert_eq!(
            BankError::LimitExceeded.to_string(),
            "the withdrawal amount exceeds the limit"
        );
        assert_eq!(
            BankError::WithdrawalCountExceeded.to_string(),
            "maximum number of withdrawals exceeded"
        );
        assert_eq!(
            BankError::DailyTransactionLimitExceeded.to_string(),
            "maximum number of transactions on a day exceeded"
        );
        assert_eq!(BankError::ClientNotFound.to_string(), "client not found");
        assert_eq!(BankError::AccountNotFound.to_string(), "account not found");
        assert_eq!(BankError::NoAccounts.to_string(), "client does not have an account");
        assert_eq!(
            BankError::DuplicateIdentifier.to_string(),
            "a client with this cpf already exists"
        );
        assert_eq!(
            BankError::InvalidIdentifierFormat.to_string(),
            "invalid CPF (expected 11 digits)"
        );
        assert_eq!(
            BankError::InvalidDateFormat.to_string(),
            "invalid date (expected dd/mm/yyyy)"
        );
        assert_eq!(BankError::MalformedNumericInput.to_string(), "invalid number");
    }

    #[test]
    fn errors_are_cloneable() {
        let error = BankError::LimitExceeded;
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
