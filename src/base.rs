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

//! Core identifier types for clients and accounts.

use crate::BankError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Client identifier (CPF).
///
/// Always exactly 11 ASCII digits; the only way to obtain one is through
/// [`Cpf::parse`], so every `Cpf` in the system is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub const LENGTH: usize = 11;

    /// Validates and wraps a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InvalidIdentifierFormat`] unless `raw` is exactly
    /// eleven ASCII digits. Surrounding whitespace is not trimmed.
    pub fn parse(raw: &str) -> Result<Self, BankError> {
        if raw.len() == Self::LENGTH && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(BankError::InvalidIdentifierFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cpf {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account number, unique across the whole bank.
///
/// Numbers are handed out sequentially starting at 1 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(pub u32);

impl FromStr for AccountNumber {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(AccountNumber)
            .map_err(|_| BankError::MalformedNumericInput)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client birth date.
///
/// Parsed from `day<sep>month<sep>year` where `<sep>` is either `/` or `-`
/// (the same one both times), day and month have one or two digits and the
/// year has two to four. The year is taken literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn parse(raw: &str) -> Result<Self, BankError> {
        let separator = raw
            .chars()
            .find(|c| *c == '/' || *c == '-')
            .ok_or(BankError::InvalidDateFormat)?;

        let parts: Vec<&str> = raw.split(separator).collect();
        let &[day, month, year] = parts.as_slice() else {
            return Err(BankError::InvalidDateFormat);
        };

        let digits = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 2, 4) {
            return Err(BankError::InvalidDateFormat);
        }

        let parse = |part: &str| part.parse::<u32>().map_err(|_| BankError::InvalidDateFormat);
        let year = i32::try_from(parse(year)?).map_err(|_| BankError::InvalidDateFormat)?;
        NaiveDate::from_ymd_opt(year, parse(month)?, parse(day)?)
            .map(Self)
            .ok_or(BankError::InvalidDateFormat)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for BirthDate {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_accepts_eleven_digits() {
        let cpf = Cpf::parse("12345678901").unwrap();
        assert_eq!(cpf.as_str(), "12345678901");
        assert_eq!(cpf.to_string(), "12345678901");
    }

    #[test]
    fn cpf_rejects_wrong_length_or_non_digits() {
        for raw in ["1234567890", "123456789012", "1234567890a", "", " 12345678901", "123.456.789-01"] {
            assert_eq!(Cpf::parse(raw), Err(BankError::InvalidIdentifierFormat), "{raw:?}");
        }
    }

    #[test]
    fn cpf_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(Cpf::parse("١٢٣٤٥٦٧٨٩٠١").is_err());
    }

    #[test]
    fn account_number_parses_trimmed_input() {
        assert_eq!(" 7 ".parse::<AccountNumber>(), Ok(AccountNumber(7)));
        assert_eq!("x".parse::<AccountNumber>(), Err(BankError::MalformedNumericInput));
        assert_eq!("-1".parse::<AccountNumber>(), Err(BankError::MalformedNumericInput));
    }

    #[test]
    fn birth_date_accepts_both_separators() {
        let slash = BirthDate::parse("05/11/1990").unwrap();
        let dash = BirthDate::parse("5-11-1990").unwrap();
        assert_eq!(slash, dash);
        assert_eq!(slash.to_string(), "05/11/1990");
    }

    #[test]
    fn birth_date_accepts_short_years_literally() {
        let date = BirthDate::parse("1/2/90").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(90, 2, 1).unwrap());
    }

    #[test]
    fn birth_date_rejects_malformed_input() {
        for raw in [
            "",
            "01/01",
            "01/01/1",
            "01/01/19900",
            "001/01/1990",
            "01-01/1990",
            "aa/bb/cccc",
            "01/01/1990/",
            "1990-01-01",
        ] {
            assert_eq!(BirthDate::parse(raw), Err(BankError::InvalidDateFormat), "{raw:?}");
        }
    }

    #[test]
    fn birth_date_rejects_impossible_calendar_dates() {
        assert_eq!(BirthDate::parse("31/02/2000"), Err(BankError::InvalidDateFormat));
        assert_eq!(BirthDate::parse("00/01/2000"), Err(BankError::InvalidDateFormat));
        assert!(BirthDate::parse("29/02/2000").is_ok());
    }
}
