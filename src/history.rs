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

//! Append-only transaction log for a single account.

use crate::transaction::TransactionRecord;
use chrono::NaiveDate;

/// Ordered log of applied transactions.
///
/// Entries are kept in insertion order, which is also chronological because
/// records are appended as transactions are applied. There is no way to
/// remove or edit an entry.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: TransactionRecord) {
        self.entries.push(record);
    }

    /// Counts entries for which `predicate` holds.
    pub fn count_matching<P>(&self, predicate: P) -> usize
    where
        P: Fn(&TransactionRecord) -> bool,
    {
        self.entries.iter().filter(|record| predicate(record)).count()
    }

    /// All transactions recorded on `day`.
    pub fn count_on(&self, day: NaiveDate) -> usize {
        self.count_matching(|record| record.is_on(day))
    }

    /// Withdrawals recorded on `day`.
    pub fn withdrawals_on(&self, day: NaiveDate) -> usize {
        self.count_matching(|record| record.is_withdrawal() && record.is_on(day))
    }

    pub fn withdrawals(&self) -> usize {
        self.count_matching(TransactionRecord::is_withdrawal)
    }

    pub fn entries(&self) -> &[TransactionRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
