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

//! Append-only audit log of menu operations.
//!
//! One line per invoked operation:
//!
//! ```text
//! [18-10-2026 09:00:00] Function: 'deposit' executed with args {"cpf":"12345678901","amount":"100"}
//! ```
//!
//! The log records invocations, not outcomes: a rejected deposit is logged
//! exactly like an accepted one. The file is opened in append mode for each
//! line and closed again before [`AuditLog::record`] returns.

use crate::statement::TIMESTAMP_FORMAT;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Raw operator inputs collected by one menu operation.
///
/// Fields stay `None` until the operation prompts for them, so an operation
/// aborted early logs only what was actually entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a line for `operation` stamped with the local clock.
    pub fn record<A: Serialize>(&self, operation: &str, args: &A) -> io::Result<()> {
        self.record_at(operation, args, Local::now().naive_local())
    }

    /// Appends a line for `operation` stamped with `at`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or written, or if `args` cannot be
    /// rendered as JSON.
    pub fn record_at<A: Serialize>(
        &self,
        operation: &str,
        args: &A,
        at: NaiveDateTime,
    ) -> io::Result<()> {
        let line = format_line(operation, &serde_json::to_string(args)?, at);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()
    }
}

fn format_line(operation: &str, args: &str, at: NaiveDateTime) -> String {
    format!(
        "[{}] Function: '{}' executed with args {}\n",
        at.format(TIMESTAMP_FORMAT),
        operation,
        args
    )
}
