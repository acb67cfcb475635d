// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent or blank.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// A date field was not a valid `YYYY-MM-DD` calendar date.
    InvalidDate {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Field '{field}' is required"),
            Self::InvalidDate { field, value } => {
                write!(
                    f,
                    "Field '{field}' must be a date in YYYY-MM-DD format, got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
