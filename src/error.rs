// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// User-correctable input problems. Never fatal: callers re-prompt or print the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date '{0}'. Please enter the date in dd-mm-yyyy format.")]
    InvalidDate(String),
    #[error("Invalid amount '{0}'. Please enter a number.")]
    InvalidAmount(String),
    #[error("Amount must be a non-negative and non-zero value.")]
    NonPositiveAmount,
    #[error("Amount must not exceed {0}.")]
    AmountTooLarge(rust_decimal::Decimal),
    #[error("Invalid category '{0}'. Please enter 'I' or 'E'.")]
    InvalidCategory(String),
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input ended before a valid value was entered")]
    EndOfInput,
    #[error("no valid value after {0} attempts")]
    TooManyAttempts(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Startup failures. These terminate the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required secret '{0}' (set it via flag, environment, or secrets.json)")]
    MissingSecret(&'static str),
    #[error("unknown backend '{0}' (use sqlite|csv)")]
    UnknownBackend(String),
    #[error("accounts are only available with the sqlite backend")]
    AccountsUnavailable,
    #[error("invalid username or password")]
    InvalidCredentials,
}
