// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod transactions;
pub mod reports;
pub mod exporter;
pub mod doctor;
pub mod menu;

use anyhow::Result;

use crate::engine::{self, Filtered, Window};
use crate::session::Session;
use crate::store::TransactionStore;
use crate::utils::{parse_date, parse_month};

pub const NO_TRANSACTIONS: &str = "No transactions found.";
pub const NO_MATCHES: &str = "No data in selected range or matching search.";

/// The window named by `--from/--to` or `--month`, if any.
pub fn explicit_window(sub: &clap::ArgMatches) -> Result<Option<Window>> {
    if let (Some(from), Some(to)) = (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        return Ok(Some(Window::range(parse_date(from)?, parse_date(to)?)));
    }
    if let Some(month) = sub.get_one::<String>("month") {
        return Ok(Some(Window::month(parse_month(month)?)));
    }
    Ok(None)
}

pub fn keyword(sub: &clap::ArgMatches) -> Option<&str> {
    sub.get_one::<String>("keyword").map(String::as_str)
}

/// Loads the session's records and applies the window and keyword from `sub`. Without an
/// explicit window the latest month with data is used. `None` when there is no data at
/// all to choose a month from.
pub fn load_view(
    store: &dyn TransactionStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<Option<(Window, Filtered)>> {
    let explicit = explicit_window(sub)?;
    let all = store.list(session.owner())?;
    let window = match explicit {
        Some(w) => w,
        None => match engine::months_present(&all).first() {
            Some(m) => Window::month(*m),
            None => return Ok(None),
        },
    };
    let filtered = engine::filter(&all, &window, keyword(sub));
    Ok(Some((window, filtered)))
}
