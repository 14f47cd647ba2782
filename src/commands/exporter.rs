// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::{Result, bail};
use tracing::info;

use super::load_view;
use crate::models::Transaction;
use crate::session::Session;
use crate::store::TransactionStore;
use crate::store::csv_file::COLUMNS;
use crate::utils::fmt_date;

pub fn handle(store: &dyn TransactionStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, session, sub),
        _ => Ok(()),
    }
}

fn export_transactions(
    store: &dyn TransactionStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map_or("csv", String::as_str)
        .to_lowercase();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    let out = sub.get_one::<String>("out").map_or("", String::as_str).trim();
    if out.is_empty() {
        bail!("--out is required");
    }

    let subset = match load_view(store, session, sub)? {
        Some((_, filtered)) => filtered.subset,
        None => Vec::new(),
    };

    match fmt.as_str() {
        "csv" => {
            let file = std::fs::File::create(out)?;
            write_csv(&subset, file)?;
        }
        _ => std::fs::write(out, serde_json::to_string_pretty(&subset)?)?,
    }
    info!(rows = subset.len(), %out, "export written");
    println!("Exported {} transactions to {}", subset.len(), out);
    Ok(())
}

/// Header row always, then one row per transaction. Dates are dd-mm-yyyy.
pub fn write_csv<W: Write>(transactions: &[Transaction], w: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(COLUMNS)?;
    for t in transactions {
        wtr.write_record([
            fmt_date(&t.date),
            format!("{:.2}", t.amount),
            t.category.to_string(),
            t.description.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
