// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use super::{NO_MATCHES, NO_TRANSACTIONS, load_view};
use crate::engine::sort_newest_first;
use crate::models::{Category, Transaction};
use crate::session::Session;
use crate::store::TransactionStore;
use crate::utils::{fmt_date, maybe_print_json, parse_amount, parse_date, transactions_table};

pub fn handle(store: &dyn TransactionStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let today = chrono::Local::now().date_naive();
            add(store, session, sub, today)?;
        }
        Some(("list", sub)) => list(store, session, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn add(
    store: &dyn TransactionStore,
    session: &Session,
    sub: &clap::ArgMatches,
    today: NaiveDate,
) -> Result<Transaction> {
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today,
    };
    let amount = parse_amount(sub.get_one::<String>("amount").map_or("", String::as_str))?;
    let category: Category = sub
        .get_one::<String>("category")
        .map_or("", String::as_str)
        .parse()?;
    let description = sub.get_one::<String>("description").cloned();

    let tx = session.stamp(Transaction::new(date, amount, category, description));
    store.append(&tx)?;
    info!(date = %fmt_date(&tx.date), %amount, %category, "transaction recorded");
    println!(
        "Recorded {} {:.2} on {}",
        tx.category,
        tx.amount,
        fmt_date(&tx.date)
    );
    Ok(tx)
}

fn list(store: &dyn TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some(data) = query(store, session, sub)? else {
        println!("{}", NO_TRANSACTIONS);
        return Ok(());
    };
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("{}", NO_MATCHES);
        } else {
            println!("{}", transactions_table(&data));
        }
    }
    Ok(())
}

/// Filtered records, newest first, truncated to `--limit`. `None` if the session has no
/// records at all.
pub fn query(
    store: &dyn TransactionStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<Option<Vec<Transaction>>> {
    let Some((_, filtered)) = load_view(store, session, sub)? else {
        return Ok(None);
    };
    let mut data = filtered.subset;
    sort_newest_first(&mut data);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(Some(data))
}
