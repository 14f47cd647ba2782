// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{NO_MATCHES, NO_TRANSACTIONS, load_view};
use crate::chart::{daily_chart, distribution_chart};
use crate::engine::{self, Summary};
use crate::session::Session;
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &dyn TransactionStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, session, sub)?,
        Some(("daily", sub)) => daily(store, session, sub)?,
        Some(("categories", sub)) => categories(store, session, sub)?,
        Some(("months", sub)) => months(store, session, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub window: String,
    pub count: usize,
    #[serde(flatten)]
    pub summary: Summary,
    pub budget: Decimal,
    pub over_budget_by: Option<Decimal>,
}

/// `None` when the session has no records at all.
pub fn build_summary(
    store: &dyn TransactionStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<Option<SummaryReport>> {
    // Budget is per-view input and never stored.
    let budget = match sub.get_one::<String>("budget") {
        Some(b) => parse_decimal(b)?,
        None => Decimal::ZERO,
    };
    let Some((window, filtered)) = load_view(store, session, sub)? else {
        return Ok(None);
    };
    Ok(Some(SummaryReport {
        window: window.to_string(),
        count: filtered.subset.len(),
        summary: filtered.summary,
        budget,
        over_budget_by: filtered.summary.overage(budget),
    }))
}

fn summary(store: &dyn TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some(report) = build_summary(store, session, sub)? else {
        println!("{}", NO_TRANSACTIONS);
        return Ok(());
    };
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }
    if report.count == 0 {
        println!("{}", NO_MATCHES);
        return Ok(());
    }
    let s = &report.summary;
    println!("Summary for {} ({} transactions)", report.window, report.count);
    println!(
        "{}",
        pretty_table(
            &["Metric", "Value"],
            vec![
                vec!["Total Income".into(), fmt_money(&s.income)],
                vec!["Total Expense".into(), fmt_money(&s.expense)],
                vec!["Net Saving".into(), fmt_money(&s.net)],
            ],
        )
    );
    if let Some(over) = report.over_budget_by {
        println!("Budget exceeded by {}!", fmt_money(&over));
    }
    Ok(())
}

fn daily(store: &dyn TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some((_, filtered)) = load_view(store, session, sub)? else {
        println!("{}", NO_TRANSACTIONS);
        return Ok(());
    };
    let series = engine::daily_series(&filtered.subset);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        if series.is_empty() {
            println!("{}", NO_MATCHES);
        } else {
            println!("{}", daily_chart(&series));
        }
    }
    Ok(())
}

fn categories(
    store: &dyn TransactionStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some((_, filtered)) = load_view(store, session, sub)? else {
        println!("{}", NO_TRANSACTIONS);
        return Ok(());
    };
    let shares = engine::category_breakdown(&filtered.subset);
    if !maybe_print_json(json_flag, jsonl_flag, &shares)? {
        if shares.is_empty() {
            println!("{}", NO_MATCHES);
        } else {
            println!("{}", distribution_chart(&shares));
        }
    }
    Ok(())
}

fn months(store: &dyn TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let all = store.list(session.owner())?;
    let months: Vec<String> = engine::months_present(&all)
        .iter()
        .map(ToString::to_string)
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &months)? {
        if months.is_empty() {
            println!("{}", NO_TRANSACTIONS);
        } else {
            let rows = months.into_iter().map(|m| vec![m]).collect();
            println!("{}", pretty_table(&["Month"], rows));
        }
    }
    Ok(())
}
