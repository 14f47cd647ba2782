// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::commands::reports;
use fintrack::models::{Category, Transaction};
use fintrack::session::Session;
use fintrack::store::{SqliteStore, TransactionStore};
use fintrack::{cli, db};
use rust_decimal::Decimal;

fn setup() -> SqliteStore {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let rows = [
        ("03-08-2025", 1500, Category::Income),
        ("10-08-2025", 700, Category::Expense),
        ("20-08-2025", 500, Category::Expense),
        ("02-07-2025", 9000, Category::Expense),
    ];
    for (date, amount, cat) in rows {
        let tx = Transaction::new(
            NaiveDate::parse_from_str(date, "%d-%m-%Y").unwrap(),
            Decimal::from(amount),
            cat,
            None,
        );
        store.append(&tx).unwrap();
    }
    store
}

fn summary(store: &SqliteStore, args: &[&str]) -> Option<reports::SummaryReport> {
    let mut argv = vec!["fintrack", "report", "summary"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, report_m) = matches.subcommand().unwrap();
    let (_, summary_m) = report_m.subcommand().unwrap();
    reports::build_summary(store, &Session::anonymous(), summary_m).unwrap()
}

#[test]
fn over_budget_reports_overage() {
    let store = setup();
    let r = summary(&store, &["--month", "2025-08", "--budget", "1000"]).unwrap();
    assert_eq!(r.summary.expense, Decimal::from(1200));
    assert_eq!(r.over_budget_by, Some(Decimal::from(200)));
}

#[test]
fn zero_budget_never_signals() {
    let store = setup();
    let r = summary(&store, &["--month", "2025-08", "--budget", "0"]).unwrap();
    assert_eq!(r.over_budget_by, None);
    let r = summary(&store, &["--month", "2025-08"]).unwrap();
    assert_eq!(r.over_budget_by, None);
}

#[test]
fn default_window_is_latest_month() {
    let store = setup();
    let r = summary(&store, &[]).unwrap();
    assert_eq!(r.window, "2025-08");
    assert_eq!(r.count, 3);
    assert_eq!(r.summary.net, Decimal::from(300));
}

#[test]
fn no_data_at_all_is_none() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    assert!(summary(&store, &["--budget", "10"]).is_none());
    assert!(store.list(None).unwrap().is_empty());
}
