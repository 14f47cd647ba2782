// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::commands::exporter;
use fintrack::models::{Category, Transaction};
use fintrack::session::Session;
use fintrack::store::{SqliteStore, TransactionStore};
use fintrack::{cli, db};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn seeded() -> SqliteStore {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let rows = [
        ("02-01-2025", 1234, Category::Expense, Some("Corner Shop, weekly run")),
        ("15-01-2025", 500000, Category::Income, Some("Salary")),
        ("03-02-2025", 999, Category::Expense, None),
    ];
    for (date, cents, cat, desc) in rows {
        let tx = Transaction::new(
            NaiveDate::parse_from_str(date, "%d-%m-%Y").unwrap(),
            Decimal::new(cents, 2),
            cat,
            desc.map(str::to_string),
        );
        store.append(&tx.owned_by(Some("alice"))).unwrap();
    }
    store
}

fn run_export(store: &dyn TransactionStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fintrack", "export", "transactions"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, &Session::for_user("alice"), export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_csv_for_month() {
    let store = seeded();
    let dir = tempdir().unwrap();
    let out = dir.path().join("jan.csv");
    let out_str = out.to_string_lossy().to_string();
    run_export(&store, &["--month", "2025-01", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        contents,
        "date,amount,category,description\n\
         02-01-2025,12.34,EXPENSE,\"Corner Shop, weekly run\"\n\
         15-01-2025,5000.00,INCOME,Salary\n"
    );
}

#[test]
fn export_of_empty_subset_is_header_only() {
    let store = seeded();
    let dir = tempdir().unwrap();
    let out = dir.path().join("none.csv");
    let out_str = out.to_string_lossy().to_string();
    run_export(
        &store,
        &["--from", "01-01-2030", "--to", "31-01-2030", "--out", &out_str],
    )
    .unwrap();
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "date,amount,category,description\n"
    );
}

#[test]
fn export_with_no_data_at_all_is_header_only() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let dir = tempdir().unwrap();
    let out = dir.path().join("empty.csv");
    let out_str = out.to_string_lossy().to_string();
    run_export(&store, &["--out", &out_str]).unwrap();
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "date,amount,category,description\n"
    );
}

#[test]
fn export_json_with_keyword() {
    let store = seeded();
    let dir = tempdir().unwrap();
    let out = dir.path().join("shop.json");
    let out_str = out.to_string_lossy().to_string();
    run_export(
        &store,
        &[
            "--month", "2025-01", "--keyword", "corner", "--format", "json", "--out", &out_str,
        ],
    )
    .unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "02-01-2025",
                "amount": "12.34",
                "category": "EXPENSE",
                "description": "Corner Shop, weekly run",
                "owner": "alice"
            }
        ])
    );
}

#[test]
fn export_rejects_unknown_format() {
    let store = seeded();
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.unknown");
    let out_str = out.to_string_lossy().to_string();
    assert!(run_export(&store, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out.exists());
}

#[test]
fn write_csv_to_buffer() {
    let mut buf = Vec::new();
    exporter::write_csv(&[], &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "date,amount,category,description\n"
    );
}
