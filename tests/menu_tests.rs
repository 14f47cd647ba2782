// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::commands::menu;
use fintrack::db;
use fintrack::error::PromptError;
use fintrack::models::Category;
use fintrack::prompt::{MAX_ATTEMPTS, Prompter};
use fintrack::session::Session;
use fintrack::store::{SqliteStore, TransactionStore};
use rust_decimal::Decimal;
use std::io::Cursor;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn run_menu(store: &dyn TransactionStore, session: &Session, input: &str) -> String {
    let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    menu::run(&mut p, store, session, today()).unwrap();
    String::from_utf8(p.into_output()).unwrap()
}

#[test]
fn invalid_category_reprompts_before_saving() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let session = Session::for_user("alice");
    let out = run_menu(&store, &session, "1\n05-03-2024\n150\nX\nE\nRent\n3\n");
    assert!(out.contains("Invalid category 'X'"));
    assert!(out.contains("Entry added successfully"));
    let all = store.list(Some("alice")).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category, Category::Expense);
    assert_eq!(all[0].description.as_deref(), Some("Rent"));
}

#[test]
fn abandoned_entry_persists_nothing() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let session = Session::anonymous();
    let mut input = String::from("1\n05-03-2024\n10\n");
    for _ in 0..MAX_ATTEMPTS {
        input.push_str("X\n");
    }
    input.push_str("3\n");
    let out = run_menu(&store, &session, &input);
    assert!(out.contains("nothing was saved"));
    assert!(out.contains("Exiting..."));
    assert!(store.list(None).unwrap().is_empty());
}

#[test]
fn input_ending_mid_entry_persists_nothing() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let session = Session::anonymous();
    run_menu(&store, &session, "1\n05-03-2024\n10\nX\n");
    assert!(store.list(None).unwrap().is_empty());
}

#[test]
fn blank_date_defaults_to_today_and_bad_values_reprompt() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let session = Session::anonymous();
    let out = run_menu(&store, &session, "1\n2024/03/01\n\n-5\nabc\n0\n12.50\ni\n\n3\n");
    assert!(out.contains("dd-mm-yyyy format"));
    assert!(out.contains("non-negative and non-zero"));
    assert!(out.contains("Invalid amount 'abc'"));
    let all = store.list(None).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].date, today());
    assert_eq!(all[0].amount, Decimal::new(1250, 2));
    assert_eq!(all[0].category, Category::Income);
    assert_eq!(all[0].description, None);
}

#[test]
fn invalid_menu_choice_reprompts() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let out = run_menu(&store, &Session::anonymous(), "9\nabc\n3\n");
    assert_eq!(out.matches("Invalid choice. Please enter 1, 2, or 3.").count(), 2);
    assert!(out.contains("Exiting..."));
}

#[test]
fn view_prints_summary_and_plot() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let session = Session::anonymous();
    run_menu(&store, &session, "1\n01-03-2024\n1000\nI\nSalary\n3\n");
    run_menu(&store, &session, "1\n03-03-2024\n250\nE\nGroceries\n3\n");
    let out = run_menu(&store, &session, "2\n01-03-2024\n31-03-2024\ny\n3\n");
    assert!(out.contains("Transactions from 01-03-2024 to 31-03-2024"));
    assert!(out.contains("Total income: ₹1000.00"));
    assert!(out.contains("Total expense: ₹250.00"));
    assert!(out.contains("Net saving: ₹750.00"));
    assert!(out.contains("02-03-2024"));
}

#[test]
fn view_of_empty_range_is_informational() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let out = run_menu(&store, &Session::anonymous(), "2\n01-01-2020\n31-01-2020\n3\n");
    assert!(out.contains("No transactions found in the given date range."));
}

#[test]
fn retry_gives_up_after_max_attempts() {
    let input = "x\n".repeat(MAX_ATTEMPTS + 1);
    let mut p = Prompter::new(Cursor::new(input.into_bytes()), Vec::new());
    let err = p.category().unwrap_err();
    assert!(matches!(err, PromptError::TooManyAttempts(n) if n == MAX_ATTEMPTS));
}

#[test]
fn oversized_amount_reprompts() {
    let store = SqliteStore::new(db::open_in_memory().unwrap());
    let session = Session::anonymous();
    let out = run_menu(
        &store,
        &session,
        "1\n05-03-2024\n79228162514264337593543950335\n99\nE\n\n3\n",
    );
    assert!(out.contains("Amount must not exceed"));
    let all = store.list(None).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].amount, Decimal::from(99));
}
