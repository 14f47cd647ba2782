// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::chart::daily_chart;
use crate::engine::{self, Window};
use crate::error::PromptError;
use crate::models::Transaction;
use crate::prompt::Prompter;
use crate::session::Session;
use crate::store::TransactionStore;
use crate::utils::{fmt_date, fmt_money, transactions_table};

pub fn handle(store: &dyn TransactionStore, session: &Session) -> Result<()> {
    let stdin = std::io::stdin();
    let today = chrono::Local::now().date_naive();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    run(&mut prompter, store, session, today)
}

/// Runs until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &dyn TransactionStore,
    session: &Session,
    today: NaiveDate,
) -> Result<()> {
    loop {
        p.say("\n1. Add a new transaction")?;
        p.say("2. View transactions and summary within a date range")?;
        p.say("3. Exit")?;
        let Some(choice) = p.line("Enter your choice (1-3): ")? else {
            break;
        };
        let step = match choice.trim() {
            "1" => add(p, store, session, today),
            "2" => view(p, store, session),
            "3" => {
                p.say("Exiting...")?;
                break;
            }
            _ => {
                p.say("Invalid choice. Please enter 1, 2, or 3.")?;
                continue;
            }
        };
        match step {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<PromptError>() {
                Some(PromptError::EndOfInput) => break,
                Some(PromptError::TooManyAttempts(n)) => {
                    p.say(format!("Too many invalid attempts ({n}); nothing was saved."))?;
                }
                _ => return Err(e),
            },
        }
    }
    Ok(())
}

fn add<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &dyn TransactionStore,
    session: &Session,
    today: NaiveDate,
) -> Result<()> {
    let date = p.date(
        "Enter the date of the transaction (dd-mm-yyyy) or press Enter for today: ",
        Some(today),
    )?;
    let amount = p.amount()?;
    let category = p.category()?;
    let description = p.description()?;
    let tx = session.stamp(Transaction::new(date, amount, category, description));
    store.append(&tx)?;
    info!(date = %fmt_date(&date), %amount, %category, "transaction recorded");
    p.say("Entry added successfully")?;
    Ok(())
}

fn view<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &dyn TransactionStore,
    session: &Session,
) -> Result<()> {
    let start = p.date("Enter the start date (dd-mm-yyyy): ", None)?;
    let end = p.date("Enter the end date (dd-mm-yyyy): ", None)?;
    let all = store.list(session.owner())?;
    let window = Window::range(start, end);
    let mut filtered = engine::filter(&all, &window, None);
    if filtered.is_empty() {
        p.say("No transactions found in the given date range.")?;
        return Ok(());
    }
    p.say(format!("Transactions from {}", window))?;
    engine::sort_newest_first(&mut filtered.subset);
    p.say(transactions_table(&filtered.subset))?;
    let s = &filtered.summary;
    p.say("\nSummary:")?;
    p.say(format!("Total income: {}", fmt_money(&s.income)))?;
    p.say(format!("Total expense: {}", fmt_money(&s.expense)))?;
    p.say(format!("Net saving: {}", fmt_money(&s.net)))?;
    if p.confirm("Do you want to see a plot? (y/n): ")? {
        p.say(daily_chart(&engine::daily_series(&filtered.subset)))?;
    }
    Ok(())
}
