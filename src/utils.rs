// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{DATE_FORMAT, Transaction, YearMonth};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Largest single amount accepted on input, 10^13.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_316_134_912, 2_328, 0, false, 0);

pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(s.trim().to_string()))
}

pub fn parse_month(s: &str) -> Result<YearMonth, ValidationError> {
    s.parse::<YearMonth>()
}

/// A transaction amount: numeric and strictly positive.
pub fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(s.trim().to_string()))?;
    if d <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    if d > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(MAX_AMOUNT));
    }
    Ok(d)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, d.round_dp(2))
}

pub fn fmt_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn transactions_table(transactions: &[Transaction]) -> Table {
    let rows = transactions
        .iter()
        .map(|t| {
            vec![
                fmt_date(&t.date),
                format!("{:.2}", t.amount),
                t.category.to_string(),
                t.description.clone().unwrap_or_default(),
            ]
        })
        .collect();
    pretty_table(&["Date", "Amount", "Category", "Description"], rows)
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
