// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Terminal renderings of the engine's chart data.

use comfy_table::Table;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::engine::{CategoryShare, DailyPoint};
use crate::utils::{fmt_date, pretty_table};

pub const BAR_WIDTH: usize = 30;

fn bar(value: Decimal, max: Decimal, glyph: char) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let cells = value
        .checked_div(max)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(BAR_WIDTH)))
        .and_then(|c| c.round().to_usize())
        .unwrap_or(0)
        .clamp(1, BAR_WIDTH);
    std::iter::repeat_n(glyph, cells).collect()
}

/// Income and expense per day, one row per day, bars scaled to the largest value.
pub fn daily_chart(points: &[DailyPoint]) -> Table {
    let max = points
        .iter()
        .flat_map(|p| [p.income, p.expense])
        .max()
        .unwrap_or(Decimal::ZERO);
    let rows = points
        .iter()
        .map(|p| {
            vec![
                fmt_date(&p.date),
                format!("{:.2}", p.income),
                bar(p.income, max, '+'),
                format!("{:.2}", p.expense),
                bar(p.expense, max, '-'),
            ]
        })
        .collect();
    pretty_table(&["Date", "Income", "", "Expense", ""], rows)
}

pub fn distribution_chart(shares: &[CategoryShare]) -> Table {
    let rows = shares
        .iter()
        .map(|s| {
            vec![
                s.category.to_string(),
                format!("{:.2}", s.total),
                format!("{:.1}%", s.percent),
                bar(s.percent, Decimal::ONE_HUNDRED, '#'),
            ]
        })
        .collect();
    pretty_table(&["Category", "Total", "Share", ""], rows)
}
