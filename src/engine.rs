// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtering and aggregation over a list of transactions.
//!
//! Everything here is a pure function of its inputs. Records reach the engine already
//! normalized by a store, so unparseable dates are gone and bad amounts are zero.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, DATE_FORMAT, Transaction, YearMonth};

/// The slice of time a view covers. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Range { start: NaiveDate, end: NaiveDate },
    Month(YearMonth),
}

impl Window {
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Window::Range { start, end }
    }

    pub fn month(month: YearMonth) -> Self {
        Window::Month(month)
    }

    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        match self {
            Window::Range { start, end } => (*start, *end),
            Window::Month(m) => (m.first_day(), m.last_day()),
        }
    }

    /// A range whose start is after its end contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let (start, end) = self.bounds();
        start <= date && date <= end
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Range { start, end } => write!(
                f,
                "{} to {}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            ),
            Window::Month(m) => write!(f, "{}", m),
        }
    }
}

/// Case-insensitive substring matcher over descriptions.
#[derive(Debug, Clone)]
pub struct Keyword(String);

impl Keyword {
    /// Returns `None` for a blank keyword, which means "don't filter".
    pub fn new(keyword: &str) -> Option<Self> {
        if keyword.trim().is_empty() {
            return None;
        }
        Some(Keyword(keyword.to_lowercase()))
    }

    /// A missing description never matches.
    pub fn matches(&self, description: Option<&str>) -> bool {
        description.is_some_and(|d| d.to_lowercase().contains(&self.0))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl Summary {
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for t in transactions {
            match t.category {
                Category::Income => income = income.saturating_add(t.amount),
                Category::Expense => expense = expense.saturating_add(t.amount),
            }
        }
        Summary {
            income,
            expense,
            net: income.saturating_sub(expense),
        }
    }

    /// How far expense runs over `budget`. A zero or negative budget means no budget.
    pub fn overage(&self, budget: Decimal) -> Option<Decimal> {
        if budget > Decimal::ZERO && self.expense > budget {
            Some(self.expense - budget)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Filtered {
    pub subset: Vec<Transaction>,
    pub summary: Summary,
}

impl Filtered {
    pub fn is_empty(&self) -> bool {
        self.subset.is_empty()
    }
}

/// Keeps the records inside `window` whose description matches `keyword`, preserving
/// input order, and summarizes them.
pub fn filter(transactions: &[Transaction], window: &Window, keyword: Option<&str>) -> Filtered {
    let matcher = keyword.and_then(Keyword::new);
    let subset: Vec<Transaction> = transactions
        .iter()
        .filter(|t| window.contains(t.date))
        .filter(|t| {
            matcher
                .as_ref()
                .is_none_or(|m| m.matches(t.description.as_deref()))
        })
        .cloned()
        .collect();
    let summary = Summary::of(&subset);
    Filtered { subset, summary }
}

/// Stable sort, latest date first.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    #[serde(with = "crate::models::dmy")]
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// One point per calendar day from the earliest to the latest record, both categories
/// always present. Days and categories without activity are zero.
pub fn daily_series(transactions: &[Transaction]) -> Vec<DailyPoint> {
    let mut by_day: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions {
        let entry = by_day.entry(t.date).or_default();
        match t.category {
            Category::Income => entry.0 = entry.0.saturating_add(t.amount),
            Category::Expense => entry.1 = entry.1.saturating_add(t.amount),
        }
    }
    let (Some(first), Some(last)) = (
        by_day.keys().next().copied(),
        by_day.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| {
            let (income, expense) = by_day.get(&date).copied().unwrap_or_default();
            DailyPoint {
                date,
                income,
                expense,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Decimal,
    /// Share of the grand total, 0-100, one decimal place.
    pub percent: Decimal,
}

/// Per-category totals for a distribution (pie) view.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let summary = Summary::of(transactions);
    let grand = summary.income.saturating_add(summary.expense);
    if grand.is_zero() {
        return Vec::new();
    }
    Category::ALL
        .iter()
        .map(|c| {
            let total = match c {
                Category::Income => summary.income,
                Category::Expense => summary.expense,
            };
            (c, total)
        })
        .filter(|(_, total)| !total.is_zero())
        .map(|(c, total)| CategoryShare {
            category: *c,
            total,
            percent: share_percent(total, grand),
        })
        .collect()
}

/// `part` as a percentage of `whole`, one decimal place. Divides first so large totals
/// cannot overflow.
pub fn share_percent(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map_or(Decimal::ZERO, |p| p.round_dp(1))
}

/// Months that have at least one record, latest first.
pub fn months_present(transactions: &[Transaction]) -> Vec<YearMonth> {
    let months: BTreeSet<YearMonth> = transactions.iter().map(|t| YearMonth::of(t.date)).collect();
    months.into_iter().rev().collect()
}
