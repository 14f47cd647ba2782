// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ValidationError;

/// Text form of every persisted and exported date.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Income, Category::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "INCOME",
            Category::Expense => "EXPENSE",
        }
    }

    /// Single-letter form used by the interactive prompt: `I` or `E`.
    pub fn from_letter(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_uppercase().as_str() {
            "I" => Ok(Category::Income),
            "E" => Ok(Category::Expense),
            _ => Err(ValidationError::InvalidCategory(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INCOME" | "I" => Ok(Category::Income),
            "EXPENSE" | "E" => Ok(Category::Expense),
            _ => Err(ValidationError::InvalidCategory(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(with = "dmy")]
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: Category,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub owner: Option<String>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: Option<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.filter(|d| !d.trim().is_empty()),
            owner: None,
        }
    }

    pub fn owned_by(mut self, owner: Option<&str>) -> Self {
        self.owner = owner.map(str::to_string);
        self
    }

    pub fn to_raw(&self) -> RawTransaction {
        RawTransaction {
            date: self.date.format(DATE_FORMAT).to_string(),
            amount: self.amount.to_string(),
            category: self.category.to_string(),
            description: self.description.clone().unwrap_or_default(),
            owner: self.owner.clone(),
        }
    }
}

/// A record exactly as a backend persisted it. Nothing here has been validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTransaction {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub owner: Option<String>,
}

/// Why a raw record could not be used as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawIssue {
    /// The record is dropped.
    BadDate,
    /// The record is dropped.
    BadCategory,
    /// The amount is read as zero.
    BadAmount,
    /// The amount is read as zero.
    NegativeAmount,
}

impl RawIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawIssue::BadDate => "unparseable_date",
            RawIssue::BadCategory => "unknown_category",
            RawIssue::BadAmount => "non_numeric_amount",
            RawIssue::NegativeAmount => "negative_amount",
        }
    }
}

impl RawTransaction {
    pub fn issues(&self) -> Vec<RawIssue> {
        let mut out = Vec::new();
        if parse_stored_date(&self.date).is_none() {
            out.push(RawIssue::BadDate);
        }
        if self.category.parse::<Category>().is_err() {
            out.push(RawIssue::BadCategory);
        }
        match self.amount.trim().parse::<Decimal>() {
            Err(_) => out.push(RawIssue::BadAmount),
            Ok(a) if a.is_sign_negative() && !a.is_zero() => {
                out.push(RawIssue::NegativeAmount)
            }
            Ok(_) => {}
        }
        out
    }

    /// Normalizes the record. Unreadable dates and categories drop it; an unreadable or
    /// negative amount becomes zero.
    pub fn normalize(&self) -> Option<Transaction> {
        let Some(date) = parse_stored_date(&self.date) else {
            warn!(date = %self.date, "dropping record with unparseable date");
            return None;
        };
        let category = match self.category.parse::<Category>() {
            Ok(c) => c,
            Err(_) => {
                warn!(category = %self.category, "dropping record with unknown category");
                return None;
            }
        };
        let amount = match self.amount.trim().parse::<Decimal>() {
            Ok(a) if a.is_sign_negative() && !a.is_zero() => {
                warn!(amount = %self.amount, %date, "negative amount read as zero");
                Decimal::ZERO
            }
            Ok(a) => a,
            Err(_) => {
                warn!(amount = %self.amount, %date, "non-numeric amount read as zero");
                Decimal::ZERO
            }
        };
        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());
        Some(Transaction {
            date,
            amount,
            category,
            description,
            owner: self.owner.clone(),
        })
    }
}

/// Accepts `dd-mm-yyyy`, falling back to ISO `yyyy-mm-dd`.
pub fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ValidationError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let (y, m) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(y, m, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ValidationError::InvalidMonth(s.to_string());
        let (y, m) = s.trim().split_once('-').ok_or_else(bad)?;
        let year: i32 = y.parse().map_err(|_| bad())?;
        let month: u32 = m.parse().map_err(|_| bad())?;
        YearMonth::new(year, month).map_err(|_| bad())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

pub(crate) mod dmy {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&d.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(d)?;
        super::parse_stored_date(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{s}'")))
    }
}
