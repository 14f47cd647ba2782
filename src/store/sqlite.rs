// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{Connection, params};

use super::TransactionStore;
use crate::models::{RawTransaction, Transaction};

/// Owner-partitioned store. A listing only ever sees one owner's rows; ownerless rows
/// form their own partition.
pub struct SqliteStore {
    conn: Connection,
    label: String,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self::with_label(conn, "in-memory database")
    }

    pub fn with_label(conn: Connection, label: impl Into<String>) -> Self {
        Self {
            conn,
            label: label.into(),
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl TransactionStore for SqliteStore {
    fn append(&self, transaction: &Transaction) -> Result<()> {
        let raw = transaction.to_raw();
        self.conn.execute(
            "INSERT INTO transactions(owner, date, amount, category, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![raw.owner, raw.date, raw.amount, raw.category, raw.description],
        )?;
        Ok(())
    }

    fn list_raw(&self, owner: Option<&str>) -> Result<Vec<RawTransaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, amount, category, description, owner FROM transactions
             WHERE owner IS ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![owner], |r| {
            Ok(RawTransaction {
                date: r.get(0)?,
                amount: r.get(1)?,
                category: r.get(2)?,
                description: r.get::<_, Option<String>>(3)?.unwrap_or_default(),
                owner: r.get(4)?,
            })
        })?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
