// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use tracing::debug;

use crate::config::DbSecrets;

pub fn open_or_init(secrets: &DbSecrets) -> Result<Connection> {
    let conn = match secrets.path() {
        Some(path) => {
            fs::create_dir_all(&secrets.db_uri)
                .with_context(|| format!("Failed to create data dir {}", secrets.db_uri))?;
            debug!(path = %path.display(), "opening database");
            Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?
        }
        None => open_in_memory_conn()?,
    };
    init_schema(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = open_in_memory_conn()?;
    init_schema(&conn)?;
    Ok(conn)
}

fn open_in_memory_conn() -> Result<Connection> {
    Connection::open_in_memory().context("Open in-memory DB")
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS users(
        username TEXT PRIMARY KEY,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    -- date is dd-mm-yyyy text; owner is NULL for records without an account
    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner TEXT,
        date TEXT NOT NULL,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_owner ON transactions(owner);
    "#,
    )
    .context("Initialize schema")?;
    Ok(())
}
