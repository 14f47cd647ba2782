// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence for transactions. Records are append-only.

pub mod csv_file;
pub mod sqlite;

use anyhow::Result;
use tracing::debug;

use crate::auth::Accounts;
use crate::config::{BackendKind, Config};
use crate::db;
use crate::error::ConfigError;
use crate::models::{RawTransaction, Transaction};

pub use csv_file::CsvStore;
pub use sqlite::SqliteStore;

pub trait TransactionStore {
    fn append(&self, transaction: &Transaction) -> Result<()>;

    /// Every record visible to `owner`, exactly as persisted.
    fn list_raw(&self, owner: Option<&str>) -> Result<Vec<RawTransaction>>;

    /// Human-readable location, for messages.
    fn describe(&self) -> String;

    /// Every usable record visible to `owner`. Malformed records are dropped.
    fn list(&self, owner: Option<&str>) -> Result<Vec<Transaction>> {
        let raw = self.list_raw(owner)?;
        let total = raw.len();
        let out: Vec<Transaction> = raw.iter().filter_map(RawTransaction::normalize).collect();
        if out.len() < total {
            debug!(dropped = total - out.len(), "skipped malformed records");
        }
        Ok(out)
    }
}

/// The store chosen at startup.
pub enum Backend {
    Sqlite(SqliteStore),
    Csv(CsvStore),
}

impl Backend {
    pub fn open(config: &Config) -> Result<Self> {
        match (config.backend, &config.db) {
            (BackendKind::Sqlite, Some(secrets)) => {
                let conn = db::open_or_init(secrets)?;
                let store = match secrets.path() {
                    Some(path) => SqliteStore::with_label(conn, path.display().to_string()),
                    None => SqliteStore::new(conn),
                };
                Ok(Backend::Sqlite(store))
            }
            (BackendKind::Sqlite, None) => Err(ConfigError::MissingSecret("db_uri").into()),
            (BackendKind::Csv, _) => Ok(Backend::Csv(CsvStore::new(&config.csv_path))),
        }
    }

    pub fn store(&self) -> &dyn TransactionStore {
        match self {
            Backend::Sqlite(s) => s,
            Backend::Csv(s) => s,
        }
    }

    pub fn accounts(&self) -> Result<Accounts<'_>, ConfigError> {
        match self {
            Backend::Sqlite(s) => Ok(Accounts::new(s.connection())),
            Backend::Csv(_) => Err(ConfigError::AccountsUnavailable),
        }
    }

    /// Makes sure the backing file or tables exist.
    pub fn initialize(&self) -> Result<()> {
        match self {
            Backend::Sqlite(_) => Ok(()),
            Backend::Csv(s) => s.initialize(),
        }
    }
}
