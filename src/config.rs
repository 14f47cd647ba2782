// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Startup configuration.
//!
//! Flags and `FINTRACK_*` environment variables take precedence. For the sqlite backend the
//! connection string and database name fall back to `secrets.json` in the platform config
//! directory; if they are still missing the process fails before touching any store.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Fintrack", "fintrack"));

pub const SECRETS_JSON: &str = "secrets.json";
pub const DEFAULT_CSV: &str = "finance_data.csv";
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Sqlite,
    Csv,
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(BackendKind::Sqlite),
            "csv" => Ok(BackendKind::Csv),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Connection string and database name for the account-based store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSecrets {
    pub db_uri: String,
    pub db_name: String,
}

impl DbSecrets {
    /// `None` for an in-memory database.
    pub fn path(&self) -> Option<PathBuf> {
        if self.db_uri == IN_MEMORY {
            return None;
        }
        Some(Path::new(&self.db_uri).join(format!("{}.sqlite", self.db_name)))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SecretsFile {
    pub db_uri: Option<String>,
    pub db_name: Option<String>,
}

impl SecretsFile {
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Read secrets at {}", path.display()))?;
        let parsed = serde_json::from_str(&text)
            .with_context(|| format!("Parse secrets at {}", path.display()))?;
        Ok(Some(parsed))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendKind,
    pub db: Option<DbSecrets>,
    pub csv_path: PathBuf,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Config {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let backend: BackendKind = m
            .get_one::<String>("backend")
            .map(String::as_str)
            .unwrap_or("sqlite")
            .parse()?;
        let db_uri = m.get_one::<String>("db-uri").cloned();
        let db_name = m.get_one::<String>("db-name").cloned();
        let secrets = if backend == BackendKind::Sqlite && (db_uri.is_none() || db_name.is_none())
        {
            SecretsFile::load(&secrets_path()?)?
        } else {
            None
        };
        let csv_path = m
            .get_one::<String>("csv-path")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV));
        let cfg = Config::resolve(
            backend,
            db_uri,
            db_name,
            secrets,
            csv_path,
            m.get_one::<String>("user").cloned(),
            m.get_one::<String>("password").cloned(),
        )?;
        debug!(backend = ?cfg.backend, "configuration loaded");
        Ok(cfg)
    }

    /// Merges explicit values over the secrets file and checks what the backend needs.
    pub fn resolve(
        backend: BackendKind,
        db_uri: Option<String>,
        db_name: Option<String>,
        secrets: Option<SecretsFile>,
        csv_path: PathBuf,
        user: Option<String>,
        password: Option<String>,
    ) -> Result<Self, ConfigError> {
        let secrets = secrets.unwrap_or_default();
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let db = match backend {
            BackendKind::Sqlite => {
                let db_uri = non_empty(db_uri)
                    .or(non_empty(secrets.db_uri))
                    .ok_or(ConfigError::MissingSecret("db_uri"))?;
                let db_name = non_empty(db_name)
                    .or(non_empty(secrets.db_name))
                    .ok_or(ConfigError::MissingSecret("db_name"))?;
                Some(DbSecrets { db_uri, db_name })
            }
            BackendKind::Csv => None,
        };
        Ok(Config {
            backend,
            db,
            csv_path,
            user: non_empty(user),
            password,
        })
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn secrets_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SECRETS_JSON))
}
