// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::config::{BackendKind, Config, SecretsFile};
use fintrack::error::ConfigError;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn sqlite_without_secrets_fails_fast() {
    let err = Config::resolve(
        BackendKind::Sqlite,
        None,
        Some("finance".into()),
        None,
        PathBuf::from("x.csv"),
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingSecret("db_uri")));

    let err = Config::resolve(
        BackendKind::Sqlite,
        Some("/tmp/data".into()),
        Some("  ".into()),
        None,
        PathBuf::from("x.csv"),
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingSecret("db_name")));
}

#[test]
fn flags_override_secrets_file() {
    let secrets = SecretsFile {
        db_uri: Some("/from/file".into()),
        db_name: Some("filedb".into()),
    };
    let cfg = Config::resolve(
        BackendKind::Sqlite,
        Some("/from/flag".into()),
        None,
        Some(secrets),
        PathBuf::from("x.csv"),
        Some("alice".into()),
        Some("pw".into()),
    )
    .unwrap();
    let db = cfg.db.unwrap();
    assert_eq!(db.db_uri, "/from/flag");
    assert_eq!(db.db_name, "filedb");
    assert_eq!(db.path(), Some(PathBuf::from("/from/flag/filedb.sqlite")));
    assert_eq!(cfg.user.as_deref(), Some("alice"));
}

#[test]
fn csv_backend_needs_no_secrets() {
    let cfg = Config::resolve(
        BackendKind::Csv,
        None,
        None,
        None,
        PathBuf::from("finance_data.csv"),
        None,
        None,
    )
    .unwrap();
    assert!(cfg.db.is_none());
    assert_eq!(cfg.csv_path, PathBuf::from("finance_data.csv"));
}

#[test]
fn in_memory_uri_has_no_path() {
    let cfg = Config::resolve(
        BackendKind::Sqlite,
        Some(":memory:".into()),
        Some("x".into()),
        None,
        PathBuf::new(),
        None,
        None,
    )
    .unwrap();
    assert_eq!(cfg.db.unwrap().path(), None);
}

#[test]
fn unknown_backend_is_rejected() {
    assert!(matches!(
        "mongo".parse::<BackendKind>(),
        Err(ConfigError::UnknownBackend(_))
    ));
    assert_eq!("CSV".parse::<BackendKind>().unwrap(), BackendKind::Csv);
}

#[test]
fn secrets_file_loads_when_present() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("secrets.json");
    assert!(SecretsFile::load(&path).unwrap().is_none());
    std::fs::write(&path, r#"{"db_uri": "/data", "db_name": "finance"}"#).unwrap();
    let s = SecretsFile::load(&path).unwrap().unwrap();
    assert_eq!(s.db_uri.as_deref(), Some("/data"));
    assert_eq!(s.db_name.as_deref(), Some("finance"));
}
