// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::auth::{Accounts, SignupOutcome, hash_password, verify_password};
use fintrack::db;
use fintrack::error::ConfigError;

#[test]
fn signup_then_verify() {
    let conn = db::open_in_memory().unwrap();
    let accounts = Accounts::new(&conn);
    assert_eq!(
        accounts.create("alice", "s3cret", "s3cret").unwrap(),
        SignupOutcome::Created
    );
    assert!(accounts.verify("alice", "s3cret").unwrap());
    assert!(!accounts.verify("alice", "wrong").unwrap());
    assert!(!accounts.verify("nobody", "s3cret").unwrap());
}

#[test]
fn duplicate_username_is_rejected() {
    let conn = db::open_in_memory().unwrap();
    let accounts = Accounts::new(&conn);
    accounts.create("alice", "one", "one").unwrap();
    assert_eq!(
        accounts.create("alice", "two", "two").unwrap(),
        SignupOutcome::UsernameTaken
    );
    assert!(accounts.verify("alice", "one").unwrap());
}

#[test]
fn mismatched_confirmation_creates_nothing() {
    let conn = db::open_in_memory().unwrap();
    let accounts = Accounts::new(&conn);
    assert_eq!(
        accounts.create("alice", "one", "two").unwrap(),
        SignupOutcome::Mismatch
    );
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn plaintext_is_never_stored() {
    let conn = db::open_in_memory().unwrap();
    Accounts::new(&conn).create("alice", "hunter2", "hunter2").unwrap();
    let stored: String = conn
        .query_row("SELECT password_hash FROM users WHERE username='alice'", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert!(!stored.contains("hunter2"));
    assert!(stored.starts_with("$argon2"));
}

#[test]
fn hashes_are_salted() {
    let a = hash_password("same").unwrap();
    let b = hash_password("same").unwrap();
    assert_ne!(a, b);
    assert!(verify_password("same", &a).unwrap());
    assert!(verify_password("same", &b).unwrap());
}

#[test]
fn login_builds_owned_session() {
    let conn = db::open_in_memory().unwrap();
    let accounts = Accounts::new(&conn);
    accounts.create("alice", "pw", "pw").unwrap();
    let session = accounts.login("alice", "pw").unwrap();
    assert_eq!(session.owner(), Some("alice"));

    let err = accounts.login("alice", "nope").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidCredentials)
    ));
}
