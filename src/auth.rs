// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand_core::OsRng;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::models::User;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    UsernameTaken,
    Mismatch,
}

impl SignupOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SignupOutcome::Created => "Account created! Please login.",
            SignupOutcome::UsernameTaken => "Username already exists.",
            SignupOutcome::Mismatch => "Passwords do not match!",
        }
    }
}

/// Username/password accounts stored next to the transactions.
pub struct Accounts<'a> {
    conn: &'a Connection,
}

impl<'a> Accounts<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, username: &str, password: &str, confirm: &str) -> Result<SignupOutcome> {
        if password != confirm {
            return Ok(SignupOutcome::Mismatch);
        }
        if self.find(username)?.is_some() {
            return Ok(SignupOutcome::UsernameTaken);
        }
        let hash = hash_password(password)?;
        let res = self.conn.execute(
            "INSERT INTO users(username, password_hash) VALUES (?1, ?2)",
            params![username, hash],
        );
        match res {
            Ok(_) => {
                info!(%username, "account created");
                Ok(SignupOutcome::Created)
            }
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Ok(SignupOutcome::UsernameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Unknown users and wrong passwords both yield `false`.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let Some(user) = self.find(username)? else {
            debug!(%username, "no such user");
            return Ok(false);
        };
        verify_password(password, &user.password_hash)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        if self.verify(username, password)? {
            Ok(Session::for_user(username))
        } else {
            Err(ConfigError::InvalidCredentials.into())
        }
    }

    pub fn find(&self, username: &str) -> Result<Option<User>> {
        let v = self
            .conn
            .query_row(
                "SELECT username, password_hash FROM users WHERE username=?1",
                params![username],
                |r| {
                    Ok(User {
                        username: r.get(0)?,
                        password_hash: r.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(v)
    }
}

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash error: {e}"))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| anyhow!("stored hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
