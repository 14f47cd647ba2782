// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;

/// Who the current invocation acts for. Passed explicitly to every store call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    owner: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { owner: None }
    }

    /// Only build this after the password has been verified.
    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            owner: Some(username.into()),
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn stamp(&self, transaction: Transaction) -> Transaction {
        transaction.owned_by(self.owner())
    }
}
