// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::RawIssue;
use crate::session::Session;
use crate::store::TransactionStore;
use crate::utils::pretty_table;
use anyhow::Result;

/// One row per problem found in stored records: (issue, record position, offending value).
pub fn findings(store: &dyn TransactionStore, session: &Session) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for (i, raw) in store.list_raw(session.owner())?.iter().enumerate() {
        for issue in raw.issues() {
            let value = match issue {
                RawIssue::BadDate => &raw.date,
                RawIssue::BadCategory => &raw.category,
                RawIssue::BadAmount | RawIssue::NegativeAmount => &raw.amount,
            };
            rows.push(vec![
                issue.as_str().to_string(),
                (i + 1).to_string(),
                value.clone(),
            ]);
        }
    }
    Ok(rows)
}

pub fn handle(store: &dyn TransactionStore, session: &Session) -> Result<()> {
    let rows = findings(store, session)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Record", "Value"], rows));
    }
    Ok(())
}
