// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::auth::{Accounts, SignupOutcome};
use crate::config::Config;

/// Signup and login failures are reported, not returned as errors.
pub fn handle(accounts: &Accounts<'_>, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    let (Some(username), Some(password)) = (config.user.as_deref(), config.password.as_deref())
    else {
        bail!("--user and --password are required");
    };
    match m.subcommand() {
        Some(("signup", sub)) => {
            let confirm = sub.get_one::<String>("confirm").map_or("", String::as_str);
            let outcome = accounts.create(username, password, confirm)?;
            println!("{}", outcome.message());
            if outcome != SignupOutcome::Created {
                tracing::debug!(%username, ?outcome, "signup rejected");
            }
        }
        Some(("login", _)) => {
            if accounts.verify(username, password)? {
                println!("Login successful! Welcome, {}.", username);
            } else {
                println!("Invalid username or password.");
            }
        }
        _ => {}
    }
    Ok(())
}
