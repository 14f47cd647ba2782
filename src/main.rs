// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use fintrack::config::Config;
use fintrack::session::Session;
use fintrack::store::Backend;
use fintrack::{cli, commands};

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    let level = matches
        .get_one::<String>("log-level")
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::WARN);
    init_logger(level);
    debug!("Log level set to {}", level.to_string().to_lowercase());

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    // Fails fast on missing secrets before any store is opened.
    let config = Config::from_matches(matches)?;
    let backend = Backend::open(&config)?;

    if let Some(("account", sub)) = matches.subcommand() {
        return commands::accounts::handle(&backend.accounts()?, &config, sub);
    }

    let session = match config.user.as_deref() {
        Some(user) => backend
            .accounts()?
            .login(user, config.password.as_deref().unwrap_or(""))?,
        None => Session::anonymous(),
    };
    let store = backend.store();

    match matches.subcommand() {
        Some(("init", _)) => {
            backend.initialize()?;
            println!("Store ready at {}", store.describe());
        }
        Some(("tx", sub)) => commands::transactions::handle(store, &session, sub)?,
        Some(("report", sub)) => commands::reports::handle(store, &session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(store, &session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(store, &session)?,
        Some(("menu", _)) => commands::menu::handle(store, &session)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

/// Initializes the tracing subscriber. Logs go to stderr so they never mix with the
/// interactive prompts on stdout.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
