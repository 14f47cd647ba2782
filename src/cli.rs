// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn window_args() -> Vec<Arg> {
    vec![
        Arg::new("from")
            .long("from")
            .value_name("DD-MM-YYYY")
            .requires("to")
            .conflicts_with("month")
            .help("Start of the date range (inclusive)"),
        Arg::new("to")
            .long("to")
            .value_name("DD-MM-YYYY")
            .requires("from")
            .help("End of the date range (inclusive)"),
        Arg::new("month")
            .long("month")
            .value_name("YYYY-MM")
            .help("Calendar month; defaults to the latest month with data"),
        Arg::new("keyword")
            .long("keyword")
            .short('k')
            .help("Case-insensitive search in descriptions"),
    ]
}

fn json_args() -> Vec<Arg> {
    vec![
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
        Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue),
    ]
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Personal income/expense tracker")
        .version(clap::crate_version!())
        .arg(
            Arg::new("backend")
                .long("backend")
                .global(true)
                .env("FINTRACK_BACKEND")
                .value_parser(["sqlite", "csv"])
                .default_value("sqlite"),
        )
        .arg(
            Arg::new("db-uri")
                .long("db-uri")
                .global(true)
                .env("FINTRACK_DB_URI")
                .hide_env_values(true)
                .help("Directory holding the database, or :memory:"),
        )
        .arg(
            Arg::new("db-name")
                .long("db-name")
                .global(true)
                .env("FINTRACK_DB_NAME"),
        )
        .arg(
            Arg::new("csv-path")
                .long("csv-path")
                .global(true)
                .env("FINTRACK_CSV_PATH")
                .help("Flat file used by the csv backend"),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .env("FINTRACK_USER"),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .global(true)
                .env("FINTRACK_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .default_value("warn"),
        )
        .subcommand(Command::new("init").about("Create the configured store"))
        .subcommand(
            Command::new("account")
                .about("Sign up or log in with --user and --password")
                .subcommand(
                    Command::new("signup").arg(
                        Arg::new("confirm")
                            .long("confirm")
                            .required(true)
                            .help("Repeat the password"),
                    ),
                )
                .subcommand(Command::new("login")),
        )
        .subcommand(
            Command::new("tx")
                .about("Add and list transactions")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("DD-MM-YYYY")
                                .help("Defaults to today"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("INCOME or EXPENSE (or I / E)"),
                        )
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("list")
                        .args(window_args())
                        .args(json_args())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries and charts")
                .subcommand(
                    Command::new("summary")
                        .args(window_args())
                        .args(json_args())
                        .arg(
                            Arg::new("budget")
                                .long("budget")
                                .help("Expense budget for the window; 0 disables the check"),
                        ),
                )
                .subcommand(Command::new("daily").args(window_args()).args(json_args()))
                .subcommand(
                    Command::new("categories")
                        .args(window_args())
                        .args(json_args()),
                )
                .subcommand(Command::new("months").args(json_args())),
        )
        .subcommand(
            Command::new("export").about("Export transactions").subcommand(
                Command::new("transactions")
                    .args(window_args())
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Report stored records that cannot be read"))
        .subcommand(Command::new("menu").about("Interactive add/view menu"))
}
