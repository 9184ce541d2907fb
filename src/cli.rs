// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Range start, inclusive"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("Range end, inclusive"),
    )
    .arg(
        Arg::new("period")
            .long("period")
            .value_parser(["week", "month"])
            .conflicts_with_all(["from", "to"])
            .help("Past week or past month, ending today"),
    )
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .required(true)
        .value_name("YYYY-MM-DD")
}

fn amount_arg() -> Arg {
    Arg::new("amount").long("amount").required(true)
}

fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_parser(value_parser!(usize))
        .help("Show at most this many rows")
}

fn export_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("format")
            .long("format")
            .default_value("csv")
            .help("csv or json"),
    )
    .arg(Arg::new("out").long("out").required(true).value_name("PATH"))
}

pub fn build_cli() -> Command {
    Command::new("finlog")
        .about("Personal income, expense, and savings tracker")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Database file (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the database schema if absent"))
        .subcommand(
            Command::new("income")
                .about("Record and list income")
                .subcommand(
                    Command::new("add")
                        .arg(date_arg())
                        .arg(Arg::new("source").long("source").required(true))
                        .arg(amount_arg()),
                )
                .subcommand(json_flags(range_args(Command::new("list"))).arg(limit_arg())),
        )
        .subcommand(
            Command::new("expense")
                .about("Record and list expenses")
                .subcommand(
                    Command::new("add")
                        .arg(date_arg())
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(amount_arg())
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(json_flags(range_args(Command::new("list"))).arg(limit_arg())),
        )
        .subcommand(
            Command::new("savings")
                .about("Record and list savings deposits")
                .subcommand(Command::new("add").arg(date_arg()).arg(amount_arg()))
                .subcommand(json_flags(range_args(Command::new("list"))).arg(limit_arg())),
        )
        .subcommand(
            Command::new("report")
                .about("Monitoring views over a date range")
                .subcommand(json_flags(range_args(
                    Command::new("overview").about("Totals and current balance"),
                )))
                .subcommand(
                    json_flags(range_args(
                        Command::new("categories").about("Spending by category"),
                    ))
                    .arg(
                        Arg::new("top")
                            .long("top")
                            .value_parser(value_parser!(usize))
                            .num_args(0..=1)
                            .default_missing_value("10")
                            .help("Keep only the N largest categories (10 when no N given)"),
                    ),
                )
                .subcommand(json_flags(range_args(
                    Command::new("timeline").about("Income vs. expenses over time"),
                )))
                .subcommand(json_flags(range_args(
                    Command::new("daily-expenses").about("Expenses per day"),
                )))
                .subcommand(json_flags(range_args(
                    Command::new("weekly-income").about("Income per week"),
                )))
                .subcommand(json_flags(range_args(
                    Command::new("monthly").about("Monthly income and expenses comparison"),
                )))
                .subcommand(
                    json_flags(range_args(
                        Command::new("savings").about("Cumulative savings over time"),
                    ))
                    .arg(
                        Arg::new("tail")
                            .long("tail")
                            .value_parser(value_parser!(usize))
                            .help("Rows of the table to show (default 10)"),
                    ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export raw tables")
                .subcommand(export_args(Command::new("income")))
                .subcommand(export_args(Command::new("expenses")))
                .subcommand(export_args(Command::new("savings"))),
        )
}
