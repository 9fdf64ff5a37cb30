// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendlens")
        .version(clap::crate_version!())
        .about("Track income and expenses, and see where the money goes")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Database file (defaults to $SPENDLENS_DB or the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and remove transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("income | expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Defaults to food for expenses, salary for income"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD or ISO date-time (defaults to now)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("all")
                                .help("all | income | expense"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Analytics over all transactions")
                .subcommand(json_flags(
                    Command::new("summary").about("Totals, balance and daily average"),
                ))
                .subcommand(json_flags(
                    Command::new("categories").about("Expense breakdown by category"),
                ))
                .subcommand(json_flags(
                    Command::new("trend").about("Income and expense per month"),
                )),
        )
        .subcommand(json_flags(
            Command::new("insights").about("Observations about your spending"),
        ))
        .subcommand(
            Command::new("ask")
                .about("Ask the assistant a question")
                .arg(
                    Arg::new("query")
                        .num_args(1..)
                        .help("Question text; omit to see suggestions"),
                ),
        )
        .subcommand(
            Command::new("categories").about("List categories by transaction type"),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("json")
                                .help("csv | json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import data")
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("path").long("path").required(true))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .help("csv | json (defaults to the file extension)"),
                        ),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Display settings")
                .subcommand(
                    Command::new("currency")
                        .about("Show or set the currency symbol")
                        .arg(Arg::new("symbol")),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored transactions for problems"))
}
