// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spendlens::{cli, commands, db, store::TransactionStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // RUST_LOG wins over --verbose; default stays quiet
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let override_path = matches.get_one::<String>("db").map(PathBuf::from);
    let path = db::db_path(override_path.as_deref())?;
    let conn = db::open_or_init(&path)?;
    let mut store = TransactionStore::load(conn);
    let now = Utc::now();

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub, now)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub, now)?,
        Some(("insights", sub)) => commands::insights::handle(&store, sub, now)?,
        Some(("ask", sub)) => commands::ask::handle(&store, sub, now)?,
        Some(("categories", _)) => commands::categories::handle()?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut store, sub)?,
        Some(("config", sub)) => commands::config::handle(store.backend_mut(), sub)?,
        Some(("doctor", _)) => commands::doctor::handle(store.transactions(), now)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
