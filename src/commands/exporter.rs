// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::iso_datetime;
use crate::store::{BlobStore, TransactionStore};
use crate::utils::required;
use anyhow::{bail, Context, Result};

pub const CSV_HEADER: [&str; 7] = [
    "id",
    "date",
    "type",
    "category",
    "description",
    "amount",
    "timestamp",
];

pub fn handle<S: BlobStore>(store: &TransactionStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions<S: BlobStore>(
    store: &TransactionStore<S>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(CSV_HEADER)?;
            for t in store.transactions() {
                wtr.write_record([
                    t.id.clone(),
                    t.date.format(iso_datetime::FORMAT).to_string(),
                    t.r#type.to_string(),
                    t.category.to_string(),
                    t.description.clone(),
                    t.amount.to_string(),
                    t.timestamp.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        // Same shape as the stored blob, so it can be imported back.
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(store.transactions())?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!(
        "Exported {} transactions to {}",
        store.len(),
        out
    );
    Ok(())
}
