// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Transaction, TransactionType};
use crate::store::{BlobStore, MergeOutcome, TransactionStore};
use crate::utils::{parse_amount, parse_datetime, required};
use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

pub fn handle<S: BlobStore>(store: &mut TransactionStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        _ => Ok(()),
    }
}

fn import_transactions<S: BlobStore>(
    store: &mut TransactionStore<S>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let path = required(sub, "path")?.trim();
    let format = match sub.get_one::<String>("format") {
        Some(f) => f.to_lowercase(),
        None => Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default(),
    };
    let records = match format.as_str() {
        "json" => read_json(path)?,
        "csv" => read_csv(path)?,
        other => bail!("Unknown format '{}' (use csv|json)", other),
    };
    let outcome = import_records(store, records)?;
    println!(
        "Imported {} transactions ({} already present)",
        outcome.added, outcome.skipped
    );
    Ok(())
}

/// Validates every record before anything is merged, so a bad file changes nothing.
pub fn import_records<S: BlobStore>(
    store: &mut TransactionStore<S>,
    records: Vec<Transaction>,
) -> Result<MergeOutcome> {
    for t in &records {
        t.validate()
            .with_context(|| format!("Invalid transaction '{}'", t.id))?;
    }
    Ok(store.merge(records))
}

pub fn read_json(path: &str) -> Result<Vec<Transaction>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open JSON {}", path))?;
    let records: Vec<Transaction> =
        serde_json::from_str(&raw).with_context(|| format!("Parse JSON {}", path))?;
    Ok(records)
}

/// Reads the column layout written by `export transactions --format csv`.
pub fn read_csv(path: &str) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut out = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let rec = result?;
        let field = |i: usize, name: &str| -> Result<String> {
            rec.get(i)
                .map(|s| s.trim().to_string())
                .with_context(|| format!("Row {}: {} missing", line + 1, name))
        };
        let id = field(0, "id")?;
        let date = parse_datetime(&field(1, "date")?)
            .with_context(|| format!("Row {}: bad date", line + 1))?;
        let r#type: TransactionType = field(2, "type")?.parse()?;
        let category: Category = field(3, "category")?.parse()?;
        let description = field(4, "description")?;
        let amount = parse_amount(&field(5, "amount")?)?;
        let timestamp: i64 = field(6, "timestamp")?
            .parse()
            .with_context(|| format!("Row {}: bad timestamp", line + 1))?;
        if id.is_empty() {
            bail!("Row {}: empty id", line + 1);
        }
        out.push(Transaction {
            id,
            amount,
            category,
            r#type,
            description,
            date,
            timestamp,
        });
    }
    Ok(out)
}
