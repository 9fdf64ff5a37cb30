// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, NewTransaction, Transaction, TransactionType};
use crate::store::{BlobStore, TransactionStore, TypeFilter};
use crate::utils::{
    fmt_signed, get_currency_symbol, maybe_print_json, parse_amount, parse_datetime,
    pretty_table, required,
};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub fn handle<S: BlobStore>(
    store: &mut TransactionStore<S>,
    m: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub, now)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds the user's input from `tx add` arguments without touching the store.
pub fn parse_new(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let amount = parse_amount(required(sub, "amount")?)?;
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>())
        .transpose()?
        .unwrap_or(TransactionType::Expense);
    let category = match sub.get_one::<String>("category") {
        Some(c) => c.parse::<Category>()?,
        None => kind.default_category(),
    };
    let mut new = NewTransaction::new(amount, kind, category);
    if let Some(d) = sub.get_one::<String>("description") {
        new = new.with_description(d.as_str());
    }
    if let Some(raw) = sub.get_one::<String>("date") {
        new = new.with_date(parse_datetime(raw)?);
    }
    Ok(new)
}

fn add<S: BlobStore>(
    store: &mut TransactionStore<S>,
    sub: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    let new = parse_new(sub)?;
    let t = store.add(new, now).context("Transaction not recorded")?;
    let symbol = get_currency_symbol(store.backend())?;
    println!(
        "Recorded {} {} {} '{}' (id {})",
        t.r#type,
        fmt_signed(t.r#type.sign(), &t.amount, &symbol),
        t.category.icon(),
        t.description,
        t.id
    );
    Ok(())
}

fn rm<S: BlobStore>(store: &mut TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?.trim();
    if !store.delete(id) {
        bail!("No transaction with id '{}'", id);
    }
    println!("Deleted transaction {}", id);
    Ok(())
}

fn list<S: BlobStore>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if data.is_empty() && !json_flag && !jsonl_flag {
        println!("No transactions yet. Record one with `spendlens tx add`.");
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = get_currency_symbol(store.backend())?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.category.label(),
                    r.description.clone(),
                    fmt_signed(r.r#type.sign(), &r.amount, &symbol),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Category", "Description", "Amount"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: TransactionType,
    pub category: Category,
    pub description: String,
    pub amount: rust_decimal::Decimal,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            date: t.date.format("%Y-%m-%d").to_string(),
            r#type: t.r#type,
            category: t.category.clone(),
            description: t.description.clone(),
            amount: t.amount,
        }
    }
}

pub fn query_rows<S: BlobStore>(
    store: &TransactionStore<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TypeFilter>())
        .transpose()?
        .unwrap_or_default();
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    Ok(store
        .filtered(filter)
        .take(limit)
        .map(TransactionRow::from)
        .collect())
}
