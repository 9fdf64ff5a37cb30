// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::insights::collect_insights;
use crate::store::{BlobStore, TransactionStore};
use crate::utils::{get_currency_symbol, maybe_print_json};
use anyhow::Result;
use chrono::{DateTime, Utc};

pub fn handle<S: BlobStore>(
    store: &TransactionStore<S>,
    m: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    let symbol = get_currency_symbol(store.backend())?;
    let lines = render(store, &symbol, now);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &lines)? {
        return Ok(());
    }
    if lines.is_empty() {
        println!("Nothing to report yet. Record a few transactions first.");
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

pub fn render<S: BlobStore>(
    store: &TransactionStore<S>,
    symbol: &str,
    now: DateTime<Utc>,
) -> Vec<String> {
    let analytics = store.analytics(now);
    collect_insights(&analytics, store.transactions(), now)
        .iter()
        .map(|i| i.render(symbol))
        .collect()
}
