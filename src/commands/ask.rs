// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::assistant::{respond, GREETING, SUGGESTED_QUERIES};
use crate::store::{BlobStore, TransactionStore};
use crate::utils::get_currency_symbol;
use anyhow::Result;
use chrono::{DateTime, Utc};

pub fn handle<S: BlobStore>(
    store: &TransactionStore<S>,
    m: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    let query = m
        .get_many::<String>("query")
        .map(|parts| parts.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    if query.trim().is_empty() {
        println!("{}", GREETING);
        for q in SUGGESTED_QUERIES {
            println!("  - {}", q);
        }
        return Ok(());
    }
    let symbol = get_currency_symbol(store.backend())?;
    let reply = respond(&query, &store.analytics(now), &symbol);
    println!("{} {}", reply.icon, reply.answer);
    Ok(())
}
