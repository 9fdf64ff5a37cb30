// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::utils::pretty_table;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Problems in stored records that analytics would otherwise take at face value.
pub fn diagnose(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    let now_ms = now.timestamp_millis();

    // 1) Ids must be unique
    let mut seen = HashSet::new();
    for t in transactions {
        if !seen.insert(t.id.as_str()) {
            rows.push(("duplicate_id".into(), t.id.clone()));
        }
    }

    // 2) Negative amounts, unknown categories and categories used with the wrong type
    for t in transactions {
        if let Err(err) = t.validate() {
            rows.push(("invalid_record".into(), format!("{}: {}", t.id, err)));
        }
    }

    // 3) Creation time outside [epoch, now]
    for t in transactions {
        if t.timestamp > now_ms {
            rows.push(("future_timestamp".into(), format!("{} {}", t.id, t.timestamp)));
        } else if t.timestamp < 0 {
            rows.push(("pre_epoch_timestamp".into(), format!("{} {}", t.id, t.timestamp)));
        }
    }

    rows
}

pub fn handle(transactions: &[Transaction], now: DateTime<Utc>) -> Result<()> {
    let rows: Vec<Vec<String>> = diagnose(transactions, now)
        .into_iter()
        .map(|(issue, detail)| vec![issue, detail])
        .collect();
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
