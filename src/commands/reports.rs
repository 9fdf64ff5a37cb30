// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::Analytics;
use crate::store::{BlobStore, TransactionStore};
use crate::utils::{
    fmt_money, fmt_percent, fmt_signed, get_currency_symbol, maybe_print_json, pretty_table,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Transactions shown under the summary, newest first.
pub const RECENT_COUNT: usize = 5;

pub fn handle<S: BlobStore>(
    store: &TransactionStore<S>,
    m: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    let analytics = store.analytics(now);
    let symbol = get_currency_symbol(store.backend())?;
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, &analytics, &symbol, sub)?,
        Some(("categories", sub)) => categories(&analytics, &symbol, sub)?,
        Some(("trend", sub)) => trend(&analytics, &symbol, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary<S: BlobStore>(
    store: &TransactionStore<S>,
    analytics: &Analytics,
    symbol: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), analytics)? {
        return Ok(());
    }
    let rows = vec![
        vec!["💳 Balance".into(), fmt_money(&analytics.balance, symbol)],
        vec!["💰 Income".into(), fmt_money(&analytics.total_income, symbol)],
        vec!["💸 Expenses".into(), fmt_money(&analytics.total_expense, symbol)],
        vec![
            "📊 Daily average".into(),
            fmt_money(&analytics.daily_average, symbol),
        ],
        vec![
            "📝 Transactions".into(),
            analytics.transaction_count.to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    let recent: Vec<Vec<String>> = store
        .recent(RECENT_COUNT)
        .iter()
        .map(|t| {
            vec![
                format!("{} {}", t.category.icon(), t.description),
                t.date.format("%Y-%m-%d").to_string(),
                fmt_signed(t.r#type.sign(), &t.amount, symbol),
            ]
        })
        .collect();
    if recent.is_empty() {
        println!("No transactions yet.");
    } else {
        println!("{}", pretty_table(&["Recent", "Date", "Amount"], recent));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: rust_decimal::Decimal,
    pub share: Option<rust_decimal::Decimal>,
}

pub fn category_rows(analytics: &Analytics) -> Vec<CategoryRow> {
    analytics
        .breakdown_by_amount()
        .into_iter()
        .map(|(c, amount)| CategoryRow {
            share: analytics.share_of_expense(&c),
            category: c.to_string(),
            amount,
        })
        .collect()
}

fn categories(analytics: &Analytics, symbol: &str, sub: &clap::ArgMatches) -> Result<()> {
    let data = category_rows(analytics);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No expense data yet");
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|r| {
            vec![
                crate::models::category_label(&r.category),
                fmt_money(&r.amount, symbol),
                r.share.as_ref().map(fmt_percent).unwrap_or_default(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    Ok(())
}

fn trend(analytics: &Analytics, symbol: &str, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(
        sub.get_flag("json"),
        sub.get_flag("jsonl"),
        &analytics.monthly_trend,
    )? {
        return Ok(());
    }
    if analytics.monthly_trend.is_empty() {
        println!("No monthly data yet");
        return Ok(());
    }
    let rows = analytics
        .monthly_trend
        .iter()
        .map(|p| {
            vec![
                p.month.clone(),
                fmt_signed('+', &p.income, symbol),
                fmt_signed('-', &p.expense, symbol),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    Ok(())
}
