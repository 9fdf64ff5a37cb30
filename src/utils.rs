// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::Error;
use crate::store::BlobStore;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
const CURRENCY_SYMBOL_KEY: &str = "currency_symbol";

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and the same with a
/// trailing `Z` or a space separator. Offsets are dropped; dates are naive.
pub fn parse_datetime(s: &str) -> std::result::Result<NaiveDateTime, Error> {
    let raw = s.trim();
    let t = raw.strip_suffix('Z').unwrap_or(raw);
    if let Ok(dt) = t.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| Error::InvalidDate(raw.to_string()))
}

pub fn parse_amount(s: &str) -> std::result::Result<Decimal, Error> {
    let raw = s.trim();
    raw.parse::<Decimal>()
        .map_err(|_| Error::InvalidAmount(raw.to_string()))
}

/// Rounds half away from zero to two places, the way amounts are shown.
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, round_money(*d))
}

/// Amount with a `+`/`-` sign prefix in front of the symbol.
pub fn fmt_signed(sign: char, d: &Decimal, symbol: &str) -> String {
    format!("{}{}", sign, fmt_money(d, symbol))
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!(
        "{:.1}%",
        d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    sub.get_one::<String>(name)
        .with_context(|| format!("Missing required argument '{}'", name))
}

// Display settings share the key/value backend with the transaction blob.
pub fn get_currency_symbol<S: BlobStore>(backend: &S) -> Result<String> {
    let v = backend.get(CURRENCY_SYMBOL_KEY)?;
    Ok(v.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()))
}

pub fn set_currency_symbol<S: BlobStore>(backend: &mut S, symbol: &str) -> Result<()> {
    backend
        .set(CURRENCY_SYMBOL_KEY, symbol.trim())
        .context("Failed to store currency symbol")?;
    Ok(())
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
