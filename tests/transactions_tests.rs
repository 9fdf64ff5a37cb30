// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::DateTime;
use rust_decimal::Decimal;
use spendlens::models::{Category, NewTransaction, TransactionType};
use spendlens::store::{MemoryStore, TransactionStore};
use spendlens::{cli, commands::transactions};

const NOW_MS: i64 = 1_706_745_600_000;

fn setup() -> TransactionStore<MemoryStore> {
    let mut store = TransactionStore::load(MemoryStore::new());
    for i in 1..=3 {
        let new = NewTransaction::new(Decimal::from(10), TransactionType::Expense, Category::Food)
            .with_date(spendlens::utils::parse_datetime(&format!("2025-01-0{}", i)).unwrap());
        store
            .add(new, DateTime::from_timestamp_millis(NOW_MS + i).unwrap())
            .unwrap();
    }
    store
        .add(
            NewTransaction::new(Decimal::from(99), TransactionType::Income, Category::Salary),
            DateTime::from_timestamp_millis(NOW_MS + 10).unwrap(),
        )
        .unwrap();
    store
}

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some(("tx", tx_m)) => match tx_m.subcommand() {
            Some((_, m)) => m.clone(),
            None => panic!("no tx subcommand"),
        },
        _ => panic!("no tx command"),
    }
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let m = sub_matches(&["spendlens", "tx", "list", "--limit", "2"]);
    let rows = transactions::query_rows(&store, &m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].r#type, TransactionType::Income);
    assert_eq!(rows[1].date, "2025-01-03");
}

#[test]
fn list_filters_by_type() {
    let store = setup();
    let m = sub_matches(&["spendlens", "tx", "list", "--type", "expense"]);
    let rows = transactions::query_rows(&store, &m).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.r#type == TransactionType::Expense));

    let m = sub_matches(&["spendlens", "tx", "list", "--type", "nonsense"]);
    assert!(transactions::query_rows(&store, &m).is_err());
}

#[test]
fn add_defaults_category_from_type() {
    let m = sub_matches(&["spendlens", "tx", "add", "--amount", "12.50", "--type", "income"]);
    let new = transactions::parse_new(&m).unwrap();
    assert_eq!(new.r#type, TransactionType::Income);
    assert_eq!(new.category, Category::Salary);
    assert_eq!(new.amount, "12.50".parse::<Decimal>().unwrap());
    assert!(new.date.is_none());

    let m = sub_matches(&["spendlens", "tx", "add", "--amount", "3"]);
    let new = transactions::parse_new(&m).unwrap();
    assert_eq!(new.r#type, TransactionType::Expense);
    assert_eq!(new.category, Category::Food);
}

#[test]
fn add_parses_date_and_description() {
    let m = sub_matches(&[
        "spendlens",
        "tx",
        "add",
        "--amount",
        "40",
        "--category",
        "Transport",
        "--description",
        "Cab home",
        "--date",
        "2024-03-09T18:30:00Z",
    ]);
    let new = transactions::parse_new(&m).unwrap();
    assert_eq!(new.category, Category::Transport);
    assert_eq!(new.resolved_description(), "Cab home");
    assert_eq!(
        new.date.unwrap().format("%Y-%m-%d %H:%M").to_string(),
        "2024-03-09 18:30"
    );
}

#[test]
fn add_rejects_bad_input() {
    let m = sub_matches(&["spendlens", "tx", "add", "--amount", "abc"]);
    assert!(transactions::parse_new(&m).is_err());
    let m = sub_matches(&["spendlens", "tx", "add", "--amount", "NaN"]);
    assert!(transactions::parse_new(&m).is_err());
    let m = sub_matches(&["spendlens", "tx", "add", "--amount", "1", "--category", "rent"]);
    assert!(transactions::parse_new(&m).is_err());
    let m = sub_matches(&["spendlens", "tx", "add", "--amount", "1", "--date", "yesterday"]);
    assert!(transactions::parse_new(&m).is_err());
}

#[test]
fn command_tree_is_well_formed() {
    cli::build_cli().debug_assert();
}

#[test]
fn ask_collects_words() {
    let matches = cli::build_cli().get_matches_from(["spendlens", "ask", "how", "much", "spent"]);
    let (_, sub) = matches.subcommand().unwrap();
    let words: Vec<&String> = sub.get_many::<String>("query").unwrap().collect();
    assert_eq!(words.len(), 3);
}
