// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::DateTime;
use spendlens::commands::doctor::diagnose;
use spendlens::models::{Category, Transaction, TransactionType};
use spendlens::utils::parse_datetime;

const NOW_MS: i64 = 1_706_745_600_000;

fn record(id: &str, amount: &str, kind: TransactionType, category: Category, ts: i64) -> Transaction {
    Transaction {
        id: id.into(),
        amount: amount.parse().unwrap(),
        category,
        r#type: kind,
        description: "x".into(),
        date: parse_datetime("2024-01-10").unwrap(),
        timestamp: ts,
    }
}

#[test]
fn clean_data_has_no_issues() {
    let list = vec![
        record("1", "5", TransactionType::Expense, Category::Food, NOW_MS - 1),
        record("2", "9", TransactionType::Income, Category::Other, NOW_MS),
    ];
    assert!(diagnose(&list, DateTime::from_timestamp_millis(NOW_MS).unwrap()).is_empty());
}

#[test]
fn flags_each_kind_of_problem() {
    let list = vec![
        record("1", "5", TransactionType::Expense, Category::Food, NOW_MS),
        record("1", "6", TransactionType::Expense, Category::Food, NOW_MS),
        record("2", "-3", TransactionType::Expense, Category::Food, NOW_MS),
        record("3", "3", TransactionType::Expense, Category::Salary, NOW_MS),
        record("4", "3", TransactionType::Expense, Category::Food, NOW_MS + 60_000),
    ];
    let issues = diagnose(&list, DateTime::from_timestamp_millis(NOW_MS).unwrap());
    let kinds: Vec<&str> = issues.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        kinds,
        vec!["duplicate_id", "invalid_record", "invalid_record", "future_timestamp"]
    );
    assert!(issues[1].1.starts_with("2:"));
    assert!(issues[2].1.contains("salary"));
}

#[test]
fn flags_pre_epoch_timestamps_and_unknown_categories() {
    let list = vec![
        record("1", "5", TransactionType::Expense, Category::Food, -1),
        record("2", "5", TransactionType::Expense, Category::Unknown("rent".into()), NOW_MS),
    ];
    let issues = diagnose(&list, DateTime::from_timestamp_millis(NOW_MS).unwrap());
    let kinds: Vec<&str> = issues.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(kinds, vec!["invalid_record", "pre_epoch_timestamp"]);
    assert!(issues[0].1.contains("rent"));
}
