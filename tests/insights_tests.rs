// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use spendlens::analytics::{compute_analytics, Analytics, MS_PER_DAY};
use spendlens::insights::{collect_insights, count_recent, derive_insights, Insight};
use spendlens::models::{Category, Transaction, TransactionType};
use spendlens::utils::parse_datetime;

const NOW_MS: i64 = 1_706_745_600_000; // 2024-02-01T00:00:00Z

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(NOW_MS).unwrap()
}

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(id: &str, amount: &str, category: Category, timestamp: i64) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: d(amount),
        category: category.clone(),
        r#type: TransactionType::Expense,
        description: category.to_string(),
        date: parse_datetime("2024-01-15").unwrap(),
        timestamp,
    }
}

fn income(id: &str, amount: &str, timestamp: i64) -> Transaction {
    Transaction {
        r#type: TransactionType::Income,
        category: Category::Salary,
        ..expense(id, amount, Category::Salary, timestamp)
    }
}

fn insights_for(list: &[Transaction]) -> Vec<Insight> {
    let a = compute_analytics(list, now());
    collect_insights(&a, list, now())
}

#[test]
fn example_scenario_insights_in_order() {
    let list = vec![
        expense("3", "100", Category::Food, NOW_MS - 2 * MS_PER_DAY),
        expense("2", "50", Category::Transport, NOW_MS - 5 * MS_PER_DAY),
        income("1", "500", NOW_MS - 10 * MS_PER_DAY),
    ];
    assert_eq!(
        insights_for(&list),
        vec![
            Insight::Surplus { amount: d("350") },
            Insight::TopCategory {
                category: Category::Food,
                amount: d("100"),
            },
            Insight::DailyAverage { amount: d("15") },
            Insight::FoodHeavy,
        ]
    );
}

#[test]
fn no_transactions_means_no_insights() {
    let a = compute_analytics(&[], now());
    assert!(collect_insights(&a, &[], now()).is_empty());
    assert!(derive_insights(&a, &[], now()).is_empty());
}

#[test]
fn zero_balance_emits_neither_balance_message() {
    let list = vec![
        income("1", "25", NOW_MS - 10 * MS_PER_DAY),
        expense("2", "25", Category::Shopping, NOW_MS - 10 * MS_PER_DAY),
    ];
    let got = insights_for(&list);
    assert!(!got
        .iter()
        .any(|i| matches!(i, Insight::Surplus { .. } | Insight::Deficit { .. })));
}

#[test]
fn deficit_reports_magnitude() {
    let list = vec![
        income("1", "20", NOW_MS - 10 * MS_PER_DAY),
        expense("2", "80.5", Category::Shopping, NOW_MS - 10 * MS_PER_DAY),
    ];
    let got = insights_for(&list);
    assert_eq!(got[0], Insight::Deficit { amount: d("60.5") });
}

#[test]
fn week_window_excludes_exactly_seven_days() {
    let mut list: Vec<Transaction> = (0..5)
        .map(|i| expense(&i.to_string(), "1", Category::Other, NOW_MS - MS_PER_DAY))
        .collect();
    list.push(expense("edge", "1", Category::Other, NOW_MS - 7 * MS_PER_DAY));
    assert_eq!(count_recent(&list, now()), 5);
    assert!(!insights_for(&list)
        .iter()
        .any(|i| matches!(i, Insight::BusyWeek { .. })));

    list.push(expense("inside", "1", Category::Other, NOW_MS - 6 * MS_PER_DAY));
    assert_eq!(count_recent(&list, now()), 6);
    assert!(insights_for(&list).contains(&Insight::BusyWeek { count: 6 }));
}

#[test]
fn one_millisecond_inside_the_week_counts() {
    let list = vec![expense("1", "1", Category::Other, NOW_MS - 7 * MS_PER_DAY + 1)];
    assert_eq!(count_recent(&list, now()), 1);
}

#[test]
fn food_at_exactly_thirty_percent_is_not_flagged() {
    let list = vec![
        expense("1", "30", Category::Food, NOW_MS - 10 * MS_PER_DAY),
        expense("2", "70", Category::Transport, NOW_MS - 10 * MS_PER_DAY),
    ];
    assert!(!insights_for(&list).contains(&Insight::FoodHeavy));
}

#[test]
fn food_just_over_thirty_percent_is_flagged() {
    let list = vec![
        expense("1", "30.01", Category::Food, NOW_MS - 10 * MS_PER_DAY),
        expense("2", "69.99", Category::Transport, NOW_MS - 10 * MS_PER_DAY),
    ];
    assert!(insights_for(&list).contains(&Insight::FoodHeavy));
}

#[test]
fn no_food_no_food_warning() {
    let a = Analytics {
        total_expense: d("10"),
        ..Analytics::default()
    };
    assert!(!collect_insights(&a, &[], now()).contains(&Insight::FoodHeavy));
}

#[test]
fn lines_render_with_symbol() {
    let surplus = Insight::Surplus { amount: d("350") };
    assert_eq!(
        surplus.render("$"),
        "💰 Nice work! Your balance is positive at $350.00"
    );
    assert_eq!(
        surplus.to_string(),
        "💰 Nice work! Your balance is positive at ₹350.00"
    );
    let top = Insight::TopCategory {
        category: Category::Food,
        amount: d("99.999"),
    };
    assert_eq!(
        top.render("€"),
        "📊 Your highest spending category is food (€100.00)"
    );
    assert_eq!(
        Insight::BusyWeek { count: 7 }.render("$"),
        "🔥 You recorded 7 transactions this week!"
    );
}

#[test]
fn derive_insights_matches_collected_lines() {
    let list = vec![
        expense("1", "10", Category::Health, NOW_MS - 3 * MS_PER_DAY),
        income("2", "5", NOW_MS - 3 * MS_PER_DAY),
    ];
    let a = compute_analytics(&list, now());
    let lines = derive_insights(&a, &list, now());
    let expected: Vec<String> = collect_insights(&a, &list, now())
        .iter()
        .map(|i| i.to_string())
        .collect();
    assert_eq!(lines, expected);
    assert!(lines[0].starts_with("⚠️ You are in deficit by ₹5.00"));
}

#[test]
fn extreme_timestamps_do_not_overflow_the_week_window() {
    let list = vec![
        expense("old", "1", Category::Other, i64::MIN),
        expense("future", "1", Category::Other, i64::MAX),
    ];
    assert_eq!(count_recent(&list, now()), 1);
    let a = compute_analytics(&list, now());
    assert!(!collect_insights(&a, &list, now()).is_empty());
}
