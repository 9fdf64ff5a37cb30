// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use spendlens::analytics::{Analytics, MonthlyPoint};
use spendlens::assistant::{monthly_savings_potential, respond, rule_names};
use spendlens::models::Category;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn sample() -> Analytics {
    let mut breakdown = BTreeMap::new();
    breakdown.insert(Category::Food, d("100"));
    breakdown.insert(Category::Transport, d("50"));
    Analytics {
        total_income: d("500"),
        total_expense: d("150"),
        balance: d("350"),
        category_breakdown: breakdown,
        daily_average: d("15"),
        highest_spending_category: Some(Category::Food),
        transaction_count: 3,
        monthly_trend: vec![
            MonthlyPoint {
                month: "2023-12".into(),
                income: d("0"),
                expense: d("40"),
            },
            MonthlyPoint {
                month: "2024-01".into(),
                income: d("500"),
                expense: d("110"),
            },
        ],
    }
}

#[test]
fn every_rule_compiles() {
    assert_eq!(
        rule_names(),
        vec![
            "total_spent",
            "total_earned",
            "balance",
            "top_category",
            "daily_average",
            "count",
            "savings",
            "categories",
            "trend",
        ]
    );
}

#[test]
fn totals() {
    let a = sample();
    let r = respond("How much have I spent?", &a, "₹");
    assert_eq!(r.icon, "💸");
    assert_eq!(r.answer, "You've spent a total of ₹150.00 across all transactions.");

    let r = respond("total INCOME please", &a, "$");
    assert_eq!(r.icon, "💰");
    assert!(r.answer.contains("$500.00"));
}

#[test]
fn balance_without_how_much() {
    let r = respond("What's my balance?", &sample(), "₹");
    assert_eq!(r.icon, "💳");
    assert!(r.answer.contains("₹350.00"));
    assert!(r.answer.contains("profit"));

    let even = Analytics::default();
    assert!(respond("balance", &even, "₹").answer.contains("breaking even"));
}

#[test]
fn where_needs_a_top_category() {
    let r = respond("Where do I spend the most?", &sample(), "₹");
    assert_eq!(r.answer, "Your highest spending is in food with ₹100.00.");

    let r = respond("Where do I spend the most?", &Analytics::default(), "₹");
    assert_eq!(r.icon, "🤖");
}

#[test]
fn spending_phrase_wins_over_daily() {
    let r = respond("What's my daily spending?", &sample(), "₹");
    assert_eq!(r.icon, "📊");
    let r = respond("daily average?", &sample(), "₹");
    assert_eq!(r.answer, "You spend an average of ₹15.00 per day.");
}

#[test]
fn count_and_savings() {
    let a = sample();
    assert!(respond("how many records", &a, "₹").answer.contains("3 transactions"));
    assert_eq!(monthly_savings_potential(&a), d("45"));
    let r = respond("How can I save money?", &a, "₹");
    assert_eq!(r.icon, "💡");
    assert!(r.answer.contains("₹45.00"));
}

#[test]
fn categories_listed_largest_first() {
    let r = respond("which category", &sample(), "₹");
    assert_eq!(
        r.answer,
        "You spend on these categories: food, transport. Your biggest category is food."
    );
}

#[test]
fn trend_compares_last_two_months() {
    let r = respond("Show me my trends", &sample(), "₹");
    assert!(r.answer.contains("increasing"));
    assert!(r.answer.contains("Last month: ₹40.00, this month: ₹110.00"));

    let mut a = sample();
    a.monthly_trend.truncate(1);
    assert_eq!(respond("Show me my trends", &a, "₹").icon, "🤖");
}

#[test]
fn unknown_question_gets_help() {
    let r = respond("tell me a joke", &sample(), "₹");
    assert_eq!(r.icon, "🤖");
    assert!(r.answer.contains("How much have I spent?"));
}
