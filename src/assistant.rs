// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Canned answers to free-text questions about the numbers in [`Analytics`].
//!
//! Rules are checked top to bottom and the first one whose triggers all match
//! (and whose data is available) answers. Nothing is remembered between
//! questions.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::Analytics;
use crate::utils::fmt_money;

pub const GREETING: &str =
    "Hi! I'm your finance assistant. Ask me about your spending, income and budgeting.";

pub const SUGGESTED_QUERIES: [&str; 6] = [
    "How much have I spent?",
    "What's my balance?",
    "Where do I spend the most?",
    "How can I save money?",
    "What's my daily spending?",
    "Show me my trends",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub icon: &'static str,
    pub answer: String,
}

type Answer = fn(&Analytics, &str) -> String;

struct RuleSpec {
    name: &'static str,
    /// Every pattern must match somewhere in the query.
    triggers: &'static [&'static str],
    applies: fn(&Analytics) -> bool,
    icon: &'static str,
    answer: Answer,
}

struct Rule {
    name: &'static str,
    triggers: Vec<Regex>,
    applies: fn(&Analytics) -> bool,
    icon: &'static str,
    answer: Answer,
}

fn always(_: &Analytics) -> bool {
    true
}

fn has_top_category(a: &Analytics) -> bool {
    a.highest_spending_category.is_some()
}

fn has_categories(a: &Analytics) -> bool {
    !a.category_breakdown.is_empty()
}

fn has_two_months(a: &Analytics) -> bool {
    a.last_two_months().is_some()
}

fn total_spent(a: &Analytics, sym: &str) -> String {
    format!(
        "You've spent a total of {} across all transactions.",
        fmt_money(&a.total_expense, sym)
    )
}

fn total_earned(a: &Analytics, sym: &str) -> String {
    format!(
        "You've earned a total of {} from all income sources.",
        fmt_money(&a.total_income, sym)
    )
}

fn balance(a: &Analytics, sym: &str) -> String {
    let verdict = if a.balance > Decimal::ZERO {
        "📈 You are in profit!"
    } else if a.balance < Decimal::ZERO {
        "📉 You are in deficit."
    } else {
        "You are breaking even."
    };
    format!(
        "Your current balance is {}. {}",
        fmt_money(&a.balance, sym),
        verdict
    )
}

fn top_category(a: &Analytics, sym: &str) -> String {
    match &a.highest_spending_category {
        Some(c) => format!(
            "Your highest spending is in {} with {}.",
            c,
            fmt_money(&a.category_amount(c), sym)
        ),
        None => fallback_text(),
    }
}

fn daily_average(a: &Analytics, sym: &str) -> String {
    format!(
        "You spend an average of {} per day.",
        fmt_money(&a.daily_average, sym)
    )
}

fn count(a: &Analytics, _: &str) -> String {
    format!(
        "You have recorded {} transactions in total.",
        a.transaction_count
    )
}

/// Ten percent of a thirty-day month at the current daily average.
pub fn monthly_savings_potential(a: &Analytics) -> Decimal {
    a.daily_average * Decimal::from(30) * Decimal::new(1, 1)
}

fn savings(a: &Analytics, sym: &str) -> String {
    format!(
        "Cutting spending by 10% could save you about {} per month. \
         Start with your highest spending categories.",
        fmt_money(&monthly_savings_potential(a), sym)
    )
}

fn categories(a: &Analytics, _: &str) -> String {
    let names: Vec<String> = a
        .breakdown_by_amount()
        .into_iter()
        .map(|(c, _)| c.to_string())
        .collect();
    let biggest = a
        .highest_spending_category
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_default();
    format!(
        "You spend on these categories: {}. Your biggest category is {}.",
        names.join(", "),
        biggest
    )
}

fn trend(a: &Analytics, sym: &str) -> String {
    match a.last_two_months() {
        Some((prev, last)) => {
            let direction = if last.expense > prev.expense {
                "📈 increasing"
            } else {
                "📉 decreasing"
            };
            format!(
                "Your spending is {}. Last month: {}, this month: {}",
                direction,
                fmt_money(&prev.expense, sym),
                fmt_money(&last.expense, sym)
            )
        }
        None => fallback_text(),
    }
}

fn fallback_text() -> String {
    format!(
        "I can help you understand your finances! Try asking: {}",
        SUGGESTED_QUERIES
            .iter()
            .map(|q| format!("\"{}\"", q))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

const RULE_SPECS: &[RuleSpec] = &[
    RuleSpec {
        name: "total_spent",
        triggers: &["how much|total", "spen[dt]|expense"],
        applies: always,
        icon: "💸",
        answer: total_spent,
    },
    RuleSpec {
        name: "total_earned",
        triggers: &["how much|total", "earn|income"],
        applies: always,
        icon: "💰",
        answer: total_earned,
    },
    RuleSpec {
        name: "balance",
        triggers: &["balance"],
        applies: always,
        icon: "💳",
        answer: balance,
    },
    RuleSpec {
        name: "top_category",
        triggers: &["where|spending"],
        applies: has_top_category,
        icon: "📊",
        answer: top_category,
    },
    RuleSpec {
        name: "daily_average",
        triggers: &["average|daily"],
        applies: always,
        icon: "📈",
        answer: daily_average,
    },
    RuleSpec {
        name: "count",
        triggers: &["how many|count"],
        applies: always,
        icon: "📝",
        answer: count,
    },
    RuleSpec {
        name: "savings",
        triggers: &["save|budget"],
        applies: always,
        icon: "💡",
        answer: savings,
    },
    RuleSpec {
        name: "categories",
        triggers: &["category"],
        applies: has_categories,
        icon: "🏷️",
        answer: categories,
    },
    RuleSpec {
        name: "trend",
        triggers: &["trend|month"],
        applies: has_two_months,
        icon: "📊",
        answer: trend,
    },
];

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULE_SPECS
        .iter()
        .filter_map(|spec| {
            let triggers = spec
                .triggers
                .iter()
                .map(|p| Regex::new(&format!("(?i){}", p)))
                .collect::<Result<Vec<_>, _>>();
            match triggers {
                Ok(triggers) => Some(Rule {
                    name: spec.name,
                    triggers,
                    applies: spec.applies,
                    icon: spec.icon,
                    answer: spec.answer,
                }),
                Err(err) => {
                    tracing::warn!(rule = spec.name, error = %err, "Skipping assistant rule");
                    None
                }
            }
        })
        .collect()
});

/// Names of the active rules in evaluation order.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|r| r.name).collect()
}

pub fn respond(query: &str, analytics: &Analytics, symbol: &str) -> Reply {
    for rule in RULES.iter() {
        if rule.triggers.iter().all(|re| re.is_match(query)) && (rule.applies)(analytics) {
            tracing::debug!(rule = rule.name, "Assistant rule matched");
            return Reply {
                icon: rule.icon,
                answer: (rule.answer)(analytics, symbol),
            };
        }
    }
    Reply {
        icon: "🤖",
        answer: fallback_text(),
    }
}
