// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rule-based observations over computed [`Analytics`].

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::{Analytics, MS_PER_DAY};
use crate::models::{Category, Transaction};
use crate::utils::{fmt_money, DEFAULT_CURRENCY_SYMBOL};

pub const WEEK_MS: i64 = 7 * MS_PER_DAY;

/// More records than this in the trailing week counts as a busy week.
pub const BUSY_WEEK_THRESHOLD: usize = 5;

/// Food above this fraction of total expense triggers a warning.
pub fn food_share_limit() -> Decimal {
    Decimal::new(3, 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    Surplus { amount: Decimal },
    Deficit { amount: Decimal },
    TopCategory { category: Category, amount: Decimal },
    DailyAverage { amount: Decimal },
    BusyWeek { count: usize },
    FoodHeavy,
}

impl Insight {
    pub fn icon(&self) -> &'static str {
        match self {
            Insight::Surplus { .. } => "💰",
            Insight::Deficit { .. } => "⚠️",
            Insight::TopCategory { .. } => "📊",
            Insight::DailyAverage { .. } => "📈",
            Insight::BusyWeek { .. } => "🔥",
            Insight::FoodHeavy => "🍔",
        }
    }

    pub fn render(&self, symbol: &str) -> String {
        let body = match self {
            Insight::Surplus { amount } => format!(
                "Nice work! Your balance is positive at {}",
                fmt_money(amount, symbol)
            ),
            Insight::Deficit { amount } => {
                format!("You are in deficit by {}", fmt_money(amount, symbol))
            }
            Insight::TopCategory { category, amount } => format!(
                "Your highest spending category is {} ({})",
                category,
                fmt_money(amount, symbol)
            ),
            Insight::DailyAverage { amount } => format!(
                "You spend {} per day on average",
                fmt_money(amount, symbol)
            ),
            Insight::BusyWeek { count } => {
                format!("You recorded {} transactions this week!", count)
            }
            Insight::FoodHeavy => {
                "Food spending is high. Planning meals ahead could help you save.".to_string()
            }
        };
        format!("{} {}", self.icon(), body)
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_CURRENCY_SYMBOL))
    }
}

/// Records created less than seven days before `now`. Exactly seven days old is excluded.
pub fn count_recent(transactions: &[Transaction], now: DateTime<Utc>) -> usize {
    let now_ms = now.timestamp_millis();
    transactions
        .iter()
        .filter(|t| now_ms.saturating_sub(t.timestamp) < WEEK_MS)
        .count()
}

/// Every insight whose condition holds, in a fixed order.
pub fn collect_insights(
    analytics: &Analytics,
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Vec<Insight> {
    let mut out = Vec::new();

    if analytics.balance > Decimal::ZERO {
        out.push(Insight::Surplus {
            amount: analytics.balance,
        });
    } else if analytics.balance < Decimal::ZERO {
        out.push(Insight::Deficit {
            amount: analytics.balance.abs(),
        });
    }

    if let Some(category) = &analytics.highest_spending_category {
        out.push(Insight::TopCategory {
            category: category.clone(),
            amount: analytics.category_amount(category),
        });
    }

    if analytics.daily_average > Decimal::ZERO {
        out.push(Insight::DailyAverage {
            amount: analytics.daily_average,
        });
    }

    let recent = count_recent(transactions, now);
    if recent > BUSY_WEEK_THRESHOLD {
        out.push(Insight::BusyWeek { count: recent });
    }

    if analytics.category_amount(&Category::Food) > analytics.total_expense * food_share_limit() {
        out.push(Insight::FoodHeavy);
    }

    out
}

/// Insight lines rendered with the default currency symbol.
pub fn derive_insights(
    analytics: &Analytics,
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Vec<String> {
    collect_insights(analytics, transactions, now)
        .iter()
        .map(ToString::to_string)
        .collect()
}
