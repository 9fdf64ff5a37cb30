// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Summary statistics derived from the transaction list.
//!
//! Everything here is recomputed from scratch on each call. The clock is a
//! parameter so the same input always yields the same [`Analytics`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Transaction};

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// `YYYY-MM`
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    /// Expense totals only; income never lands here.
    pub category_breakdown: BTreeMap<Category, Decimal>,
    pub daily_average: Decimal,
    pub highest_spending_category: Option<Category>,
    pub transaction_count: usize,
    pub monthly_trend: Vec<MonthlyPoint>,
}

impl Analytics {
    pub fn category_amount(&self, category: &Category) -> Decimal {
        self.category_breakdown
            .get(category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Breakdown entries, largest first.
    pub fn breakdown_by_amount(&self) -> Vec<(Category, Decimal)> {
        let mut items: Vec<_> = self
            .category_breakdown
            .iter()
            .map(|(c, a)| (c.clone(), *a))
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1));
        items
    }

    /// Percentage of total expense spent in `category`; `None` with no expenses.
    pub fn share_of_expense(&self, category: &Category) -> Option<Decimal> {
        if self.total_expense.is_zero() {
            return None;
        }
        Some(self.category_amount(category) * Decimal::ONE_HUNDRED / self.total_expense)
    }

    /// The two most recent months of the trend, older first.
    pub fn last_two_months(&self) -> Option<(&MonthlyPoint, &MonthlyPoint)> {
        match self.monthly_trend.as_slice() {
            [.., prev, last] => Some((prev, last)),
            _ => None,
        }
    }
}

pub fn compute_analytics(transactions: &[Transaction], now: DateTime<Utc>) -> Analytics {
    if transactions.is_empty() {
        return Analytics::default();
    }

    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut category_breakdown: BTreeMap<Category, Decimal> = BTreeMap::new();
    let mut first_seen: Vec<Category> = Vec::new();
    let mut monthly: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    let mut oldest = i64::MAX;

    for t in transactions {
        oldest = oldest.min(t.timestamp);
        let entry = monthly
            .entry(t.date.format("%Y-%m").to_string())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        if t.is_expense() {
            total_expense += t.amount;
            entry.1 += t.amount;
            let slot = category_breakdown
                .entry(t.category.clone())
                .or_insert_with(|| {
                    first_seen.push(t.category.clone());
                    Decimal::ZERO
                });
            *slot += t.amount;
        } else {
            total_income += t.amount;
            entry.0 += t.amount;
        }
    }

    // Strict comparison keeps the earliest-seen category on ties.
    let mut highest: Option<(&Category, Decimal)> = None;
    for c in &first_seen {
        let amount = category_breakdown[c];
        if highest.is_none_or(|(_, best)| amount > best) {
            highest = Some((c, amount));
        }
    }

    // Saturating: a corrupt timestamp must not overflow.
    let elapsed_days = Decimal::from(now.timestamp_millis().saturating_sub(oldest))
        / Decimal::from(MS_PER_DAY);
    let daily_average = total_expense / elapsed_days.max(Decimal::ONE);

    let monthly_trend = monthly
        .into_iter()
        .map(|(month, (income, expense))| MonthlyPoint {
            month,
            income,
            expense,
        })
        .collect();

    Analytics {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        category_breakdown,
        daily_average,
        highest_spending_category: highest.map(|(c, _)| c.clone()),
        transaction_count: transactions.len(),
        monthly_trend,
    }
}
