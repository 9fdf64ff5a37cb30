// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Icon shown for labels outside the known category set.
pub const FALLBACK_ICON: &str = "📌";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Category offered first when recording a transaction of this type.
    pub fn default_category(&self) -> Category {
        match self {
            TransactionType::Income => Category::Salary,
            TransactionType::Expense => Category::Food,
        }
    }

    /// Sign prefix used when rendering an amount of this type.
    pub fn sign(&self) -> char {
        match self {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::UnknownType(other.to_string())),
        }
    }
}

/// Stored as its lowercase label. Labels outside the known set decode to
/// [`Category::Unknown`] so one odd record never sinks the whole list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Utilities,
    Health,
    Salary,
    Investment,
    Other,
    Unknown(String),
}

static EXPENSE_CATEGORIES: [Category; 7] = [
    Category::Food,
    Category::Transport,
    Category::Entertainment,
    Category::Shopping,
    Category::Utilities,
    Category::Health,
    Category::Other,
];

static INCOME_CATEGORIES: [Category; 3] = [Category::Salary, Category::Investment, Category::Other];

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Health,
        Category::Salary,
        Category::Investment,
        Category::Other,
    ];

    /// Categories selectable for the given transaction type. `Other` is shared.
    pub fn for_type(kind: TransactionType) -> &'static [Category] {
        match kind {
            TransactionType::Expense => &EXPENSE_CATEGORIES,
            TransactionType::Income => &INCOME_CATEGORIES,
        }
    }

    /// Unknown labels are never valid for either type.
    pub fn allows(&self, kind: TransactionType) -> bool {
        Category::for_type(kind).contains(self)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Utilities => "utilities",
            Category::Health => "health",
            Category::Salary => "salary",
            Category::Investment => "investment",
            Category::Other => "other",
            Category::Unknown(label) => label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transport => "🚗",
            Category::Entertainment => "🎬",
            Category::Shopping => "🛍️",
            Category::Utilities => "💡",
            Category::Health => "🏥",
            Category::Salary => "💵",
            Category::Investment => "📈",
            Category::Other | Category::Unknown(_) => FALLBACK_ICON,
        }
    }

    /// Icon followed by the label, e.g. `🍔 food`.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse for user input: only the known labels are accepted.
impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .find(|c| c.as_str() == needle)
            .cloned()
            .ok_or(Error::UnknownCategory(needle))
    }
}

/// Lenient decode for stored labels.
impl From<String> for Category {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or(Category::Unknown(raw))
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        match c {
            Category::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Icon and label for an arbitrary category label. Unknown labels keep their
/// text and get the generic icon.
pub fn category_label(raw: &str) -> String {
    Category::from(raw.to_string()).label()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub category: Category,
    pub r#type: TransactionType,
    pub description: String,
    #[serde(with = "iso_datetime")]
    pub date: NaiveDateTime,
    /// Record creation time in epoch milliseconds.
    pub timestamp: i64,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.r#type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.r#type == TransactionType::Expense
    }

    /// Same checks as recording a new transaction: amount and category fit.
    pub fn validate(&self) -> Result<()> {
        NewTransaction::new(self.amount, self.r#type, self.category.clone()).validate()
    }
}

/// User input for a transaction before it gets an id and creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub category: Category,
    pub r#type: TransactionType,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
}

impl NewTransaction {
    pub fn new(amount: Decimal, r#type: TransactionType, category: Category) -> Self {
        Self {
            amount,
            category,
            r#type,
            description: None,
            date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(Error::NegativeAmount(self.amount));
        }
        if !self.category.allows(self.r#type) {
            return Err(Error::CategoryMismatch {
                category: self.category.clone(),
                kind: self.r#type,
            });
        }
        Ok(())
    }

    /// Description as stored: the trimmed user text, or the category name.
    pub fn resolved_description(&self) -> String {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.category.to_string())
    }
}

pub(crate) mod iso_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        crate::utils::parse_datetime(&raw).map_err(serde::de::Error::custom)
    }
}
