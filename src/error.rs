// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the library layer.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Category, TransactionType};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown transaction type '{0}', expected income or expense")]
    UnknownType(String),

    #[error("Category '{category}' cannot be used for {kind} transactions")]
    CategoryMismatch {
        category: Category,
        kind: TransactionType,
    },

    #[error("Invalid date '{0}', expected YYYY-MM-DD or an ISO date-time")]
    InvalidDate(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
