// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, TransactionType};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let mut data = Vec::new();
    for kind in [TransactionType::Expense, TransactionType::Income] {
        for c in Category::for_type(kind) {
            data.push(vec![kind.to_string(), c.label()]);
        }
    }
    println!("{}", pretty_table(&["Type", "Category"], data));
    Ok(())
}
