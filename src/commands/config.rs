// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::BlobStore;
use crate::utils::{get_currency_symbol, set_currency_symbol};
use anyhow::{bail, Result};

pub fn handle<S: BlobStore>(backend: &mut S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("currency", sub)) => match sub.get_one::<String>("symbol") {
            Some(sym) => {
                if sym.trim().is_empty() {
                    bail!("Currency symbol must not be empty");
                }
                set_currency_symbol(backend, sym)?;
                println!("Currency symbol set to '{}'", sym.trim());
            }
            None => println!("{}", get_currency_symbol(backend)?),
        },
        _ => {}
    }
    Ok(())
}
