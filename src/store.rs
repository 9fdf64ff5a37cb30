// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction persistence and the in-memory collection that owns it.
//!
//! The whole collection is stored as one JSON blob under a single key and is
//! rewritten in full on every change. Reads that fail, or blobs that do not
//! decode, leave the collection empty instead of surfacing an error. The
//! undecodable text is copied to [`TRANSACTIONS_BACKUP_KEY`] before anything
//! can overwrite it; if that copy cannot be made, saving stays disabled.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use crate::analytics::{compute_analytics, Analytics};
use crate::error::Result;
use crate::models::{NewTransaction, Transaction, TransactionType};

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const TRANSACTIONS_BACKUP_KEY: &str = "transactions_unreadable";

/// Get/set string storage keyed by name.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the persisted collection. `None` when nothing has been stored yet.
pub fn load_transactions<S: BlobStore>(backend: &S) -> Result<Option<Vec<Transaction>>> {
    match backend.get(TRANSACTIONS_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_transactions<S: BlobStore>(backend: &mut S, transactions: &[Transaction]) -> Result<()> {
    let raw = serde_json::to_string(transactions)?;
    backend.set(TRANSACTIONS_KEY, &raw)
}

/// Which records a history listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(kind) => t.r#type == *kind,
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        Ok(TypeFilter::Only(s.parse()?))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: usize,
    pub skipped: usize,
}

/// Copies the raw stored blob aside. `true` once the copy is safely written.
fn back_up_unreadable<S: BlobStore>(backend: &mut S) -> bool {
    let raw = match backend.get(TRANSACTIONS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return true,
        Err(err) => {
            warn!(error = %err, "Cannot read stored transactions for backup");
            return false;
        }
    };
    match backend.set(TRANSACTIONS_BACKUP_KEY, &raw) {
        Ok(()) => {
            warn!(key = TRANSACTIONS_BACKUP_KEY, "Kept unreadable transactions under backup key");
            true
        }
        Err(err) => {
            warn!(error = %err, "Failed to back up unreadable transactions");
            false
        }
    }
}

/// Newest-first transaction list backed by a [`BlobStore`].
pub struct TransactionStore<S: BlobStore> {
    backend: S,
    transactions: Vec<Transaction>,
    /// Set when stored data failed to load and could not be backed up.
    read_only: bool,
}

impl<S: BlobStore> TransactionStore<S> {
    pub fn load(mut backend: S) -> Self {
        let mut read_only = false;
        let transactions = match load_transactions(&backend) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "Failed to load transactions, starting empty");
                read_only = !back_up_unreadable(&mut backend);
                Vec::new()
            }
        };
        debug!(count = transactions.len(), read_only, "Loaded transactions");
        Self {
            backend,
            transactions,
            read_only,
        }
    }

    /// Whether saves are refused to protect stored data that failed to load.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// The first `n` records, i.e. the most recently added.
    pub fn recent(&self, n: usize) -> &[Transaction] {
        &self.transactions[..n.min(self.transactions.len())]
    }

    pub fn filtered(&self, filter: TypeFilter) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| filter.matches(t))
    }

    pub fn analytics(&self, now: DateTime<Utc>) -> Analytics {
        compute_analytics(&self.transactions, now)
    }

    /// Validates and records a transaction, stamping it with `now`.
    pub fn add(&mut self, new: NewTransaction, now: DateTime<Utc>) -> Result<Transaction> {
        new.validate()?;
        let timestamp = now.timestamp_millis();
        let description = new.resolved_description();
        let transaction = Transaction {
            id: self.next_id(timestamp),
            amount: new.amount,
            category: new.category,
            r#type: new.r#type,
            description,
            date: new.date.unwrap_or_else(|| now.naive_utc()),
            timestamp,
        };
        debug!(id = %transaction.id, amount = %transaction.amount, "Adding transaction");
        self.transactions.insert(0, transaction.clone());
        self.persist();
        Ok(transaction)
    }

    /// Adds already-identified records, skipping ids that are present, and
    /// persists once. Existing records keep their order; each new record goes
    /// in front of the first record created before it.
    pub fn merge(&mut self, incoming: Vec<Transaction>) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        let mut ids: HashSet<String> = self.transactions.iter().map(|t| t.id.clone()).collect();
        let mut fresh = Vec::new();
        for t in incoming {
            if !ids.insert(t.id.clone()) {
                outcome.skipped += 1;
                continue;
            }
            fresh.push(t);
        }
        outcome.added = fresh.len();
        // Stable sort: equal timestamps keep their incoming order.
        fresh.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        for t in fresh {
            let at = self
                .transactions
                .iter()
                .position(|e| e.timestamp < t.timestamp)
                .unwrap_or(self.transactions.len());
            self.transactions.insert(at, t);
        }
        if outcome.added > 0 {
            self.persist();
        }
        debug!(added = outcome.added, skipped = outcome.skipped, "Merged transactions");
        outcome
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            debug!(id, "Deleted transaction");
            self.persist();
        }
        removed
    }

    /// Writes the full collection. Failures are logged and the in-memory state kept.
    pub fn persist(&mut self) {
        if self.read_only {
            error!("Not saving: stored transactions failed to load and were not backed up");
            return;
        }
        if let Err(err) = save_transactions(&mut self.backend, &self.transactions) {
            error!(error = %err, "Failed to save transactions");
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    fn next_id(&self, timestamp: i64) -> String {
        let mut candidate = timestamp;
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}
