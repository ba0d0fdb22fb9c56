//! Catalog Module
//!
//! The shared context object: owns the ordered index and the single
//! coarse lock that serializes all access to it. One instance is shared
//! by every connection handler; it is always passed explicitly, never a
//! process-wide singleton.
//!
//! ## Concurrency Model
//!
//! All three operations (register/lookup/remove) take the same exclusive
//! lock; there is no reader/writer split, so lookups serialize with
//! mutations. The critical section is exactly the index call inside
//! [`Catalog::execute`] — the guard is dropped before any response is
//! formatted or written. Cross-connection ordering is whatever order the
//! lock grants; no fairness is promised.

use parking_lot::Mutex;

use crate::error::{CatalogError, Result};
use crate::index::{OrderedIndex, Record};
use crate::protocol::Command;

/// What a successfully executed command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Register succeeded
    Registered,

    /// Lookup found the record
    Found(Record),

    /// Remove succeeded
    Removed,
}

/// Shared product catalog guarded by a single exclusive lock
#[derive(Default)]
pub struct Catalog {
    index: Mutex<OrderedIndex>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a decoded command against the index
    ///
    /// The lock is held only for the duration of the index call. Misses
    /// and duplicates come back as typed errors for the connection layer
    /// to map onto wire responses.
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::Register { code, name, price } => {
                let mut index = self.index.lock();
                if index.insert(code, name, price) {
                    Ok(Outcome::Registered)
                } else {
                    Err(CatalogError::DuplicateCode(code))
                }
            }
            Command::Lookup { code } => {
                let index = self.index.lock();
                match index.search(code) {
                    Some(record) => Ok(Outcome::Found(record.clone())),
                    None => Err(CatalogError::CodeNotFound),
                }
            }
            Command::Remove { code } => {
                let mut index = self.index.lock();
                if index.remove(code) {
                    Ok(Outcome::Removed)
                } else {
                    Err(CatalogError::CodeNotFound)
                }
            }
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.index.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.lock().is_empty()
    }

    /// Snapshot of all records in ascending code order (for inspection
    /// and tests; not part of the wire protocol)
    pub fn snapshot(&self) -> Vec<Record> {
        self.index.lock().inorder()
    }
}
