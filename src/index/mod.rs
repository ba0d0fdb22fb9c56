//! Index Module
//!
//! Ordered in-memory store for product records.
//!
//! ## Responsibilities
//! - Keep records ordered by product code
//! - Insert / search / remove in O(height)
//! - In-order traversal for inspection and tests
//!
//! ## Data Structure Choice
//! A plain binary search tree, deliberately unbalanced:
//! - Matches the access pattern of a small catalog
//! - Simple recursive descent, no parent pointers, no arena
//! - Worst-case O(n) height under adversarial insertion order is an
//!   accepted limitation, not something this module tries to hide

mod tree;

pub use tree::OrderedIndex;

/// A product record, immutable once constructed
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique integer key
    pub code: i64,

    /// Product name (content validated at the protocol layer)
    pub name: String,

    /// Non-negative price
    pub price: f64,
}

impl Record {
    pub fn new(code: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            code,
            name: name.into(),
            price,
        }
    }
}
