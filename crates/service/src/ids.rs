//! Identifier generation for newly created records.
//!
//! Ids are opaque, non-empty strings of at most [`MAX_ID_LEN`] characters.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// Upper bound on the length of a generated id.
pub const MAX_ID_LEN: usize = 19;

/// Source of fresh record identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Draws a random 63-bit value and renders it in decimal.
///
/// `i64::MAX` has 19 digits, so the output always fits [`MAX_ID_LEN`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let n: u64 = rand::thread_rng().gen_range(1..=i64::MAX as u64);
        n.to_string()
    }
}

/// Monotonic counter, handy when tests need predictable ids.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self { next: AtomicU64::new(first) }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self { Self::starting_at(1) }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
