//! Identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic user id source.
///
/// Seeded from the wall clock in milliseconds, then strictly increasing, so
/// two signups in the same millisecond still get distinct ids.
#[derive(Debug)]
pub struct UserIdGenerator {
    last: AtomicU64,
}

impl UserIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Generator whose next id is at least `floor + 1`.
    pub fn starting_at(floor: u64) -> Self {
        Self {
            last: AtomicU64::new(floor),
        }
    }

    pub fn next_id(&self) -> u64 {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev.saturating_add(1));
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}

impl Default for UserIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh booking id, `BK-` followed by a random UUID.
pub fn new_booking_id() -> String {
    format!("BK-{}", uuid::Uuid::new_v4().simple())
}
