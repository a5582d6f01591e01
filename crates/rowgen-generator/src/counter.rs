//! Shared identifier counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL_IDS: OnceLock<Arc<IdCounter>> = OnceLock::new();

/// Monotonically increasing identifier source.
///
/// The first value handed out is `1`. Every call to [`IdCounter::next_id`]
/// is a single atomic fetch-and-add, so one counter can be shared by
/// concurrent builders without handing out the same value twice.
#[derive(Debug, Default)]
pub struct IdCounter {
    last: AtomicU64,
}

impl IdCounter {
    /// Create a counter whose first identifier is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter whose first identifier is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            last: AtomicU64::new(first.saturating_sub(1)),
        }
    }

    /// The process-wide counter.
    ///
    /// Every clone refers to the same counter; it is never reset.
    pub fn global() -> Arc<IdCounter> {
        GLOBAL_IDS
            .get_or_init(|| Arc::new(IdCounter::new()))
            .clone()
    }

    /// Take the next identifier.
    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The most recently issued identifier (`0` before the first call).
    pub fn last_issued(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }

    /// Rewind the counter so the next identifier is `1`.
    ///
    /// Intended for counters owned by a single test or builder; the global
    /// counter is never reset.
    pub fn reset(&self) {
        self.last.store(0, Ordering::SeqCst);
    }
}
