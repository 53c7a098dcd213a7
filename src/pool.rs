//! Bounded, lock-free pool of reusable [`Writer`]s.
//!
//! Encoding allocates only when a writer's buffer grows, so reusing writers
//! across calls amortizes allocation to near zero in steady state. The pool
//! is a fixed-capacity free-list backed by [`crossbeam_queue::ArrayQueue`]:
//! `acquire` and `release` are safe under arbitrary concurrent callers, and
//! no two concurrent acquires can receive the same writer.

use crate::writer::{Writer, INITIAL_CAPACITY};
use crossbeam_queue::ArrayQueue;
use std::sync::OnceLock;

/// Writers whose buffer grew beyond this capacity are dropped on release
/// instead of pooled, bounding steady-state memory.
pub const MAX_POOLED_CAPACITY: usize = 64 * 1024;

/// Slot count of the pool returned by [`WriterPool::shared`].
pub const DEFAULT_SLOTS: usize = 10;

/// A bounded store of released [`Writer`]s.
///
/// Total live writers never exceed the slot count plus the number of writers
/// currently held by callers: a full pool drops excess releases rather than
/// growing or blocking.
pub struct WriterPool {
    slots: ArrayQueue<Writer>,
}

impl WriterPool {
    /// Creates a pool with the given number of slots.
    ///
    /// # Panics
    ///
    /// Panics if `slots` is zero.
    pub fn new(slots: usize) -> Self {
        Self {
            slots: ArrayQueue::new(slots),
        }
    }

    /// Process-wide pool with [`DEFAULT_SLOTS`] slots, initialized on first
    /// use. Writers hold no external resources, so there is no teardown.
    pub fn shared() -> &'static WriterPool {
        static SHARED: OnceLock<WriterPool> = OnceLock::new();
        SHARED.get_or_init(|| WriterPool::new(DEFAULT_SLOTS))
    }

    /// Returns a previously released writer if one is available, else a fresh
    /// one with the default initial capacity.
    pub fn acquire(&self) -> Writer {
        self.slots
            .pop()
            .unwrap_or_else(|| Writer::with_capacity(INITIAL_CAPACITY))
    }

    /// Returns a writer to the pool.
    ///
    /// The writer is dropped instead when its buffer exceeds
    /// [`MAX_POOLED_CAPACITY`] or the pool is already full.
    pub fn release(&self, mut writer: Writer) {
        if writer.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        writer.reset();
        let _ = self.slots.push(writer);
    }

    /// Number of writers currently pooled.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool currently holds no writers.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
