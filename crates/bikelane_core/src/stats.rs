//! Registry operation counters.
//!
//! Counters are atomic so read-only operations such as
//! [`get_status`](crate::SegmentRegistry::get_status) can record themselves
//! through a shared reference.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Aggregate operation counts for a registry.
#[derive(Debug, Default)]
pub struct RegistryStats {
    /// Segments added under a new name.
    segments_added: AtomicU64,
    /// Adds that overwrote an existing segment.
    segments_replaced: AtomicU64,
    /// Successful status updates.
    status_updates: AtomicU64,
    /// Successful status lookups.
    status_lookups: AtomicU64,
    /// Operations that failed with an error.
    rejected: AtomicU64,
}

impl RegistryStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_add(&self, replaced: bool) {
        if replaced {
            self.segments_replaced.fetch_add(1, Ordering::Relaxed);
        } else {
            self.segments_added.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_status_update(&self) {
        self.status_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_status_lookup(&self) {
        self.status_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of segments added under a new name.
    pub fn segments_added(&self) -> u64 {
        self.segments_added.load(Ordering::Relaxed)
    }

    /// Returns the number of adds that overwrote an existing segment.
    pub fn segments_replaced(&self) -> u64 {
        self.segments_replaced.load(Ordering::Relaxed)
    }

    /// Returns the number of successful status updates.
    pub fn status_updates(&self) -> u64 {
        self.status_updates.load(Ordering::Relaxed)
    }

    /// Returns the number of successful status lookups.
    pub fn status_lookups(&self) -> u64 {
        self.status_lookups.load(Ordering::Relaxed)
    }

    /// Returns the number of failed operations.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            segments_added: self.segments_added(),
            segments_replaced: self.segments_replaced(),
            status_updates: self.status_updates(),
            status_lookups: self.status_lookups(),
            rejected: self.rejected(),
        }
    }
}

/// A point-in-time copy of [`RegistryStats`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    /// Segments added under a new name.
    pub segments_added: u64,
    /// Adds that overwrote an existing segment.
    pub segments_replaced: u64,
    /// Successful status updates.
    pub status_updates: u64,
    /// Successful status lookups.
    pub status_lookups: u64,
    /// Operations that failed with an error.
    pub rejected: u64,
}
