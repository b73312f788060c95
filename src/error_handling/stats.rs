//! Inspection outcome statistics.
//!
//! This module provides thread-safe counters for inspection outcomes. They are
//! observation-only: nothing in the inspection path reads them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorKind;

/// Thread-safe inspection statistics tracker.
///
/// Uses atomic counters so it can be shared across request handlers with `Arc`.
/// Every `ErrorKind` is initialized to zero on creation.
pub struct InspectionStats {
    total: AtomicUsize,
    succeeded: AtomicUsize,
    redirected: AtomicUsize,
    redirects_followed: AtomicUsize,
    failures: HashMap<ErrorKind, AtomicUsize>,
}

impl InspectionStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in ErrorKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        InspectionStats {
            total: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            redirected: AtomicUsize::new(0),
            redirects_followed: AtomicUsize::new(0),
            failures,
        }
    }

    /// Records a successful inspection that followed `redirects` hops.
    pub fn record_success(&self, redirects: usize) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.succeeded.fetch_add(1, Ordering::Relaxed);
        if redirects > 0 {
            self.redirected.fetch_add(1, Ordering::Relaxed);
            self.redirects_followed
                .fetch_add(redirects, Ordering::Relaxed);
        }
    }

    /// Records a failed inspection.
    pub fn record_failure(&self, kind: ErrorKind) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in InspectionStats initialization.",
                kind
            );
        }
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::Relaxed)
    }

    /// Number of successful inspections with at least one redirect.
    pub fn redirected(&self) -> usize {
        self.redirected.load(Ordering::Relaxed)
    }

    /// Sum of redirect hops across all successful inspections.
    pub fn redirects_followed(&self) -> usize {
        self.redirects_followed.load(Ordering::Relaxed)
    }

    pub fn failure_count(&self, kind: ErrorKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn total_failures(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }
}

impl Default for InspectionStats {
    fn default() -> Self {
        Self::new()
    }
}
