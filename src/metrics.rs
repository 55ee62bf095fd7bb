use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Operational counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub entries_created: Arc<AtomicUsize>,
    pub entries_updated: Arc<AtomicUsize>,
    pub entries_deleted: Arc<AtomicUsize>,
    pub slug_collisions_resolved: Arc<AtomicUsize>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            entries_created: Arc::new(AtomicUsize::new(0)),
            entries_updated: Arc::new(AtomicUsize::new(0)),
            entries_deleted: Arc::new(AtomicUsize::new(0)),
            slug_collisions_resolved: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_created(&self) {
        self.entries_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_updated(&self) {
        self.entries_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_deleted(&self) {
        self.entries_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_slug_collisions(&self) {
        self.slug_collisions_resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            entries_created: self.entries_created.load(Ordering::Relaxed),
            entries_updated: self.entries_updated.load(Ordering::Relaxed),
            entries_deleted: self.entries_deleted.load(Ordering::Relaxed),
            slug_collisions_resolved: self.slug_collisions_resolved.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub entries_created: usize,
    pub entries_updated: usize,
    pub entries_deleted: usize,
    pub slug_collisions_resolved: usize,
    pub uptime_seconds: u64,
}
