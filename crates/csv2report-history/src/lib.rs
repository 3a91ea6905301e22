// csv2report-history - Bounded retention of past ingest summaries
//
// A capacity-bounded, recency-ordered collection of named aggregation
// results. Insertion and eviction happen as one atomic step under an
// exclusive write lock; lookups and listings share a read lock.

mod entry;

pub use entry::{EntryId, HistoryEntry, NotFoundError};

use chrono::Utc;
use csv2report_core::SummaryResult;
use parking_lot::RwLock;
use std::collections::VecDeque;
use tracing::debug;

/// Recency-ordered store of the last N ingests
///
/// The capacity is fixed at construction (read once from configuration) and
/// never exceeded: any insertion beyond it evicts from the tail before the
/// write lock is released, so no reader observes more than N entries or a
/// partially evicted state. Eviction is strictly by insertion recency, not
/// access frequency.
///
/// The store is an explicitly constructed, injected object; there is no
/// ambient singleton.
#[derive(Debug)]
pub struct HistoryStore {
    max_entries: usize,
    // Newest at the front; eviction pops from the back.
    entries: RwLock<VecDeque<HistoryEntry>>,
}

impl HistoryStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            entries: RwLock::new(VecDeque::new()),
        }
    }

    /// Retain a new ingest result, evicting beyond the capacity bound.
    ///
    /// Returns a clone of the created entry.
    pub fn insert(&self, name: String, row_count: u64, summary: SummaryResult) -> HistoryEntry {
        let entry = HistoryEntry {
            id: EntryId::generate(),
            name,
            created_at: Utc::now(),
            row_count,
            summary,
        };

        let mut entries = self.entries.write();
        entries.push_front(entry.clone());
        while entries.len() > self.max_entries {
            if let Some(evicted) = entries.pop_back() {
                debug!(id = %evicted.id, name = %evicted.name, "evicted history entry beyond retention bound");
            }
        }
        entry
    }

    /// Entries most-recent-first, at most `limit`.
    pub fn list(&self, limit: usize) -> Vec<HistoryEntry> {
        self.entries.read().iter().take(limit).cloned().collect()
    }

    /// Entries most-recent-first, up to the retention bound.
    pub fn list_default(&self) -> Vec<HistoryEntry> {
        self.list(self.max_entries)
    }

    /// Exact-id lookup; evicted ids are indistinguishable from unknown ones.
    pub fn get(&self, id: &EntryId) -> Result<HistoryEntry, NotFoundError> {
        self.entries
            .read()
            .iter()
            .find(|entry| &entry.id == id)
            .cloned()
            .ok_or_else(|| NotFoundError { id: id.clone() })
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
