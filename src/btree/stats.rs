use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Snapshot of tree statistics at a point in time.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BTreeStatsSnapshot {
    /// Number of leaf nodes reached by searches
    pub leaf_searches: u64,
    /// Number of internal nodes descended through by searches
    pub internal_searches: u64,
    /// Number of leaf splits performed
    pub leaf_splits: u64,
    /// Number of internal node splits performed
    pub internal_splits: u64,
    /// Number of splits that grew a new root
    pub root_splits: u64,
    /// Number of leaf merges performed
    pub leaf_merges: u64,
    /// Number of internal node merges performed
    pub internal_merges: u64,
    /// Number of keys rotated in from a sibling
    pub borrows: u64,
    /// Number of times an empty internal root was replaced by its only child
    pub root_collapses: u64,
}

/// Statistics counters for tree operations.
///
/// Counters use relaxed atomics so read-only searches can record through
/// a shared reference.
#[derive(Default, Debug)]
pub struct BTreeStats {
    leaf_searches: AtomicU64,
    internal_searches: AtomicU64,
    leaf_splits: AtomicU64,
    internal_splits: AtomicU64,
    root_splits: AtomicU64,
    leaf_merges: AtomicU64,
    internal_merges: AtomicU64,
    borrows: AtomicU64,
    root_collapses: AtomicU64,
}

impl BTreeStats {
    /// Returns the current count of leaf searches.
    pub fn leaf_searches(&self) -> u64 {
        self.leaf_searches.load(AtomicOrdering::Relaxed)
    }

    /// Returns the current count of internal node searches.
    pub fn internal_searches(&self) -> u64 {
        self.internal_searches.load(AtomicOrdering::Relaxed)
    }

    /// Returns the current count of leaf splits.
    pub fn leaf_splits(&self) -> u64 {
        self.leaf_splits.load(AtomicOrdering::Relaxed)
    }

    /// Returns the current count of internal node splits.
    pub fn internal_splits(&self) -> u64 {
        self.internal_splits.load(AtomicOrdering::Relaxed)
    }

    /// Returns the number of splits that created a new root.
    pub fn root_splits(&self) -> u64 {
        self.root_splits.load(AtomicOrdering::Relaxed)
    }

    /// Returns the current count of leaf merges.
    pub fn leaf_merges(&self) -> u64 {
        self.leaf_merges.load(AtomicOrdering::Relaxed)
    }

    /// Returns the current count of internal node merges.
    pub fn internal_merges(&self) -> u64 {
        self.internal_merges.load(AtomicOrdering::Relaxed)
    }

    /// Returns the number of sibling borrows.
    pub fn borrows(&self) -> u64 {
        self.borrows.load(AtomicOrdering::Relaxed)
    }

    /// Returns the number of root collapses.
    pub fn root_collapses(&self) -> u64 {
        self.root_collapses.load(AtomicOrdering::Relaxed)
    }

    pub(crate) fn inc_leaf_searches(&self) {
        self.leaf_searches.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(crate) fn inc_internal_searches(&self) {
        self.internal_searches.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(crate) fn inc_leaf_splits(&self) {
        self.leaf_splits.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(crate) fn inc_internal_splits(&self) {
        self.internal_splits.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(crate) fn inc_root_splits(&self) {
        self.root_splits.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(crate) fn inc_leaf_merges(&self) {
        self.leaf_merges.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(crate) fn inc_internal_merges(&self) {
        self.internal_merges.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(crate) fn inc_borrows(&self) {
        self.borrows.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(crate) fn inc_root_collapses(&self) {
        self.root_collapses.fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// Creates a point-in-time snapshot of all statistics.
    pub fn snapshot(&self) -> BTreeStatsSnapshot {
        BTreeStatsSnapshot {
            leaf_searches: self.leaf_searches(),
            internal_searches: self.internal_searches(),
            leaf_splits: self.leaf_splits(),
            internal_splits: self.internal_splits(),
            root_splits: self.root_splits(),
            leaf_merges: self.leaf_merges(),
            internal_merges: self.internal_merges(),
            borrows: self.borrows(),
            root_collapses: self.root_collapses(),
        }
    }

    /// Emits current statistics to the tracing infrastructure.
    pub fn emit_tracing(&self) {
        let snapshot = self.snapshot();
        tracing::info!(
            target: "byte_btree::stats",
            leaf_searches = snapshot.leaf_searches,
            internal_searches = snapshot.internal_searches,
            leaf_splits = snapshot.leaf_splits,
            internal_splits = snapshot.internal_splits,
            root_splits = snapshot.root_splits,
            leaf_merges = snapshot.leaf_merges,
            internal_merges = snapshot.internal_merges,
            borrows = snapshot.borrows,
            root_collapses = snapshot.root_collapses,
            "btree stats snapshot"
        );
    }
}

impl Clone for BTreeStats {
    fn clone(&self) -> Self {
        let snap = self.snapshot();
        Self {
            leaf_searches: AtomicU64::new(snap.leaf_searches),
            internal_searches: AtomicU64::new(snap.internal_searches),
            leaf_splits: AtomicU64::new(snap.leaf_splits),
            internal_splits: AtomicU64::new(snap.internal_splits),
            root_splits: AtomicU64::new(snap.root_splits),
            leaf_merges: AtomicU64::new(snap.leaf_merges),
            internal_merges: AtomicU64::new(snap.internal_merges),
            borrows: AtomicU64::new(snap.borrows),
            root_collapses: AtomicU64::new(snap.root_collapses),
        }
    }
}
