//! Ordering of byte-string keys.
//!
//! Keys compare as unsigned byte sequences, so a proper prefix sorts before
//! any longer key it prefixes.

use std::cmp::Ordering;

/// Owned key as stored inside a node.
pub(crate) type Key = Vec<u8>;

/// Result of looking a key up in a node's sorted key run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// The key is stored at this index.
    Found(usize),
    /// The key is absent; this is the first index holding a larger key,
    /// which is also the child to descend into.
    Missing(usize),
}

#[inline]
pub(crate) fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// First index whose key is greater than or equal to `key`.
#[inline]
pub(crate) fn lower_bound(keys: &[Key], key: &[u8]) -> usize {
    keys.partition_point(|probe| compare(probe, key) == Ordering::Less)
}

pub(crate) fn locate(keys: &[Key], key: &[u8]) -> Slot {
    let idx = lower_bound(keys, key);
    match keys.get(idx) {
        Some(probe) if compare(probe, key) == Ordering::Equal => Slot::Found(idx),
        _ => Slot::Missing(idx),
    }
}
