//! Bucket chains of index entries
//!
//! Each bucket of the directory's table is a singly linked chain of
//! `IndexEntry` links. A record's name produces one entry per word token,
//! so several entries in the table (and even in one chain) may reference
//! the same record.
//!
//! Ownership replaces the raw-pointer chain of a classic separate-chaining
//! table: the bucket owns its head entry and every entry owns its
//! successor, so unlinking an entry drops exactly that entry.

use rolodex_core::ContactHandle;
use std::sync::Arc;

/// One (bucket key, record) link in a chain.
#[derive(Debug)]
pub(crate) struct IndexEntry {
    key: usize,
    record: ContactHandle,
    next: Option<Box<IndexEntry>>,
}

impl IndexEntry {
    /// Bucket index this entry was filed under, in `[0, TABLE_SIZE)`.
    pub(crate) fn key(&self) -> usize {
        self.key
    }

    /// The record this entry references.
    pub(crate) fn record(&self) -> &ContactHandle {
        &self.record
    }
}

/// A bucket: the head of a singly linked chain, possibly empty.
#[derive(Debug, Default)]
pub(crate) struct Bucket {
    head: Option<Box<IndexEntry>>,
}

impl Bucket {
    /// Prepend a new entry for `record` to the chain. O(1).
    pub(crate) fn push_front(&mut self, key: usize, record: ContactHandle) {
        self.head = Some(Box::new(IndexEntry {
            key,
            record,
            next: self.head.take(),
        }));
    }

    /// Unlink the first entry whose record is `record` itself (pointer
    /// identity, not name equality). Returns whether an entry was removed.
    pub(crate) fn remove_first(&mut self, record: &ContactHandle) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(entry) if Arc::ptr_eq(&entry.record, record) => {
                    let next = entry.next.take();
                    *cursor = next;
                    return true;
                }
                Some(entry) => cursor = &mut entry.next,
            }
        }
    }

    /// Iterate the chain from head to tail.
    pub(crate) fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            next: self.head.as_deref(),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.iter().count()
    }
}

/// Head-to-tail iterator over a bucket's chain.
pub(crate) struct ChainIter<'a> {
    next: Option<&'a IndexEntry>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a IndexEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}
