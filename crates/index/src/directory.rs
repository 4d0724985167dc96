//! The contact directory: a fixed-size chained hash index over name words
//!
//! Every word of a contact's name gets its own entry in the table, so a
//! record is reachable through any single word of its name. Queries tally
//! one hit per entry encountered in the buckets their tokens hash to and
//! results come back in descending hit order.
//!
//! The table has `TABLE_SIZE` buckets and never resizes. The directory is
//! blind to record identity beyond the handle pointer: inserting two
//! records with identical names indexes both, independently.

use crate::chain::Bucket;
use crate::hash::bucket_for;
use crate::tokenizer::tokenize;
use rolodex_core::{ContactHandle, ContactRecord, TABLE_SIZE};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// QueryMatch
// ============================================================================

/// One ranked query result: a record and the number of index entries that
/// contributed to it.
#[derive(Debug, Clone)]
pub struct QueryMatch {
    /// The matched record.
    pub record: ContactHandle,
    /// Entries encountered for this record while scanning the query's
    /// buckets. Higher means more query words matched.
    pub hits: usize,
}

// ============================================================================
// Directory
// ============================================================================

/// Fixed-size hash index of contact records, chained per bucket.
///
/// Mutation takes `&mut self`; the directory is single-actor by design and
/// carries no internal synchronization.
#[derive(Debug)]
pub struct Directory {
    /// `TABLE_SIZE` chain heads, fixed for the directory's lifetime.
    buckets: Vec<Bucket>,
    /// Live entry count across all chains.
    entries: usize,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Create an empty directory with `TABLE_SIZE` buckets.
    pub fn new() -> Self {
        let mut buckets = Vec::with_capacity(TABLE_SIZE);
        buckets.resize_with(TABLE_SIZE, Bucket::default);
        Directory {
            buckets,
            entries: 0,
        }
    }

    /// Number of buckets in the table. Constant.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total live index entries across all chains.
    ///
    /// One entry per name token of every inserted, not-yet-deleted record.
    pub fn total_entries(&self) -> usize {
        self.entries
    }

    /// Whether the directory holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Index a record under every word token of its name.
    ///
    /// Tokens are taken in order with duplicates preserved; each one gets
    /// its own entry prepended to its bucket's chain. Always succeeds.
    pub fn insert(&mut self, record: ContactHandle) {
        let mut indexed = 0;
        for token in tokenize(record.name()) {
            let bucket = bucket_for(token);
            self.buckets[bucket].push_front(bucket, record.clone());
            indexed += 1;
        }
        self.entries += indexed;
        debug!(name = record.name(), entries = indexed, "indexed contact");
    }

    // ========================================================================
    // Ranked fetch
    // ========================================================================

    /// Fetch records matching `query`, ranked by descending hit count.
    ///
    /// Each query token's bucket chain is walked in full and every entry
    /// encountered counts one hit for its record, so chain collisions
    /// contribute hits exactly like true word matches. Distinct records are
    /// grouped by hit count with a counting sort; relative order within a
    /// hit-count group is unspecified. Zero-hit records never appear, and
    /// an empty or unmatched query yields an empty list.
    pub fn fetch_ranked(&self, query: &str) -> Vec<QueryMatch> {
        let mut tally: FxHashMap<*const ContactRecord, QueryMatch> = FxHashMap::default();
        for token in tokenize(query) {
            for entry in self.buckets[bucket_for(token)].iter() {
                tally
                    .entry(Arc::as_ptr(entry.record()))
                    .and_modify(|m| m.hits += 1)
                    .or_insert_with(|| QueryMatch {
                        record: entry.record().clone(),
                        hits: 1,
                    });
            }
        }
        if tally.is_empty() {
            return Vec::new();
        }

        // Counting sort keyed on hit count, emitted highest group first.
        let max_hits = tally.values().map(|m| m.hits).max().unwrap_or(0);
        let mut groups: Vec<Vec<QueryMatch>> = Vec::new();
        groups.resize_with(max_hits + 1, Vec::new);
        for (_, m) in tally {
            groups[m.hits].push(m);
        }

        let mut ranked = Vec::new();
        for group in groups.into_iter().rev() {
            ranked.extend(group);
        }
        ranked
    }

    /// Fetch matching records only, ranked by descending hit count.
    pub fn fetch_contacts(&self, query: &str) -> Vec<ContactHandle> {
        self.fetch_ranked(query)
            .into_iter()
            .map(|m| m.record)
            .collect()
    }

    // ========================================================================
    // Entry counting
    // ========================================================================

    /// Count index entries referencing exactly this record (pointer
    /// identity, not name equality) in the buckets of its own name tokens.
    ///
    /// Immediately after insertion this equals the record's name token
    /// count, provided the tokens hash to pairwise-distinct buckets; name
    /// tokens sharing one bucket are each counted by every such token's
    /// walk.
    pub fn entries_for(&self, record: &ContactHandle) -> usize {
        let mut count = 0;
        for token in tokenize(record.name()) {
            count += self.buckets[bucket_for(token)]
                .iter()
                .filter(|entry| Arc::ptr_eq(entry.record(), record))
                .count();
        }
        count
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Delete the top-ranked match for `query` from the index.
    ///
    /// The victim is the first result of [`fetch_ranked`], which need not
    /// be an exact name match. Its own name is re-tokenized and each token
    /// unlinks the first chain entry referencing the victim in that token's
    /// bucket, so repeated name words drain one entry per token. Returns
    /// `true` iff at least one entry was removed; an unmatched query is a
    /// `false`, never an error.
    ///
    /// [`fetch_ranked`]: Directory::fetch_ranked
    pub fn delete_contact(&mut self, query: &str) -> bool {
        let selected = match self.fetch_ranked(query).into_iter().next() {
            Some(m) => m.record,
            None => return false,
        };

        let mut removed = 0;
        for token in tokenize(selected.name()) {
            if self.buckets[bucket_for(token)].remove_first(&selected) {
                removed += 1;
            }
        }
        self.entries -= removed;
        debug!(name = selected.name(), removed, "deleted contact entries");
        removed > 0
    }
}

/// Input contract for bulk loading: the file-reading collaborator hands
/// over already-parsed records in source order.
impl Extend<ContactHandle> for Directory {
    fn extend<T: IntoIterator<Item = ContactHandle>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
