//! Insertion-ordered address book.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::collections::HashMap;
use std::slice::Chunks;

/// An insertion-ordered mapping from contact name to [`Record`].
///
/// Records keep the order they were first added in; re-adding a name
/// replaces the record in place without moving it (last write wins, no
/// merge). Lookups go through an exact-name index, iteration and search
/// walk the ordered list. The ordering contract is explicit here rather
/// than borrowed from any library map type.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record under its name.
    ///
    /// A record with the same name is replaced, keeping its position in
    /// the book. Memory only; persistence is a separate, explicit step.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name.as_str()) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index
                    .insert(record.name.as_str().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    /// Exact-name lookup, mutable.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.index.get(name).map(|&slot| &mut self.records[slot])
    }

    /// Every record matching the criteria, in book order.
    ///
    /// An empty result is not an error.
    pub fn search(&self, criteria: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.matches_criteria(criteria))
            .collect()
    }

    /// Iterate the records in book order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Successive non-overlapping pages of the book in order, each
    /// `page_size` records long except possibly the last. Finite, and
    /// restartable by calling again.
    ///
    /// The iterator borrows the book, so the record list cannot change
    /// underneath a live iteration.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` when `page_size` is zero.
    pub fn pages(&self, page_size: usize) -> BookResult<Chunks<'_, Record>> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize(page_size));
        }
        Ok(self.records.chunks(page_size))
    }
}
