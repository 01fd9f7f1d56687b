//! Address book: records keyed by contact name.

use super::record::Record;
use crate::domain::LeapDayPolicy;
use crate::error::{ContactBookError, ContactBookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::slice::{Chunks, Iter};

/// Records keyed by name, iterated in insertion order.
///
/// Adding a record whose name is already present replaces the old record in
/// place; there is no merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// Returns the record previously stored under that name, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => {
                tracing::debug!(contact = %key, "Replacing existing record");
                Some(std::mem::replace(&mut self.records[position], record))
            }
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record by exact name for modification.
    ///
    /// The record's name cannot change through this reference, so the key
    /// stays valid.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Check whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove and return the record stored under `name`.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let record = self.records.remove(position);
        for later in self.index.values_mut().filter(|p| **p > position) {
            *later -= 1;
        }
        tracing::debug!(contact = %name, "Removed record");
        Some(record)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the address book is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the stored names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    /// Iterate over all records in insertion order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterate over the records in groups of `batch_size`.
    ///
    /// Every group is full except possibly the last; an empty book yields no
    /// groups at all.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::InvalidArgument` if `batch_size` is zero.
    pub fn batches(&self, batch_size: usize) -> ContactBookResult<Chunks<'_, Record>> {
        if batch_size == 0 {
            return Err(ContactBookError::InvalidArgument(
                "batch size must be a positive integer".to_string(),
            ));
        }
        tracing::trace!(batch_size, records = self.records.len(), "Batching records");
        Ok(self.records.chunks(batch_size))
    }

    /// Records whose next birthday is at most `within_days` away from `today`.
    ///
    /// Results are sorted by distance, ties kept in insertion order.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        within_days: u32,
        policy: LeapDayPolicy,
    ) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .iter()
            .filter_map(|record| {
                record
                    .days_to_next_birthday_with(today, policy)
                    .map(|days| (record, days))
            })
            .filter(|&(_, days)| days <= i64::from(within_days))
            .collect();
        upcoming.sort_by_key(|&(_, days)| days);
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AddressBook {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for record in records {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut book = Self::new();
        book.extend(records);
        book
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}
