//! Client-side authoritative reminder collection for one user.
//!
//! Plain ordered collection with an id-uniqueness invariant; the
//! [`SyncController`](crate::sync::SyncController) owns it and layers the
//! concurrency rules on top.

use crate::models::{Reminder, ReminderId, ReminderStatus};

/// In-memory reminder collection, ordered by arrival.
///
/// Invariant: never contains two records with the same id.
#[derive(Debug, Default)]
pub struct ReminderStore {
    records: Vec<Reminder>,
}

impl ReminderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the collection wholesale after a full refresh. No stale
    /// entry survives; duplicate ids in the input keep the first occurrence.
    pub fn replace_all(&mut self, records: Vec<Reminder>) {
        self.records.clear();
        self.append(records);
    }

    /// Add records from an incremental page fetch to the end, preserving
    /// arrival order and skipping ids already present.
    pub fn append(&mut self, records: Vec<Reminder>) {
        for record in records {
            if self.position(&record.id).is_none() {
                self.records.push(record);
            }
        }
    }

    /// Insert if the id is unseen, else replace in place at the same
    /// position. Used to commit create/update responses and optimistic
    /// mutations.
    pub fn upsert(&mut self, record: Reminder) {
        match self.position(&record.id) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Delete by id, returning the removed record and its position so a
    /// failed delete can be rolled back exactly. No-op when absent.
    pub fn remove(&mut self, id: &ReminderId) -> Option<(usize, Reminder)> {
        let index = self.position(id)?;
        Some((index, self.records.remove(index)))
    }

    /// Reinstate a previously removed record at its old position.
    pub fn insert_at(&mut self, index: usize, record: Reminder) {
        if self.position(&record.id).is_some() {
            return;
        }
        let index = index.min(self.records.len());
        self.records.insert(index, record);
    }

    #[must_use]
    pub fn get(&self, id: &ReminderId) -> Option<&Reminder> {
        self.position(id).map(|index| &self.records[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reminder> {
        self.records.iter()
    }

    /// Lazy, restartable view over records with the given status, in store
    /// order. Each call yields a fresh iterator; the store is not mutated.
    pub fn filter_by_status(
        &self,
        status: ReminderStatus,
    ) -> impl Iterator<Item = &Reminder> + '_ {
        self.records
            .iter()
            .filter(move |record| record.status == status)
    }

    fn position(&self, id: &ReminderId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{ReminderTag, UserId};

    fn reminder(id: &str, status: ReminderStatus) -> Reminder {
        Reminder {
            id: ReminderId::new(id),
            user_id: UserId::new("u1"),
            title: format!("reminder {id}"),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            description: None,
            tags: vec![ReminderTag::Other],
            status,
        }
    }

    fn ids(store: &ReminderStore) -> Vec<&str> {
        store.iter().map(|record| record.id.as_str()).collect()
    }

    #[test]
    fn append_skips_duplicate_ids() {
        let mut store = ReminderStore::new();
        store.append(vec![
            reminder("a", ReminderStatus::Incomplete),
            reminder("b", ReminderStatus::Incomplete),
        ]);
        store.append(vec![
            reminder("b", ReminderStatus::Complete),
            reminder("c", ReminderStatus::Incomplete),
        ]);
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        // the original record for "b" wins
        assert_eq!(
            store.get(&ReminderId::new("b")).unwrap().status,
            ReminderStatus::Incomplete
        );
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut store = ReminderStore::new();
        store.append(vec![
            reminder("a", ReminderStatus::Incomplete),
            reminder("b", ReminderStatus::Incomplete),
            reminder("c", ReminderStatus::Incomplete),
        ]);
        store.upsert(reminder("b", ReminderStatus::Complete));
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        assert_eq!(
            store.get(&ReminderId::new("b")).unwrap().status,
            ReminderStatus::Complete
        );
    }

    #[test]
    fn upsert_appends_unseen_id() {
        let mut store = ReminderStore::new();
        store.upsert(reminder("a", ReminderStatus::Incomplete));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_all_keeps_no_stale_entries() {
        let mut store = ReminderStore::new();
        store.append(vec![reminder("old", ReminderStatus::Incomplete)]);
        store.replace_all(vec![reminder("new", ReminderStatus::Incomplete)]);
        assert_eq!(ids(&store), vec!["new"]);
    }

    #[test]
    fn remove_reports_position_and_insert_at_restores_it() {
        let mut store = ReminderStore::new();
        store.append(vec![
            reminder("a", ReminderStatus::Incomplete),
            reminder("b", ReminderStatus::Incomplete),
            reminder("c", ReminderStatus::Incomplete),
        ]);
        let (index, removed) = store.remove(&ReminderId::new("b")).unwrap();
        assert_eq!(index, 1);
        assert_eq!(ids(&store), vec!["a", "c"]);

        store.insert_at(index, removed);
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut store = ReminderStore::new();
        store.append(vec![reminder("a", ReminderStatus::Incomplete)]);
        assert!(store.remove(&ReminderId::new("zzz")).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn filter_by_status_is_ordered_and_restartable() {
        let mut store = ReminderStore::new();
        store.append(vec![
            reminder("a", ReminderStatus::Complete),
            reminder("b", ReminderStatus::Incomplete),
            reminder("c", ReminderStatus::Complete),
        ]);

        let first: Vec<&str> = store
            .filter_by_status(ReminderStatus::Complete)
            .map(|record| record.id.as_str())
            .collect();
        let second: Vec<&str> = store
            .filter_by_status(ReminderStatus::Complete)
            .map(|record| record.id.as_str())
            .collect();

        assert_eq!(first, vec!["a", "c"]);
        assert_eq!(first, second);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn no_duplicates_under_mixed_operations() {
        let mut store = ReminderStore::new();
        store.append(vec![reminder("a", ReminderStatus::Incomplete)]);
        store.upsert(reminder("a", ReminderStatus::Missed));
        store.append(vec![reminder("a", ReminderStatus::Complete)]);
        store.remove(&ReminderId::new("a"));
        store.upsert(reminder("a", ReminderStatus::Incomplete));
        store.insert_at(0, reminder("a", ReminderStatus::Complete));

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&ReminderId::new("a")).unwrap().status,
            ReminderStatus::Incomplete
        );
    }
}
