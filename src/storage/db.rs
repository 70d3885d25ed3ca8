// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Embedded database backed by redb (pure Rust, ACID).
//!
//! ## Table Layout
//!
//! One primary table per entity, `id → serialized row (JSON bytes)`, plus a
//! `*_by_time` index per listed entity, `!timestamp_be|id → id`, so a forward
//! range scan yields rows newest first. Users are never listed by time and
//! carry no index.

use std::path::Path;

use chrono::{DateTime, Utc};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{de::DeserializeOwned, Serialize};

use super::{StorageError, StorageResult};

pub(crate) type RowTable = TableDefinition<'static, &'static str, &'static [u8]>;
pub(crate) type TimeIndex = TableDefinition<'static, &'static [u8], &'static str>;

// =============================================================================
// Table Definitions
// =============================================================================

pub(crate) const USERS: RowTable = TableDefinition::new("users");

pub(crate) const UNIVERSITIES: RowTable = TableDefinition::new("universities");
pub(crate) const UNIVERSITIES_BY_TIME: TimeIndex = TableDefinition::new("universities_by_time");

pub(crate) const TRANSCRIPTS: RowTable = TableDefinition::new("transcripts");
pub(crate) const TRANSCRIPTS_BY_TIME: TimeIndex = TableDefinition::new("transcripts_by_time");

pub(crate) const TRANSACTIONS: RowTable = TableDefinition::new("transactions");
pub(crate) const TRANSACTIONS_BY_TIME: TimeIndex = TableDefinition::new("transactions_by_time");

pub(crate) const ANOMALIES: RowTable = TableDefinition::new("anomalies");
pub(crate) const ANOMALIES_BY_TIME: TimeIndex = TableDefinition::new("anomalies_by_time");

pub(crate) const AUDIT_LOGS: RowTable = TableDefinition::new("audit_logs");
pub(crate) const AUDIT_LOGS_BY_TIME: TimeIndex = TableDefinition::new("audit_logs_by_time");

const ALL_ROW_TABLES: [RowTable; 6] = [
    USERS,
    UNIVERSITIES,
    TRANSCRIPTS,
    TRANSACTIONS,
    ANOMALIES,
    AUDIT_LOGS,
];

const ALL_TIME_INDEXES: [TimeIndex; 5] = [
    UNIVERSITIES_BY_TIME,
    TRANSCRIPTS_BY_TIME,
    TRANSACTIONS_BY_TIME,
    ANOMALIES_BY_TIME,
    AUDIT_LOGS_BY_TIME,
];

/// Build an index key for a row.
///
/// Format: `inverted_timestamp_be_bytes | id`. The inverted timestamp ensures
/// newest-first ordering when scanning forward; the id breaks ties.
fn time_key(timestamp_millis: i64, id: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(8 + 1 + id.len());
    key.extend_from_slice(&(!timestamp_millis as u64).to_be_bytes());
    key.push(b'|');
    key.extend_from_slice(id.as_bytes());
    key
}

// =============================================================================
// LedgerDb
// =============================================================================

/// Embedded ACID store for all persisted entities.
pub struct LedgerDb {
    db: Database,
}

impl LedgerDb {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Database::create(path)?;

        // Pre-create all tables so later read transactions don't fail
        let write_txn = db.begin_write()?;
        {
            for table in ALL_ROW_TABLES {
                let _ = write_txn.open_table(table)?;
            }
            for index in ALL_TIME_INDEXES {
                let _ = write_txn.open_table(index)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Cheap reachability probe for health checks.
    pub fn ping(&self) -> StorageResult<()> {
        let _ = self.db.begin_read()?;
        Ok(())
    }

    /// Insert a new row and its time-index entry in one commit.
    pub(crate) fn insert_row<T: Serialize>(
        &self,
        table: RowTable,
        index: TimeIndex,
        id: &str,
        created_at: DateTime<Utc>,
        row: &T,
    ) -> StorageResult<()> {
        let json = serde_json::to_vec(row)?;
        let key = time_key(created_at.timestamp_millis(), id);

        let write_txn = self.db.begin_write()?;
        {
            let mut rows = write_txn.open_table(table)?;
            rows.insert(id, json.as_slice())?;

            let mut idx = write_txn.open_table(index)?;
            idx.insert(key.as_slice(), id)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Insert or replace a row in an unindexed table.
    pub(crate) fn put_row<T: Serialize>(
        &self,
        table: RowTable,
        id: &str,
        row: &T,
    ) -> StorageResult<()> {
        let json = serde_json::to_vec(row)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut rows = write_txn.open_table(table)?;
            rows.insert(id, json.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Look up a single row by id.
    pub(crate) fn fetch_row<T: DeserializeOwned>(
        &self,
        table: RowTable,
        id: &str,
    ) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let rows = read_txn.open_table(table)?;
        match rows.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Read-modify-write a row in one commit.
    ///
    /// Timestamps are immutable so the index entry is left untouched.
    /// Fails with `NotFound` if the id is absent.
    pub(crate) fn update_row<T, F>(
        &self,
        table: RowTable,
        entity: &str,
        id: &str,
        mutate: F,
    ) -> StorageResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let write_txn = self.db.begin_write()?;
        let updated = {
            let mut rows = write_txn.open_table(table)?;

            // Read existing value and deserialize before mutating
            let existing_bytes = {
                let existing = rows
                    .get(id)?
                    .ok_or_else(|| StorageError::NotFound(format!("{entity} {id}")))?;
                existing.value().to_vec()
            };

            let mut row: T = serde_json::from_slice(&existing_bytes)?;
            mutate(&mut row);

            let json = serde_json::to_vec(&row)?;
            rows.insert(id, json.as_slice())?;
            row
        };
        write_txn.commit()?;
        Ok(updated)
    }

    /// List up to `limit` rows, newest first.
    pub(crate) fn list_desc<T: DeserializeOwned>(
        &self,
        table: RowTable,
        index: TimeIndex,
        limit: usize,
    ) -> StorageResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let idx = read_txn.open_table(index)?;
        let rows = read_txn.open_table(table)?;

        let mut out = Vec::new();
        for entry in idx.iter()? {
            let (_, id_guard) = entry?;
            if let Some(value) = rows.get(id_guard.value())? {
                out.push(serde_json::from_slice(value.value())?);
            }
            if out.len() >= limit {
                break;
            }
        }
        Ok(out)
    }

    /// Count rows matching a predicate.
    pub(crate) fn count_rows<T, F>(&self, table: RowTable, pred: F) -> StorageResult<u64>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let read_txn = self.db.begin_read()?;
        let rows = read_txn.open_table(table)?;

        let mut count = 0;
        for entry in rows.iter()? {
            let (_, value) = entry?;
            let row: T = serde_json::from_slice(value.value())?;
            if pred(&row) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Find the first row matching a predicate (scan order is by id).
    pub(crate) fn find_row<T, F>(&self, table: RowTable, pred: F) -> StorageResult<Option<T>>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let read_txn = self.db.begin_read()?;
        let rows = read_txn.open_table(table)?;

        for entry in rows.iter()? {
            let (_, value) = entry?;
            let row: T = serde_json::from_slice(value.value())?;
            if pred(&row) {
                return Ok(Some(row));
            }
        }
        Ok(None)
    }
}
