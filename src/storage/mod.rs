// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Embedded relational store for all server-owned entities.
//!
//! Rows live in redb tables keyed by UUID string, with a secondary
//! inverted-timestamp index per entity for newest-first listing. Each commit
//! is ACID on its own; cross-entity writes (transaction + anomaly) are
//! separate commits.

pub mod audit;
pub mod db;
pub mod repository;

pub use audit::{AuditEventType, AuditLog, AuditRepository};
pub use db::LedgerDb;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("redb error: {0}")]
    Redb(#[from] redb::Error),

    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
