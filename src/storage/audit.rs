// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Append-only audit trail.
//!
//! Every state-changing action appends one entry. Entries are never updated
//! or deleted. An append failure after a successful primary write is logged
//! and swallowed; there is no compensating rollback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::db::{LedgerDb, AUDIT_LOGS, AUDIT_LOGS_BY_TIME};
use super::StorageResult;

/// Types of auditable events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    // University events
    UniversityCreated,
    UniversityVerified,

    // Transcript events
    TranscriptIssued,
    TranscriptVerified,

    // Financial events
    TransactionRecorded,
    AnomalyFlagged,
    AnomalyResolved,

    // Simulated chain events
    BlockchainRegisterStudent,
    BlockchainIssueTranscript,
    ContractDeployed,
}

/// An audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    /// Unique entry ID.
    pub id: String,
    /// Type of event.
    pub event_type: AuditEventType,
    /// User who triggered the event (if known).
    pub user_id: Option<String>,
    /// Human-readable summary.
    pub description: String,
    /// Additional details as JSON.
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
}

/// Repository for audit entries.
pub struct AuditRepository<'a> {
    db: &'a LedgerDb,
}

impl<'a> AuditRepository<'a> {
    /// Create a new audit repository.
    pub fn new(db: &'a LedgerDb) -> Self {
        Self { db }
    }

    /// Append an audit entry.
    pub fn append(
        &self,
        event_type: AuditEventType,
        user_id: Option<&str>,
        description: impl Into<String>,
        metadata: Option<serde_json::Value>,
    ) -> StorageResult<AuditLog> {
        let entry = AuditLog {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            user_id: user_id.map(str::to_string),
            description: description.into(),
            metadata,
            timestamp: Utc::now(),
        };
        self.db
            .insert_row(AUDIT_LOGS, AUDIT_LOGS_BY_TIME, &entry.id, entry.timestamp, &entry)?;
        Ok(entry)
    }

    /// Append an audit entry after a primary write has already succeeded.
    ///
    /// The primary write is not rolled back if the append fails; the failure
    /// is logged server-side only.
    pub fn append_best_effort(
        &self,
        event_type: AuditEventType,
        user_id: Option<&str>,
        description: impl Into<String>,
        metadata: Option<serde_json::Value>,
    ) {
        if let Err(err) = self.append(event_type, user_id, description, metadata) {
            tracing::warn!(error = %err, ?event_type, "failed to append audit log entry");
        }
    }

    /// List up to `limit` entries, newest first.
    pub fn list(&self, limit: usize) -> StorageResult<Vec<AuditLog>> {
        self.db.list_desc(AUDIT_LOGS, AUDIT_LOGS_BY_TIME, limit)
    }
}
