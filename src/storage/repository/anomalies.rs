// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Flagged anomalies and the derived system risk score.
//!
//! `resolved` is one-way: resolution sets it unconditionally, so a repeated
//! resolve is a no-op on state.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{Anomaly, Severity};
use crate::storage::db::{LedgerDb, ANOMALIES, ANOMALIES_BY_TIME};
use crate::storage::StorageResult;

/// Window for the dashboard system risk score.
const RISK_WINDOW_DAYS: i64 = 7;

/// At most this many recent anomalies are considered for the score.
const RISK_SAMPLE_LIMIT: usize = 100;

/// Fields for a newly flagged anomaly.
#[derive(Debug, Clone)]
pub struct NewAnomaly {
    pub transaction_id: String,
    pub risk_score: String,
    pub description: String,
    pub severity: Severity,
}

pub struct AnomalyRepository<'a> {
    db: &'a LedgerDb,
}

impl<'a> AnomalyRepository<'a> {
    pub fn new(db: &'a LedgerDb) -> Self {
        Self { db }
    }

    /// Flag a new anomaly against a transaction.
    pub fn create(&self, new: NewAnomaly) -> StorageResult<Anomaly> {
        let anomaly = Anomaly {
            id: Uuid::new_v4().to_string(),
            transaction_id: new.transaction_id,
            risk_score: new.risk_score,
            description: new.description,
            severity: new.severity,
            resolved: false,
            timestamp: Utc::now(),
        };
        self.db.insert_row(
            ANOMALIES,
            ANOMALIES_BY_TIME,
            &anomaly.id,
            anomaly.timestamp,
            &anomaly,
        )?;
        Ok(anomaly)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<Anomaly>> {
        self.db.fetch_row(ANOMALIES, id)
    }

    /// Up to `limit` anomalies, newest first.
    pub fn list(&self, limit: usize) -> StorageResult<Vec<Anomaly>> {
        self.db.list_desc(ANOMALIES, ANOMALIES_BY_TIME, limit)
    }

    /// Set `resolved` unconditionally. Fails with `NotFound` if the id is
    /// absent. No cascading effect on the underlying transaction.
    pub fn resolve(&self, id: &str) -> StorageResult<Anomaly> {
        self.db.update_row(ANOMALIES, "Anomaly", id, |a: &mut Anomaly| {
            a.resolved = true;
        })
    }

    pub fn count_unresolved(&self) -> StorageResult<u64> {
        self.db.count_rows(ANOMALIES, |a: &Anomaly| !a.resolved)
    }

    /// Anomalies newer than `since`, newest first, capped at `max`.
    pub fn recent(&self, since: DateTime<Utc>, max: usize) -> StorageResult<Vec<Anomaly>> {
        let newest: Vec<Anomaly> = self.db.list_desc(ANOMALIES, ANOMALIES_BY_TIME, max)?;
        Ok(newest.into_iter().filter(|a| a.timestamp > since).collect())
    }

    /// Mean risk score of anomalies in the trailing 7-day window, capped at
    /// 10 and rounded to one decimal. Zero when the window is empty.
    pub fn system_risk_score(&self) -> StorageResult<f64> {
        let since = Utc::now() - Duration::days(RISK_WINDOW_DAYS);
        let recent = self.recent(since, RISK_SAMPLE_LIMIT)?;
        if recent.is_empty() {
            return Ok(0.0);
        }

        let sum: f64 = recent
            .iter()
            .map(|a| a.risk_score.parse::<f64>().unwrap_or(0.0))
            .sum();
        let mean = (sum / recent.len() as f64).min(10.0);
        Ok((mean * 10.0).round() / 10.0)
    }
}
