// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! University records.
//!
//! Created unverified; `verified` is monotonic. There is no unverify path
//! and no hard delete.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreateUniversityRequest, University};
use crate::storage::db::{LedgerDb, UNIVERSITIES, UNIVERSITIES_BY_TIME};
use crate::storage::StorageResult;

pub struct UniversityRepository<'a> {
    db: &'a LedgerDb,
}

impl<'a> UniversityRepository<'a> {
    pub fn new(db: &'a LedgerDb) -> Self {
        Self { db }
    }

    /// Register a new university. Always starts unverified.
    pub fn create(&self, request: CreateUniversityRequest) -> StorageResult<University> {
        let university = University {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            verified: false,
            wallet_address: request.wallet_address,
            contact_email: request.contact_email,
            website: request.website,
            created_at: Utc::now(),
        };
        self.db.insert_row(
            UNIVERSITIES,
            UNIVERSITIES_BY_TIME,
            &university.id,
            university.created_at,
            &university,
        )?;
        Ok(university)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<University>> {
        self.db.fetch_row(UNIVERSITIES, id)
    }

    /// All universities, newest first.
    pub fn list(&self) -> StorageResult<Vec<University>> {
        self.db
            .list_desc(UNIVERSITIES, UNIVERSITIES_BY_TIME, usize::MAX)
    }

    /// Flip `verified` to true. Fails with `NotFound` if the id is absent.
    pub fn mark_verified(&self, id: &str) -> StorageResult<University> {
        self.db
            .update_row(UNIVERSITIES, "University", id, |u: &mut University| {
                u.verified = true;
            })
    }

    pub fn count_verified(&self) -> StorageResult<u64> {
        self.db.count_rows(UNIVERSITIES, |u: &University| u.verified)
    }
}
