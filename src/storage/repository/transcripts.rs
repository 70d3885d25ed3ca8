// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Transcript records.
//!
//! Issuance generates the opaque `qr_code`, `ipfs_hash`, and `block_txn`
//! identifiers; they are random, not content-derived, and never change
//! afterwards. `verified` flips false to true exactly once.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreateTranscriptRequest, Transcript};
use crate::storage::db::{LedgerDb, TRANSCRIPTS, TRANSCRIPTS_BY_TIME};
use crate::storage::StorageResult;

pub struct TranscriptRepository<'a> {
    db: &'a LedgerDb,
}

impl<'a> TranscriptRepository<'a> {
    pub fn new(db: &'a LedgerDb) -> Self {
        Self { db }
    }

    /// Issue a new transcript with freshly generated opaque identifiers.
    pub fn create(&self, request: CreateTranscriptRequest) -> StorageResult<Transcript> {
        let transcript = Transcript {
            id: Uuid::new_v4().to_string(),
            student_id: request.student_id,
            university_id: request.university_id,
            student_name: request.student_name,
            degree: request.degree,
            issue_date: request.issue_date,
            ipfs_hash: Some(format!("Qm{}", Uuid::new_v4().simple())),
            verified: false,
            block_txn: Some(format!("0x{}", Uuid::new_v4().simple())),
            qr_code: Some(Uuid::new_v4().to_string()),
            created_at: Utc::now(),
        };
        self.db.insert_row(
            TRANSCRIPTS,
            TRANSCRIPTS_BY_TIME,
            &transcript.id,
            transcript.created_at,
            &transcript,
        )?;
        Ok(transcript)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<Transcript>> {
        self.db.fetch_row(TRANSCRIPTS, id)
    }

    /// Up to `limit` transcripts, newest first.
    pub fn list(&self, limit: usize) -> StorageResult<Vec<Transcript>> {
        self.db.list_desc(TRANSCRIPTS, TRANSCRIPTS_BY_TIME, limit)
    }

    /// Flip `verified` to true. Fails with `NotFound` if the id is absent.
    pub fn mark_verified(&self, id: &str) -> StorageResult<Transcript> {
        self.db
            .update_row(TRANSCRIPTS, "Transcript", id, |t: &mut Transcript| {
                t.verified = true;
            })
    }

    /// Look up a transcript by any of its opaque identifiers.
    pub fn find_by_hash(&self, hash: &str) -> StorageResult<Option<Transcript>> {
        self.db.find_row(TRANSCRIPTS, |t: &Transcript| {
            t.qr_code.as_deref() == Some(hash)
                || t.ipfs_hash.as_deref() == Some(hash)
                || t.block_txn.as_deref() == Some(hash)
        })
    }

    pub fn count(&self) -> StorageResult<u64> {
        self.db.count_rows(TRANSCRIPTS, |_: &Transcript| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db() -> (LedgerDb, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = LedgerDb::open(&dir.path().join("test.redb")).unwrap();
        (db, dir)
    }

    fn request(student: &str) -> CreateTranscriptRequest {
        CreateTranscriptRequest {
            student_id: "s-1".to_string(),
            university_id: "u-1".to_string(),
            student_name: student.to_string(),
            degree: "B.S. Computer Science".to_string(),
            issue_date: Utc::now(),
        }
    }

    #[test]
    fn issuance_generates_opaque_identifiers() {
        let (db, _dir) = temp_db();
        let repo = TranscriptRepository::new(&db);

        let t = repo.create(request("Alem Kebede")).unwrap();
        assert!(!t.verified);
        assert!(t.ipfs_hash.as_deref().unwrap().starts_with("Qm"));
        assert!(t.block_txn.as_deref().unwrap().starts_with("0x"));
        assert!(t.qr_code.is_some());

        let other = repo.create(request("Alem Kebede")).unwrap();
        // Identifiers are random, so two issuances never collide.
        assert_ne!(t.ipfs_hash, other.ipfs_hash);
        assert_ne!(t.qr_code, other.qr_code);
    }

    #[test]
    fn mark_verified_flips_once_and_stays() {
        let (db, _dir) = temp_db();
        let repo = TranscriptRepository::new(&db);
        let t = repo.create(request("Alem Kebede")).unwrap();

        assert!(repo.mark_verified(&t.id).unwrap().verified);
        assert!(repo.mark_verified(&t.id).unwrap().verified);
        assert!(repo.get(&t.id).unwrap().unwrap().verified);
    }

    #[test]
    fn find_by_hash_matches_any_identifier() {
        let (db, _dir) = temp_db();
        let repo = TranscriptRepository::new(&db);
        let t = repo.create(request("Alem Kebede")).unwrap();

        for hash in [
            t.qr_code.as_deref().unwrap(),
            t.ipfs_hash.as_deref().unwrap(),
            t.block_txn.as_deref().unwrap(),
        ] {
            let found = repo.find_by_hash(hash).unwrap().unwrap();
            assert_eq!(found.id, t.id);
        }

        assert!(repo.find_by_hash("nonsense").unwrap().is_none());
    }

    #[test]
    fn list_and_count() {
        let (db, _dir) = temp_db();
        let repo = TranscriptRepository::new(&db);
        for i in 0..4 {
            repo.create(request(&format!("Student {i}"))).unwrap();
        }
        assert_eq!(repo.count().unwrap(), 4);
        assert_eq!(repo.list(2).unwrap().len(), 2);
    }
}
