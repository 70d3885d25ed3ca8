// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Dashboard users mirrored from the external identity provider.
//!
//! Identity (who the caller is) lives with the provider; this table only
//! mirrors profile fields plus the locally assigned role and university.

use chrono::Utc;

use crate::auth::Role;
use crate::models::{UpsertUser, User};
use crate::storage::db::{LedgerDb, USERS};
use crate::storage::StorageResult;

pub struct UserRepository<'a> {
    db: &'a LedgerDb,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a LedgerDb) -> Self {
        Self { db }
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<User>> {
        self.db.fetch_row(USERS, id)
    }

    /// Create or refresh a user row from session claims.
    ///
    /// Profile fields are overwritten; the locally assigned role and
    /// university association survive the upsert.
    pub fn upsert(&self, fields: UpsertUser) -> StorageResult<User> {
        let now = Utc::now();
        let user = match self.get(&fields.id)? {
            Some(mut existing) => {
                existing.email = fields.email;
                existing.first_name = fields.first_name;
                existing.last_name = fields.last_name;
                existing.profile_image_url = fields.profile_image_url;
                existing.updated_at = now;
                existing
            }
            None => User {
                id: fields.id,
                email: fields.email,
                first_name: fields.first_name,
                last_name: fields.last_name,
                profile_image_url: fields.profile_image_url,
                role: Role::Student,
                university_id: None,
                created_at: now,
                updated_at: now,
            },
        };
        self.db.put_row(USERS, &user.id, &user)?;
        Ok(user)
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

    fn fields(id: &str, email: &str) -> UpsertUser {
        UpsertUser {
            id: id.to_string(),
            email: Some(email.to_string()),
            first_name: Some("Sara".to_string()),
            last_name: Some("Tesfaye".to_string()),
            profile_image_url: None,
        }
    }

    #[test]
    fn first_upsert_creates_student() {
        let (db, _dir) = temp_db();
        let repo = UserRepository::new(&db);

        let user = repo.upsert(fields("user_1", "sara@example.edu")).unwrap();
        assert_eq!(user.role, Role::Student);
        assert!(user.university_id.is_none());
        assert_eq!(repo.get("user_1").unwrap().unwrap(), user);
    }

    #[test]
    fn upsert_refreshes_profile_but_keeps_role() {
        let (db, _dir) = temp_db();
        let repo = UserRepository::new(&db);

        let created = repo.upsert(fields("user_1", "old@example.edu")).unwrap();

        // Simulate a locally assigned role.
        let mut promoted = created.clone();
        promoted.role = Role::Auditor;
        db.put_row(USERS, "user_1", &promoted).unwrap();

        let refreshed = repo.upsert(fields("user_1", "new@example.edu")).unwrap();
        assert_eq!(refreshed.email, Some("new@example.edu".to_string()));
        assert_eq!(refreshed.role, Role::Auditor);
        assert_eq!(refreshed.created_at, created.created_at);
        assert!(refreshed.updated_at >= created.updated_at);
    }
}
