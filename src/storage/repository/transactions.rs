// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Financial transaction records. Immutable once recorded.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreateTransactionRequest, Transaction, TransactionStatus};
use crate::storage::db::{LedgerDb, TRANSACTIONS, TRANSACTIONS_BY_TIME};
use crate::storage::StorageResult;

pub struct TransactionRepository<'a> {
    db: &'a LedgerDb,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(db: &'a LedgerDb) -> Self {
        Self { db }
    }

    /// Record a new transaction with its already-computed risk score.
    pub fn create(
        &self,
        request: CreateTransactionRequest,
        risk_score: String,
    ) -> StorageResult<Transaction> {
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            tx_type: request.tx_type,
            amount: request.amount,
            currency: request.currency.unwrap_or_else(|| "USD".to_string()),
            university_id: request.university_id,
            student_id: request.student_id,
            description: request.description,
            status: request.status.unwrap_or(TransactionStatus::Completed),
            risk_score,
            timestamp: Utc::now(),
        };
        self.db.insert_row(
            TRANSACTIONS,
            TRANSACTIONS_BY_TIME,
            &transaction.id,
            transaction.timestamp,
            &transaction,
        )?;
        Ok(transaction)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<Transaction>> {
        self.db.fetch_row(TRANSACTIONS, id)
    }

    /// Up to `limit` transactions, newest first.
    pub fn list(&self, limit: usize) -> StorageResult<Vec<Transaction>> {
        self.db.list_desc(TRANSACTIONS, TRANSACTIONS_BY_TIME, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn temp_db() -> (LedgerDb, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = LedgerDb::open(&dir.path().join("test.redb")).unwrap();
        (db, dir)
    }

    fn request(amount: &str) -> CreateTransactionRequest {
        CreateTransactionRequest {
            tx_type: TransactionType::Tuition,
            amount: amount.to_string(),
            currency: None,
            university_id: Some("u-1".to_string()),
            student_id: None,
            description: Some("Fall semester tuition".to_string()),
            status: None,
        }
    }

    #[test]
    fn create_applies_defaults() {
        let (db, _dir) = temp_db();
        let repo = TransactionRepository::new(&db);

        let tx = repo.create(request("2500.00"), "2.0".to_string()).unwrap();
        assert_eq!(tx.currency, "USD");
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.risk_score, "2.0");
        assert_eq!(tx.amount, "2500.00");

        let fetched = repo.get(&tx.id).unwrap().unwrap();
        assert_eq!(fetched, tx);
    }

    #[test]
    fn explicit_currency_and_status_are_kept() {
        let (db, _dir) = temp_db();
        let repo = TransactionRepository::new(&db);

        let mut req = request("100.00");
        req.currency = Some("ETB".to_string());
        req.status = Some(TransactionStatus::Pending);

        let tx = repo.create(req, "2.0".to_string()).unwrap();
        assert_eq!(tx.currency, "ETB");
        assert_eq!(tx.status, TransactionStatus::Pending);
    }

    #[test]
    fn list_respects_limit() {
        let (db, _dir) = temp_db();
        let repo = TransactionRepository::new(&db);
        for _ in 0..5 {
            repo.create(request("10.00"), "2.0".to_string()).unwrap();
        }
        assert_eq!(repo.list(3).unwrap().len(), 3);
        assert_eq!(repo.list(50).unwrap().len(), 5);
    }
}
