// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! # API Data Models
//!
//! Request and response data structures for the REST API. All types derive
//! `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON handling and
//! OpenAPI documentation.
//!
//! The wire format is camelCase to match the dashboard client. Monetary
//! amounts and risk scores travel as decimal strings, never floats, so the
//! stored representation is exactly what the caller sent or the rule set
//! produced.
//!
//! ## Model Categories
//!
//! - **Universities**: issuing institutions, verified by an admin action
//! - **Transcripts**: academic records issued to students
//! - **Transactions**: financial movements (tuition, grants, fees, services)
//! - **Anomalies**: transactions flagged by the risk rule set
//! - **Users**: dashboard users mirrored from the identity provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Role;

// =============================================================================
// Enumerations
// =============================================================================

/// Category of a financial transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Tuition,
    Grants,
    Fees,
    Services,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransactionType::Tuition => "tuition",
            TransactionType::Grants => "grants",
            TransactionType::Fees => "fees",
            TransactionType::Services => "services",
        };
        write!(f, "{name}")
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// Severity of a flagged anomaly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

// =============================================================================
// University Models
// =============================================================================

/// An issuing institution.
///
/// Universities are created unverified and transition to verified through an
/// explicit admin action. There is no unverify path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct University {
    /// Unique identifier for this university.
    pub id: String,
    /// Official institution name.
    pub name: String,
    /// Whether an admin has verified this institution.
    pub verified: bool,
    /// On-chain wallet address (opaque; the chain is simulated).
    pub wallet_address: Option<String>,
    /// Administrative contact email.
    pub contact_email: Option<String>,
    /// Public website.
    pub website: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Request to register a new university.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUniversityRequest {
    pub name: String,
    pub wallet_address: Option<String>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
}

// =============================================================================
// Transcript Models
// =============================================================================

/// An academic record issued to a student.
///
/// The `ipfs_hash`, `block_txn`, and `qr_code` fields are opaque identifiers
/// generated at issuance time; they are not derived from record content.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub id: String,
    pub student_id: String,
    pub university_id: String,
    pub student_name: String,
    pub degree: String,
    pub issue_date: DateTime<Utc>,
    pub ipfs_hash: Option<String>,
    /// Flips false to true exactly once, via the verify endpoint.
    pub verified: bool,
    pub block_txn: Option<String>,
    pub qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to issue a new transcript.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTranscriptRequest {
    pub student_id: String,
    pub university_id: String,
    pub student_name: String,
    pub degree: String,
    pub issue_date: DateTime<Utc>,
}

/// Request body for hash-based transcript verification.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyByHashRequest {
    /// Transcript hash or QR code payload.
    pub hash: Option<String>,
}

/// Result of a hash-based transcript verification.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyByHashResponse {
    pub verified: bool,
    pub student: String,
    pub university: String,
    pub degree: String,
    pub issue_date: String,
    pub transaction_hash: String,
}

// =============================================================================
// Transaction Models
// =============================================================================

/// A financial transaction. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    /// Decimal string, e.g. "15000.00".
    pub amount: String,
    pub currency: String,
    pub university_id: Option<String>,
    pub student_id: Option<String>,
    pub description: Option<String>,
    pub status: TransactionStatus,
    /// Rule-set score formatted to one decimal, e.g. "8.5".
    pub risk_score: String,
    pub timestamp: DateTime<Utc>,
}

/// Request to record a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    /// Decimal string, parsed server-side for risk scoring.
    pub amount: String,
    pub currency: Option<String>,
    pub university_id: Option<String>,
    pub student_id: Option<String>,
    pub description: Option<String>,
    pub status: Option<TransactionStatus>,
}

// =============================================================================
// Anomaly Models
// =============================================================================

/// A transaction flagged by the risk rule set, pending resolution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub id: String,
    pub transaction_id: String,
    /// Score that triggered the flag, formatted to one decimal.
    pub risk_score: String,
    pub description: String,
    pub severity: Severity,
    /// One-way flag; resolving an already-resolved anomaly is a no-op on state.
    pub resolved: bool,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// User Models
// =============================================================================

/// A dashboard user mirrored from the external identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: Role,
    pub university_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity fields carried by the session token, used to upsert a user row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

// =============================================================================
// Dashboard Models
// =============================================================================

/// On-demand aggregate statistics for the dashboard landing page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_transcripts: u64,
    /// Count of verified universities.
    pub active_universities: u64,
    /// Count of unresolved anomalies.
    pub total_anomalies: u64,
    /// Mean risk score over the trailing 7 days, capped at 10, one decimal.
    pub system_risk_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Grants).unwrap(),
            r#""grants""#
        );
        let parsed: TransactionType = serde_json::from_str(r#""tuition""#).unwrap();
        assert_eq!(parsed, TransactionType::Tuition);
        assert_eq!(TransactionType::Services.to_string(), "services");
    }

    #[test]
    fn transaction_serializes_with_camel_case_and_type_key() {
        let tx = Transaction {
            id: "t1".into(),
            tx_type: TransactionType::Tuition,
            amount: "15000".into(),
            currency: "USD".into(),
            university_id: None,
            student_id: None,
            description: None,
            status: TransactionStatus::Completed,
            risk_score: "8.5".into(),
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "tuition");
        assert_eq!(value["riskScore"], "8.5");
        assert_eq!(value["status"], "completed");
    }

    #[test]
    fn create_transaction_request_parses_dashboard_payload() {
        let req: CreateTransactionRequest =
            serde_json::from_str(r#"{"type":"grants","amount":"9500.00"}"#).unwrap();
        assert_eq!(req.tx_type, TransactionType::Grants);
        assert_eq!(req.amount, "9500.00");
        assert!(req.currency.is_none());
    }
}
