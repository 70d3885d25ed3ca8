// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use axum::{
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    chain::{NetworkStatus, OpStats, Receipt},
    models::{
        Anomaly, CreateTranscriptRequest, CreateTransactionRequest, CreateUniversityRequest,
        DashboardStats, Severity, Transaction, TransactionStatus, TransactionType, Transcript,
        University, User, VerifyByHashRequest, VerifyByHashResponse,
    },
    state::AppState,
    storage::audit::{AuditEventType, AuditLog},
};

pub mod anomalies;
pub mod audit_logs;
pub mod blockchain;
pub mod dashboard;
pub mod health;
pub mod transactions;
pub mod transcripts;
pub mod universities;
pub mod users;

/// Common pagination query for list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Maximum number of rows to return (newest first).
    pub limit: Option<usize>,
}

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/auth/user", get(users::current_user))
        .route("/dashboard/stats", get(dashboard::stats))
        .route(
            "/universities",
            get(universities::list_universities).post(universities::create_university),
        )
        .route(
            "/universities/{id}/verify",
            patch(universities::verify_university),
        )
        .route(
            "/transcripts",
            get(transcripts::list_transcripts).post(transcripts::create_transcript),
        )
        // Static segment must be registered alongside the {id} route; axum
        // prefers the static match.
        .route(
            "/transcripts/verify",
            post(transcripts::verify_transcript_by_hash),
        )
        .route(
            "/transcripts/{id}/verify",
            post(transcripts::verify_transcript),
        )
        .route(
            "/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route("/anomalies", get(anomalies::list_anomalies))
        // The dashboard client has used both verbs across releases.
        .route(
            "/anomalies/{id}/resolve",
            post(anomalies::resolve_anomaly).patch(anomalies::resolve_anomaly),
        )
        .route("/audit-logs", get(audit_logs::list_audit_logs))
        .route(
            "/blockchain/register-student",
            post(blockchain::register_student),
        )
        .route(
            "/blockchain/issue-transcript",
            post(blockchain::issue_transcript),
        )
        .route("/blockchain/status", get(blockchain::blockchain_status))
        .route(
            "/blockchain/verify-transcript",
            post(blockchain::verify_transcript),
        )
        .route(
            "/blockchain/deploy-contract",
            post(blockchain::deploy_contract),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::current_user,
        dashboard::stats,
        universities::list_universities,
        universities::create_university,
        universities::verify_university,
        transcripts::list_transcripts,
        transcripts::create_transcript,
        transcripts::verify_transcript,
        transcripts::verify_transcript_by_hash,
        transactions::list_transactions,
        transactions::create_transaction,
        anomalies::list_anomalies,
        anomalies::resolve_anomaly,
        audit_logs::list_audit_logs,
        blockchain::register_student,
        blockchain::issue_transcript,
        blockchain::blockchain_status,
        blockchain::verify_transcript,
        blockchain::deploy_contract,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            University,
            CreateUniversityRequest,
            Transcript,
            CreateTranscriptRequest,
            VerifyByHashRequest,
            VerifyByHashResponse,
            Transaction,
            CreateTransactionRequest,
            TransactionType,
            TransactionStatus,
            Anomaly,
            Severity,
            User,
            DashboardStats,
            AuditLog,
            AuditEventType,
            Receipt,
            NetworkStatus,
            OpStats,
            blockchain::RegisterStudentRequest,
            blockchain::IssueTranscriptRequest,
            blockchain::VerifyTranscriptRequest,
            blockchain::BlockchainStatusResponse,
            blockchain::ContractsInfo,
            blockchain::ProofResponse,
            blockchain::DeployContractResponse,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Session user lookup"),
        (name = "Dashboard", description = "Aggregate statistics"),
        (name = "Universities", description = "Issuing institutions"),
        (name = "Transcripts", description = "Credential issuance and verification"),
        (name = "Transactions", description = "Financial records and risk scoring"),
        (name = "Anomalies", description = "Flagged transactions"),
        (name = "Audit", description = "Append-only audit trail"),
        (name = "Blockchain", description = "Simulated chain operations"),
        (name = "Health", description = "Service probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::db::LedgerDb;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let dir = tempfile::tempdir().unwrap();
        let db = LedgerDb::open(&dir.path().join("test.redb")).unwrap();
        let app = router(AppState::new(db));
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }
}
