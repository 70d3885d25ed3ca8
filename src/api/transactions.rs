// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use super::ListQuery;
use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateTransactionRequest, Transaction},
    risk,
    state::AppState,
    storage::audit::{AuditEventType, AuditRepository},
    storage::repository::{AnomalyRepository, NewAnomaly, TransactionRepository},
};

const DEFAULT_LIST_LIMIT: usize = 50;

#[utoipa::path(
    get,
    path = "/api/transactions",
    params(ListQuery),
    tag = "Transactions",
    responses(
        (status = 200, body = [Transaction]),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    Auth(_user): Auth,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    Ok(Json(TransactionRepository::new(&state.db).list(limit)?))
}

/// Record a transaction and run the risk rule set over it.
///
/// A score above the anomaly threshold flags exactly one anomaly against the
/// new transaction. The transaction and anomaly writes are separate commits;
/// retries are not deduplicated.
#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = CreateTransactionRequest,
    tag = "Transactions",
    responses(
        (status = 201, body = Transaction),
        (status = 400, description = "Amount is not a decimal number"),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let amount: f64 = request
        .amount
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Amount must be a decimal number"))?;

    let score = risk::score_transaction(amount, request.tx_type);
    let transaction =
        TransactionRepository::new(&state.db).create(request, risk::format_score(score))?;

    let audit = AuditRepository::new(&state.db);
    audit.append_best_effort(
        AuditEventType::TransactionRecorded,
        Some(&user.user_id),
        format!(
            "Transaction of {} {} recorded",
            transaction.amount, transaction.currency
        ),
        Some(json!({"transactionId": transaction.id})),
    );

    if risk::flags_anomaly(score) {
        let anomaly = AnomalyRepository::new(&state.db).create(NewAnomaly {
            transaction_id: transaction.id.clone(),
            risk_score: risk::format_score(score),
            description: format!(
                "High-risk {} transaction detected",
                transaction.tx_type
            ),
            severity: risk::severity_for(score),
        })?;
        audit.append_best_effort(
            AuditEventType::AnomalyFlagged,
            Some(&user.user_id),
            anomaly.description.clone(),
            Some(json!({"anomalyId": anomaly.id, "transactionId": transaction.id})),
        );
    }

    Ok((StatusCode::CREATED, Json(transaction)))
}
