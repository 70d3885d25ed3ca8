// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;

use super::ListQuery;
use crate::{
    auth::Auth,
    error::ApiError,
    models::Anomaly,
    state::AppState,
    storage::audit::{AuditEventType, AuditRepository},
    storage::repository::AnomalyRepository,
};

const DEFAULT_LIST_LIMIT: usize = 50;

#[utoipa::path(
    get,
    path = "/api/anomalies",
    params(ListQuery),
    tag = "Anomalies",
    responses(
        (status = 200, body = [Anomaly]),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn list_anomalies(
    State(state): State<AppState>,
    Auth(_user): Auth,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Anomaly>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    Ok(Json(AnomalyRepository::new(&state.db).list(limit)?))
}

/// Mark an anomaly as resolved.
///
/// Resolution is unconditional: repeating the call leaves `resolved` set and
/// appends another audit entry. Registered for both POST and PATCH.
#[utoipa::path(
    post,
    path = "/api/anomalies/{id}/resolve",
    params(("id" = String, Path, description = "Anomaly identifier")),
    tag = "Anomalies",
    responses(
        (status = 200, body = Anomaly),
        (status = 401, description = "Missing or invalid session token"),
        (status = 404, description = "Anomaly not found")
    )
)]
pub async fn resolve_anomaly(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<Anomaly>, ApiError> {
    let anomaly = AnomalyRepository::new(&state.db).resolve(&id)?;

    AuditRepository::new(&state.db).append_best_effort(
        AuditEventType::AnomalyResolved,
        Some(&user.user_id),
        format!("Anomaly resolved: {}", anomaly.description),
        Some(json!({"anomalyId": id})),
    );

    Ok(Json(anomaly))
}
