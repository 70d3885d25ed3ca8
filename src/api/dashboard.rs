// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use axum::{extract::State, Json};

use crate::{
    auth::Auth,
    error::ApiError,
    models::DashboardStats,
    state::AppState,
    storage::repository::{AnomalyRepository, TranscriptRepository, UniversityRepository},
};

/// Aggregate statistics for the dashboard landing page.
///
/// Computed on demand from current storage contents; nothing is cached.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, body = DashboardStats),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn stats(
    State(state): State<AppState>,
    Auth(_user): Auth,
) -> Result<Json<DashboardStats>, ApiError> {
    let anomalies = AnomalyRepository::new(&state.db);

    Ok(Json(DashboardStats {
        total_transcripts: TranscriptRepository::new(&state.db).count()?,
        active_universities: UniversityRepository::new(&state.db).count_verified()?,
        total_anomalies: anomalies.count_unresolved()?,
        system_risk_score: anomalies.system_risk_score()?,
    }))
}
