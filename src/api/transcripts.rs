// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use super::ListQuery;
use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateTranscriptRequest, Transcript, VerifyByHashRequest, VerifyByHashResponse},
    state::AppState,
    storage::audit::{AuditEventType, AuditRepository},
    storage::repository::{TranscriptRepository, UniversityRepository},
};

const DEFAULT_LIST_LIMIT: usize = 50;

#[utoipa::path(
    get,
    path = "/api/transcripts",
    params(ListQuery),
    tag = "Transcripts",
    responses(
        (status = 200, body = [Transcript]),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn list_transcripts(
    State(state): State<AppState>,
    Auth(_user): Auth,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Transcript>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    Ok(Json(TranscriptRepository::new(&state.db).list(limit)?))
}

/// Issue a new transcript with generated qrCode/ipfsHash/blockTxn identifiers.
#[utoipa::path(
    post,
    path = "/api/transcripts",
    request_body = CreateTranscriptRequest,
    tag = "Transcripts",
    responses(
        (status = 201, body = Transcript),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn create_transcript(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateTranscriptRequest>,
) -> Result<(StatusCode, Json<Transcript>), ApiError> {
    let transcript = TranscriptRepository::new(&state.db).create(request)?;

    AuditRepository::new(&state.db).append_best_effort(
        AuditEventType::TranscriptIssued,
        Some(&user.user_id),
        format!("Transcript issued for {}", transcript.student_name),
        Some(json!({"transcriptId": transcript.id})),
    );

    Ok((StatusCode::CREATED, Json(transcript)))
}

/// Mark a stored transcript as verified.
#[utoipa::path(
    post,
    path = "/api/transcripts/{id}/verify",
    params(("id" = String, Path, description = "Transcript identifier")),
    tag = "Transcripts",
    responses(
        (status = 200, body = Transcript),
        (status = 401, description = "Missing or invalid session token"),
        (status = 404, description = "Transcript not found")
    )
)]
pub async fn verify_transcript(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<Transcript>, ApiError> {
    let transcript = TranscriptRepository::new(&state.db).mark_verified(&id)?;

    AuditRepository::new(&state.db).append_best_effort(
        AuditEventType::TranscriptVerified,
        Some(&user.user_id),
        format!("Transcript verified for {}", transcript.student_name),
        Some(json!({"transcriptId": id})),
    );

    Ok(Json(transcript))
}

/// Public hash-based verification for external checkers.
///
/// The response is not authoritative: when the hash matches a stored
/// transcript (by qrCode, ipfsHash, or blockTxn) the real record is echoed,
/// but an unknown hash still yields a positive canned payload. Callers that
/// need an authoritative answer must use the per-id verify endpoint.
#[utoipa::path(
    post,
    path = "/api/transcripts/verify",
    request_body = VerifyByHashRequest,
    tag = "Transcripts",
    responses(
        (status = 200, body = VerifyByHashResponse),
        (status = 400, description = "Missing hash")
    )
)]
pub async fn verify_transcript_by_hash(
    State(state): State<AppState>,
    Json(request): Json<VerifyByHashRequest>,
) -> Result<Json<VerifyByHashResponse>, ApiError> {
    let hash = match request.hash.as_deref().map(str::trim) {
        Some(hash) if !hash.is_empty() => hash.to_string(),
        _ => return Err(ApiError::bad_request("Hash or QR code required")),
    };

    if let Some(transcript) = TranscriptRepository::new(&state.db).find_by_hash(&hash)? {
        let university = UniversityRepository::new(&state.db)
            .get(&transcript.university_id)?
            .map(|u| u.name)
            .unwrap_or(transcript.university_id);

        return Ok(Json(VerifyByHashResponse {
            verified: true,
            student: transcript.student_name,
            university,
            degree: transcript.degree,
            issue_date: transcript.issue_date.format("%B %Y").to_string(),
            transaction_hash: hash,
        }));
    }

    Ok(Json(VerifyByHashResponse {
        verified: true,
        student: "John Smith".to_string(),
        university: "MIT".to_string(),
        degree: "B.S. Computer Science".to_string(),
        issue_date: "May 2023".to_string(),
        transaction_hash: hash,
    }))
}
