// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateUniversityRequest, University},
    state::AppState,
    storage::audit::{AuditEventType, AuditRepository},
    storage::repository::UniversityRepository,
};

#[utoipa::path(
    get,
    path = "/api/universities",
    tag = "Universities",
    responses(
        (status = 200, body = [University]),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn list_universities(
    State(state): State<AppState>,
    Auth(_user): Auth,
) -> Result<Json<Vec<University>>, ApiError> {
    Ok(Json(UniversityRepository::new(&state.db).list()?))
}

/// Register a new university. Always starts unverified.
#[utoipa::path(
    post,
    path = "/api/universities",
    request_body = CreateUniversityRequest,
    tag = "Universities",
    responses(
        (status = 201, body = University),
        (status = 400, description = "Missing university name"),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn create_university(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateUniversityRequest>,
) -> Result<(StatusCode, Json<University>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request("University name is required"));
    }

    let university = UniversityRepository::new(&state.db).create(request)?;

    AuditRepository::new(&state.db).append_best_effort(
        AuditEventType::UniversityCreated,
        Some(&user.user_id),
        format!("University \"{}\" was created", university.name),
        Some(json!({"universityId": university.id})),
    );

    Ok((StatusCode::CREATED, Json(university)))
}

/// Flip the `verified` flag. There is no unverify path.
#[utoipa::path(
    patch,
    path = "/api/universities/{id}/verify",
    params(("id" = String, Path, description = "University identifier")),
    tag = "Universities",
    responses(
        (status = 200, body = University),
        (status = 401, description = "Missing or invalid session token"),
        (status = 404, description = "University not found")
    )
)]
pub async fn verify_university(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<University>, ApiError> {
    let university = UniversityRepository::new(&state.db).mark_verified(&id)?;

    AuditRepository::new(&state.db).append_best_effort(
        AuditEventType::UniversityVerified,
        Some(&user.user_id),
        format!("University \"{}\" was verified", university.name),
        Some(json!({"universityId": id})),
    );

    Ok(Json(university))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthenticatedUser, Role};
    use crate::storage::db::LedgerDb;

    fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = LedgerDb::open(&dir.path().join("test.redb")).unwrap();
        (AppState::new(db), dir)
    }

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "admin_1".to_string(),
            role: Role::SuperAdmin,
            session_id: None,
            email: None,
            first_name: None,
            last_name: None,
            profile_image_url: None,
            issuer: "test".to_string(),
            expires_at: 0,
        }
    }

    fn request(name: &str) -> CreateUniversityRequest {
        CreateUniversityRequest {
            name: name.to_string(),
            wallet_address: None,
            contact_email: Some("registrar@example.edu".to_string()),
            website: None,
        }
    }

    #[tokio::test]
    async fn create_university_success_appends_audit_entry() {
        let (state, _dir) = test_state();

        let (status, Json(university)) = create_university(
            State(state.clone()),
            Auth(test_user()),
            Json(request("Addis Ababa University")),
        )
        .await
        .expect("university creation succeeds");

        assert_eq!(status, StatusCode::CREATED);
        assert!(!university.verified);

        let entries = AuditRepository::new(&state.db).list(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event_type, AuditEventType::UniversityCreated);
        assert_eq!(entries[0].user_id, Some("admin_1".to_string()));
    }

    #[tokio::test]
    async fn create_university_rejects_blank_name() {
        let (state, _dir) = test_state();

        let err = create_university(State(state), Auth(test_user()), Json(request("   ")))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn verify_university_flips_flag() {
        let (state, _dir) = test_state();
        let (_, Json(created)) = create_university(
            State(state.clone()),
            Auth(test_user()),
            Json(request("Mekelle University")),
        )
        .await
        .unwrap();

        let Json(verified) = verify_university(
            Path(created.id.clone()),
            State(state.clone()),
            Auth(test_user()),
        )
        .await
        .expect("verification succeeds");

        assert!(verified.verified);

        let Json(listed) = list_universities(State(state), Auth(test_user()))
            .await
            .unwrap();
        assert!(listed.iter().any(|u| u.id == created.id && u.verified));
    }

    #[tokio::test]
    async fn verify_missing_university_is_404() {
        let (state, _dir) = test_state();

        let err = verify_university(
            Path("missing".to_string()),
            State(state),
            Auth(test_user()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
