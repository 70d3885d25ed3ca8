// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use axum::{
    extract::{Query, State},
    Json,
};

use super::ListQuery;
use crate::{
    auth::Auth,
    error::ApiError,
    state::AppState,
    storage::audit::{AuditLog, AuditRepository},
};

const DEFAULT_LIST_LIMIT: usize = 100;

#[utoipa::path(
    get,
    path = "/api/audit-logs",
    params(ListQuery),
    tag = "Audit",
    responses(
        (status = 200, body = [AuditLog]),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn list_audit_logs(
    State(state): State<AppState>,
    Auth(_user): Auth,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<AuditLog>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    Ok(Json(AuditRepository::new(&state.db).list(limit)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthenticatedUser, Role};
    use crate::storage::audit::AuditEventType;
    use crate::storage::db::LedgerDb;

    fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = LedgerDb::open(&dir.path().join("test.redb")).unwrap();
        (AppState::new(db), dir)
    }

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "auditor_1".to_string(),
            role: Role::Auditor,
            session_id: None,
            email: None,
            first_name: None,
            last_name: None,
            profile_image_url: None,
            issuer: "test".to_string(),
            expires_at: 0,
        }
    }

    #[tokio::test]
    async fn lists_entries_up_to_limit() {
        let (state, _dir) = test_state();

        let audit = AuditRepository::new(&state.db);
        for i in 0..5 {
            audit
                .append(
                    AuditEventType::TranscriptIssued,
                    Some("admin_1"),
                    format!("entry {i}"),
                    None,
                )
                .unwrap();
        }

        let Json(limited) = list_audit_logs(
            State(state.clone()),
            Auth(test_user()),
            Query(ListQuery { limit: Some(3) }),
        )
        .await
        .unwrap();
        assert_eq!(limited.len(), 3);

        let Json(all) = list_audit_logs(
            State(state),
            Auth(test_user()),
            Query(ListQuery { limit: None }),
        )
        .await
        .unwrap();
        assert_eq!(all.len(), 5);
    }
}
