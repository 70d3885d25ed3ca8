// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use axum::{extract::State, Json};

use crate::{
    auth::Auth,
    error::ApiError,
    models::User,
    state::AppState,
    storage::repository::UserRepository,
};

/// Return the caller's user row, creating it from the session claims on
/// first sight.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "Auth",
    responses(
        (status = 200, body = User),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn current_user(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<User>, ApiError> {
    let repo = UserRepository::new(&state.db);
    let row = match repo.get(&user.user_id)? {
        Some(row) => row,
        None => repo.upsert(user.upsert_fields())?,
    };
    Ok(Json(row))
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

    fn test_user(id: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: id.to_string(),
            role: Role::Student,
            session_id: None,
            email: Some("sara@example.edu".to_string()),
            first_name: Some("Sara".to_string()),
            last_name: None,
            profile_image_url: None,
            issuer: "test".to_string(),
            expires_at: 0,
        }
    }

    #[tokio::test]
    async fn first_request_creates_the_user_row() {
        let (state, _dir) = test_state();

        let Json(user) = current_user(State(state.clone()), Auth(test_user("user_1")))
            .await
            .expect("user lookup succeeds");

        assert_eq!(user.id, "user_1");
        assert_eq!(user.email, Some("sara@example.edu".to_string()));
        assert_eq!(user.role, Role::Student);
    }

    #[tokio::test]
    async fn repeated_requests_return_the_stored_row() {
        let (state, _dir) = test_state();

        let Json(first) = current_user(State(state.clone()), Auth(test_user("user_1")))
            .await
            .unwrap();
        let Json(second) = current_user(State(state.clone()), Auth(test_user("user_1")))
            .await
            .unwrap();

        assert_eq!(first, second);
    }
}
