// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::{AuthError, AuthenticatedUser};
use crate::auth::claims::SessionClaims;
use crate::state::{AppState, AuthConfig};

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Extractor for authenticated users.
///
/// Validates the session JWT from the Authorization header and provides
/// the authenticated user information.
///
/// ## Authentication Modes
///
/// - **Production mode** (`SESSION_JWT_SECRET` set): HS256 signature
///   verification plus expiry and issuer checks
/// - **Development mode** (no secret): structure and expiry validation only
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // First check if middleware already set the user
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>().cloned() {
            return Ok(Auth(user));
        }

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        // Extract Bearer token
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?;

        let user = verify_token(token, &state.auth_config)?;

        Ok(Auth(user))
    }
}

/// Verify the session token and extract user information.
fn verify_token(token: &str, auth_config: &AuthConfig) -> Result<AuthenticatedUser, AuthError> {
    if let Some(ref secret) = auth_config.secret {
        verify_token_production(token, secret, auth_config)
    } else {
        verify_token_development(token)
    }
}

/// Production verification: HS256 signature, expiry, issuer.
fn verify_token_production(
    token: &str,
    secret: &str,
    auth_config: &AuthConfig,
) -> Result<AuthenticatedUser, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = CLOCK_SKEW_LEEWAY;
    validation.validate_aud = false;

    if let Some(ref issuer) = auth_config.issuer {
        validation.set_issuer(&[issuer]);
    }

    let key = DecodingKey::from_secret(secret.as_bytes());
    let token_data =
        decode::<SessionClaims>(token, &key, &validation).map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
            _ => AuthError::MalformedToken,
        })?;

    Ok(AuthenticatedUser::from_claims(token_data.claims))
}

/// Development verification (no signature check).
///
/// WARNING: This should only be used in development environments.
fn verify_token_development(token: &str) -> Result<AuthenticatedUser, AuthError> {
    // Use the dangerous decode API to skip signature verification
    let token_data = jsonwebtoken::dangerous::insecure_decode::<SessionClaims>(token)
        .map_err(|_e| AuthError::MalformedToken)?;

    let claims = token_data.claims;

    // Check expiration manually
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|_| AuthError::MalformedToken)?
        .as_secs() as i64;

    if claims.exp > 0 && claims.exp < now - CLOCK_SKEW_LEEWAY as i64 {
        return Err(AuthError::TokenExpired);
    }

    Ok(AuthenticatedUser::from_claims(claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::storage::db::LedgerDb;
    use axum::http::Request;
    use tempfile::TempDir;

    /// Helper to create a test AppState with no secret (development mode)
    fn create_test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db = LedgerDb::open(&temp_dir.path().join("test.redb")).expect("open db");
        let state = AppState::new(db).with_auth_config(AuthConfig {
            secret: None,
            issuer: Some("test".to_string()),
        });
        (state, temp_dir)
    }

    /// Helper to create a test JWT token (unsigned, for testing only)
    fn create_test_jwt(user_id: &str) -> String {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let header = r#"{"alg":"HS256","typ":"JWT"}"#;
        let claims = format!(
            r#"{{"sub":"{}","iat":1609459200,"exp":9999999999,"iss":"test","sid":"sess_123","email":"sara@example.edu","role":"auditor"}}"#,
            user_id
        );

        let header_b64 = URL_SAFE_NO_PAD.encode(header.as_bytes());
        let claims_b64 = URL_SAFE_NO_PAD.encode(claims.as_bytes());

        // For testing, signature doesn't matter since we use development mode
        format!("{}.{}.fake_signature", header_b64, claims_b64)
    }

    /// Same as above but with an expiry in the past.
    fn create_expired_jwt() -> String {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let header = r#"{"alg":"HS256","typ":"JWT"}"#;
        let claims = r#"{"sub":"user_123","iat":1609459200,"exp":1609462800,"iss":"test"}"#;

        format!(
            "{}.{}.fake_signature",
            URL_SAFE_NO_PAD.encode(header.as_bytes()),
            URL_SAFE_NO_PAD.encode(claims.as_bytes())
        )
    }

    #[tokio::test]
    async fn auth_extractor_requires_auth_header() {
        let (state, _temp_dir) = create_test_state();
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        // Without auth header, should fail
        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn auth_extractor_succeeds_with_jwt() {
        let (state, _temp_dir) = create_test_state();
        let token = create_test_jwt("user_123");
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {}", token))
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(result.is_ok());
        let user = result.unwrap().0;
        assert_eq!(user.user_id, "user_123");
        assert_eq!(user.role, Role::Auditor);
        assert_eq!(user.email, Some("sara@example.edu".to_string()));
    }

    #[tokio::test]
    async fn auth_extractor_rejects_expired_token() {
        let (state, _temp_dir) = create_test_state();
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {}", create_expired_jwt()))
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn auth_extractor_rejects_non_bearer_header() {
        let (state, _temp_dir) = create_test_state();
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn auth_extractor_prefers_extensions() {
        let (state, _temp_dir) = create_test_state();
        // If middleware already set the user, use that
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let user = AuthenticatedUser {
            user_id: "user_from_middleware".to_string(),
            role: Role::SuperAdmin,
            session_id: None,
            email: None,
            first_name: None,
            last_name: None,
            profile_image_url: None,
            issuer: "middleware".to_string(),
            expires_at: 0,
        };
        parts.extensions.insert(user.clone());

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().0.user_id, "user_from_middleware");
    }
}
