// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Session token claims and authenticated user representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::roles::Role;
use crate::models::UpsertUser;

/// Claims carried by a session JWT from the identity provider.
///
/// Standard OIDC claims plus the profile fields the provider mirrors
/// into the token. Profile fields use the provider's camelCase names.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID) - the canonical identity-provider user identifier
    pub sub: String,

    /// Issued at timestamp
    #[serde(default)]
    #[allow(dead_code)]
    pub iat: i64,

    /// Expiration timestamp
    #[serde(default)]
    pub exp: i64,

    /// Issuer
    #[serde(default)]
    pub iss: String,

    /// Provider session ID
    #[serde(default)]
    pub sid: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,

    /// Given name
    #[serde(default, rename = "firstName")]
    pub first_name: Option<String>,

    /// Family name
    #[serde(default, rename = "lastName")]
    pub last_name: Option<String>,

    /// Avatar URL
    #[serde(default, rename = "profileImageUrl")]
    pub profile_image_url: Option<String>,

    /// User's role (set in the provider dashboard)
    #[serde(default)]
    pub role: Option<String>,
}

/// Authenticated user information extracted from the session token.
///
/// This is the primary type used throughout the application to represent
/// the authenticated user making a request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Canonical user ID (`sub` claim)
    pub user_id: String,

    /// User's role
    pub role: Role,

    /// Session ID (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Email address from the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Given name from the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name from the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Avatar URL from the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,

    /// Original issuer (used for validation, not serialized)
    #[serde(skip)]
    pub issuer: String,

    /// Token expiration (Unix timestamp, used for validation, not serialized)
    #[serde(skip)]
    pub expires_at: i64,
}

impl AuthenticatedUser {
    /// Create from session claims.
    pub fn from_claims(claims: SessionClaims) -> Self {
        // Extract role from the claim or default to Student
        let role = claims
            .role
            .as_deref()
            .and_then(Role::from_str)
            .unwrap_or(Role::Student);

        Self {
            user_id: claims.sub,
            role,
            session_id: claims.sid,
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            profile_image_url: claims.profile_image_url,
            issuer: claims.iss,
            expires_at: claims.exp,
        }
    }

    /// Profile fields for mirroring this user into local storage.
    pub fn upsert_fields(&self) -> UpsertUser {
        UpsertUser {
            id: self.user_id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }

    /// Check if the user has the required role.
    #[allow(dead_code)]
    pub fn has_role(&self, required: Role) -> bool {
        self.role.has_privilege(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> SessionClaims {
        SessionClaims {
            sub: "user_123".to_string(),
            iat: 1700000000,
            exp: 1700003600,
            iss: "https://sessions.example.com".to_string(),
            sid: Some("sess_abc".to_string()),
            email: Some("sara@example.edu".to_string()),
            first_name: Some("Sara".to_string()),
            last_name: Some("Tesfaye".to_string()),
            profile_image_url: None,
            role: Some("super_admin".to_string()),
        }
    }

    #[test]
    fn from_claims_extracts_user_id() {
        let user = AuthenticatedUser::from_claims(sample_claims());
        assert_eq!(user.user_id, "user_123");
    }

    #[test]
    fn from_claims_extracts_role() {
        let user = AuthenticatedUser::from_claims(sample_claims());
        assert_eq!(user.role, Role::SuperAdmin);
    }

    #[test]
    fn from_claims_defaults_to_student_role() {
        let mut claims = sample_claims();
        claims.role = None;
        let user = AuthenticatedUser::from_claims(claims);
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn upsert_fields_carry_profile() {
        let user = AuthenticatedUser::from_claims(sample_claims());
        let fields = user.upsert_fields();
        assert_eq!(fields.id, "user_123");
        assert_eq!(fields.email, Some("sara@example.edu".to_string()));
        assert_eq!(fields.first_name, Some("Sara".to_string()));
    }
}
