// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! # Authentication Module
//!
//! Session JWT authentication for the EduChainX API.
//!
//! ## Auth Flow
//!
//! 1. The dashboard frontend authenticates the user with the identity provider
//! 2. Frontend sends `Authorization: Bearer <session JWT>`
//! 3. The server:
//!    - Verifies the token signature (HS256 with `SESSION_JWT_SECRET`),
//!      expiry, and issuer
//!    - Extracts:
//!      - `sub` → canonical `user_id`
//!      - profile claims (email, names, avatar)
//!      - the `role` claim
//!
//! ## Security
//!
//! - All `/api` endpoints except transcript verification require authentication
//! - Without `SESSION_JWT_SECRET` the server runs in development mode and
//!   skips signature verification (expiry is still enforced)
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod error;
pub mod extractor;
pub mod roles;

pub use claims::AuthenticatedUser;
pub use error::AuthError;
pub use extractor::Auth;
pub use roles::Role;
