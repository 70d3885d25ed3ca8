// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Shared application state.

use std::sync::Arc;

use crate::chain::ChainMetrics;
use crate::config;
use crate::storage::db::LedgerDb;

/// Session token verification settings.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// HS256 secret. `None` enables development mode (no signature check).
    pub secret: Option<String>,
    /// Expected issuer, validated when set.
    pub issuer: Option<String>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var(config::SESSION_JWT_SECRET_ENV).ok(),
            issuer: std::env::var(config::SESSION_ISSUER_ENV).ok(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<LedgerDb>,
    pub auth_config: AuthConfig,
    pub chain_metrics: Arc<ChainMetrics>,
}

impl AppState {
    pub fn new(db: LedgerDb) -> Self {
        Self {
            db: Arc::new(db),
            auth_config: AuthConfig::default(),
            chain_metrics: ChainMetrics::new(),
        }
    }

    pub fn with_auth_config(mut self, auth_config: AuthConfig) -> Self {
        self.auth_config = auth_config;
        self
    }
}
