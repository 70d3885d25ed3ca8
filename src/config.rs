// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for the embedded database | `./data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SESSION_JWT_SECRET` | Shared secret for session-token verification | Required for production |
//! | `SESSION_ISSUER` | Expected session-token issuer claim | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the data directory path.
///
/// The embedded redb database file lives here. All universities, transcripts,
/// transactions, anomalies, and audit logs are stored in it.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Default data directory when `DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// File name of the embedded database inside the data directory.
pub const DATABASE_FILE: &str = "educhainx.redb";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the session-token shared secret.
///
/// The external identity provider mints HS256 session tokens with this
/// secret. When unset the server runs in development mode and only validates
/// token structure and expiry.
pub const SESSION_JWT_SECRET_ENV: &str = "SESSION_JWT_SECRET";

/// Environment variable name for the expected session-token issuer.
pub const SESSION_ISSUER_ENV: &str = "SESSION_ISSUER";

/// Environment variable name selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
