// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

use std::{env, net::SocketAddr, path::PathBuf};

use tracing_subscriber::EnvFilter;

use educhainx_server::{
    api::router,
    config,
    state::{AppState, AuthConfig},
    storage::db::LedgerDb,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = env::var(config::LOG_FORMAT_ENV)
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() {
    init_tracing();

    let data_dir = env::var(config::DATA_DIR_ENV)
        .unwrap_or_else(|_| config::DEFAULT_DATA_DIR.to_string());
    let db_path = PathBuf::from(&data_dir).join(config::DATABASE_FILE);

    let db = match LedgerDb::open(&db_path) {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, path = %db_path.display(), "failed to open database");
            std::process::exit(1);
        }
    };
    tracing::info!(path = %db_path.display(), "database opened");

    let auth_config = AuthConfig::from_env();
    if auth_config.secret.is_none() {
        tracing::warn!("SESSION_JWT_SECRET not set; session tokens are not signature-checked");
    }

    let state = AppState::new(db).with_auth_config(auth_config);
    let app = router(state);

    let host = env::var(config::HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(config::PORT_ENV)
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = match format!("{host}:{port}").parse() {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!(error = %err, host, port, "failed to parse bind address");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!("EduChainX server listening on http://{addr} (docs at /docs)");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "server failed");
        std::process::exit(1);
    }
}
