// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use sealbox_server::api::router;
use sealbox_server::config::{DATA_DIR_ENV, DEFAULT_DATA_DIR, DEFAULT_PORT, HOST_ENV, PORT_ENV};
use sealbox_server::state::AppState;
use sealbox_server::vault::{FileVault, VaultPaths};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    // The vault generates its key here; files encrypted by a previous run
    // of the process cannot be decrypted again.
    let data_dir = env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let vault = FileVault::new(VaultPaths::new(&data_dir))
        .expect("Failed to initialize vault storage directories");

    let state = AppState::new(vault);
    let app = router(state);

    // Parse bind address
    let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(PORT_ENV)
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, %data_dir, "Sealbox relay listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
