// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use coffee_shop_environment::{
    api::router, config::ServerConfig, environment::EnvironmentConfig, logging, state::AppState,
};

#[tokio::main]
async fn main() -> ExitCode {
    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid server configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(server_config.log_format);

    let environment = EnvironmentConfig::current();
    if let Err(e) = environment.validate() {
        tracing::error!(field = e.field(), error = %e, "Environment record is invalid");
        return ExitCode::FAILURE;
    }
    tracing::info!(
        production = environment.production(),
        api_server_url = environment.api_server_url(),
        auth0_domain = environment.auth0().domain(),
        "Loaded environment record"
    );

    let app = router(AppState::new(environment.clone()));

    let listener = match tokio::net::TcpListener::bind(server_config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %server_config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Coffee shop environment service listening on http://{} (docs at /docs)",
        server_config.bind_addr
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
