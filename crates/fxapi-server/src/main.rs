//! fxapi server binary.
//!
//! Resolves config (file, env, flags), installs tracing, builds the shared
//! state once, and serves until Ctrl-C/SIGTERM. A failed bind exits non-zero.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use fxapi_server::{app_state, cli, config, router};

fn default_filter(debug: bool) -> &'static str {
    if debug {
        "fxapi_server=debug,tower_http=debug"
    } else {
        "fxapi_server=info,tower_http=info"
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Args::parse();
    if args.version {
        println!("{}", cli::version_line());
        return ExitCode::SUCCESS;
    }

    let cfg = match config::resolve(args.config.as_deref(), args.overrides()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("fxapi: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cfg.server.debug)));
    fmt().with_env_filter(filter).init();

    let listen = cfg.listen_addr();
    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = match tokio::net::TcpListener::bind(&listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%listen, error = %e, "Error starting fxapi server");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        %listen,
        version = state.instance().version,
        instance = %state.instance().uuid,
        started = %state.instance().started_at,
        "fxapi server starting"
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("fxapi server stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
