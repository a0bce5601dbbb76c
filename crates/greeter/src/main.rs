//! Greeter server entry point.

use std::process::ExitCode;

use clap::Parser;
use greeter::config::Config;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.addr();
    let listener = match greeter::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "could not start server");
            return ExitCode::FAILURE;
        }
    };
    let addr = listener
        .local_addr()
        .map(|bound| bound.to_string())
        .unwrap_or(addr);
    tracing::info!(%addr, "starting greeter server");

    if let Err(err) = greeter::serve(listener, shutdown_signal()).await {
        tracing::error!(error = %err, "server stopped unexpectedly");
        return ExitCode::FAILURE;
    }

    tracing::info!("server shut down gracefully");
    ExitCode::SUCCESS
}
