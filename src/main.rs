//! Taskboard server entry point.
//!
//! Loads `.env`, reads [`AppConfig`] from the environment, initialises
//! `tracing` (console plus an optional `app.log` file), and serves the task
//! API until Ctrl+C or SIGTERM.

use mockable::DefaultClock;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use taskboard::{
    api::{self, AppState},
    config::AppConfig,
    task::{
        adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService,
        validation::DefaultTaskValidator,
    },
};
use tokio::{net::TcpListener, signal};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "app.log";

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal.
    drop(dotenvy::dotenv());

    let loaded = AppConfig::from_env();
    let log_dir = loaded.as_ref().ok().and_then(|config| config.log_dir.as_deref());
    let (log_file, log_file_error) = match log_dir.map(open_log_file).transpose() {
        Ok(file) => (file, None),
        Err(error) => (None, Some(error)),
    };
    let file_layer = log_file.as_ref().map(|(writer, _)| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer.clone())
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    if let Some(error) = log_file_error {
        tracing::warn!(%error, "file logging disabled");
    }
    let config = match loaded {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "configuration error");
            return ExitCode::FAILURE;
        }
    };

    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let validator = Arc::new(DefaultTaskValidator::with_config(config.validation));
    let app = api::router(AppState::new(service, validator));

    let address = config.socket_addr();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, %address, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        %address,
        max_name_length = config.validation.max_name_length,
        "taskboard listening"
    );

    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%error, "server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("server shutdown complete");
    ExitCode::SUCCESS
}

/// Opens `app.log` under `dir` behind a non-blocking writer.
///
/// The guard must outlive the subscriber so buffered lines are flushed.
fn open_log_file(
    dir: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
