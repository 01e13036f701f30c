//! # board-server
//!
//! The entry point that assembles the application from `Settings`.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::{router, AppState};
use auth_adapters::HashedCredentialTable;
use configs::{LogFormat, LogSettings, Settings};
use secrecy::ExposeSecret;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    init_tracing(&settings.log);
    if let Some(path) = &settings.env_file {
        info!(path = %path.display(), "loaded environment file");
    }

    let static_dir = settings.paths.existing_static_dir()?;

    info!(
        backends = ?storage_adapters::compiled_backends(),
        static_dir = %static_dir.display(),
        "starting message board"
    );

    // 1. Database: connect and create the schema
    let repo = storage_adapters::connect(
        settings.database.url.expose_secret(),
        settings.database.max_connections,
    )
    .await?;

    // 2. Admin credential table
    let credentials = credential_table(&settings)?;
    if credentials.is_empty() {
        warn!("no admin credential configured, /admin will reject every request");
    }

    // 3. Router
    let state = AppState::new(repo, Arc::new(credentials));
    let app = router(state, static_dir);

    let address = settings.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")?;

    info!("server stopped");
    Ok(())
}

/// `RUST_LOG` wins over `log.filter` when set.
fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn credential_table(settings: &Settings) -> anyhow::Result<HashedCredentialTable> {
    let Some(admin) = &settings.admin else {
        return Ok(HashedCredentialTable::new());
    };

    HashedCredentialTable::new()
        .with_user(&admin.username, admin.password_hash.expose_secret())
        .context("admin.password_hash is not a valid argon2 PHC string")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
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
}
