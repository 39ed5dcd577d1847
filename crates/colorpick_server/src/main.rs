//! Color form server entry point.

use colorpick_core::{core_version, init_logging, ColorRepository, JsonFileColorRepository};
use colorpick_server::{build_router, AppState, ServerConfig};
use log::{info, warn};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("colorpick-server: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env()?;
    init_logging(&config.log_level, &config.log_dir)?;

    let repo: Arc<dyn ColorRepository> =
        Arc::new(JsonFileColorRepository::new(&config.data_file));
    let app = build_router(AppState::new(repo, config.default_locale));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|err| format!("bind {} failed: {err}", config.bind_addr))?;
    info!(
        "event=server_start module=server status=ok bind={} data_file={} locale={} version={}",
        config.bind_addr,
        config.data_file.display(),
        config.default_locale,
        core_version()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|err| format!("server failed: {err}"))?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
                return;
            }
            Err(err) => {
                warn!("event=signal_register module=server status=error signal=SIGTERM error={err}");
            }
        }
    }
    let _ = tokio::signal::ctrl_c().await;
}
