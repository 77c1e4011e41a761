//! HTTP server lifecycle.

use tokio::net::TcpListener;

use crate::config::SiteDocsConfig;
use crate::routes::router;
use crate::state::AppState;
use crate::Result;

/// Bind the configured address and serve until ctrl-c.
pub async fn serve(config: &SiteDocsConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve_on(listener, config).await
}

/// Serve on an already-bound listener until ctrl-c.
pub async fn serve_on(listener: TcpListener, config: &SiteDocsConfig) -> Result<()> {
    let state = AppState::from_config(config);
    let app = router(state);

    tracing::info!(
        addr = %listener.local_addr()?,
        intake_delay_ms = config.intake.delay_ms,
        "sitedocs is up"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("sitedocs stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
