use std::future::Future;
use std::net::SocketAddr;

use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::middleware::build_cors;
use crate::routes;
use crate::state::AppState;

/// Public entry: bind the configured address and serve until Ctrl+C.
pub async fn run(mut cfg: AppConfig) -> anyhow::Result<()> {
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    serve_with_shutdown(listener, AppState::in_memory(), shutdown_signal()).await
}

/// Serve the router on an already bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes::build_router(state, build_cors());
    let addr = listener.local_addr()?;
    info!(%addr, "starting cars server");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(%addr, "cars server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // 无法监听信号时不主动退出
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}
