use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;
use crate::web::router::app_router;
use crate::web::state::AppState;

/// Binds `host:port` and serves the application until the process exits.
pub async fn start_server(state: AppState, host: &str, port: u16) -> Result<()> {
    let environment = state.environment;
    let app = app_router(state);

    let bind_addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&bind_addr).await?;

    info!(%environment, "Web server listening on {}", bind_addr);
    println!("🎉 Party invites running on http://127.0.0.1:{}", port);
    if !environment.is_production() {
        println!("🔎 Registered services: http://127.0.0.1:{}/allservices", port);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
