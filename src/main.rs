use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use user_api::{
    create_routes,
    infrastructure::{ensure_schema, Logger},
    AppConfig, AppState, ConnectionProvider, PgUserRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 文件可选
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    Logger::init();
    info!("Starting user API server...");
    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let provider = ConnectionProvider::new(&config.database);
    info!(
        host = config.database.options.get_host(),
        port = config.database.options.get_port(),
        mode = ?provider.mode(),
        "Database configured"
    );

    if config.database.ensure_schema {
        ensure_schema(&provider).await.map_err(|e| {
            error!("Failed to initialize database: {}", e);
            e
        })?;
    }

    let repository = PgUserRepository::new(provider.clone());
    let app = create_routes(AppState::new(Arc::new(repository)));

    let listener = TcpListener::bind(config.server.bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("🚀 User API server running on http://{}", addr);
    info!("📊 Available endpoints:");
    info!("   GET    /api/users              - List users");
    info!("   GET    /api/user/:id           - Get user by ID");
    info!("   POST   /api/newuser            - Create user");
    info!("   PUT    /api/updateuser/:id     - Update user");
    info!("   DELETE /api/deleteuser/:id     - Delete user");
    info!("   GET    /health                 - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    provider.shutdown().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => info!("Received SIGTERM, starting shutdown"),
    }
}
