use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use fleet_revision::config::{DatabaseConfig, EnvironmentConfig};
use fleet_revision::database::create_pool;
use fleet_revision::repositories::{RevisionConfigRepository, VehicleRepository};
use fleet_revision::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚛 Fleet Revision Planner");
    info!("================================================");
    info!(
        "🔧 Entorno: {}, matching de marcas: {:?}, TTL de configuraciones: {}s",
        config.environment, config.brand_matching, config.cache.default_ttl
    );

    // Inicializar base de datos
    let database_config = DatabaseConfig::from_env()?;
    let pool = create_pool(&database_config).await.map_err(|e| {
        error!("❌ Error conectando a la base de datos: {}", e);
        e
    })?;

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_url()))?;

    let state = AppState::new(
        config,
        Arc::new(VehicleRepository::new(pool.clone())),
        Arc::new(RevisionConfigRepository::new(pool.clone())),
    );
    let app = create_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   GET  /api/revisions?q=");
    info!("   GET  /api/revisions/summary");
    info!("   GET  /api/vehicles?q=&sort=");
    info!("   GET  /api/vehicles/stats");
    info!("   POST /api/vehicles");
    info!("   PUT  /api/vehicles/:plate/odometer");
    info!("   POST /api/vehicles/:plate/revision");
    info!("   GET  /api/revision-configs");
    info!("   GET  /api/revision-configs/overview");
    info!("   POST /api/revision-configs");
    info!("   PUT  /api/revision-configs/:id");
    info!("   DELETE /api/revision-configs/:id");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    pool.close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("⚠️ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("⚠️ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
