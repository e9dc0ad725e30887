use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use garage_api::config::{DatabaseConfig, EnvironmentConfig};
use garage_api::database::DatabaseConnection;
use garage_api::models::{
    Client, Employee, Entity, Invoice, InvoiceItem, Setting, Task, Vehicle, Work,
};
use garage_api::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .with_target(config.is_development())
        .init();

    info!("🔧 Garage API - Gestión de taller");
    info!("================================");
    info!("Entorno: {}", config.environment);
    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️  CORS_ORIGINS vacío en producción: CORS permisivo");
    }

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::new(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/docs - Esquema de la API");
    log_entity_routes::<Client>();
    log_entity_routes::<Vehicle>();
    log_entity_routes::<Work>();
    log_entity_routes::<Task>();
    log_entity_routes::<Employee>();
    log_entity_routes::<Invoice>();
    log_entity_routes::<InvoiceItem>();
    log_entity_routes::<Setting>();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

fn log_entity_routes<E: Entity>() {
    info!("   GET|POST /api/{}/ - {}", E::NAME, E::DESCRIPTION);
    info!("   GET|PUT|DELETE /api/{}/:id", E::NAME);
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
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
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
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
