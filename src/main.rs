mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Glass Nou - API del taller de lunas");
    info!("======================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    db_connection.run_migrations().await?;

    let pool = db_connection.pool().clone();

    // CORS: permisivo en desarrollo, lista de orígenes en producción
    let cors = if config.cors_origins.is_empty() {
        if config.is_production() {
            info!("⚠️ CORS permisivo sin CORS_ORIGINS definido");
        }
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(pool, config.clone());

    let app = routes::create_api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👤 Clientes:");
    info!("   GET  /customers - Listar clientes");
    info!("   GET  /customers/:id - Obtener cliente");
    info!("   POST /customers - Crear cliente");
    info!("   PUT  /customers/:id - Actualizar cliente");
    info!("   DELETE /customers/:id - Eliminar cliente");
    info!("🚗 Vehículos:");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   GET  /vehicles/:id - Obtener vehículo");
    info!("   POST /vehicles - Crear vehículo");
    info!("   PUT  /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");
    info!("🏙️ Ciudades:");
    info!("   GET/POST /api/cities - Listar y crear ciudades");
    info!("   GET/PUT/DELETE /api/cities/:id - Detalle, actualizar, eliminar");
    info!("🔧 Servicios:");
    info!("   GET/POST /api/services - Listar y crear servicios");
    info!("   GET/PUT/DELETE /api/services/:id - Detalle, actualizar, eliminar");
    info!("📅 Reservas:");
    info!("   GET/POST /api/bookings - Listar y crear reservas");
    info!("   GET/PUT/DELETE /api/bookings/:id - Detalle, actualizar, eliminar");
    info!("⭐ Reseñas:");
    info!("   GET/POST /api/reviews - Listar y crear reseñas");
    info!("   GET/PUT/DELETE /api/reviews/:id - Detalle, actualizar, eliminar");
    info!("💶 Presupuestos:");
    info!("   POST /api/quotes - Solicitar presupuesto (landing)");
    info!("   GET  /api/quotes - Listar solicitudes");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
