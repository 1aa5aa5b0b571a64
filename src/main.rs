mod model;
mod server;

use std::net::SocketAddr;

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    service::{admin::code::AdminCodeService, lock::CarLocks},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("carbook=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let notifier = startup::build_notifier(&config)?;
    let cors = startup::cors_layer(&config)?;

    let admin_code_service = AdminCodeService::new();
    startup::check_for_admin(&db, &admin_code_service).await?;

    let state = AppState::new(db, admin_code_service, CarLocks::new(), notifier);

    let mut router: Router = server::router::router()?
        .with_state(state)
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir));

    if let Some(static_dir) = &config.static_dir {
        tracing::info!("Serving frontend from {}", static_dir.display());
        router = router.fallback_service(
            ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html"))),
        );
    }

    let router = router
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.app_addr).await?;
    tracing::info!("Starting server on {}", config.app_addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutting down");
}
