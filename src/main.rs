mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, service::password_reset::PasswordResetService,
    service::token::TokenService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let mailer = startup::build_mailer(&config)?;
    let storage = startup::setup_storage(&config).await?;

    let state = AppState::new(
        db,
        TokenService::new(&config.jwt_secret),
        mailer,
        PasswordResetService::new(),
        storage,
    );
    let router = server::router::router(state, config.cors_origin.as_deref())?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, router).await?;

    Ok(())
}
