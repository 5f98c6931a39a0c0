//! SME financing API server

use anyhow::{Context, Result};
use sme_fin_api::{Clock, DocumentStore, OtpCodeSource, SystemClock};
use sme_fin_postgres::{init_database, PostgresRepositories};
use sme_fin_server::config::AppConfig;
use sme_fin_server::state::{postgres_repository_set, AppState, StateOptions};
use sme_fin_server::storage::SupabaseStorage;
use sme_fin_server::telemetry::init_tracing;
use sme_fin_server::create_router;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level);

    if config.uses_default_jwt_secret() {
        tracing::warn!("JWT_SECRET is not set, using the development secret");
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_lazy_with(config.database.connect_options()?);

    if config.run_migrations {
        init_database(&pool)
            .await
            .context("failed to apply database migrations")?;
        tracing::info!("Database schema is up to date");
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let otp_codes = match &config.otp_code {
        Some(code) => OtpCodeSource::fixed(code).context("DEFAULT_OTP must be six digits")?,
        None => OtpCodeSource::Random,
    };

    let store: Option<Arc<dyn DocumentStore>> = match config.storage.clone() {
        Some(storage) => Some(Arc::new(
            SupabaseStorage::new(storage, clock.clone()).context("failed to build storage client")?,
        )),
        None => {
            tracing::warn!("SUPABASE_URL or key not set, trade license uploads are disabled");
            None
        }
    };

    let repos = PostgresRepositories::new(Arc::new(pool)).create_all_repositories();
    let state = AppState::new(
        postgres_repository_set(&repos),
        StateOptions {
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiry_hours: config.jwt_expiry_hours,
            otp_codes,
            store,
            clock,
        },
    );
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("API server starting at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
