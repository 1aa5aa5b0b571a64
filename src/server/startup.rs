use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, mail::MailError, AppError},
    service::{
        admin::code::AdminCodeService,
        notification::{
            mailer::{HttpMailer, LogMailer, Mailer},
            BookingNotifier,
        },
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the cookie session layer backed by the application database.
///
/// Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the outgoing mail transport.
///
/// Uses the HTTP relay when `MAIL_API_URL` is set, otherwise mail is written to the log.
pub fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    let mailer: Arc<dyn Mailer> = match &config.mail_api_url {
        Some(endpoint) => {
            tracing::info!("Sending mail through relay at {}", endpoint);

            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .map_err(MailError::from)?;

            Arc::new(HttpMailer::new(
                client,
                endpoint.clone(),
                config.mail_api_key.clone(),
                config.mail_from.clone(),
            ))
        }
        None => {
            tracing::warn!("MAIL_API_URL not set, outgoing mail will only be logged");
            Arc::new(LogMailer)
        }
    };

    Ok(mailer)
}

pub fn build_notifier(config: &Config) -> Result<BookingNotifier, AppError> {
    Ok(BookingNotifier::new(
        build_mailer(config)?,
        config.admin_email.clone(),
    ))
}

/// Allows the configured frontend origins to call the API with credentials.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGINS".to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}

/// Generates and logs a one-time admin code when no admin user exists yet.
///
/// A logged-in user can redeem the code at `POST /api/v1/auth/admin` to become the
/// first administrator.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin user found. Redeem this code at POST /api/v1/auth/admin within 10 minutes: {}",
        code
    );

    Ok(())
}
