use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        mail::{LogMailer, Mailer, SmtpMailer},
        storage::FileStorage,
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
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Chooses the outbound mailer.
///
/// Uses SMTP when the `SMTP_*` settings are present; otherwise emails are written to the
/// log.
pub fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    match &config.smtp {
        Some(smtp) => {
            tracing::info!("Sending email through SMTP relay {}", smtp.host);
            Ok(Arc::new(SmtpMailer::new(smtp)?))
        }
        None => {
            tracing::warn!("SMTP is not configured, outgoing emails will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}

/// Creates the upload, report and invoice directories.
pub async fn setup_storage(config: &Config) -> Result<FileStorage, AppError> {
    let storage = FileStorage::new(
        config.upload_dir.clone(),
        config.report_dir.clone(),
        config.invoice_dir.clone(),
    );
    storage.ensure_dirs().await?;

    Ok(storage)
}
