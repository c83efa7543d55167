//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying bearer tokens
//! - Outbound mailer (SMTP, or a logging fallback)
//! - In-memory password reset code store
//! - File storage for uploads, reports and invoices

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{
    mail::Mailer, password_reset::PasswordResetService, storage::FileStorage,
    token::TokenService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the signing keys derived at startup
/// - `Arc<dyn Mailer>` is a reference-counted pointer
/// - `PasswordResetService` uses `Arc` for shared state
/// - `FileStorage` holds three paths
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    pub tokens: TokenService,

    pub mailer: Arc<dyn Mailer>,

    /// Issued password reset codes; lost on restart.
    pub reset_codes: PasswordResetService,

    pub storage: FileStorage,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        mailer: Arc<dyn Mailer>,
        reset_codes: PasswordResetService,
        storage: FileStorage,
    ) -> Self {
        Self {
            db,
            tokens,
            mailer,
            reset_codes,
            storage,
        }
    }
}
