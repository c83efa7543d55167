use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

pub enum Permission {
    /// Caller must hold the admin role.
    Admin,
    /// Caller must be the given user, or an admin.
    OwnerOrAdmin(i32),
    /// Caller must be the given user; admins get no exception.
    Author(i32),
}

/// Checks a single permission against an already authenticated user.
///
/// Used directly by handlers that must load a resource before they know its owner.
pub fn ensure(user: &User, permission: &Permission) -> Result<(), AppError> {
    let denied = match permission {
        Permission::Admin => (!user.is_admin())
            .then(|| "User attempted an admin-only operation without the admin role".to_string()),
        Permission::OwnerOrAdmin(owner_id) => (!user.owns_or_admin(*owner_id)).then(|| {
            format!(
                "User attempted to access a resource owned by user {}",
                owner_id
            )
        }),
        Permission::Author(author_id) => (user.id != *author_id).then(|| {
            format!(
                "User attempted to modify content authored by user {}",
                author_id
            )
        }),
    };

    match denied {
        Some(reason) => Err(AuthError::AccessDenied(user.id, reason).into()),
        None => Ok(()),
    }
}

/// Resolves the bearer token on a request to a user and checks permissions.
///
/// The token only proves identity. The role is read from the database on every request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature or expired token
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = self.bearer_token()?;
        let claims = self.tokens.verify(token)?;

        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            ensure(&user, permission)?;
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}
