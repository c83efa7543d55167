use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};


const SECRET: &str = "test-secret";

/// Builds request headers carrying a token for `user`.
fn bearer_for(tokens: &TokenService, user: entity::user::Model) -> HeaderMap {
    let user = User::from_entity(user).unwrap();
    let token = tokens.issue(&user).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
