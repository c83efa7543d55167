use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParams, Role, UpdateUserParams},
    service::{
        mail::RecordingMailer, password_reset::PasswordResetService, token::TokenService,
        user::UserService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod password_reset;
mod update;

fn registration(username: &str, email: &str) -> RegisterUserParams {
    RegisterUserParams {
        full_name: "Nimal Perera".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: "harvest2026".to_string(),
        phone: Some("0771234567".to_string()),
        address: None,
    }
}
