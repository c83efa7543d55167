//! Field-level validation shared by the services.
//!
//! Each function returns `AppError::BadRequest` with a message naming the offending
//! field.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::server::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").unwrap());
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.]{3,30}$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9]{10}$").unwrap());

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Trims `value` and rejects it if nothing is left.
pub fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional value, mapping blank strings to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    Ok(email)
}

pub fn validate_username(username: &str) -> Result<String, AppError> {
    let username = username.trim();
    if !USERNAME_RE.is_match(username) {
        return Err(AppError::BadRequest(
            "Username must be 3-30 characters of letters, digits, '_' or '.'".to_string(),
        ));
    }
    Ok(username.to_string())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<String, AppError> {
    let phone: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_RE.is_match(&phone) {
        return Err(AppError::BadRequest("Invalid phone number".to_string()));
    }
    Ok(phone)
}

pub fn validate_non_negative(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest(format!("{} must not be negative", field)));
    }
    Ok(())
}

pub fn validate_positive(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::BadRequest(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(())
}

/// Validates a card number and returns its digits with separators removed.
///
/// Accepts 13 to 19 digits, optionally separated by spaces or dashes, that pass the
/// Luhn checksum.
pub fn validate_card_number(number: &str) -> Result<String, AppError> {
    let digits: String = number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if !(13..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::BadRequest("Invalid card number".to_string()));
    }
    if !luhn_valid(&digits) {
        return Err(AppError::BadRequest("Invalid card number".to_string()));
    }
    Ok(digits)
}

fn luhn_valid(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Validates an `MM/YY` expiry; a card is usable through the last day of its month.
pub fn validate_card_expiry(expiry: &str, today: NaiveDate) -> Result<String, AppError> {
    let invalid = || AppError::BadRequest("Card expiry must be in MM/YY format".to_string());

    let (month, year) = expiry.trim().split_once('/').ok_or_else(invalid)?;
    if month.len() != 2 || year.len() != 2 {
        return Err(invalid());
    }
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    let year = 2000 + year;
    if (year, month) < (today.year(), today.month()) {
        return Err(AppError::BadRequest("Card has expired".to_string()));
    }

    Ok(format!("{:02}/{:02}", month, year % 100))
}

pub fn validate_cvv(cvv: &str) -> Result<(), AppError> {
    if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::BadRequest("Invalid CVV".to_string()));
    }
    Ok(())
}
