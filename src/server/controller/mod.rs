//! HTTP request handlers.
//!
//! Handlers authenticate through the `AuthGuard`, convert DTOs into parameters, call
//! the matching service and convert the resulting domain models back into DTOs.

pub mod billing;
pub mod crop;
pub mod forum;
pub mod land;
pub mod market;
pub mod notification;
pub mod order;
pub mod payment;
pub mod post;
pub mod product;
pub mod user;

use axum::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};

/// Wraps a rendered PDF for inline display.
pub(crate) fn pdf_response(file_name: &str, bytes: Vec<u8>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
}
