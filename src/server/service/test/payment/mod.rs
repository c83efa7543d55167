use axum::body::Bytes;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::server::{
    data::{notification::NotificationRepository, order::OrderRepository},
    error::AppError,
    model::{
        order::OrderStatus,
        payment::{
            CardPaymentParams, FinalizePaymentParams, PaymentAction, PaymentMethod,
            PaymentStatus, SlipPaymentParams,
        },
    },
    service::{mail::RecordingMailer, payment::PaymentService, storage::FileStorage},
    util::upload::UploadedFile,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod finalize;
mod invoice;
mod lifecycle;

/// Storage rooted in a fresh temporary directory.
async fn temp_storage() -> Result<(TempDir, FileStorage), AppError> {
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(
        dir.path().join("uploads"),
        dir.path().join("reports"),
        dir.path().join("invoices"),
    );
    storage.ensure_dirs().await?;

    Ok((dir, storage))
}

fn card(billing_id: i32, order_ref: &str) -> CardPaymentParams {
    CardPaymentParams {
        billing_id,
        order_ref: order_ref.to_string(),
        card_holder: "N Perera".to_string(),
        card_number: "4111 1111 1111 1111".to_string(),
        expiry: "12/99".to_string(),
        cvv: "123".to_string(),
        amount: None,
    }
}

fn slip_image() -> UploadedFile {
    UploadedFile {
        file_name: Some("slip.png".to_string()),
        content_type: Some("image/png".to_string()),
        bytes: Bytes::from_static(b"\x89PNG\r\n\x1a\nslip"),
    }
}

async fn order_status(db: &DatabaseConnection, id: i32) -> Result<OrderStatus, AppError> {
    let order = OrderRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

    Ok(order.status)
}
