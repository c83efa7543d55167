use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        payment::{CardPaymentDto, FinalizePaymentDto, PaymentDto},
    },
    server::{
        controller::pdf_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::payment::{
            CardPaymentParams, FinalizePaymentParams, Payment, PaymentAction, PaymentStatus,
            SlipPaymentParams,
        },
        service::payment::PaymentService,
        state::AppState,
        util::upload::MultipartForm,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

fn payment_service(state: &AppState) -> PaymentService<'_> {
    PaymentService::new(&state.db, &state.storage, state.mailer.as_ref())
}

/// Pay by card.
///
/// Validates the card number (Luhn), expiry and CVV; only the holder, the last four
/// digits and the expiry are stored. The payment is `completed` immediately and a local
/// order named by `orderId` is marked paid.
///
/// # Returns
/// - `201 Created` - The completed payment
/// - `400 Bad Request` - Invalid card details, unknown billing record, order already
///   paid, or missing `amount` for an order not placed here
#[utoipa::path(
    post,
    path = "/api/payment/card",
    tag = PAYMENT_TAG,
    request_body = CardPaymentDto,
    responses(
        (status = 201, description = "Payment completed", body = PaymentDto),
        (status = 400, description = "Invalid payment details", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_by_card(
    State(state): State<AppState>,
    Json(payload): Json<CardPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payment = payment_service(&state)
        .create_card(CardPaymentParams::from_dto(payload), PaymentStatus::Completed)
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// Record a card payment to be confirmed later with finalize.
///
/// Same validation as the card endpoint; the payment is stored `pending`.
#[utoipa::path(
    post,
    path = "/api/payment/card/pending",
    tag = PAYMENT_TAG,
    request_body = CardPaymentDto,
    responses(
        (status = 201, description = "Payment recorded as pending", body = PaymentDto),
        (status = 400, description = "Invalid payment details", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_by_card_pending(
    State(state): State<AppState>,
    Json(payload): Json<CardPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payment = payment_service(&state)
        .create_card(CardPaymentParams::from_dto(payload), PaymentStatus::Pending)
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// Pay by bank slip.
///
/// Expects a multipart form with `billingId`, `orderId`, an optional `amount` and a
/// `slip` image. The payment waits in `pending` until an admin verifies it.
#[utoipa::path(
    post,
    path = "/api/payment/slip",
    tag = PAYMENT_TAG,
    responses(
        (status = 201, description = "Slip uploaded, payment pending", body = PaymentDto),
        (status = 400, description = "Missing field or unsupported image", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_by_slip(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = MultipartForm::read(multipart).await?;

    let billing_id = form
        .required_text("billingId")?
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("billingId must be an integer".to_string()))?;
    let order_ref = form.required_text("orderId")?.to_string();
    let amount = form
        .text("amount")
        .map(str::trim)
        .filter(|amount| !amount.is_empty())
        .map(|amount| {
            amount
                .parse::<f64>()
                .map_err(|_| AppError::BadRequest("amount must be a number".to_string()))
        })
        .transpose()?;
    let slip = form.required_file("slip")?;

    let payment = payment_service(&state)
        .create_slip(SlipPaymentParams {
            billing_id,
            order_ref,
            amount,
            slip,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// List all payments.
///
/// # Access Control
/// - `Admin` - Only admins can list payments
#[utoipa::path(
    get,
    path = "/api/payment",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "All payments, newest first", body = Vec<PaymentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let payments = payment_service(&state).get_all().await?;
    let payments: Vec<_> = payments.into_iter().map(Payment::into_dto).collect();

    Ok((StatusCode::OK, Json(payments)))
}

/// Get a payment by ID.
#[utoipa::path(
    get,
    path = "/api/payment/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "The payment", body = PaymentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let payment = payment_service(&state)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Payment {} not found", id)))?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

async fn apply_action(
    state: &AppState,
    headers: &HeaderMap,
    id: i32,
    action: PaymentAction,
) -> Result<PaymentDto, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, headers)
        .require(&[Permission::Admin])
        .await?;

    let payment = payment_service(state).apply(id, action).await?;

    Ok(payment.into_dto())
}

/// Verify an uploaded slip.
///
/// Moves a pending slip payment to `completed`, marks the order paid, renders the
/// invoice, emails it to the billing address and notifies the customer.
///
/// # Access Control
/// - `Admin` - Only admins can verify payments
#[utoipa::path(
    put,
    path = "/api/payment/{id}/verify",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment completed", body = PaymentDto),
        (status = 400, description = "Transition not allowed from the current state", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payment = apply_action(&state, &headers, id, PaymentAction::Verify).await?;

    Ok((StatusCode::OK, Json(payment)))
}

/// Revert a verified slip payment to `pending`.
///
/// # Access Control
/// - `Admin` - Only admins can unverify payments
#[utoipa::path(
    put,
    path = "/api/payment/{id}/unverify",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment back to pending", body = PaymentDto),
        (status = 400, description = "Transition not allowed from the current state", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unverify_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payment = apply_action(&state, &headers, id, PaymentAction::Unverify).await?;

    Ok((StatusCode::OK, Json(payment)))
}

/// Mark a completed payment as dispatched.
///
/// # Access Control
/// - `Admin` - Only admins can dispatch orders
#[utoipa::path(
    put,
    path = "/api/payment/{id}/dispatch",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment dispatched", body = PaymentDto),
        (status = 400, description = "Transition not allowed from the current state", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn dispatch_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payment = apply_action(&state, &headers, id, PaymentAction::Dispatch).await?;

    Ok((StatusCode::OK, Json(payment)))
}

/// Confirm a pending card payment.
///
/// The submitted order, billing record and method must match the stored payment.
#[utoipa::path(
    put,
    path = "/api/payment/{id}/finalize",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    request_body = FinalizePaymentDto,
    responses(
        (status = 200, description = "Payment completed", body = PaymentDto),
        (status = 400, description = "Details do not match or payment is not pending", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn finalize_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<FinalizePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let payment = payment_service(&state)
        .finalize(id, FinalizePaymentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Download the invoice PDF, rendering it on first request.
#[utoipa::path(
    get,
    path = "/api/payment/{id}/invoice",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Invoice PDF (application/pdf)"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let pdf = payment_service(&state).invoice(id).await?;

    Ok(pdf_response(&format!("invoice-{}.pdf", id), pdf))
}

/// Delete a payment, its items and its slip image.
///
/// # Access Control
/// - `Admin` - Only admins can delete payments
#[utoipa::path(
    delete,
    path = "/api/payment/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted payment", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    payment_service(&state).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Payment deleted".to_string(),
        }),
    ))
}
