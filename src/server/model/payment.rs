//! Payment domain models, lifecycle rules and parameters.
//!
//! A payment moves through `pending`, `completed` and `dispatched`. Card payments are
//! created `completed` (or `pending` on the deferred card path, confirmed by finalize);
//! slip payments are created `pending` and need an admin to verify the uploaded slip.
//! The allowed transitions are encoded in [`Payment::next_status`]; the service only
//! writes a status it returns.

use chrono::{DateTime, Utc};

use crate::{
    model::payment::{CardPaymentDto, FinalizePaymentDto, PaymentDto, PaymentItemDto},
    server::{
        error::{internal::InternalError, AppError},
        util::upload::UploadedFile,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Slip,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Slip => "slip",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "card" => Some(Self::Card),
            "slip" => Some(Self::Slip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Dispatched,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Dispatched => "dispatched",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "dispatched" => Some(Self::Dispatched),
            _ => None,
        }
    }
}

/// Admin or customer action that moves a payment to a new status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAction {
    /// Admin accepts an uploaded slip.
    Verify,
    /// Admin reverts a verified slip back to pending.
    Unverify,
    /// Admin marks a completed payment as shipped.
    Dispatch,
    /// Customer confirms a deferred card payment.
    Finalize,
}

impl PaymentAction {
    fn verb(&self) -> &'static str {
        match self {
            Self::Verify => "verified",
            Self::Unverify => "unverified",
            Self::Dispatch => "dispatched",
            Self::Finalize => "finalized",
        }
    }
}

/// Invoice line copied from the order when the payment was created.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentItem {
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i32,
}

impl PaymentItem {
    pub fn from_entity(entity: entity::payment_item::Model) -> Self {
        Self {
            product_name: entity.product_name,
            unit_price: entity.unit_price,
            quantity: entity.quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }

    pub fn into_dto(self) -> PaymentItemDto {
        PaymentItemDto {
            product_name: self.product_name,
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub billing_id: i32,
    /// External order identifier; a local order ID when the order was placed here.
    pub order_ref: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub amount: f64,
    pub card_holder: Option<String>,
    pub card_last4: Option<String>,
    pub card_expiry: Option<String>,
    pub slip_image: Option<String>,
    pub invoice_path: Option<String>,
    pub items: Vec<PaymentItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Converts a payment row and its snapshot lines into the domain model.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The converted payment
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored method or status is not recognized
    pub fn from_entity(
        entity: entity::payment::Model,
        items: Vec<entity::payment_item::Model>,
    ) -> Result<Self, AppError> {
        let method = PaymentMethod::parse(&entity.method).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "payment.method",
                value: entity.method.clone(),
            }
        })?;
        let status = PaymentStatus::parse(&entity.status).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "payment.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            billing_id: entity.billing_id,
            order_ref: entity.order_ref,
            method,
            status,
            amount: entity.amount,
            card_holder: entity.card_holder,
            card_last4: entity.card_last4,
            card_expiry: entity.card_expiry,
            slip_image: entity.slip_image,
            invoice_path: entity.invoice_path,
            items: items.into_iter().map(PaymentItem::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            billing_id: self.billing_id,
            order_id: self.order_ref,
            method: self.method.as_str().to_string(),
            status: self.status.as_str().to_string(),
            amount: self.amount,
            card_holder: self.card_holder,
            card_number: self.card_last4.map(|last4| format!("**** **** **** {}", last4)),
            card_expiry: self.card_expiry,
            slip_image: self.slip_image,
            invoice_path: self.invoice_path,
            items: self.items.into_iter().map(PaymentItem::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Returns the status `action` moves this payment to.
    ///
    /// - verify: slip only, from `pending`, to `completed`
    /// - unverify: slip only, from `completed`, to `pending`
    /// - dispatch: from `completed`, to `dispatched`
    /// - finalize: card only, from `pending`, to `completed`
    ///
    /// # Returns
    /// - `Ok(PaymentStatus)` - The new status
    /// - `Err(AppError::BadRequest)` - Transition not allowed; the message names the
    ///   current status or the offending method
    pub fn next_status(&self, action: PaymentAction) -> Result<PaymentStatus, AppError> {
        let required_method = match action {
            PaymentAction::Verify | PaymentAction::Unverify => Some(PaymentMethod::Slip),
            PaymentAction::Finalize => Some(PaymentMethod::Card),
            PaymentAction::Dispatch => None,
        };
        if let Some(method) = required_method {
            if self.method != method {
                return Err(AppError::BadRequest(format!(
                    "Only {} payments can be {}",
                    method.as_str(),
                    action.verb()
                )));
            }
        }

        let (from, to) = match action {
            PaymentAction::Verify => (PaymentStatus::Pending, PaymentStatus::Completed),
            PaymentAction::Unverify => (PaymentStatus::Completed, PaymentStatus::Pending),
            PaymentAction::Dispatch => (PaymentStatus::Completed, PaymentStatus::Dispatched),
            PaymentAction::Finalize => (PaymentStatus::Pending, PaymentStatus::Completed),
        };

        if self.status != from {
            return Err(AppError::BadRequest(format!(
                "Payment {} cannot be {} while {}",
                self.id,
                action.verb(),
                self.status.as_str()
            )));
        }

        Ok(to)
    }
}

/// Values for inserting a payment together with its snapshot lines.
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub billing_id: i32,
    pub order_ref: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub amount: f64,
    pub card_holder: Option<String>,
    pub card_last4: Option<String>,
    pub card_expiry: Option<String>,
    pub slip_image: Option<String>,
    pub items: Vec<PaymentItem>,
}

/// Raw card details as submitted; validated by the payment service.
#[derive(Debug, Clone)]
pub struct CardPaymentParams {
    pub billing_id: i32,
    pub order_ref: String,
    pub card_holder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub amount: Option<f64>,
}

impl CardPaymentParams {
    pub fn from_dto(dto: CardPaymentDto) -> Self {
        Self {
            billing_id: dto.billing_id,
            order_ref: dto.order_id,
            card_holder: dto.card_holder,
            card_number: dto.card_number,
            expiry: dto.expiry,
            cvv: dto.cvv,
            amount: dto.amount,
        }
    }
}

/// Slip payment form; the image is stored once the rest of the form validates.
#[derive(Debug, Clone)]
pub struct SlipPaymentParams {
    pub billing_id: i32,
    pub order_ref: String,
    pub amount: Option<f64>,
    pub slip: UploadedFile,
}

/// Details the customer resubmits to confirm a deferred card payment.
#[derive(Debug, Clone)]
pub struct FinalizePaymentParams {
    pub order_ref: String,
    pub billing_id: i32,
    pub method: String,
}

impl FinalizePaymentParams {
    pub fn from_dto(dto: FinalizePaymentDto) -> Self {
        Self {
            order_ref: dto.order_id,
            billing_id: dto.billing_id,
            method: dto.method,
        }
    }
}
