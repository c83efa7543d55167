//! Payment service.
//!
//! Creates card and slip payments with an item snapshot of the local order (when the
//! order reference names one), drives the payment lifecycle and produces invoices.
//!
//! A status change is a single committed row update. What follows it (marking the order
//! paid, rendering and emailing the invoice, writing the customer notification) is best
//! effort: failures are logged at `warn` and the request still succeeds.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        billing::BillingRepository, notification::NotificationRepository,
        order::OrderRepository, payment::PaymentRepository,
    },
    error::AppError,
    model::{
        billing::Billing,
        notification::CreateNotificationParams,
        order::{Order, OrderStatus},
        payment::{
            CardPaymentParams, CreatePaymentParams, FinalizePaymentParams, Payment,
            PaymentAction, PaymentItem, PaymentMethod, PaymentStatus, SlipPaymentParams,
        },
    },
    service::{
        document,
        mail::{Email, EmailAttachment, Mailer},
        storage::FileStorage,
    },
    util::validate::{
        require_text, validate_card_expiry, validate_card_number, validate_cvv,
        validate_positive,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a FileStorage,
    mailer: &'a dyn Mailer,
}

/// Amount and item snapshot resolved from an order reference.
struct OrderSnapshot {
    order: Option<Order>,
    amount: f64,
    items: Vec<PaymentItem>,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a FileStorage, mailer: &'a dyn Mailer) -> Self {
        Self {
            db,
            storage,
            mailer,
        }
    }

    /// Records a card payment.
    ///
    /// Only the holder, the last four digits and the expiry are stored. With `status`
    /// `Completed` the linked local order is marked paid immediately; with `Pending` the
    /// payment waits for [`PaymentService::finalize`].
    ///
    /// # Returns
    /// - `Ok(Payment)` - Stored payment
    /// - `Err(AppError::BadRequest)` - Invalid card details, unknown billing record,
    ///   already paid order, or missing amount for an external order
    pub async fn create_card(
        &self,
        params: CardPaymentParams,
        status: PaymentStatus,
    ) -> Result<Payment, AppError> {
        let card_holder = require_text("cardHolder", &params.card_holder)?;
        let digits = validate_card_number(&params.card_number)?;
        let expiry = validate_card_expiry(&params.expiry, chrono::Utc::now().date_naive())?;
        validate_cvv(params.cvv.trim())?;
        let order_ref = require_text("orderId", &params.order_ref)?;

        self.require_billing(params.billing_id).await?;
        let snapshot = self.snapshot(&order_ref, params.amount).await?;

        let card_last4 = digits[digits.len() - 4..].to_string();
        let payment = PaymentRepository::new(self.db)
            .create(CreatePaymentParams {
                billing_id: params.billing_id,
                order_ref,
                method: PaymentMethod::Card,
                status,
                amount: snapshot.amount,
                card_holder: Some(card_holder),
                card_last4: Some(card_last4),
                card_expiry: Some(expiry),
                slip_image: None,
                items: snapshot.items,
            })
            .await?;

        tracing::info!(
            "Card payment {} recorded as {} for order {}",
            payment.id,
            payment.status.as_str(),
            payment.order_ref
        );

        if payment.status == PaymentStatus::Completed {
            if let Some(order) = &snapshot.order {
                self.mark_order_paid(order.id, payment.id).await;
            }
        }

        Ok(payment)
    }

    /// Records a bank slip payment in `pending`, awaiting admin verification.
    pub async fn create_slip(&self, params: SlipPaymentParams) -> Result<Payment, AppError> {
        let order_ref = require_text("orderId", &params.order_ref)?;

        self.require_billing(params.billing_id).await?;
        let snapshot = self.snapshot(&order_ref, params.amount).await?;

        let slip_image = self.storage.save_image(params.slip, "slip").await?;

        let payment = PaymentRepository::new(self.db)
            .create(CreatePaymentParams {
                billing_id: params.billing_id,
                order_ref,
                method: PaymentMethod::Slip,
                status: PaymentStatus::Pending,
                amount: snapshot.amount,
                card_holder: None,
                card_last4: None,
                card_expiry: None,
                slip_image: Some(slip_image),
                items: snapshot.items,
            })
            .await?;

        tracing::info!(
            "Slip payment {} awaiting verification for order {}",
            payment.id,
            payment.order_ref
        );

        Ok(payment)
    }

    pub async fn get_all(&self) -> Result<Vec<Payment>, AppError> {
        PaymentRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Payment>, AppError> {
        PaymentRepository::new(self.db).find_by_id(id).await
    }

    /// Applies an admin lifecycle action: verify, unverify or dispatch.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Payment after the status change (and invoice, for verify)
    /// - `Err(AppError::NotFound)` - No payment with that ID
    /// - `Err(AppError::BadRequest)` - Transition not allowed from the current state
    pub async fn apply(&self, id: i32, action: PaymentAction) -> Result<Payment, AppError> {
        let payment = self.find(id).await?;
        let status = payment.next_status(action)?;

        let mut payment = PaymentRepository::new(self.db)
            .update_status(id, status)
            .await?;

        tracing::info!(
            "Payment {} moved to {} ({:?})",
            payment.id,
            payment.status.as_str(),
            action
        );

        if let Some(order_id) = local_order_id(&payment.order_ref) {
            match action {
                PaymentAction::Verify => self.mark_order_paid(order_id, payment.id).await,
                PaymentAction::Unverify => self.release_order(order_id, payment.id).await,
                PaymentAction::Dispatch | PaymentAction::Finalize => {}
            }
        }

        let billing = match self.billing_for(&payment).await {
            Ok(billing) => billing,
            Err(e) => {
                tracing::warn!("Skipping follow-up for payment {}: {}", payment.id, e);
                return Ok(payment);
            }
        };

        let message = match action {
            PaymentAction::Verify => {
                payment = self.deliver_invoice(payment, &billing).await;
                format!(
                    "Your payment #{} for order {} has been verified.",
                    payment.id, payment.order_ref
                )
            }
            PaymentAction::Unverify => format!(
                "Your payment #{} for order {} needs to be reviewed again.",
                payment.id, payment.order_ref
            ),
            PaymentAction::Dispatch => format!(
                "Your order {} has been dispatched.",
                payment.order_ref
            ),
            PaymentAction::Finalize => format!(
                "Your payment #{} for order {} is complete.",
                payment.id, payment.order_ref
            ),
        };
        self.notify(&billing.user_ref, message).await;

        Ok(payment)
    }

    /// Confirms a deferred card payment.
    ///
    /// The submitted order reference, billing ID and method must match the stored
    /// payment.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Payment now `completed`
    /// - `Err(AppError::NotFound)` - No payment with that ID
    /// - `Err(AppError::BadRequest)` - Details do not match, not a card payment, or not pending
    pub async fn finalize(&self, id: i32, params: FinalizePaymentParams) -> Result<Payment, AppError> {
        let payment = self.find(id).await?;

        let method_matches = PaymentMethod::parse(&params.method) == Some(payment.method);
        if payment.order_ref != params.order_ref.trim()
            || payment.billing_id != params.billing_id
            || !method_matches
        {
            return Err(AppError::BadRequest(format!(
                "Order, billing or method does not match payment {}",
                id
            )));
        }

        let status = payment.next_status(PaymentAction::Finalize)?;
        let payment = PaymentRepository::new(self.db)
            .update_status(id, status)
            .await?;

        tracing::info!("Card payment {} finalized", payment.id);

        if let Some(order_id) = local_order_id(&payment.order_ref) {
            self.mark_order_paid(order_id, payment.id).await;
        }

        Ok(payment)
    }

    /// Returns the invoice PDF, rendering and storing it first if needed.
    pub async fn invoice(&self, id: i32) -> Result<Vec<u8>, AppError> {
        let payment = self.find(id).await?;

        if let Some(path) = &payment.invoice_path {
            if let Some(bytes) = self.storage.read_invoice(path).await? {
                return Ok(bytes);
            }
            tracing::warn!("Invoice {} for payment {} missing, re-rendering", path, id);
        }

        let billing = self.billing_for(&payment).await?;
        let (_, pdf) = self.store_invoice(&payment, &billing).await?;

        Ok(pdf)
    }

    /// Deletes a payment, its items and its slip image, releasing any order it paid.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let payment = self.find(id).await?;

        PaymentRepository::new(self.db).delete(id).await?;
        if let Some(order_id) = local_order_id(&payment.order_ref) {
            self.release_order(order_id, payment.id).await;
        }
        if let Some(slip) = &payment.slip_image {
            self.storage.remove_upload(slip).await;
        }

        tracing::info!("Payment {} deleted", id);

        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Payment, AppError> {
        PaymentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment {} not found", id)))
    }

    async fn require_billing(&self, billing_id: i32) -> Result<(), AppError> {
        if BillingRepository::new(self.db)
            .find_by_id(billing_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Billing {} does not exist",
                billing_id
            )));
        }
        Ok(())
    }

    async fn billing_for(&self, payment: &Payment) -> Result<Billing, AppError> {
        BillingRepository::new(self.db)
            .find_by_id(payment.billing_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Billing {} for payment {} is missing",
                    payment.billing_id, payment.id
                ))
            })
    }

    /// Resolves the amount and items for a payment against `order_ref`.
    ///
    /// A reference naming a local order copies its lines and total; any other reference
    /// requires an explicit positive `amount`.
    async fn snapshot(&self, order_ref: &str, amount: Option<f64>) -> Result<OrderSnapshot, AppError> {
        let order = match local_order_id(order_ref) {
            Some(id) => OrderRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };

        match order {
            Some(order) => {
                if order.status == OrderStatus::Paid {
                    return Err(AppError::BadRequest(format!(
                        "Order {} has already been paid",
                        order.id
                    )));
                }
                let items = order
                    .items
                    .iter()
                    .map(|item| PaymentItem {
                        product_name: item.product_name.clone(),
                        unit_price: item.unit_price,
                        quantity: item.quantity,
                    })
                    .collect();

                Ok(OrderSnapshot {
                    amount: order.total,
                    items,
                    order: Some(order),
                })
            }
            None => {
                let amount = amount.ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "amount is required for order {} which is not known here",
                        order_ref
                    ))
                })?;
                validate_positive("amount", amount)?;

                Ok(OrderSnapshot {
                    order: None,
                    amount,
                    items: Vec::new(),
                })
            }
        }
    }

    async fn store_invoice(
        &self,
        payment: &Payment,
        billing: &Billing,
    ) -> Result<(Payment, Vec<u8>), AppError> {
        let pdf = document::render_invoice(payment, billing)?;
        let path = self
            .storage
            .save_invoice(&invoice_file_name(payment.id), &pdf)
            .await?;
        let payment = PaymentRepository::new(self.db)
            .set_invoice_path(payment.id, path)
            .await?;

        Ok((payment, pdf))
    }

    /// Renders, stores and emails the invoice. Returns the payment with its invoice
    /// path when rendering succeeded.
    async fn deliver_invoice(&self, payment: Payment, billing: &Billing) -> Payment {
        let (payment, pdf) = match self.store_invoice(&payment, billing).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Failed to render invoice for payment {}: {}", payment.id, e);
                return payment;
            }
        };

        let email = Email {
            to: billing.email.clone(),
            subject: format!("AgroSphere invoice for order {}", payment.order_ref),
            body: format!(
                "Dear {},\n\nThank you for your purchase. Your payment of Rs. {:.2} has been \
                 verified and your invoice is attached.\n\nAgroSphere",
                billing.full_name, payment.amount
            ),
            attachment: Some(EmailAttachment {
                file_name: invoice_file_name(payment.id),
                content_type: "application/pdf".to_string(),
                bytes: pdf,
            }),
        };
        if let Err(e) = self.mailer.send(email).await {
            tracing::warn!("Failed to email invoice for payment {}: {}", payment.id, e);
        }

        payment
    }

    async fn mark_order_paid(&self, order_id: i32, payment_id: i32) {
        match OrderRepository::new(self.db)
            .mark_paid(order_id, payment_id)
            .await
        {
            Ok(true) => tracing::info!("Order {} paid by payment {}", order_id, payment_id),
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to mark order {} paid: {}", order_id, e),
        }
    }

    /// Returns an order held by `payment_id` to pending.
    async fn release_order(&self, order_id: i32, payment_id: i32) {
        match OrderRepository::new(self.db)
            .mark_pending(order_id, payment_id)
            .await
        {
            Ok(true) => tracing::info!("Order {} released by payment {}", order_id, payment_id),
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to return order {} to pending: {}", order_id, e),
        }
    }

    async fn notify(&self, recipient: &str, message: String) {
        if let Err(e) = NotificationRepository::new(self.db)
            .create(CreateNotificationParams::new(recipient, message))
            .await
        {
            tracing::warn!("Failed to notify {}: {}", recipient, e);
        }
    }
}

/// Parses an order reference that names a local order.
fn local_order_id(order_ref: &str) -> Option<i32> {
    order_ref.trim().parse().ok()
}

fn invoice_file_name(payment_id: i32) -> String {
    format!("invoice-{}.pdf", payment_id)
}
