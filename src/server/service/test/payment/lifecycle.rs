use super::*;

/// Tests verifying a pending slip payment.
///
/// Expected: Ok with status completed, the order paid, an invoice stored and emailed
/// to the billing address and the customer notified
#[tokio::test]
async fn verify_issues_invoice_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (order, billing, payment) =
        factory::helpers::create_payment_with_dependencies(db, "slip", "pending").await?;

    let service = PaymentService::new(db, &storage, &mailer);
    let verified = service.apply(payment.id, PaymentAction::Verify).await?;

    assert_eq!(verified.status, PaymentStatus::Completed);
    assert_eq!(order_status(db, order.id).await?, OrderStatus::Paid);

    let invoice_path = verified.invoice_path.clone().unwrap();
    let file_name = invoice_path.strip_prefix("/invoices/").unwrap();
    assert!(storage.invoice_dir().join(file_name).exists());

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, billing.email);
    let attachment = sent[0].attachment.as_ref().unwrap();
    assert_eq!(attachment.content_type, "application/pdf");
    assert!(attachment.bytes.starts_with(b"%PDF"));

    let notifications = NotificationRepository::new(db)
        .get_by_recipient(&billing.user_ref)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].message.contains("verified"));

    Ok(())
}

/// Tests verifying while the mail relay is down.
///
/// Expected: Ok with status completed and the invoice still stored
#[tokio::test]
async fn verify_survives_mail_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::failing();

    let (_, _, payment) =
        factory::helpers::create_payment_with_dependencies(db, "slip", "pending").await?;

    let service = PaymentService::new(db, &storage, &mailer);
    let verified = service.apply(payment.id, PaymentAction::Verify).await?;

    assert_eq!(verified.status, PaymentStatus::Completed);
    assert!(verified.invoice_path.is_some());

    Ok(())
}

/// Tests unverify then re-verify, dispatch, and a transition out of dispatched.
///
/// Expected: Each allowed step succeeds with a notification; the final verify fails
/// with BadRequest naming the current state
#[tokio::test]
async fn walks_slip_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (order, billing, payment) =
        factory::helpers::create_payment_with_dependencies(db, "slip", "completed").await?;

    let service = PaymentService::new(db, &storage, &mailer);

    let reverted = service.apply(payment.id, PaymentAction::Unverify).await?;
    assert_eq!(reverted.status, PaymentStatus::Pending);
    assert_eq!(order_status(db, order.id).await?, OrderStatus::Pending);

    service.apply(payment.id, PaymentAction::Verify).await?;
    assert_eq!(order_status(db, order.id).await?, OrderStatus::Paid);
    let dispatched = service.apply(payment.id, PaymentAction::Dispatch).await?;
    assert_eq!(dispatched.status, PaymentStatus::Dispatched);

    match service.apply(payment.id, PaymentAction::Verify).await {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("dispatched")),
        other => panic!("Expected BadRequest, got {:?}", other),
    }

    let notifications = NotificationRepository::new(db)
        .get_by_recipient(&billing.user_ref)
        .await?;
    assert_eq!(notifications.len(), 3);

    Ok(())
}

/// Tests verifying a card payment and acting on a missing payment.
///
/// Expected: Err(BadRequest) and Err(NotFound)
#[tokio::test]
async fn rejects_invalid_actions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (_, _, payment) =
        factory::helpers::create_payment_with_dependencies(db, "card", "pending").await?;

    let service = PaymentService::new(db, &storage, &mailer);

    let result = service.apply(payment.id, PaymentAction::Verify).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.apply(payment.id + 1, PaymentAction::Dispatch).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests unverifying a slip payment after it paid for its order.
///
/// Expected: Payment and order both back to pending, the order no longer held by the
/// payment and open to a new payment
#[tokio::test]
async fn unverify_releases_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (order, billing, payment) =
        factory::helpers::create_payment_with_dependencies(db, "slip", "pending").await?;

    let service = PaymentService::new(db, &storage, &mailer);
    service.apply(payment.id, PaymentAction::Verify).await?;
    assert_eq!(order_status(db, order.id).await?, OrderStatus::Paid);

    let reverted = service.apply(payment.id, PaymentAction::Unverify).await?;
    assert_eq!(reverted.status, PaymentStatus::Pending);

    let released = OrderRepository::new(db)
        .find_by_id(order.id)
        .await?
        .unwrap();
    assert_eq!(released.status, OrderStatus::Pending);
    assert_eq!(released.payment_id, None);

    let retry = service
        .create_card(card(billing.id, &order.id.to_string()), PaymentStatus::Completed)
        .await?;
    assert_eq!(retry.status, PaymentStatus::Completed);
    assert_eq!(order_status(db, order.id).await?, OrderStatus::Paid);

    Ok(())
}

/// Tests deleting the payment that paid for an order.
///
/// Expected: Order back to pending with no payment recorded
#[tokio::test]
async fn delete_releases_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (order, _, payment) =
        factory::helpers::create_payment_with_dependencies(db, "slip", "pending").await?;

    let service = PaymentService::new(db, &storage, &mailer);
    service.apply(payment.id, PaymentAction::Verify).await?;
    service.delete(payment.id).await?;

    let released = OrderRepository::new(db)
        .find_by_id(order.id)
        .await?
        .unwrap();
    assert_eq!(released.status, OrderStatus::Pending);
    assert_eq!(released.payment_id, None);

    Ok(())
}
