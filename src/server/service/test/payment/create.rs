use super::*;

/// Tests a card payment against a local order.
///
/// Expected: Ok with status completed, amount and items copied from the order, only
/// the last four digits stored and the order marked paid
#[tokio::test]
async fn card_payment_snapshots_local_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (user, product, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let billing = factory::billing::BillingFactory::new(db)
        .user_ref(user.id.to_string())
        .build()
        .await?;

    let service = PaymentService::new(db, &storage, &mailer);
    let payment = service
        .create_card(card(billing.id, &order.id.to_string()), PaymentStatus::Completed)
        .await?;

    assert_eq!(payment.method, PaymentMethod::Card);
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.amount, order.total);
    assert_eq!(payment.card_last4.as_deref(), Some("1111"));
    assert_eq!(payment.card_expiry.as_deref(), Some("12/99"));
    assert_eq!(payment.items.len(), 1);
    assert_eq!(payment.items[0].product_name, product.name);

    let order = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();
    assert_eq!(order.status, OrderStatus::Paid);
    assert_eq!(order.payment_id, Some(payment.id));

    Ok(())
}

/// Tests the deferred card path.
///
/// Expected: Ok with status pending and the order left unpaid
#[tokio::test]
async fn pending_card_payment_leaves_order_unpaid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let billing = factory::billing::create_billing(db).await?;

    let service = PaymentService::new(db, &storage, &mailer);
    let payment = service
        .create_card(card(billing.id, &order.id.to_string()), PaymentStatus::Pending)
        .await?;

    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(order_status(db, order.id).await?, OrderStatus::Pending);

    Ok(())
}

/// Tests a card payment for an order reference that is not a local order.
///
/// Expected: Err(BadRequest) without an amount, Ok with no items once an amount is given
#[tokio::test]
async fn external_order_requires_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let billing = factory::billing::create_billing(db).await?;

    let service = PaymentService::new(db, &storage, &mailer);
    let result = service
        .create_card(card(billing.id, "WEB-7781"), PaymentStatus::Completed)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut params = card(billing.id, "WEB-7781");
    params.amount = Some(750.0);
    let payment = service.create_card(params, PaymentStatus::Completed).await?;

    assert_eq!(payment.amount, 750.0);
    assert!(payment.items.is_empty());

    Ok(())
}

/// Tests card details that fail validation and a billing record that does not exist.
///
/// Expected: Err(BadRequest) for each
#[tokio::test]
async fn rejects_invalid_card_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let billing = factory::billing::create_billing(db).await?;
    let order_ref = order.id.to_string();

    let mut bad_luhn = card(billing.id, &order_ref);
    bad_luhn.card_number = "4111 1111 1111 1112".to_string();
    let mut expired = card(billing.id, &order_ref);
    expired.expiry = "01/20".to_string();
    let mut bad_cvv = card(billing.id, &order_ref);
    bad_cvv.cvv = "12".to_string();
    let unknown_billing = card(billing.id + 1, &order_ref);

    let service = PaymentService::new(db, &storage, &mailer);
    for params in [bad_luhn, expired, bad_cvv, unknown_billing] {
        let result = service.create_card(params, PaymentStatus::Completed).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests paying for an order that has already been paid.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_paid_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let billing = factory::billing::create_billing(db).await?;
    let service = PaymentService::new(db, &storage, &mailer);
    service
        .create_card(card(billing.id, &order.id.to_string()), PaymentStatus::Completed)
        .await?;

    let result = service
        .create_card(card(billing.id, &order.id.to_string()), PaymentStatus::Completed)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a slip payment upload.
///
/// Expected: Ok with status pending and the slip stored under the uploads directory
#[tokio::test]
async fn slip_payment_stores_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let billing = factory::billing::create_billing(db).await?;

    let service = PaymentService::new(db, &storage, &mailer);
    let payment = service
        .create_slip(SlipPaymentParams {
            billing_id: billing.id,
            order_ref: order.id.to_string(),
            amount: None,
            slip: slip_image(),
        })
        .await?;

    assert_eq!(payment.method, PaymentMethod::Slip);
    assert_eq!(payment.status, PaymentStatus::Pending);
    let slip = payment.slip_image.clone().unwrap();
    let file_name = slip.strip_prefix("/uploads/").unwrap();
    assert!(file_name.starts_with("slip-"));
    assert!(storage.upload_dir().join(file_name).exists());

    service.delete(payment.id).await?;
    assert!(!storage.upload_dir().join(file_name).exists());

    Ok(())
}
