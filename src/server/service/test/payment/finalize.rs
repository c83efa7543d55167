use super::*;

fn finalize_params(order_ref: String, billing_id: i32, method: &str) -> FinalizePaymentParams {
    FinalizePaymentParams {
        order_ref,
        billing_id,
        method: method.to_string(),
    }
}

/// Tests finalizing a deferred card payment with matching details.
///
/// Expected: Ok with status completed and the order marked paid
#[tokio::test]
async fn completes_matching_card_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (order, billing, payment) =
        factory::helpers::create_payment_with_dependencies(db, "card", "pending").await?;

    let service = PaymentService::new(db, &storage, &mailer);
    let finalized = service
        .finalize(
            payment.id,
            finalize_params(order.id.to_string(), billing.id, "card"),
        )
        .await?;

    assert_eq!(finalized.status, PaymentStatus::Completed);
    assert_eq!(order_status(db, order.id).await?, OrderStatus::Paid);

    let again = service
        .finalize(
            payment.id,
            finalize_params(order.id.to_string(), billing.id, "card"),
        )
        .await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests finalizing with details that differ from the stored payment.
///
/// Expected: Err(BadRequest) for a different order, billing or method; payment stays pending
#[tokio::test]
async fn rejects_mismatched_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (order, billing, payment) =
        factory::helpers::create_payment_with_dependencies(db, "card", "pending").await?;

    let service = PaymentService::new(db, &storage, &mailer);
    for params in [
        finalize_params("WEB-1".to_string(), billing.id, "card"),
        finalize_params(order.id.to_string(), billing.id + 1, "card"),
        finalize_params(order.id.to_string(), billing.id, "slip"),
    ] {
        let result = service.finalize(payment.id, params).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let stored = service.get_by_id(payment.id).await?.unwrap();
    assert_eq!(stored.status, PaymentStatus::Pending);

    Ok(())
}
