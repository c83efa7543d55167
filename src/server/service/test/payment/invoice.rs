use super::*;

/// Tests fetching an invoice that has not been rendered yet, then fetching it again.
///
/// Expected: First call renders and stores a PDF; second call returns the stored bytes
#[tokio::test]
async fn renders_once_then_reads_stored_copy() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = temp_storage().await?;
    let mailer = RecordingMailer::default();

    let (_, _, payment) =
        factory::helpers::create_payment_with_dependencies(db, "card", "completed").await?;

    let service = PaymentService::new(db, &storage, &mailer);
    let first = service.invoice(payment.id).await?;
    assert!(first.starts_with(b"%PDF"));

    let stored = service.get_by_id(payment.id).await?.unwrap();
    assert!(stored.invoice_path.is_some());

    let second = service.invoice(payment.id).await?;
    assert_eq!(first, second);
    assert!(mailer.sent().is_empty());

    Ok(())
}
