use super::*;

/// Tests deleting a billing record that a payment still references.
///
/// Expected: Err(BadRequest) and the record is kept
#[tokio::test]
async fn rejects_referenced_billing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, billing, _) =
        factory::helpers::create_payment_with_dependencies(db, "card", "completed").await?;

    let service = BillingService::new(db);
    let result = service.delete(billing.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_by_id(billing.id).await?.is_some());

    Ok(())
}

/// Tests deleting an unreferenced billing record and then a missing one.
///
/// Expected: Ok, then Err(NotFound)
#[tokio::test]
async fn deletes_unreferenced_billing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let billing = factory::billing::create_billing(db).await?;

    let service = BillingService::new(db);
    service.delete(billing.id).await?;

    let result = service.delete(billing.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
