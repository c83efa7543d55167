use super::*;

/// Tests that payments referencing a billing record are counted.
///
/// Expected: count of 1 for the referenced record, 0 for a fresh one
#[tokio::test]
async fn counts_referencing_payments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_order, billing, _payment) =
        factory::helpers::create_payment_with_dependencies(db, "slip", "pending").await?;
    let unused = factory::billing::create_billing(db).await?;

    let repo = BillingRepository::new(db);
    assert_eq!(repo.payment_count(billing.id).await?, 1);
    assert_eq!(repo.payment_count(unused.id).await?, 0);

    Ok(())
}

/// Tests deleting an unreferenced billing record.
///
/// Expected: Ok(true) and the record is gone
#[tokio::test]
async fn deletes_billing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let billing = factory::billing::create_billing(db).await?;

    let repo = BillingRepository::new(db);
    assert!(repo.delete(billing.id).await?);
    assert!(repo.find_by_id(billing.id).await?.is_none());

    Ok(())
}
