use super::*;

/// Tests listing payments newest first, each with its own items.
///
/// Expected: Ok with 2 payments; the newest first
#[tokio::test]
async fn lists_payments_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, older) =
        factory::helpers::create_payment_with_dependencies(db, "slip", "pending").await?;
    let (_, _, newer) =
        factory::helpers::create_payment_with_dependencies(db, "card", "completed").await?;

    let repo = PaymentRepository::new(db);
    let payments = repo.get_all().await?;

    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].id, newer.id);
    assert_eq!(payments[1].id, older.id);
    assert_eq!(payments[0].method, PaymentMethod::Card);

    Ok(())
}

/// Tests listing with no payments.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_payments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
