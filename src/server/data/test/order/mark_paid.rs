use super::*;

/// Tests marking an order as paid.
///
/// Expected: Ok(true) with status Paid and the payment ID recorded
#[tokio::test]
async fn marks_order_paid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _product, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.mark_paid(order.id, 7).await?);

    let found = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(found.status, OrderStatus::Paid);
    assert_eq!(found.payment_id, Some(7));

    Ok(())
}

/// Tests marking a missing order.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    assert!(!repo.mark_paid(404, 1).await?);

    Ok(())
}

/// Tests returning a paid order to pending through the payment that paid it.
///
/// Expected: Ok(true) with status Pending and no payment recorded
#[tokio::test]
async fn marks_order_pending_for_its_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _product, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    repo.mark_paid(order.id, 7).await?;
    assert!(repo.mark_pending(order.id, 7).await?);

    let found = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(found.status, OrderStatus::Pending);
    assert_eq!(found.payment_id, None);

    Ok(())
}

/// Tests releasing an order through a payment that did not pay for it.
///
/// Expected: Ok(false) and the order stays paid
#[tokio::test]
async fn keeps_order_paid_by_other_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _product, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    repo.mark_paid(order.id, 7).await?;
    assert!(!repo.mark_pending(order.id, 8).await?);

    let found = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(found.status, OrderStatus::Paid);
    assert_eq!(found.payment_id, Some(7));

    Ok(())
}
