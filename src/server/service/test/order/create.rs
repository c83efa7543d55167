use super::*;

/// Tests placing an order across two products, one listed twice.
///
/// Expected: Ok with duplicate lines merged and the total computed from current prices
#[tokio::test]
async fn computes_total_and_merges_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let seeds = factory::product::ProductFactory::new(db)
        .name("Paddy seeds")
        .price(120.0)
        .quantity(50)
        .build()
        .await?;
    let urea = factory::product::ProductFactory::new(db)
        .name("Urea")
        .price(2500.0)
        .quantity(10)
        .build()
        .await?;

    let service = OrderService::new(db);
    let order = service
        .create(user.id, lines(&[(seeds.id, 3), (urea.id, 1), (seeds.id, 2)]))
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].product_id, seeds.id);
    assert_eq!(order.items[0].quantity, 5);
    assert_eq!(order.items[0].product_name, "Paddy seeds");
    assert_eq!(order.total, 5.0 * 120.0 + 2500.0);

    Ok(())
}

/// Tests ordering more than the product has in stock.
///
/// Expected: Err(BadRequest) naming the available stock
#[tokio::test]
async fn rejects_quantity_above_stock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tractor = factory::product::ProductFactory::new(db)
        .name("Hand tractor")
        .quantity(1)
        .build()
        .await?;

    let service = OrderService::new(db);
    let result = service.create(user.id, lines(&[(tractor.id, 2)])).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("Only 1 of Hand tractor")),
        other => panic!("Expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests orders that are empty, reference a missing product or ask for zero units.
///
/// Expected: Err(BadRequest) for each
#[tokio::test]
async fn rejects_invalid_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;

    let service = OrderService::new(db);
    for params in [
        lines(&[]),
        lines(&[(product.id + 100, 1)]),
        lines(&[(product.id, 0)]),
    ] {
        let result = service.create(user.id, params).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    assert!(service.get_all(Some(user.id)).await?.is_empty());

    Ok(())
}

/// Tests duplicate lines whose merged quantity overflows.
///
/// Expected: Err(BadRequest) and no order stored
#[tokio::test]
async fn rejects_overflowing_merged_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .quantity(5)
        .build()
        .await?;

    let service = OrderService::new(db);
    let result = service
        .create(user.id, lines(&[(product.id, i32::MAX), (product.id, 2)]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_all(Some(user.id)).await?.is_empty());

    Ok(())
}
