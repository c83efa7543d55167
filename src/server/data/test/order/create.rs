use super::*;

/// Tests creating an order with two lines.
///
/// Expected: Ok with status Pending and both lines stored
#[tokio::test]
async fn creates_pending_order_with_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let seeds = factory::product::create_product(db).await?;
    let hoe = factory::product::ProductFactory::new(db)
        .category("tools")
        .price(1200.0)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(NewOrder {
            user_id: user.id,
            total: 1700.0,
            items: vec![
                OrderItem {
                    product_id: seeds.id,
                    product_name: seeds.name.clone(),
                    unit_price: 250.0,
                    quantity: 2,
                },
                OrderItem {
                    product_id: hoe.id,
                    product_name: hoe.name.clone(),
                    unit_price: 1200.0,
                    quantity: 1,
                },
            ],
        })
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 1700.0);
    assert_eq!(order.items.len(), 2);
    assert!(order.payment_id.is_none());

    let found = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(found.items, order.items);

    Ok(())
}
