use super::*;

/// Tests that deleting an order removes its lines.
///
/// Expected: Ok(true) and no order items left
#[tokio::test]
async fn deletes_order_and_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _product, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.delete(order.id).await?);

    assert!(repo.find_by_id(order.id).await?.is_none());
    assert_eq!(entity::prelude::OrderItem::find().count(db).await?, 0);

    Ok(())
}
