use super::*;

/// Tests that listing by user returns only that user's orders with their lines.
///
/// Expected: Ok with 1 order holding 1 line
#[tokio::test]
async fn lists_orders_for_user_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, order) = factory::helpers::create_order_with_dependencies(db).await?;
    factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let mine = repo.get_all(Some(user.id)).await?;
    let all = repo.get_all(None).await?;

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, order.id);
    assert_eq!(mine[0].items.len(), 1);
    assert_eq!(mine[0].items[0].product_id, product.id);
    assert_eq!(all.len(), 2);

    Ok(())
}
